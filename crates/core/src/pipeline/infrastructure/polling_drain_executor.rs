use std::sync::atomic::Ordering;

use crate::bridge::producer_status::ProducerStatus;
use crate::bridge::result_bridge::ResultBridge;
use crate::pipeline::drain_executor::{DrainConfig, DrainExecutor};
use crate::shared::result_collection::{ResultCollection, ResultRecord};

/// Drains the bridge with a short-sleep polling loop.
///
/// The loop keeps going while the producer is running OR results are still
/// buffered; checking both avoids the race where the producer finishes
/// between its last delivery and the consumer's final drain.
pub struct PollingDrainExecutor;

impl PollingDrainExecutor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PollingDrainExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl DrainExecutor for PollingDrainExecutor {
    fn run(
        &self,
        bridge: &ResultBridge,
        status: &ProducerStatus,
        config: &DrainConfig,
    ) -> Result<ResultCollection, Box<dyn std::error::Error>> {
        let mut collection = ResultCollection::new();

        while status.is_running() || bridge.pending_count() > 0 {
            if config.cancelled.load(Ordering::Relaxed) {
                log::debug!("drain cancelled after {} records", collection.len());
                break;
            }

            if bridge.pending_count() > 0 {
                let event = bridge.drain()?;
                collection.push(ResultRecord::from(event));

                if let Some(ref callback) = config.on_progress {
                    if !callback(collection.len()) {
                        return Err("Cancelled".into());
                    }
                }
            } else {
                std::thread::sleep(config.poll_interval);
            }
        }

        log::debug!("drain loop finished with {} records", collection.len());
        Ok(collection)
    }
}
