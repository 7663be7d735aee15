use std::sync::atomic::Ordering;
use std::time::Duration;

use crate::bridge::producer_status::ProducerStatus;
use crate::bridge::result_bridge::ResultBridge;
use crate::pipeline::drain_executor::{DrainConfig, DrainExecutor};
use crate::shared::result_collection::{ResultCollection, ResultRecord};

const DEFAULT_WAIT_TIMEOUT: Duration = Duration::from_millis(25);

/// Drains the bridge by parking on the channel instead of sleeping.
///
/// A delivered result wakes the consumer immediately; the timed wait only
/// bounds how long an already-finished producer can go unnoticed. Same
/// ordering and termination contract as the polling strategy, less idle
/// spinning.
pub struct ParkedDrainExecutor {
    wait_timeout: Duration,
}

impl ParkedDrainExecutor {
    pub fn new() -> Self {
        Self {
            wait_timeout: DEFAULT_WAIT_TIMEOUT,
        }
    }

    pub fn with_wait_timeout(wait_timeout: Duration) -> Self {
        Self { wait_timeout }
    }
}

impl Default for ParkedDrainExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl DrainExecutor for ParkedDrainExecutor {
    fn run(
        &self,
        bridge: &ResultBridge,
        status: &ProducerStatus,
        config: &DrainConfig,
    ) -> Result<ResultCollection, Box<dyn std::error::Error>> {
        let mut collection = ResultCollection::new();

        loop {
            if config.cancelled.load(Ordering::Relaxed) {
                log::debug!("drain cancelled after {} records", collection.len());
                break;
            }

            // Read the status before waiting: a finish observed here could
            // still be followed by an event that was delivered first.
            let running = status.is_running();

            match bridge.drain_timeout(self.wait_timeout) {
                Some(event) => {
                    collection.push(ResultRecord::from(event));

                    if let Some(ref callback) = config.on_progress {
                        if !callback(collection.len()) {
                            return Err("Cancelled".into());
                        }
                    }
                }
                None => {
                    if !running && bridge.pending_count() == 0 {
                        break;
                    }
                }
            }
        }

        log::debug!("drain loop finished with {} records", collection.len());
        Ok(collection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::detection_event::DetectionEvent;
    use std::collections::BTreeMap;
    use std::sync::Arc;
    use std::thread;
    use std::time::Instant;

    #[test]
    fn test_wakes_on_delivery_before_timeout() {
        let bridge = Arc::new(ResultBridge::new());
        let status = Arc::new(ProducerStatus::new());

        let producer_bridge = bridge.clone();
        let producer_status = status.clone();
        let producer = thread::spawn(move || {
            thread::sleep(Duration::from_millis(10));
            producer_bridge.deliver(DetectionEvent::new(0, BTreeMap::new()));
            producer_status.mark_finished();
        });

        // A long wait timeout must not delay result pickup: the delivery
        // wakes the consumer mid-wait. Pickup time is observed through the
        // progress callback because the run itself ends only after one
        // final timed-out wait.
        let start = Instant::now();
        let picked_up = Arc::new(std::sync::Mutex::new(None));
        let picked_up_clone = picked_up.clone();
        let config = DrainConfig {
            on_progress: Some(Box::new(move |_count| {
                *picked_up_clone.lock().unwrap() = Some(start.elapsed());
                true
            })),
            ..DrainConfig::default()
        };

        let executor = ParkedDrainExecutor::with_wait_timeout(Duration::from_secs(1));
        let collection = executor.run(&bridge, &status, &config).unwrap();
        producer.join().unwrap();

        assert_eq!(collection.len(), 1);
        let pickup = picked_up.lock().unwrap().unwrap();
        assert!(pickup < Duration::from_millis(500), "pickup took {pickup:?}");
    }

    #[test]
    fn test_does_not_stop_while_results_pending() {
        let bridge = ResultBridge::new();
        let status = ProducerStatus::new();
        status.mark_finished();
        for ts in 0..10 {
            bridge.deliver(DetectionEvent::new(ts, BTreeMap::new()));
        }

        let executor = ParkedDrainExecutor::with_wait_timeout(Duration::from_millis(5));
        let collection = executor
            .run(&bridge, &status, &DrainConfig::default())
            .unwrap();

        assert_eq!(collection.len(), 10);
    }
}
