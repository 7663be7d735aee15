use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Duration;

use crate::bridge::producer_status::ProducerStatus;
use crate::bridge::result_bridge::ResultBridge;
use crate::shared::constants::DEFAULT_POLL_INTERVAL_MS;
use crate::shared::result_collection::ResultCollection;

/// Configuration for one drain run.
pub struct DrainConfig {
    /// Consumer back-off while the producer is running and the buffer is
    /// empty.
    pub poll_interval: Duration,
    /// Called after each appended record with the running total; returning
    /// `false` aborts the run.
    pub on_progress: Option<Box<dyn Fn(usize) -> bool + Send>>,
    /// Cooperative stop signal. A cancelled run returns the records
    /// collected so far.
    pub cancelled: Arc<AtomicBool>,
}

impl Default for DrainConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
            on_progress: None,
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }
}

/// Abstracts how the consumer loop waits for and drains buffered results.
///
/// This is a port; infrastructure provides the polling and parked
/// strategies. Every implementation honors the same contract: records are
/// appended in delivery order, and the run ends only once the producer has
/// finished AND the bridge is empty. It must never end while results are
/// still buffered, even if the producer already finished.
pub trait DrainExecutor: Send {
    fn run(
        &self,
        bridge: &ResultBridge,
        status: &ProducerStatus,
        config: &DrainConfig,
    ) -> Result<ResultCollection, Box<dyn std::error::Error>>;
}
