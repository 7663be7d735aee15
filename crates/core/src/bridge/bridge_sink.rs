use std::sync::Arc;

use crate::bridge::producer_status::ProducerStatus;
use crate::bridge::result_bridge::ResultBridge;
use crate::detection::domain::detection_sink::DetectionSink;
use crate::shared::detection_event::DetectionEvent;

/// Wires the engine's callbacks into the shared bridge and status flag:
/// per-frame results are buffered, the stopped signal flips the flag.
pub struct BridgeSink {
    bridge: Arc<ResultBridge>,
    status: Arc<ProducerStatus>,
}

impl BridgeSink {
    pub fn new(bridge: Arc<ResultBridge>, status: Arc<ProducerStatus>) -> Self {
        Self { bridge, status }
    }
}

impl DetectionSink for BridgeSink {
    fn on_result(&self, event: DetectionEvent) {
        self.bridge.deliver(event);
    }

    fn on_stopped(&self) {
        log::debug!("detector reported stopped");
        self.status.mark_finished();
    }
}
