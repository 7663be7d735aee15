use std::time::Duration;

use crossbeam_channel::{Receiver, Sender};
use thiserror::Error;

use crate::shared::detection_event::DetectionEvent;

/// Drain was attempted with nothing buffered. The drain loop checks
/// `pending_count` first, so hitting this indicates a consumer defect.
#[derive(Error, Debug, PartialEq, Eq)]
#[error("drain attempted on an empty result bridge")]
pub struct EmptyBufferError;

/// FIFO hand-off of detection results from the engine's callback thread to
/// the synchronous drain loop.
///
/// Holds both channel ends, so deliveries queue until drained and a burst
/// of callbacks can never overwrite an undrained result. The unbounded form
/// never blocks the producer; the bounded form blocks `deliver` once
/// `capacity` events are buffered (backpressure instead of loss).
pub struct ResultBridge {
    tx: Sender<DetectionEvent>,
    rx: Receiver<DetectionEvent>,
}

impl ResultBridge {
    pub fn new() -> Self {
        let (tx, rx) = crossbeam_channel::unbounded();
        Self { tx, rx }
    }

    /// Bounded variant. A zero capacity would make the polling drain loop
    /// and a blocked producer wait on each other, so it is raised to one.
    pub fn bounded(capacity: usize) -> Self {
        let (tx, rx) = crossbeam_channel::bounded(capacity.max(1));
        Self { tx, rx }
    }

    /// Producer side: buffer one event for later draining. Blocks when a
    /// bounded bridge is full.
    pub fn deliver(&self, event: DetectionEvent) {
        // Both channel ends live in this struct, so the send cannot fail
        // with a disconnect.
        let _ = self.tx.send(event);
    }

    /// Number of buffered, undelivered events.
    pub fn pending_count(&self) -> usize {
        self.rx.len()
    }

    /// Consumer side: remove and return the oldest undelivered event.
    pub fn drain(&self) -> Result<DetectionEvent, EmptyBufferError> {
        self.rx.try_recv().map_err(|_| EmptyBufferError)
    }

    /// Blocking drain used by the parked strategy: waits up to `timeout`
    /// for an event before giving up.
    pub fn drain_timeout(&self, timeout: Duration) -> Option<DetectionEvent> {
        self.rx.recv_timeout(timeout).ok()
    }
}

impl Default for ResultBridge {
    fn default() -> Self {
        Self::new()
    }
}
