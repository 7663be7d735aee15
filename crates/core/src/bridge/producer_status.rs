use std::sync::atomic::{AtomicBool, Ordering};

/// One-way running → finished signal from the producer side.
///
/// Lets the drain loop distinguish "producer still running, buffer
/// momentarily empty" from "producer finished, buffer empty, stop".
/// `mark_finished` happens-before any `is_running` that observes it.
#[derive(Debug, Default)]
pub struct ProducerStatus {
    finished: AtomicBool,
}

impl ProducerStatus {
    pub fn new() -> Self {
        Self {
            finished: AtomicBool::new(false),
        }
    }

    /// Called by the producer side when the engine stops processing.
    /// Idempotent; there is no transition back to running.
    pub fn mark_finished(&self) {
        self.finished.store(true, Ordering::Release);
    }

    pub fn is_running(&self) -> bool {
        !self.finished.load(Ordering::Acquire)
    }
}
