use std::path::Path;
use std::sync::Arc;

use crate::detection::domain::detection_sink::DetectionSink;

/// Domain interface for the external emotion-recognition engine.
///
/// `start` begins asynchronous processing of `source` and returns
/// immediately; results and the stopped signal arrive through the sink from
/// the engine's own threads. Implementations are stateful (they own the
/// running engine), hence `&mut self`.
pub trait EmotionDetector: Send {
    fn start(
        &mut self,
        source: &Path,
        sink: Arc<dyn DetectionSink>,
    ) -> Result<(), Box<dyn std::error::Error>>;

    /// Waits for the engine to wind down. Called after the drain loop has
    /// observed the stopped signal; a no-op if nothing was started.
    fn join(&mut self) -> Result<(), Box<dyn std::error::Error>>;
}
