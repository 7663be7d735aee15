use crate::shared::detection_event::DetectionEvent;

/// Callback surface the engine invokes from its own processing thread.
///
/// `on_result` fires once per analyzed frame, in frame order. `on_stopped`
/// fires exactly once when processing ends (end of stream, fatal engine
/// error, or an explicit stop) and always after the last result. An engine
/// may stop without ever producing a result.
pub trait DetectionSink: Send + Sync {
    fn on_result(&self, event: DetectionEvent);

    fn on_stopped(&self);
}
