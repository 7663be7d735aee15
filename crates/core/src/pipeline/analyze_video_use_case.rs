use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use crate::bridge::bridge_sink::BridgeSink;
use crate::bridge::producer_status::ProducerStatus;
use crate::bridge::result_bridge::ResultBridge;
use crate::detection::domain::emotion_detector::EmotionDetector;
use crate::output::domain::result_writer::ResultWriter;
use crate::pipeline::drain_executor::{DrainConfig, DrainExecutor};
use crate::shared::result_collection::ResultCollection;

/// Orchestrates one full analysis run.
///
/// Wires the detector's callbacks into a result bridge, drains the bridge
/// until the detector reports finished and nothing is buffered, then
/// serializes the collection to the output stream once. Single-use:
/// `execute` consumes the owned components, so calling it twice fails.
pub struct AnalyzeVideoUseCase {
    detector: Option<Box<dyn EmotionDetector>>,
    executor: Box<dyn DrainExecutor>,
    writer: Option<Box<dyn ResultWriter>>,
    config: Option<DrainConfig>,
}

impl AnalyzeVideoUseCase {
    pub fn new(
        detector: Box<dyn EmotionDetector>,
        executor: Box<dyn DrainExecutor>,
        writer: Box<dyn ResultWriter>,
        config: Option<DrainConfig>,
    ) -> Self {
        Self {
            detector: Some(detector),
            executor,
            writer: Some(writer),
            config,
        }
    }

    pub fn execute(
        &mut self,
        source: &Path,
        out: &mut dyn Write,
    ) -> Result<ResultCollection, Box<dyn std::error::Error>> {
        let mut detector = self.detector.take().ok_or("Analysis already executed")?;
        let mut writer = self.writer.take().ok_or("Analysis already executed")?;
        let config = self.config.take().unwrap_or_default();

        let bridge = Arc::new(ResultBridge::new());
        let status = Arc::new(ProducerStatus::new());
        let sink = Arc::new(BridgeSink::new(bridge.clone(), status.clone()));

        detector.start(source, sink)?;
        let drained = self.executor.run(&bridge, &status, &config);
        let joined = detector.join();

        let collection = drained?;
        joined?;

        writer.write(&collection, out)?;
        log::info!("wrote {} records", collection.len());
        Ok(collection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::domain::detection_sink::DetectionSink;
    use crate::output::infrastructure::json_result_writer::JsonResultWriter;
    use crate::pipeline::infrastructure::polling_drain_executor::PollingDrainExecutor;
    use crate::shared::detection_event::DetectionEvent;
    use crate::shared::face_state::FaceState;
    use std::collections::BTreeMap;
    use std::thread::JoinHandle;

    // --- Stubs ---

    /// Delivers a fixed set of events from its own thread, then stops.
    struct ScriptedDetector {
        events: Vec<DetectionEvent>,
        handle: Option<JoinHandle<()>>,
    }

    impl ScriptedDetector {
        fn new(events: Vec<DetectionEvent>) -> Self {
            Self {
                events,
                handle: None,
            }
        }
    }

    impl EmotionDetector for ScriptedDetector {
        fn start(
            &mut self,
            _source: &Path,
            sink: Arc<dyn DetectionSink>,
        ) -> Result<(), Box<dyn std::error::Error>> {
            let events = std::mem::take(&mut self.events);
            self.handle = Some(std::thread::spawn(move || {
                for event in events {
                    sink.on_result(event);
                }
                sink.on_stopped();
            }));
            Ok(())
        }

        fn join(&mut self) -> Result<(), Box<dyn std::error::Error>> {
            if let Some(handle) = self.handle.take() {
                handle.join().map_err(|_| "detector thread panicked")?;
            }
            Ok(())
        }
    }

    struct FailingDetector;

    impl EmotionDetector for FailingDetector {
        fn start(
            &mut self,
            _source: &Path,
            _sink: Arc<dyn DetectionSink>,
        ) -> Result<(), Box<dyn std::error::Error>> {
            Err("cannot open video".into())
        }

        fn join(&mut self) -> Result<(), Box<dyn std::error::Error>> {
            Ok(())
        }
    }

    // --- Helpers ---

    fn event(timestamp_ms: u64) -> DetectionEvent {
        let mut state = FaceState::new();
        state.set("joy", 99.0);
        state.set("attention", 80.5);
        DetectionEvent::new(timestamp_ms, BTreeMap::from([(1, state)]))
    }

    fn use_case(events: Vec<DetectionEvent>) -> AnalyzeVideoUseCase {
        AnalyzeVideoUseCase::new(
            Box::new(ScriptedDetector::new(events)),
            Box::new(PollingDrainExecutor::new()),
            Box::new(JsonResultWriter::new()),
            None,
        )
    }

    // --- Tests ---

    #[test]
    fn test_collects_and_writes_all_events_in_order() {
        let mut uc = use_case(vec![event(0), event(33), event(66)]);
        let mut out = Vec::new();

        let collection = uc.execute(Path::new("video.mp4"), &mut out).unwrap();
        assert_eq!(collection.len(), 3);

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let records = value.as_array().unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0]["timestamp_ms"], 0);
        assert_eq!(records[1]["timestamp_ms"], 33);
        assert_eq!(records[2]["timestamp_ms"], 66);
        // The opaque payload passes through unchanged.
        assert_eq!(records[2]["faces"]["1"]["joy"], 99.0);
        assert_eq!(records[2]["faces"]["1"]["attention"], 80.5);
    }

    #[test]
    fn test_run_with_no_results_writes_empty_array() {
        let mut uc = use_case(vec![]);
        let mut out = Vec::new();

        let collection = uc.execute(Path::new("video.mp4"), &mut out).unwrap();

        assert!(collection.is_empty());
        assert_eq!(String::from_utf8(out).unwrap(), "[]\n");
    }

    #[test]
    fn test_detector_start_failure_propagates() {
        let mut uc = AnalyzeVideoUseCase::new(
            Box::new(FailingDetector),
            Box::new(PollingDrainExecutor::new()),
            Box::new(JsonResultWriter::new()),
            None,
        );
        let mut out = Vec::new();

        let result = uc.execute(Path::new("video.mp4"), &mut out);
        assert!(result.is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn test_second_execute_fails() {
        let mut uc = use_case(vec![event(0)]);
        let mut out = Vec::new();

        uc.execute(Path::new("video.mp4"), &mut out).unwrap();
        assert!(uc.execute(Path::new("video.mp4"), &mut out).is_err());
    }

    #[test]
    fn test_large_burst_is_collected_completely() {
        let events: Vec<DetectionEvent> = (0..500).map(event).collect();
        let mut uc = use_case(events);
        let mut out = Vec::new();

        let collection = uc.execute(Path::new("video.mp4"), &mut out).unwrap();

        assert_eq!(collection.len(), 500);
        let timestamps: Vec<u64> = collection
            .records()
            .iter()
            .map(|r| r.timestamp_ms())
            .collect();
        let expected: Vec<u64> = (0..500).collect();
        assert_eq!(timestamps, expected);
    }
}
