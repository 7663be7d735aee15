use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

use thiserror::Error;

use crate::detection::domain::detection_sink::DetectionSink;
use crate::detection::domain::detector_config::DetectorConfig;
use crate::detection::domain::emotion_detector::EmotionDetector;
use crate::shared::detection_event::DetectionEvent;

#[derive(Error, Debug)]
pub enum ReplayError {
    #[error("failed to read detection stream {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse detection stream {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("analysis framerate must be positive")]
    ZeroFramerate,
    #[error("detector already started")]
    AlreadyStarted,
}

/// Plays back a recorded detection stream as if a live engine produced it.
///
/// The source file is a JSON array of detection events. Deliveries happen on
/// a dedicated thread, paced at the configured analysis framerate and capped
/// at the configured face count, and end with the stopped signal: the same
/// callback sequence a licensed engine drives. Used for development and
/// testing without that engine.
pub struct ReplayDetector {
    config: DetectorConfig,
    handle: Option<JoinHandle<()>>,
}

impl ReplayDetector {
    pub fn new(config: DetectorConfig) -> Self {
        Self {
            config,
            handle: None,
        }
    }
}

impl EmotionDetector for ReplayDetector {
    fn start(
        &mut self,
        source: &Path,
        sink: Arc<dyn DetectionSink>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        if self.handle.is_some() {
            return Err(ReplayError::AlreadyStarted.into());
        }
        if self.config.framerate == 0 {
            return Err(ReplayError::ZeroFramerate.into());
        }

        let raw = fs::read_to_string(source).map_err(|e| ReplayError::Read {
            path: source.to_path_buf(),
            source: e,
        })?;
        let events: Vec<DetectionEvent> =
            serde_json::from_str(&raw).map_err(|e| ReplayError::Parse {
                path: source.to_path_buf(),
                source: e,
            })?;

        let interval = Duration::from_millis(1000 / u64::from(self.config.framerate));
        let max_faces = self.config.max_faces as usize;
        log::info!(
            "replaying {} detection events from {}",
            events.len(),
            source.display()
        );

        self.handle = Some(std::thread::spawn(move || {
            for event in events {
                sink.on_result(cap_faces(event, max_faces));
                std::thread::sleep(interval);
            }
            sink.on_stopped();
        }));

        Ok(())
    }

    fn join(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(handle) = self.handle.take() {
            handle.join().map_err(|_| "Replay thread panicked")?;
        }
        Ok(())
    }
}

/// Engines track at most the configured number of faces per frame; the
/// replay honors that by keeping the lowest face ids.
fn cap_faces(event: DetectionEvent, max_faces: usize) -> DetectionEvent {
    if event.faces().len() <= max_faces {
        return event;
    }
    let (timestamp_ms, faces) = event.into_parts();
    DetectionEvent::new(timestamp_ms, faces.into_iter().take(max_faces).collect())
}
