use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::shared::detection_event::DetectionEvent;
use crate::shared::face_state::{FaceId, FaceState};

/// A single emitted analysis record: one analyzed frame's timestamp and the
/// full per-face state, ready for serialization.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    timestamp_ms: u64,
    faces: BTreeMap<FaceId, FaceState>,
}

impl ResultRecord {
    pub fn timestamp_ms(&self) -> u64 {
        self.timestamp_ms
    }

    pub fn faces(&self) -> &BTreeMap<FaceId, FaceState> {
        &self.faces
    }
}

impl From<DetectionEvent> for ResultRecord {
    fn from(event: DetectionEvent) -> Self {
        let (timestamp_ms, faces) = event.into_parts();
        Self {
            timestamp_ms,
            faces,
        }
    }
}

/// Ordered sequence of records for one analysis run.
///
/// Append-only; insertion order is delivery order, and the drain loop is the
/// sole owner for the lifetime of a run. Serializes as a JSON array.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultCollection(Vec<ResultRecord>);

impl ResultCollection {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, record: ResultRecord) {
        self.0.push(record);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn records(&self) -> &[ResultRecord] {
        &self.0
    }
}
