use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::shared::face_state::{FaceId, FaceState};

/// One asynchronous delivery from the engine: everything it learned about
/// the faces visible in a single analyzed frame.
///
/// An event is transient: it exists only in the hand-off from the engine's
/// callback to the bridge to the drain loop, which converts it to a
/// [`ResultRecord`](crate::shared::result_collection::ResultRecord).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DetectionEvent {
    timestamp_ms: u64,
    faces: BTreeMap<FaceId, FaceState>,
}

impl DetectionEvent {
    pub fn new(timestamp_ms: u64, faces: BTreeMap<FaceId, FaceState>) -> Self {
        Self {
            timestamp_ms,
            faces,
        }
    }

    /// Producer-assigned frame timestamp, monotonic within one run.
    pub fn timestamp_ms(&self) -> u64 {
        self.timestamp_ms
    }

    pub fn faces(&self) -> &BTreeMap<FaceId, FaceState> {
        &self.faces
    }

    pub fn into_parts(self) -> (u64, BTreeMap<FaceId, FaceState>) {
        (self.timestamp_ms, self.faces)
    }
}
