use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Identifier the engine assigns to a tracked face.
pub type FaceId = u32;

/// Per-face payload of detected emotion, expression, and appearance
/// attributes.
///
/// The attribute set is owned by the external engine; the core carries it as
/// an open bag of named values and never interprets individual fields.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FaceState(serde_json::Map<String, Value>);

impl FaceState {
    pub fn new() -> Self {
        Self(serde_json::Map::new())
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

impl From<serde_json::Map<String, Value>> for FaceState {
    fn from(attributes: serde_json::Map<String, Value>) -> Self {
        Self(attributes)
    }
}
