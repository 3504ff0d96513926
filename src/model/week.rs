use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Server-assigned week identifier (the `_id` field).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeekId(pub String);

impl fmt::Display for WeekId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WeekId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for WeekId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A week as the API returns it. Everything but `_id` is opaque.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Week {
    #[serde(rename = "_id")]
    pub id: WeekId,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Week {
    pub fn title(&self) -> Option<&str> {
        self.fields.get("title").and_then(Value::as_str)
    }
}

/// Body for both creating and updating a week: a free-form JSON object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeekDraft {
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl WeekDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces one field.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }
}
