use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Server-assigned lesson identifier (the `_id` field).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LessonId(pub String);

impl fmt::Display for LessonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LessonId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for LessonId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A lesson as the API returns it.
///
/// # Resource Framework
/// This struct implements [`RemoteEntity`](resource_framework::RemoteEntity), so it
/// can be managed by a [`ResourceActor`](resource_framework::ResourceActor).
///
/// The shape is owned by the server. Only `_id` is required; every other field is
/// kept verbatim in `fields` and written back out unchanged when serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lesson {
    #[serde(rename = "_id")]
    pub id: LessonId,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Lesson {
    pub fn title(&self) -> Option<&str> {
        self.fields.get("title").and_then(Value::as_str)
    }

    /// The week this lesson belongs to, when the server includes it.
    pub fn week_id(&self) -> Option<&str> {
        self.fields.get("weekId").and_then(Value::as_str)
    }
}

/// Payload for creating a new lesson. Posted as-is.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonCreate {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub week_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub core: Option<Value>,
    /// Any further fields the server accepts.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LessonCreate {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }
}

/// Payload for updating an existing lesson.
///
/// Only these three fields are ever sent; absent ones are left out of the body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub week_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub core: Option<Value>,
}
