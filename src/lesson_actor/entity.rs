//! [`RemoteEntity`] implementation for the Lesson model.
//!
//! Lessons use every default: list and create at `/lessons`, address one lesson
//! at `/lessons/{id}`, refresh after each mutation.

use crate::model::{Lesson, LessonCreate, LessonId, LessonUpdate};
use resource_framework::RemoteEntity;

impl RemoteEntity for Lesson {
    type Id = LessonId;
    type Create = LessonCreate;
    type Update = LessonUpdate;
    const LABEL: &'static str = "Lesson";
    const PLURAL: &'static str = "lessons";

    fn collection_path() -> String {
        "/lessons".to_string()
    }

    fn has_id(&self, id: &LessonId) -> bool {
        self.id == *id
    }
}
