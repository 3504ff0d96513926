//! # Lesson Client
//!
//! Provides a high‑level API for interacting with the `Lesson` actor.
//! It wraps a `ResourceClient<Lesson>` and exposes domain‑specific methods;
//! `fetch_all`, `fetch_by_id`, `delete`, `state` and `subscribe` come from
//! [`ActorClient`].
use crate::lesson_actor::LessonError;
use crate::model::{Lesson, LessonCreate, LessonId, LessonUpdate};
use async_trait::async_trait;
use resource_framework::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the Lesson actor.
#[derive(Clone)]
pub struct LessonClient {
    inner: ResourceClient<Lesson>,
}

impl LessonClient {
    pub fn new(inner: ResourceClient<Lesson>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Lesson> for LessonClient {
    type Error = LessonError;

    fn inner(&self) -> &ResourceClient<Lesson> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        LessonError::from(e)
    }
}

impl LessonClient {
    /// Posts a new lesson. On success the lesson list is reloaded once.
    #[instrument(skip(self))]
    pub async fn create_lesson(&self, params: LessonCreate) -> Result<Lesson, LessonError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(LessonError::from)
    }

    /// Puts the title / week / core subset of a lesson.
    ///
    /// A rejection carries the server's own `message` when it sends one.
    #[instrument(skip(self))]
    pub async fn update_lesson(
        &self,
        id: LessonId,
        update: LessonUpdate,
    ) -> Result<Lesson, LessonError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(LessonError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resource_framework::mock::{create_mock_client, expect_update, MockClient};
    use serde_json::{json, Map};

    fn lesson(id: &str, title: &str) -> Lesson {
        let mut fields = Map::new();
        fields.insert("title".into(), json!(title));
        Lesson {
            id: LessonId::from(id),
            fields,
        }
    }

    #[tokio::test]
    async fn update_forwards_typed_payload() {
        let (generic, mut receiver) = create_mock_client::<Lesson>(10);
        let client = LessonClient::new(generic);

        let task = tokio::spawn(async move {
            client
                .update_lesson(
                    LessonId::from("42"),
                    LessonUpdate {
                        title: Some("Y".into()),
                        week_id: Some("w1".into()),
                        core: Some(json!("c")),
                    },
                )
                .await
        });

        let (id, update, responder) = expect_update(&mut receiver)
            .await
            .expect("Expected Update request");
        assert_eq!(id, LessonId::from("42"));
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({ "title": "Y", "weekId": "w1", "core": "c" })
        );
        responder.send(Ok(lesson("42", "Y"))).unwrap();

        assert_eq!(task.await.unwrap().unwrap().title(), Some("Y"));
    }

    #[tokio::test]
    async fn errors_map_to_lesson_error() {
        let mut mock = MockClient::<Lesson>::new();
        mock.expect_create()
            .return_err(FrameworkError::RequestFailed {
                status: 400,
                message: "Failed to create lesson".into(),
            });
        mock.expect_delete(LessonId::from("1"))
            .return_err(FrameworkError::MissingToken);

        let client = LessonClient::new(mock.client());

        let err = client.create_lesson(LessonCreate::new("X")).await.unwrap_err();
        assert_eq!(err.message(), "Failed to create lesson");

        let err = client.delete(LessonId::from("1")).await.unwrap_err();
        assert_eq!(err, LessonError::Unauthenticated);

        mock.verify();
    }

    #[tokio::test]
    async fn fetch_all_comes_from_trait() {
        let mut mock = MockClient::<Lesson>::new();
        mock.expect_fetch_all()
            .return_ok(vec![lesson("1", "A"), lesson("2", "B")]);
        let client = LessonClient::new(mock.client());

        let lessons = client.fetch_all().await.unwrap();
        assert_eq!(lessons.len(), 2);
        mock.verify();
    }
}
