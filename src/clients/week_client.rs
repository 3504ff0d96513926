//! # Week Client
//!
//! Wraps a `ResourceClient<Week>`. Weeks are free-form, so create and update both
//! take a [`WeekDraft`].
use crate::model::{Week, WeekDraft, WeekId};
use crate::week_actor::WeekError;
use async_trait::async_trait;
use resource_framework::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct WeekClient {
    inner: ResourceClient<Week>,
}

impl WeekClient {
    pub fn new(inner: ResourceClient<Week>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Week> for WeekClient {
    type Error = WeekError;

    fn inner(&self) -> &ResourceClient<Week> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        WeekError::from(e)
    }
}

impl WeekClient {
    #[instrument(skip(self))]
    pub async fn create_week(&self, draft: WeekDraft) -> Result<Week, WeekError> {
        debug!("Sending request");
        self.inner.create(draft).await.map_err(WeekError::from)
    }

    #[instrument(skip(self))]
    pub async fn update_week(&self, id: WeekId, draft: WeekDraft) -> Result<Week, WeekError> {
        debug!("Sending request");
        self.inner.update(id, draft).await.map_err(WeekError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resource_framework::mock::MockClient;
    use resource_framework::ResourceState;
    use serde_json::Map;

    fn week(id: &str) -> Week {
        Week {
            id: WeekId::from(id),
            fields: Map::new(),
        }
    }

    #[tokio::test]
    async fn update_week_returns_server_copy() {
        let mut mock = MockClient::<Week>::new();
        mock.expect_update(WeekId::from("w1")).return_ok(week("w1"));
        let client = WeekClient::new(mock.client());

        let updated = client
            .update_week(WeekId::from("w1"), WeekDraft::new().with("title", "One"))
            .await
            .unwrap();
        assert_eq!(updated.id, WeekId::from("w1"));
        mock.verify();
    }

    #[tokio::test]
    async fn state_is_read_through_the_wrapper() {
        let mock = MockClient::<Week>::new();
        let client = WeekClient::new(mock.client());

        mock.set_state(ResourceState {
            items: vec![week("w1")],
            error: Some("Failed to fetch weeks".into()),
            ..Default::default()
        });

        let state = client.state();
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.error.as_deref(), Some("Failed to fetch weeks"));
    }
}
