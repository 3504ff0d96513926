//! # ActorClient Trait
//!
//! Provides a common interface for resource‑specific clients, adding default
//! `fetch_all`, `fetch_by_id`, `delete`, `state` and `subscribe` methods built on top
//! of a generic `ResourceClient`.
use crate::{FrameworkError, RemoteEntity, ResourceClient, ResourceState};
use async_trait::async_trait;
use tokio::sync::watch;

/// Trait for resource-specific clients to inherit the standard operations.
///
/// Create and update take resource-specific payloads, so wrappers define those
/// themselves; everything keyed only by id comes for free.
///
/// # Example
///
/// ```rust
/// use resource_framework::{ActorClient, FrameworkError, RemoteEntity, ResourceClient};
/// use async_trait::async_trait;
/// use serde::Deserialize;
///
/// #[derive(Clone, Debug, PartialEq, Deserialize)]
/// struct Note { _id: String }
///
/// impl RemoteEntity for Note {
///     type Id = String;
///     type Create = serde_json::Value;
///     type Update = serde_json::Value;
///     const LABEL: &'static str = "Note";
///     const PLURAL: &'static str = "notes";
///     fn collection_path() -> String { "/notes".into() }
/// }
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("note error: {0}")]
/// struct NoteError(String);
///
/// struct NoteClient { inner: ResourceClient<Note> }
///
/// #[async_trait]
/// impl ActorClient<Note> for NoteClient {
///     type Error = NoteError;
///
///     fn inner(&self) -> &ResourceClient<Note> { &self.inner }
///
///     fn map_error(e: FrameworkError) -> Self::Error { NoteError(e.to_string()) }
/// }
///
/// async fn usage(client: NoteClient) {
///     // fetch_all(), fetch_by_id() and delete() are provided automatically!
///     let _ = client.fetch_all().await;
///     let _ = client.delete("1".to_string()).await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: RemoteEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Load the whole collection, replacing the cached items.
    #[tracing::instrument(skip(self))]
    async fn fetch_all(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().fetch_all().await.map_err(Self::map_error)
    }

    /// Load one resource and remember it as the selected item.
    #[tracing::instrument(skip(self))]
    async fn fetch_by_id(&self, id: T::Id) -> Result<T, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().fetch_by_id(id).await.map_err(Self::map_error)
    }

    /// Delete a resource by id.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }

    fn state(&self) -> ResourceState<T> {
        self.inner().state()
    }

    fn subscribe(&self) -> watch::Receiver<ResourceState<T>> {
        self.inner().subscribe()
    }
}
