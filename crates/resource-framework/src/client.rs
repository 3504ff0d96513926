//! # Generic Client
//!
//! This module defines the generic client for communicating with resource actors.

use crate::entity::RemoteEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use crate::state::ResourceState;
use tokio::sync::{mpsc, oneshot, watch};

/// ## ResourceClient
///
/// The `ResourceClient<T>` provides a type‑safe, async API for a `ResourceActor<T>`.
/// It forwards requests over a Tokio mpsc channel, returns results via oneshot
/// channels, and reads the actor's published state through a watch channel.
///
/// * **Cloneable** – holds only a sender and a watch receiver.
/// * **Result-first** – every operation returns `Result<…, FrameworkError>` directly;
///   the published state is there for consumers that render it.
#[derive(Clone)]
pub struct ResourceClient<T: RemoteEntity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
    watcher: watch::Receiver<ResourceState<T>>,
}

impl<T: RemoteEntity> ResourceClient<T> {
    pub fn new(
        sender: mpsc::Sender<ResourceRequest<T>>,
        watcher: watch::Receiver<ResourceState<T>>,
    ) -> Self {
        Self { sender, watcher }
    }

    pub async fn fetch_all(&self) -> Result<Vec<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::FetchAll { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn fetch_by_id(&self, id: T::Id) -> Result<T, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::FetchById { id, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn create(&self, params: T::Create) -> Result<T, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Create { params, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn update(&self, id: T::Id, update: T::Update) -> Result<T, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Update {
                id,
                update,
                respond_to,
            })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Delete { id, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// The most recently published state.
    pub fn state(&self) -> ResourceState<T> {
        self.watcher.borrow().clone()
    }

    /// A receiver that wakes on every state change (loading started, settled, …).
    pub fn subscribe(&self) -> watch::Receiver<ResourceState<T>> {
        self.watcher.clone()
    }
}
