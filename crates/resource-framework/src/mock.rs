//! # Mock Framework & Testing Guide
//!
//! The `MockClient<T>` type hands out a real `ResourceClient<T>` whose requests are
//! answered from a queue of expectations instead of an actor and an HTTP server. It
//! lets you test code *around* a client (the typed wrappers, CLI commands, error
//! mapping) quickly and deterministically.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | MockClient | Real Actor + fake API |
//! |---------|------------|------------|
//! | **Speed** | Instant (in-memory) | Fast (binds a local port) |
//! | **State** | Whatever you publish with `set_state` | Real state transitions |
//! | **Use Case** | Logic around the client | The actor itself or the full system |
//! | **Error Injection** | Easy (`return_err`) | Needs a route that fails |
//!
//! ## Example
//!
//! ```rust
//! use resource_framework::mock::MockClient;
//! use resource_framework::{FrameworkError, RemoteEntity};
//! use serde::Deserialize;
//!
//! #[derive(Clone, Debug, PartialEq, Deserialize)]
//! struct Note { _id: String }
//!
//! impl RemoteEntity for Note {
//!     type Id = String;
//!     type Create = serde_json::Value;
//!     type Update = serde_json::Value;
//!     const LABEL: &'static str = "Note";
//!     const PLURAL: &'static str = "notes";
//!     fn collection_path() -> String { "/notes".into() }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Note>::new();
//!     mock.expect_fetch_all().return_ok(vec![Note { _id: "1".into() }]);
//!     mock.expect_delete("1".into()).return_err(FrameworkError::MissingToken);
//!
//!     let client = mock.client();
//!     assert_eq!(client.fetch_all().await.unwrap().len(), 1);
//!     assert!(client.delete("1".into()).await.is_err());
//!
//!     mock.verify();
//! }
//! ```
//!
//! ## Mocking Utilities
//!
//! Use [`create_mock_client`] to get a client and the raw request receiver, or the
//! fluent [`MockClient`] API.

use crate::client::ResourceClient;
use crate::entity::RemoteEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use crate::state::ResourceState;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot, watch};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected request and the reply to give it.
enum Expectation<T: RemoteEntity> {
    FetchAll {
        response: Result<Vec<T>, FrameworkError>,
    },
    FetchById {
        id: String,
        response: Result<T, FrameworkError>,
    },
    Create {
        response: Result<T, FrameworkError>,
    },
    Update {
        id: String,
        response: Result<T, FrameworkError>,
    },
    Delete {
        id: String,
        response: Result<(), FrameworkError>,
    },
}

type Expectations<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock client with expectation tracking for fluent testing.
///
/// Expectations are consumed in order. A request that doesn't match the next
/// expectation (or arrives when none are left) panics the background task, which
/// the caller sees as `FrameworkError::ActorDropped`.
pub struct MockClient<T: RemoteEntity> {
    client: ResourceClient<T>,
    expectations: Expectations<T>,
    publisher: watch::Sender<ResourceState<T>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: RemoteEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: RemoteEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let (publisher, watcher) = watch::channel(ResourceState::default());
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone.lock().unwrap().pop_front();

                match (request, expectation) {
                    (
                        ResourceRequest::FetchAll { respond_to },
                        Some(Expectation::FetchAll { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::FetchById { id, respond_to },
                        Some(Expectation::FetchById {
                            id: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(id.to_string(), expected, "fetch_by_id called with wrong id");
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Create {
                            params: _,
                            respond_to,
                        },
                        Some(Expectation::Create { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Update {
                            id,
                            update: _,
                            respond_to,
                        },
                        Some(Expectation::Update {
                            id: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(id.to_string(), expected, "update called with wrong id");
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Delete { id, respond_to },
                        Some(Expectation::Delete {
                            id: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(id.to_string(), expected, "delete called with wrong id");
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender, watcher),
            expectations,
            publisher,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Publishes `state` as if an actor had just settled an operation.
    pub fn set_state(&self, state: ResourceState<T>) {
        self.publisher.send_replace(state);
    }

    pub fn expect_fetch_all(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        self.builder(|response| Expectation::FetchAll { response })
    }

    pub fn expect_fetch_by_id(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        let id = id.to_string();
        self.builder(move |response| Expectation::FetchById { id, response })
    }

    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T> {
        self.builder(|response| Expectation::Create { response })
    }

    pub fn expect_update(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        let id = id.to_string();
        self.builder(move |response| Expectation::Update { id, response })
    }

    pub fn expect_delete(&mut self, id: T::Id) -> ExpectationBuilder<T, ()> {
        let id = id.to_string();
        self.builder(move |response| Expectation::Delete { id, response })
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }

    fn builder<R>(
        &self,
        make: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send + 'static,
    ) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            make: Box::new(make),
            expectations: self.expectations.clone(),
        }
    }
}

/// Builder that queues one expectation once its reply is chosen.
pub struct ExpectationBuilder<T: RemoteEntity, R> {
    make: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send>,
    expectations: Expectations<T>,
}

impl<T: RemoteEntity, R> ExpectationBuilder<T, R> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, FrameworkError>) {
        let expectation = (self.make)(response);
        self.expectations.lock().unwrap().push_back(expectation);
    }
}

// =============================================================================
// RAW CHANNEL HELPERS
// =============================================================================

/// Creates a client wired to a receiver you drive by hand.
///
/// Useful when the test needs to inspect the exact payload a wrapper sends (for
/// example, which fields a typed update serializes) before replying.
pub fn create_mock_client<T: RemoteEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    let (_publisher, watcher) = watch::channel(ResourceState::default());
    (ResourceClient::new(sender, watcher), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: RemoteEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, oneshot::Sender<Result<T, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Update request
pub async fn expect_update<T: RemoteEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Update, oneshot::Sender<Result<T, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Update {
            id,
            update,
            respond_to,
        }) => Some((id, update, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a FetchById request
pub async fn expect_fetch_by_id<T: RemoteEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<T, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::FetchById { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Clone, Debug, PartialEq, Deserialize)]
    struct Note {
        _id: String,
        title: String,
    }

    impl RemoteEntity for Note {
        type Id = String;
        type Create = serde_json::Value;
        type Update = serde_json::Value;
        const LABEL: &'static str = "Note";
        const PLURAL: &'static str = "notes";

        fn collection_path() -> String {
            "/notes".to_string()
        }
    }

    fn note(id: &str, title: &str) -> Note {
        Note {
            _id: id.to_string(),
            title: title.to_string(),
        }
    }

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client::<Note>(10);

        let create_task = tokio::spawn(async move {
            client.create(serde_json::json!({ "title": "Test" })).await
        });

        let (payload, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(payload["title"], "Test");
        responder.send(Ok(note("1", "Test"))).unwrap();

        let result = create_task.await.unwrap();
        assert_eq!(result.unwrap()._id, "1");
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockClient::<Note>::new();
        mock.expect_create().return_ok(note("1", "First"));
        mock.expect_fetch_by_id("1".to_string()).return_ok(note("1", "First"));
        mock.expect_update("1".to_string())
            .return_err(FrameworkError::RequestFailed {
                status: 500,
                message: "bad".into(),
            });

        let client = mock.client();

        let created = client.create(serde_json::json!({ "title": "First" })).await.unwrap();
        assert_eq!(created.title, "First");

        let fetched = client.fetch_by_id("1".to_string()).await.unwrap();
        assert_eq!(fetched, created);

        let err = client
            .update("1".to_string(), serde_json::json!({ "title": "Second" }))
            .await
            .unwrap_err();
        assert_eq!(err.status_message(), "bad");

        mock.verify();
    }

    #[tokio::test]
    async fn published_state_reaches_clients() {
        let mock = MockClient::<Note>::new();
        let client = mock.client();
        assert!(client.state().items.is_empty());

        mock.set_state(ResourceState {
            items: vec![note("1", "First")],
            ..Default::default()
        });
        assert_eq!(client.state().items.len(), 1);
    }
}
