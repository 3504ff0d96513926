//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the component that owns one resource's
//! client-side state and performs its HTTP calls. It implements the "Server" side of
//! the Actor Model, processing requests sequentially so overlapping callers never
//! race on the final state.

use crate::client::ResourceClient;
use crate::entity::{Operation, RemoteEntity};
use crate::error::FrameworkError;
use crate::http::{ApiContext, ApiResponse};
use crate::message::ResourceRequest;
use crate::state::ResourceState;
use reqwest::Method;
use serde::Serialize;
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, warn};

/// The generic actor that manages one remote resource collection.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the `ResourceState`, the
/// receiver end of the request channel and the sending end of the state watch.
///
/// **Concurrency Model**:
/// Requests are handled one at a time in `run()`. A second `create` sent while the
/// first is in flight simply waits in the channel, so `loading`, `error` and
/// `success` always describe exactly one operation. No `Mutex` is needed: the task
/// has exclusive ownership of the state.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ResourceActor::new()` to get the `actor` (server) and `client` (interface).
/// 2.  **Wire**: Pass the [`ApiContext`] into `actor.run(context)`.
/// 3.  **Run**: Spawn the run loop in a background task.
///
/// ```rust,no_run
/// use resource_framework::{ApiContext, RemoteEntity, ResourceActor};
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
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Note>::new(10);
///     let context = ApiContext::new("https://api.example.com", Some("token".into()));
///     tokio::spawn(actor.run(context));
///
///     let notes = client.fetch_all().await;
///     println!("{:?} / {:?}", notes, client.state().error);
/// }
/// ```
///
/// # Operations
///
/// Every operation follows the same shape:
/// 1. Without a bearer token, reply `MissingToken` and leave the state alone.
/// 2. Mark the state loading (clearing `error`, and `success` for mutations) and publish.
/// 3. Send the request. A non-2xx status becomes `RequestFailed` with the resource's
///    fixed message (for updates, the server's `message` field wins when present).
/// 4. On success apply the result (`items`, `selected`, `success`) and, for
///    mutations, reload the collection once. A 2xx mutation counts as applied
///    even when its body is not the resource; an update then answers with the
///    refreshed copy (see [`RemoteEntity::has_id`]).
/// 5. Clear `loading`, publish, and reply.
pub struct ResourceActor<T: RemoteEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    state: ResourceState<T>,
    publisher: watch::Sender<ResourceState<T>>,
}

impl<T: RemoteEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the capacity of the request channel. When it is full,
    /// client calls wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let (publisher, watcher) = watch::channel(ResourceState::default());
        let actor = Self {
            receiver,
            state: ResourceState::default(),
            publisher,
        };
        let client = ResourceClient::new(sender, watcher);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    ///
    /// # Context Injection
    /// The `context` (HTTP client, base URL, token) is supplied here rather than in
    /// `new()`, so the token can be read after the actors have been created.
    pub async fn run(mut self, context: ApiContext) {
        let entity_type = T::LABEL;
        info!(entity_type, base_url = context.base_url(), "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::FetchAll { respond_to } => {
                    let result = self.fetch_all(&context).await;
                    let _ = respond_to.send(result);
                }
                ResourceRequest::FetchById { id, respond_to } => {
                    let result = self.fetch_by_id(&context, id).await;
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Create { params, respond_to } => {
                    let result = self.create(&context, params).await;
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    let result = self.update(&context, id, update).await;
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Delete { id, respond_to } => {
                    let result = self.delete(&context, id).await;
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, size = self.state.items.len(), "Shutdown");
    }

    async fn fetch_all(&mut self, ctx: &ApiContext) -> Result<Vec<T>, FrameworkError> {
        self.begin(ctx, Operation::FetchAll)?;
        debug!(entity_type = T::LABEL, "FetchAll");

        let result = self.load_collection(ctx).await;
        if let Ok(items) = &result {
            info!(entity_type = T::LABEL, size = items.len(), "Fetched");
        }
        self.finish(result)
    }

    async fn fetch_by_id(&mut self, ctx: &ApiContext, id: T::Id) -> Result<T, FrameworkError> {
        self.begin(ctx, Operation::FetchById)?;
        debug!(entity_type = T::LABEL, %id, "FetchById");

        let result = self
            .request::<(), T>(ctx, Operation::FetchById, Method::GET, &T::item_path(&id), None)
            .await;
        if let Ok(item) = &result {
            self.state.selected = Some(item.clone());
            info!(entity_type = T::LABEL, %id, "Fetched");
        }
        self.finish(result)
    }

    async fn create(&mut self, ctx: &ApiContext, params: T::Create) -> Result<T, FrameworkError> {
        self.begin(ctx, Operation::Create)?;
        debug!(entity_type = T::LABEL, ?params, "Create");

        let sent = self
            .send(
                ctx,
                Operation::Create,
                Method::POST,
                &T::collection_path(),
                Some(&params),
            )
            .await;
        let result = match sent {
            Ok(response) => {
                info!(entity_type = T::LABEL, "Created");
                self.succeed(ctx, Operation::Create).await;
                response.json()
            }
            Err(e) => Err(e),
        };
        self.finish(result)
    }

    async fn update(
        &mut self,
        ctx: &ApiContext,
        id: T::Id,
        update: T::Update,
    ) -> Result<T, FrameworkError> {
        self.begin(ctx, Operation::Update)?;
        debug!(entity_type = T::LABEL, %id, ?update, "Update");

        let sent = self
            .send(
                ctx,
                Operation::Update,
                Method::PUT,
                &T::item_path(&id),
                Some(&update),
            )
            .await;
        let result = match sent {
            Ok(response) => {
                info!(entity_type = T::LABEL, %id, "Updated");
                self.succeed(ctx, Operation::Update).await;
                // A bare acknowledgement is answered from the refreshed collection.
                response.json().or_else(|e| {
                    self.state
                        .items
                        .iter()
                        .find(|item| item.has_id(&id))
                        .cloned()
                        .ok_or(e)
                })
            }
            Err(e) => Err(e),
        };
        self.finish(result)
    }

    async fn delete(&mut self, ctx: &ApiContext, id: T::Id) -> Result<(), FrameworkError> {
        self.begin(ctx, Operation::Delete)?;
        debug!(entity_type = T::LABEL, %id, "Delete");

        // The delete response body carries nothing we use.
        let result = self
            .send::<()>(ctx, Operation::Delete, Method::DELETE, &T::item_path(&id), None)
            .await
            .map(|_| ());
        if result.is_ok() {
            info!(entity_type = T::LABEL, %id, "Deleted");
            self.succeed(ctx, Operation::Delete).await;
        }
        self.finish(result)
    }

    // --- Bookkeeping ---

    fn begin(&mut self, ctx: &ApiContext, op: Operation) -> Result<(), FrameworkError> {
        if !ctx.has_token() {
            warn!(entity_type = T::LABEL, ?op, "No bearer token, request skipped");
            return Err(FrameworkError::MissingToken);
        }
        self.state.begin(op);
        self.publish();
        Ok(())
    }

    /// Records the success message and reloads the collection if the entity asks for it.
    async fn succeed(&mut self, ctx: &ApiContext, op: Operation) {
        self.state.success = Some(T::success_message(op));
        if T::refresh_after(op) {
            // A failed refresh is recorded in `error` but the mutation itself stands.
            let refreshed = self.load_collection(ctx).await;
            if let Err(e) = refreshed {
                self.state.fail(e.status_message());
            }
        }
    }

    fn finish<R>(&mut self, result: Result<R, FrameworkError>) -> Result<R, FrameworkError> {
        if let Err(e) = &result {
            warn!(entity_type = T::LABEL, error = %e, "Request failed");
            self.state.fail(e.status_message());
        }
        self.state.settle();
        self.publish();
        result
    }

    fn publish(&self) {
        // `send_replace` stores the value even when no client is watching.
        self.publisher.send_replace(self.state.clone());
    }

    // --- HTTP ---

    async fn load_collection(&mut self, ctx: &ApiContext) -> Result<Vec<T>, FrameworkError> {
        let items: Vec<T> = self
            .request::<(), Vec<T>>(ctx, Operation::FetchAll, Method::GET, &T::list_path(), None)
            .await?;
        self.state.items = items.clone();
        Ok(items)
    }

    async fn request<B, R>(
        &self,
        ctx: &ApiContext,
        op: Operation,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<R, FrameworkError>
    where
        B: Serialize + ?Sized,
        R: serde::de::DeserializeOwned,
    {
        self.send(ctx, op, method, path, body).await?.json()
    }

    async fn send<B: Serialize + ?Sized>(
        &self,
        ctx: &ApiContext,
        op: Operation,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<ApiResponse, FrameworkError> {
        let response = ctx.execute(method, path, body).await?;
        if response.is_success() {
            return Ok(response);
        }

        let message = match op {
            Operation::Update => response
                .server_message()
                .unwrap_or_else(|| T::failure_message(op)),
            _ => T::failure_message(op),
        };
        debug!(entity_type = T::LABEL, status = response.status.as_u16(), %message, "Rejected");
        Err(response.rejection(message))
    }
}
