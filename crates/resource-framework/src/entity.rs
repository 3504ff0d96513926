//! # RemoteEntity Trait
//!
//! The `RemoteEntity` trait defines the contract every remote resource (Lesson, Week, …)
//! must implement to be managed by the generic `ResourceActor`. It names the id and
//! payload types, where the resource lives on the API, and the status messages the
//! actor records as operations settle.
//!
//! # Architecture Note
//! The HTTP plumbing, state bookkeeping and refresh logic are written *once* in
//! `ResourceActor`. A resource only describes itself. Associated types keep the
//! payloads apart: a `LessonUpdate` can never be sent to the week actor.
//!
//! # Provided Methods
//! Everything except the collection path and the labels has a default:
//! - [`RemoteEntity::list_path`] (defaults to the collection path)
//! - [`RemoteEntity::item_path`] (`{collection}/{id}`)
//! - [`RemoteEntity::has_id`] (never matches)
//! - [`RemoteEntity::refresh_after`] (every mutation refreshes)
//! - [`RemoteEntity::failure_message`] / [`RemoteEntity::success_message`]

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::{Debug, Display};

/// The operations every resource actor supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    FetchAll,
    FetchById,
    Create,
    Update,
    Delete,
}

impl Operation {
    /// Mutations reset both `error` and `success`; fetches only reset `error`.
    pub fn is_mutation(self) -> bool {
        matches!(
            self,
            Operation::Create | Operation::Update | Operation::Delete
        )
    }

    fn verb(self) -> &'static str {
        match self {
            Operation::FetchAll | Operation::FetchById => "fetch",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
        }
    }

    fn past_tense(self) -> &'static str {
        match self {
            Operation::FetchAll | Operation::FetchById => "fetched",
            Operation::Create => "created",
            Operation::Update => "updated",
            Operation::Delete => "deleted",
        }
    }
}

/// Trait that any remote resource must implement to be managed by ResourceActor.
pub trait RemoteEntity: Clone + Debug + PartialEq + DeserializeOwned + Send + Sync + 'static {
    /// The server-assigned identifier (e.g., a Mongo `_id` string).
    type Id: Clone + Display + Debug + Send + Sync;

    /// Body posted to create a new resource.
    type Create: Serialize + Debug + Send + Sync;

    /// Body put to update an existing resource.
    type Update: Serialize + Debug + Send + Sync;

    /// Capitalised singular name used in status messages (`"Lesson"`).
    const LABEL: &'static str;

    /// Lower-case plural name used in status messages (`"lessons"`).
    const PLURAL: &'static str;

    /// Path of the collection, relative to the API base URL (`"/lessons"`).
    fn collection_path() -> String;

    /// Path used to list the collection. Most APIs list at the collection path.
    fn list_path() -> String {
        Self::collection_path()
    }

    /// Path of a single resource.
    fn item_path(id: &Self::Id) -> String {
        format!("{}/{}", Self::collection_path(), id)
    }

    /// Whether `self` is the resource identified by `id`.
    ///
    /// Lets an update whose 2xx body is not the resource (`{"message": ...}`, an
    /// empty 204) be answered from the refreshed collection. The default never
    /// matches, so such an update reports a decode error.
    fn has_id(&self, _id: &Self::Id) -> bool {
        false
    }

    /// Whether a successful mutation reloads the collection before settling.
    fn refresh_after(op: Operation) -> bool {
        op.is_mutation()
    }

    /// Fixed message recorded when `op` is rejected or cannot be completed.
    fn failure_message(op: Operation) -> String {
        match op {
            Operation::FetchAll => format!("Failed to fetch {}", Self::PLURAL),
            other => format!("Failed to {} {}", other.verb(), Self::LABEL.to_lowercase()),
        }
    }

    /// Message recorded in `success` once `op` completes.
    fn success_message(op: Operation) -> String {
        format!("{} {} successfully!", Self::LABEL, op.past_tense())
    }
}
