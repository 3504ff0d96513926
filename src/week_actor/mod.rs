//! # Week Actor
//!
//! The `/weeks` collection on the generic resource actor. Structurally the same as
//! [`lesson_actor`](crate::lesson_actor); the only difference is that the
//! collection is listed at `/weeks/all`.
//!
//! - [`entity`] - [`RemoteEntity`](resource_framework::RemoteEntity) implementation for [`Week`]
//! - [`error`] - [`WeekError`]
//! - [`new()`] - Factory function that creates the actor and client

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::WeekClient;
use crate::model::Week;
use resource_framework::ResourceActor;

pub const DEFAULT_BUFFER: usize = 32;

/// Creates a new Week actor and its client.
pub fn new() -> (ResourceActor<Week>, WeekClient) {
    with_buffer(DEFAULT_BUFFER)
}

pub fn with_buffer(buffer_size: usize) -> (ResourceActor<Week>, WeekClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, WeekClient::new(generic_client))
}
