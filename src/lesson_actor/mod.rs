//! # Lesson Actor
//!
//! This module wires the `/lessons` collection into the generic resource actor.
//!
//! ## Structure
//!
//! - [`entity`] - [`RemoteEntity`](resource_framework::RemoteEntity) implementation for [`Lesson`]
//! - [`error`] - [`LessonError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust,no_run
//! use resource_framework::ApiContext;
//! use talkie_client::lesson_actor;
//! use talkie_client::model::LessonCreate;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = lesson_actor::new();
//!     tokio::spawn(actor.run(ApiContext::new("https://www.talkietotz.com", Some("abc".into()))));
//!
//!     let lesson = client.create_lesson(LessonCreate::new("Colours")).await?;
//!     println!("created {}", lesson.id);
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::LessonClient;
use crate::model::Lesson;
use resource_framework::ResourceActor;

/// Request channel capacity used by [`new()`].
pub const DEFAULT_BUFFER: usize = 32;

/// Creates a new Lesson actor and its client.
pub fn new() -> (ResourceActor<Lesson>, LessonClient) {
    with_buffer(DEFAULT_BUFFER)
}

/// Like [`new()`] with an explicit request channel capacity.
pub fn with_buffer(buffer_size: usize) -> (ResourceActor<Lesson>, LessonClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, LessonClient::new(generic_client))
}
