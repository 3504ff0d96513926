//! # talkie-client
//!
//! Typed, stateful clients for the talkietotz REST API.
//!
//! - **[model]**: [`Lesson`](model::Lesson) and [`Week`](model::Week) plus their payloads.
//! - **[lesson_actor]** / **[week_actor]**: `RemoteEntity` impls, error types and factories.
//! - **[clients]**: [`LessonClient`](clients::LessonClient) and [`WeekClient`](clients::WeekClient).
//! - **[lifecycle]**: [`TalkieSystem`](lifecycle::TalkieSystem) starts and stops both actors.
//! - **[config]** / **[token_store]**: where the base URL and bearer token come from.
//!
//! Each client keeps the resource's items, the last item fetched by id, and
//! loading / error / success flags. Read them with `state()` or watch them with
//! `subscribe()`:
//!
//! ```rust,ignore
//! use resource_framework::ActorClient;
//!
//! system.lesson_client.fetch_all().await?;
//! let state = system.lesson_client.state();
//! println!("{} lessons, error: {:?}", state.items.len(), state.error);
//! ```

pub mod clients;
pub mod config;
pub mod lesson_actor;
pub mod lifecycle;
pub mod model;
pub mod token_store;
pub mod week_actor;
