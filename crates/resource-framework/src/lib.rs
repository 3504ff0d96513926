//! # Resource Framework
//!
//! This crate provides the building blocks for typed, stateful clients of a REST
//! API. Each remote resource collection (lessons, weeks, …) gets one actor that owns
//! its client-side state and performs its HTTP calls, and any number of cheap client
//! handles that talk to it.
//!
//! ## Why an actor per resource?
//!
//! A UI-style client keeps a little state next to every collection: the loaded
//! items, the last item fetched by id, and loading / error / success flags. When two
//! calls overlap, naive implementations race on who writes those flags last. Giving
//! the state to a single task that handles requests **sequentially** removes the race
//! without any locks, and every caller still gets its own `Result` back.
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`RemoteEntity`]) - what a resource is and where it lives
//! 2. **Runtime Layer** ([`ResourceActor`]) - HTTP calls, state bookkeeping, refresh-after-mutation
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - type-safe communication
//!
//! The HTTP details (base URL, bearer token, JSON headers) live in [`ApiContext`],
//! which is injected when the actor starts running.
//!
//! ## Quick Example
//!
//! ```rust,no_run
//! use resource_framework::{ApiContext, Phase, RemoteEntity, ResourceActor};
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
//!     let (actor, client) = ResourceActor::<Note>::new(10);
//!     tokio::spawn(actor.run(ApiContext::new("https://api.example.com", Some("abc".into()))));
//!
//!     match client.create(serde_json::json!({ "title": "X" })).await {
//!         Ok(note) => println!("created {}", note._id),
//!         Err(e) => println!("failed: {e}"),
//!     }
//!
//!     let state = client.state();
//!     assert_ne!(state.phase(), Phase::Loading);
//! }
//! ```
//!
//! ## Error Handling
//!
//! Callers get a structured [`FrameworkError`]; the published [`ResourceState`]
//! carries the same failure as a readable string in `error`.
//!
//! ## Testing
//!
//! The [`mock`] module provides a `MockClient` that answers requests from queued
//! expectations, for testing code around a client without an actor or a server.
//! With the `testing` feature, `fake_api` runs an in-process HTTP server that
//! scripts replies and records requests, for exercising real actors end to end.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
#[cfg(any(test, feature = "testing"))]
pub mod fake_api;
pub mod http;
pub mod message;
pub mod mock;
pub mod state;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::{Operation, RemoteEntity};
pub use error::FrameworkError;
pub use http::{ApiContext, ApiResponse};
pub use message::{ResourceRequest, Response};
pub use state::{Phase, ResourceState};
