//! Type-safe wrappers around [`ResourceClient`](resource_framework::ResourceClient).

pub mod lesson_client;
pub mod week_client;

pub use lesson_client::*;
pub use week_client::*;
