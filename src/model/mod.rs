//! Data structures for the two remote resources, implementing the
//! [`RemoteEntity`](resource_framework::RemoteEntity) trait.

pub mod lesson;
pub mod week;

pub use lesson::*;
pub use week::*;
