//! # Generic Messages
//!
//! This module defines the generic message types used for communication between
//! the `ResourceClient` and `ResourceActor`.

use crate::entity::RemoteEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// The variants map one-to-one onto the REST operations of a resource collection:
///
/// - **FetchAll**: `GET` the collection and replace the cached items.
/// - **FetchById**: `GET` one resource and remember it as `selected`.
/// - **Create**: `POST` a [`RemoteEntity::Create`] body.
/// - **Update**: `PUT` a [`RemoteEntity::Update`] body.
/// - **Delete**: `DELETE` a resource.
///
/// The enum is generic over `T: RemoteEntity`, so a week payload can't be sent to
/// the lesson actor.
#[derive(Debug)]
pub enum ResourceRequest<T: RemoteEntity> {
    FetchAll {
        respond_to: Response<Vec<T>>,
    },
    FetchById {
        id: T::Id,
        respond_to: Response<T>,
    },
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
}
