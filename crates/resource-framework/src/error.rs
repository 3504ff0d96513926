//! # Framework Errors
//!
//! This module defines the common error types used throughout the resource framework.
//! Every failure an actor can hit (a rejected request, a dead connection, a body that
//! isn't the JSON we expected) ends up as one of these variants, so callers can match
//! on structure while the observable state only ever carries a readable string.

/// Errors that can occur within the resource framework itself.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("No bearer token available")]
    MissingToken,
    #[error("{message} (HTTP {status})")]
    RequestFailed { status: u16, message: String },
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("Decode error: {0}")]
    Decode(String),
}

impl FrameworkError {
    /// The human-readable text recorded in `ResourceState::error`.
    ///
    /// Rejected requests surface the server's (or the fixed) message without the
    /// status suffix; everything else uses its `Display` form.
    pub fn status_message(&self) -> String {
        match self {
            FrameworkError::RequestFailed { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    /// HTTP status of a rejected request, if this error came from one.
    pub fn status(&self) -> Option<u16> {
        match self {
            FrameworkError::RequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }
}
