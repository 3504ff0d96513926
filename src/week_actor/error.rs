//! Error types for the Week actor.

use resource_framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during week operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum WeekError {
    #[error("Not signed in: no token available for weeks")]
    Unauthenticated,

    #[error("{message} (HTTP {status})")]
    Rejected { status: u16, message: String },

    #[error("Week request failed: {0}")]
    Network(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl WeekError {
    pub fn message(&self) -> String {
        match self {
            WeekError::Rejected { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

impl From<FrameworkError> for WeekError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::MissingToken => WeekError::Unauthenticated,
            FrameworkError::RequestFailed { status, message } => {
                WeekError::Rejected { status, message }
            }
            FrameworkError::Transport(_) | FrameworkError::Decode(_) => {
                WeekError::Network(e.to_string())
            }
            FrameworkError::ActorClosed | FrameworkError::ActorDropped => {
                WeekError::ActorCommunicationError(e.to_string())
            }
        }
    }
}
