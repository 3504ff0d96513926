//! Error types for the Lesson actor.

use resource_framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during lesson operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LessonError {
    /// No bearer token was stored, so nothing was sent.
    #[error("Not signed in: no token available for lessons")]
    Unauthenticated,

    /// The API answered with a non-2xx status.
    #[error("{message} (HTTP {status})")]
    Rejected { status: u16, message: String },

    /// The request never got an answer, or the answer was unreadable.
    #[error("Lesson request failed: {0}")]
    Network(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl LessonError {
    /// The text the lesson state records in `error` for this failure.
    pub fn message(&self) -> String {
        match self {
            LessonError::Rejected { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

impl From<FrameworkError> for LessonError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::MissingToken => LessonError::Unauthenticated,
            FrameworkError::RequestFailed { status, message } => {
                LessonError::Rejected { status, message }
            }
            FrameworkError::Transport(_) | FrameworkError::Decode(_) => {
                LessonError::Network(e.to_string())
            }
            FrameworkError::ActorClosed | FrameworkError::ActorDropped => {
                LessonError::ActorCommunicationError(e.to_string())
            }
        }
    }
}
