use thiserror::Error;

use crate::actor_framework::FrameworkError;

/// Errors that can occur while submitting or reviewing job applications.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApplicationError {
    #[error("Application not found: {0}")]
    NotFound(String),
    #[error("No such position: {0}")]
    UnknownJob(String),
    #[error("Please fill in all required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),
    #[error("Driver's license number is required for {0} position")]
    DriversLicenseRequired(String),
    #[error("Application validation error: {0}")]
    ValidationError(String),
    #[error("Application database error: {0}")]
    DatabaseError(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for ApplicationError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => ApplicationError::NotFound(id),
            FrameworkError::Rejected(msg) => ApplicationError::ValidationError(msg),
            FrameworkError::Storage(msg) => ApplicationError::DatabaseError(msg),
            FrameworkError::ActorClosed | FrameworkError::ActorDropped => {
                ApplicationError::ActorCommunicationError(e.to_string())
            }
        }
    }
}
