use thiserror::Error;

/// Errors that can occur during cart operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    #[error("Menu item not found: {0}")]
    UnknownMenuItem(String),
    #[error("Please select all required options: {}", .0.join(", "))]
    MissingRequiredOptions(Vec<String>),
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
