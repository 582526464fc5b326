use thiserror::Error;

use crate::actor_framework::FrameworkError;
use crate::cart_actor::CartError;

/// Errors that can occur during checkout and order administration.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    #[error("Order not found: {0}")]
    NotFound(String),
    #[error("Please fill in all required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),
    #[error("Please select a payment method")]
    MissingPaymentMethod,
    #[error("Your cart is empty")]
    EmptyCart,
    #[error("Cart error: {0}")]
    Cart(#[from] CartError),
    #[error("Order validation error: {0}")]
    ValidationError(String),
    #[error("Order database error: {0}")]
    DatabaseError(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for OrderError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            FrameworkError::Rejected(msg) => OrderError::ValidationError(msg),
            FrameworkError::Storage(msg) => OrderError::DatabaseError(msg),
            FrameworkError::ActorClosed | FrameworkError::ActorDropped => {
                OrderError::ActorCommunicationError(e.to_string())
            }
        }
    }
}
