//! The cart ledger service: one actor owning the current session's cart.

pub mod error;
pub mod service;

pub use error::*;
pub use service::*;
