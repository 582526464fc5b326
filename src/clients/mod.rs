//! Typed handles for talking to the cart service and the persisted collections.

#[macro_use]
mod macros;

mod application_client;
mod cart_client;
mod order_client;

pub use application_client::ApplicationClient;
pub use cart_client::CartClient;
pub use order_client::OrderClient;
