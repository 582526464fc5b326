//! # Midnight Munchies
//!
//! Ordering core for a late-night food delivery shop: a static menu, a cart
//! ledger with customization-aware pricing, checkout into persisted orders,
//! job applications, and an admin console that walks order status.
//!
//! ## Layout
//!
//! - **Domain types** - plain data with no actor concerns → [`domain`]
//! - **Storage** - key-value backends the persisted collections live in → [`storage`]
//! - **Actor framework** - generic persisted collection actor → [`actor_framework`]
//! - **Services** - the cart ledger actor and the order/application entities
//! - **Clients** - typed handles that talk to the actors → [`clients`]
//! - **System** - startup, wiring, shutdown and tracing → [`app_system`]
//!
//! ## Example
//!
//! ```no_run
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! use midnight_munchies::app_system::ShopSystem;
//! use midnight_munchies::config::Config;
//! use midnight_munchies::domain::Selection;
//!
//! let system = ShopSystem::new(&Config::default())?;
//! let selection = Selection::new().choose("burger-patty", "regular");
//! system.cart_client.add_item("burger-1".to_string(), selection, 1).await?;
//! system.shutdown().await?;
//! # Ok(())
//! # }
//! ```

pub mod actor_framework;
pub mod admin;
pub mod app_system;
pub mod application_actor;
pub mod cart_actor;
pub mod catalog;
pub mod clients;
pub mod config;
pub mod domain;
pub mod messages;
pub mod order_actor;
pub mod storage;

#[cfg(test)]
mod mock_framework;
#[cfg(test)]
mod integration_tests;
