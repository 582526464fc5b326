use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info};

use crate::actor_framework::ResourceActor;
use crate::admin::AdminConsole;
use crate::cart_actor::CartService;
use crate::catalog::Catalog;
use crate::clients::{ApplicationClient, CartClient, OrderClient};
use crate::config::Config;
use crate::domain::{JobApplication, Order};
use crate::storage::{self, KvStore, StorageError};

/// Ids of the form `<prefix>-<unix millis>`, bumped by one when two ids
/// would land on the same millisecond.
pub fn time_based_ids(prefix: &'static str) -> impl Fn() -> String + Send + Sync + 'static {
    let last = Arc::new(AtomicI64::new(0));
    move || {
        let now = Utc::now().timestamp_millis();
        let mut current = last.load(Ordering::SeqCst);
        loop {
            let next = now.max(current + 1);
            match last.compare_exchange(current, next, Ordering::SeqCst, Ordering::SeqCst) {
                Ok(_) => return format!("{}-{}", prefix, next),
                Err(actual) => current = actual,
            }
        }
    }
}

/// The main application system that orchestrates all actors.
///
/// Responsible for starting up actors, wiring them together, and handling shutdown.
pub struct ShopSystem {
    pub catalog: Arc<Catalog>,
    pub cart_client: CartClient,
    pub order_client: OrderClient,
    pub application_client: ApplicationClient,
    pub admin: AdminConsole,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl ShopSystem {
    /// Open the configured store and start every actor.
    pub fn new(config: &Config) -> Result<Self, StorageError> {
        let store = storage::open(config.store, &config.data_dir)?;
        info!(backend = ?config.store, "Store opened");
        Ok(Self::with_store(config, store))
    }

    pub fn with_store(config: &Config, store: Arc<dyn KvStore>) -> Self {
        let catalog = Arc::new(Catalog::standard());
        let buffer = config.channel_buffer;

        // 1. Cart service
        let (cart_service, cart_client) = CartService::new(buffer, catalog.clone());
        let cart_handle = tokio::spawn(cart_service.run());

        // 2. Orders, checked out from the cart
        let (order_actor, order_resource_client) =
            ResourceActor::<Order>::new(buffer, store.clone(), time_based_ids("ORDER"));
        let order_client = OrderClient::new(
            order_resource_client,
            cart_client.clone(),
            config.fees.clone(),
        );
        let order_handle = tokio::spawn(order_actor.run());

        // 3. Job applications
        let (application_actor, application_resource_client) =
            ResourceActor::<JobApplication>::new(buffer, store, time_based_ids("APP"));
        let application_client =
            ApplicationClient::new(application_resource_client, catalog.clone());
        let application_handle = tokio::spawn(application_actor.run());

        let admin = AdminConsole::new(order_client.clone(), application_client.clone());

        Self {
            catalog,
            cart_client,
            order_client,
            application_client,
            admin,
            handles: vec![cart_handle, order_handle, application_handle],
        }
    }

    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        if let Err(e) = self.cart_client.shutdown().await {
            error!(error = %e, "Cart service already stopped");
        }
        if let Err(e) = self.order_client.shutdown().await {
            error!(error = %e, "Order actor already stopped");
        }
        if let Err(e) = self.application_client.shutdown().await {
            error!(error = %e, "Application actor already stopped");
        }

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
