use midnight_munchies::app_system::{setup_tracing, ShopSystem};
use midnight_munchies::config::Config;
use midnight_munchies::domain::{
    ApplicantInfo, CheckoutRequest, CustomerInfo, MenuCategory, OrderStatus, PaymentMethod,
    Selection,
};
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    dotenv::dotenv().ok();
    setup_tracing();

    let config = Config::from_env();
    info!(store = ?config.store, data_dir = %config.data_dir.display(), "Starting Midnight Munchies");

    let system = ShopSystem::new(&config).map_err(|e| e.to_string())?;

    for category in MenuCategory::ALL {
        for item in system.catalog.by_category(category) {
            info!(?category, id = %item.id, name = %item.name, price = %item.price, "Menu item");
        }
    }
    let fees = system.order_client.fees();
    info!(delivery_fee = %fees.delivery_fee, express_fee = %fees.express_fee, "Fee schedule");

    // Fill the cart: a loaded burger twice and a soda
    let span = tracing::info_span!("cart");
    async {
        let burger = Selection::new()
            .choose("burger-patty", "triple")
            .toggle("burger-toppings", "extra-cheese")
            .toggle("burger-toppings", "extra-bacon");
        let line = system
            .cart_client
            .add_item("burger-1".to_string(), burger, 2)
            .await
            .map_err(|e| e.to_string())?;
        info!(line = %line.describe_customizations(), unit_price = %line.unit_price, "Burger added");

        if let Err(e) = system
            .cart_client
            .add_item("wings-1".to_string(), Selection::new(), 1)
            .await
        {
            info!(error = %e, "Wings need a sauce first");
        }

        system
            .cart_client
            .add_item("soda-1".to_string(), Selection::new(), 1)
            .await
            .map_err(|e| e.to_string())?;

        let snapshot = system.cart_client.snapshot().await.map_err(|e| e.to_string())?;
        info!(items = snapshot.item_count, total = %snapshot.total, "Cart ready");
        Ok::<_, String>(())
    }
    .instrument(span)
    .await?;

    // Checkout
    let span = tracing::info_span!("checkout");
    let order_result = async {
        let request = CheckoutRequest {
            customer_info: CustomerInfo::new("Night Owl", "555-0199", "12 Moonlight Ave")
                .with_email("owl@example.com"),
            payment_method: Some(PaymentMethod::Cash),
            express_delivery: true,
        };
        system.order_client.place_order(request).await
    }
    .instrument(span)
    .await;

    match order_result {
        Ok(order_id) => {
            info!(order_id = %order_id, "Order placed successfully");
            if let Err(e) = system
                .admin
                .update_order_status(order_id, OrderStatus::Confirmed)
                .await
            {
                error!(error = %e, "Status update failed");
            }
        }
        Err(e) => error!(error = %e, "Checkout failed"),
    }

    // Job application
    let applicant = ApplicantInfo {
        full_name: "Sam Rivera".to_string(),
        age: "24".to_string(),
        email: "sam@example.com".to_string(),
        phone: "555-0101".to_string(),
        drivers_license: "D1234567".to_string(),
        availability: "Weeknights".to_string(),
        ..Default::default()
    };
    match system
        .application_client
        .submit_application("delivery-driver".to_string(), applicant)
        .await
    {
        Ok(id) => info!(application_id = %id, "Application received"),
        Err(e) => error!(error = %e, "Application failed"),
    }

    // Admin view
    let dashboard = system.admin.refresh().await;
    for order in &dashboard.orders {
        info!(
            order = %order.label(),
            status = %order.status,
            items = order.item_count(),
            total = %order.total,
            "Order"
        );
    }
    for notice in &dashboard.notices {
        error!(notice = %notice, "Admin notice");
    }

    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
