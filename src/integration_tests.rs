#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use rust_decimal::Decimal;

    use crate::application_actor::{ApplicationAction, ApplicationActionResult};
    use crate::cart_actor::CartService;
    use crate::catalog::Catalog;
    use crate::clients::{ApplicationClient, CartClient, OrderClient};
    use crate::domain::{
        ApplicantInfo, ApplicationStatus, CheckoutRequest, CustomerInfo, Fees, JobApplication,
        Order, OrderStatus, PaymentMethod, Selection,
    };
    use crate::mock_framework::{
        create_mock_client, expect_action, expect_create, expect_get, fail_with_storage,
    };
    use crate::order_actor::{OrderAction, OrderActionResult, OrderError};

    fn start_cart() -> CartClient {
        let (service, client) = CartService::new(10, Arc::new(Catalog::standard()));
        tokio::spawn(service.run());
        client
    }

    fn checkout() -> CheckoutRequest {
        CheckoutRequest {
            customer_info: CustomerInfo::new("  Ada  ", "555-0100", "1 Night St").with_email(" "),
            payment_method: Some(PaymentMethod::Card),
            express_delivery: true,
        }
    }

    #[tokio::test]
    async fn test_checkout_flow() {
        // 1. Real cart, mocked order collection
        let cart = start_cart();
        let (order_inner, mut order_rx) = create_mock_client::<Order>(10);
        let order_client = OrderClient::new(order_inner, cart.clone(), Fees::default());

        let burger = Selection::new()
            .choose("burger-patty", "triple")
            .toggle("burger-toppings", "extra-cheese")
            .toggle("burger-toppings", "extra-bacon");
        cart.add_item("burger-1".into(), burger, 2).await.unwrap();

        // 2. Execute checkout in background
        let checkout_task = tokio::spawn(async move { order_client.place_order(checkout()).await });

        // 3. Verify the create payload carries the snapshot and normalized contact info
        let (payload, responder) = expect_create(&mut order_rx)
            .await
            .expect("Expected Order Create");
        assert_eq!(payload.items.len(), 1);
        assert_eq!(payload.items[0].quantity, 2);
        assert_eq!(payload.items[0].unit_price, Decimal::new(2149, 2));
        assert_eq!(payload.customer_info.name, "Ada");
        assert_eq!(payload.customer_info.email, None);
        assert_eq!(payload.payment_method, PaymentMethod::Card);
        assert!(payload.express_delivery);
        assert_eq!(payload.fees, Fees::default());
        responder.send(Ok("ORDER-1".to_string())).unwrap();

        // 4. Verify result and drained cart
        let result = checkout_task.await.unwrap();
        assert_eq!(result, Ok("ORDER-1".to_string()));
        assert!(cart.snapshot().await.unwrap().lines.is_empty());
    }

    #[tokio::test]
    async fn test_checkout_keeps_lines_added_meanwhile() {
        let cart = start_cart();
        let (order_inner, mut order_rx) = create_mock_client::<Order>(10);
        let order_client = OrderClient::new(order_inner, cart.clone(), Fees::default());
        cart.add_item("soda-1".into(), Selection::new(), 1).await.unwrap();

        let checkout_task = tokio::spawn(async move { order_client.place_order(checkout()).await });

        // The cart has been read; another handle keeps shopping before the order lands.
        let (payload, responder) = expect_create(&mut order_rx)
            .await
            .expect("Expected Order Create");
        let shake = Selection::new().choose("shake-flavor", "oreo");
        cart.add_item("shake-1".into(), shake, 1).await.unwrap();
        cart.add_item("soda-1".into(), Selection::new(), 1).await.unwrap();
        responder.send(Ok("ORDER-1".to_string())).unwrap();

        assert_eq!(checkout_task.await.unwrap(), Ok("ORDER-1".to_string()));
        let ordered: Vec<&str> = payload.items.iter().map(|l| l.menu_item.id.as_str()).collect();
        assert_eq!(ordered, vec!["soda-1"]);

        let remaining = cart.snapshot().await.unwrap();
        let left: Vec<(&str, u32)> = remaining
            .lines
            .iter()
            .map(|line| (line.menu_item.id.as_str(), line.quantity))
            .collect();
        assert_eq!(left, vec![("soda-1", 1), ("shake-1", 1)]);
    }

    #[tokio::test]
    async fn test_failed_create_keeps_cart() {
        let cart = start_cart();
        let (order_inner, mut order_rx) = create_mock_client::<Order>(10);
        let order_client = OrderClient::new(order_inner, cart.clone(), Fees::default());
        cart.add_item("soda-1".into(), Selection::new(), 2).await.unwrap();

        let checkout_task = tokio::spawn(async move { order_client.place_order(checkout()).await });

        let (_, responder) = expect_create(&mut order_rx)
            .await
            .expect("Expected Order Create");
        fail_with_storage(responder, "disk full");

        let result = checkout_task.await.unwrap();
        assert_eq!(result, Err(OrderError::DatabaseError("disk full".to_string())));
        assert_eq!(cart.snapshot().await.unwrap().item_count, 2);
    }

    #[tokio::test]
    async fn test_invalid_checkout_sends_nothing() {
        let cart = start_cart();
        let (order_inner, mut order_rx) = create_mock_client::<Order>(10);
        let order_client = OrderClient::new(order_inner, cart.clone(), Fees::default());
        cart.add_item("soda-1".into(), Selection::new(), 1).await.unwrap();

        let mut request = checkout();
        request.payment_method = None;
        assert_eq!(
            order_client.place_order(request).await,
            Err(OrderError::MissingPaymentMethod)
        );

        drop(order_client);
        assert!(order_rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_order_status_update_flow() {
        let (order_inner, mut order_rx) = create_mock_client::<Order>(10);
        let order_client = OrderClient::new(order_inner, start_cart(), Fees::default());

        let update_task = tokio::spawn(async move {
            order_client
                .update_status("ORDER-1".into(), OrderStatus::Preparing)
                .await
        });

        let (id, action, responder) = expect_action(&mut order_rx)
            .await
            .expect("Expected Order Action");
        assert_eq!(id, "ORDER-1");
        match action {
            OrderAction::SetStatus(status) => assert_eq!(status, OrderStatus::Preparing),
        }
        responder
            .send(Ok(OrderActionResult::SetStatus {
                previous: OrderStatus::Confirmed,
                current: OrderStatus::Preparing,
            }))
            .unwrap();

        assert_eq!(update_task.await.unwrap(), Ok(OrderStatus::Confirmed));
    }

    #[tokio::test]
    async fn test_application_flow() {
        let (inner, mut rx) = create_mock_client::<JobApplication>(10);
        let applications = ApplicationClient::new(inner, Arc::new(Catalog::standard()));

        let task = tokio::spawn(async move {
            let applicant = ApplicantInfo {
                full_name: "Sam Rivera".into(),
                age: "24".into(),
                email: "sam@example.com".into(),
                phone: "555-0101".into(),
                drivers_license: "D1234567".into(),
                ..Default::default()
            };
            let id = applications
                .submit_application("delivery-driver".into(), applicant)
                .await?;
            applications
                .update_status(id.clone(), ApplicationStatus::Reviewing)
                .await?;
            applications.get_application(id).await
        });

        let (payload, responder) = expect_create(&mut rx).await.expect("Expected Create");
        assert_eq!(payload.job_title, "Delivery Driver");
        responder.send(Ok("APP-9".to_string())).unwrap();

        let (id, action, responder) = expect_action(&mut rx).await.expect("Expected Action");
        assert_eq!(id, "APP-9");
        assert!(matches!(
            action,
            ApplicationAction::SetStatus(ApplicationStatus::Reviewing)
        ));
        responder
            .send(Ok(ApplicationActionResult::SetStatus {
                previous: ApplicationStatus::Pending,
                current: ApplicationStatus::Reviewing,
            }))
            .unwrap();

        let (id, responder) = expect_get(&mut rx).await.expect("Expected Get");
        assert_eq!(id, "APP-9");
        responder.send(Ok(None)).unwrap();

        assert_eq!(task.await.unwrap(), Ok(None));
    }
}
