use tracing::{debug, info, instrument, warn};

use crate::actor_framework::ResourceClient;
use crate::clients::CartClient;
use crate::domain::{CheckoutRequest, Fees, Order, OrderCreate, OrderStatus};
use crate::order_actor::{OrderAction, OrderActionResult, OrderError};

/// Checkout and order administration. Wraps the order collection and
/// drains the cart on a successful checkout.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
    cart_client: CartClient,
    fees: Fees,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>, cart_client: CartClient, fees: Fees) -> Self {
        Self {
            inner,
            cart_client,
            fees,
        }
    }

    /// Turn the current cart into a pending order and take the ordered
    /// units out of the cart.
    ///
    /// Contact fields are checked before the payment method, and both
    /// before the cart is looked at. The cart is left untouched on any failure.
    #[instrument(skip(self, request), fields(express = request.express_delivery))]
    pub async fn place_order(&self, request: CheckoutRequest) -> Result<String, OrderError> {
        debug!("Processing checkout");

        let missing = request.customer_info.missing_fields();
        if !missing.is_empty() {
            warn!(?missing, "Checkout rejected");
            return Err(OrderError::MissingFields(missing));
        }
        let payment_method = request.payment_method.ok_or_else(|| {
            warn!("Checkout rejected: no payment method");
            OrderError::MissingPaymentMethod
        })?;

        let snapshot = self.cart_client.snapshot().await?;
        if snapshot.lines.is_empty() {
            warn!("Checkout rejected: cart is empty");
            return Err(OrderError::EmptyCart);
        }

        let ordered = snapshot.lines.clone();
        let payload = OrderCreate {
            items: snapshot.lines,
            customer_info: request.customer_info.normalized(),
            payment_method,
            express_delivery: request.express_delivery,
            fees: self.fees.clone(),
        };
        let order_id = self.inner.create(payload).await?;

        // Only what was ordered leaves the cart.
        self.cart_client.settle(ordered).await?;
        info!(order_id = %order_id, item_count = snapshot.item_count, "Order placed");
        Ok(order_id)
    }

    #[instrument(skip(self))]
    pub async fn update_status(
        &self,
        id: String,
        status: OrderStatus,
    ) -> Result<OrderStatus, OrderError> {
        debug!("Sending request");
        let OrderActionResult::SetStatus { previous, current } = self
            .inner
            .perform_action(id, OrderAction::SetStatus(status))
            .await?;
        info!(%previous, %current, "Order status changed");
        Ok(previous)
    }

    /// Remove every stored order. Returns how many were removed.
    #[instrument(skip(self))]
    pub async fn clear_orders(&self) -> Result<usize, OrderError> {
        debug!("Sending request");
        Ok(self.inner.clear().await?)
    }

    pub fn fees(&self) -> &Fees {
        &self.fees
    }
}

impl_client_methods!(OrderClient, Order, OrderError, order);
