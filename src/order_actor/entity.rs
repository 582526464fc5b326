use chrono::Utc;

use super::actions::{OrderAction, OrderActionResult};
use crate::actor_framework::Entity;
use crate::domain::{Order, OrderCreate};

/// Storage key the order list lives under.
pub const ORDERS_KEY: &str = "midnightMunchiesOrders";

impl Entity for Order {
    type Id = String;
    type CreatePayload = OrderCreate;
    type Action = OrderAction;
    type ActionResult = OrderActionResult;

    const COLLECTION_KEY: &'static str = ORDERS_KEY;

    fn id(&self) -> &String {
        &self.id
    }

    /// Prices the cart snapshot and starts the order as pending.
    fn from_create(id: String, payload: OrderCreate) -> Result<Self, String> {
        Ok(Order::price(id, payload, Utc::now()))
    }

    fn on_create(&mut self) -> Result<(), String> {
        if self.items.is_empty() {
            return Err("Order has no items".to_string());
        }
        Ok(())
    }

    fn handle_action(&mut self, action: OrderAction) -> Result<OrderActionResult, String> {
        match action {
            OrderAction::SetStatus(status) => {
                let previous = self.status;
                self.status = status;
                self.updated_at = Utc::now();
                Ok(OrderActionResult::SetStatus {
                    previous,
                    current: status,
                })
            }
        }
    }
}
