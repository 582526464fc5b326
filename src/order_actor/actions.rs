use crate::domain::OrderStatus;

/// Custom actions for Order entities.
#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Overwrite the status. No transition graph is enforced.
    SetStatus(OrderStatus),
}

/// Results from OrderActions - variants match 1:1 with OrderAction
#[derive(Debug, Clone, PartialEq)]
pub enum OrderActionResult {
    SetStatus {
        previous: OrderStatus,
        current: OrderStatus,
    },
}
