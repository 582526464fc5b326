use tokio::sync::oneshot;

use crate::cart_actor::CartError;
use crate::domain::{CartLine, CartSnapshot, MenuItem, Selection};

/// Generic type aliases for service communication
pub type ServiceResult<T, E> = std::result::Result<T, E>;
pub type ServiceResponse<T, E> = oneshot::Sender<ServiceResult<T, E>>;

/// Typed messages for the cart service. Each variant carries its parameters
/// and a oneshot channel for the response.
#[derive(Debug)]
pub enum CartRequest {
    /// Look the item up in the catalog, check required groups, then add `quantity` units
    /// (at most `MAX_LINE_QUANTITY`).
    AddItem {
        item_id: String,
        selection: Selection,
        quantity: u32,
        respond_to: ServiceResponse<CartLine, CartError>,
    },
    /// Add one unit of an explicit item without catalog lookup or validation.
    AddLine {
        item: MenuItem,
        selection: Selection,
        respond_to: ServiceResponse<CartLine, CartError>,
    },
    UpdateQuantity {
        line_id: String,
        quantity: i64,
        respond_to: ServiceResponse<(), CartError>,
    },
    RemoveLine {
        line_id: String,
        respond_to: ServiceResponse<bool, CartError>,
    },
    Clear {
        respond_to: ServiceResponse<(), CartError>,
    },
    /// Remove the units of `lines` that were just ordered, leaving anything
    /// added since they were read.
    Settle {
        lines: Vec<CartLine>,
        respond_to: ServiceResponse<(), CartError>,
    },
    Snapshot {
        respond_to: ServiceResponse<CartSnapshot, CartError>,
    },
    Shutdown,
}
