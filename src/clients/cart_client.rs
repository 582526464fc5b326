use tokio::sync::mpsc;

use crate::cart_actor::CartError;
use crate::domain::{CartLine, CartSnapshot, MenuItem, Selection};
use crate::messages::CartRequest;

#[derive(Clone)]
pub struct CartClient {
    sender: mpsc::Sender<CartRequest>,
}

impl CartClient {
    pub fn new(sender: mpsc::Sender<CartRequest>) -> Self {
        Self { sender }
    }

    pub async fn shutdown(&self) -> Result<(), CartError> {
        self.sender
            .send(CartRequest::Shutdown)
            .await
            .map_err(|_| CartError::ActorCommunicationError("Actor closed".to_string()))
    }
}

client_method!(CartClient => fn add_item(item_id: String, selection: Selection, quantity: u32) -> CartLine as CartRequest::AddItem, Error = CartError);
client_method!(CartClient => fn add_line(item: MenuItem, selection: Selection) -> CartLine as CartRequest::AddLine, Error = CartError);
client_method!(CartClient => fn update_quantity(line_id: String, quantity: i64) -> () as CartRequest::UpdateQuantity, Error = CartError);
client_method!(CartClient => fn remove_line(line_id: String) -> bool as CartRequest::RemoveLine, Error = CartError);
client_method!(CartClient => fn clear() -> () as CartRequest::Clear, Error = CartError);
client_method!(CartClient => fn snapshot() -> CartSnapshot as CartRequest::Snapshot, Error = CartError);
client_method!(CartClient => fn settle(lines: Vec<CartLine>) -> () as CartRequest::Settle, Error = CartError);
