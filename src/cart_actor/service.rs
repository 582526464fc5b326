use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

use super::CartError;
use crate::catalog::Catalog;
use crate::clients::CartClient;
use crate::domain::{Cart, CartLine, CartSnapshot, MenuItem, Selection, MAX_LINE_QUANTITY};
use crate::messages::{CartRequest, ServiceResponse};

/// Reject a selection that leaves any required group empty.
pub fn validate_required(item: &MenuItem, selection: &Selection) -> Result<(), CartError> {
    let missing = item.missing_required(selection);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(CartError::MissingRequiredOptions(
            missing.into_iter().map(|group| group.name.clone()).collect(),
        ))
    }
}

/// Cart ledger actor. Handlers are synchronous: every request completes
/// before the next one is read.
pub struct CartService {
    receiver: mpsc::Receiver<CartRequest>,
    cart: Cart,
    catalog: Arc<Catalog>,
}

impl CartService {
    pub fn new(buffer_size: usize, catalog: Arc<Catalog>) -> (Self, CartClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self {
            receiver,
            cart: Cart::new(),
            catalog,
        };
        let client = CartClient::new(sender);
        (service, client)
    }

    #[instrument(name = "cart_service", skip(self))]
    pub async fn run(mut self) {
        info!("CartService starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                CartRequest::AddItem {
                    item_id,
                    selection,
                    quantity,
                    respond_to,
                } => {
                    self.handle_add_item(item_id, selection, quantity, respond_to);
                }
                CartRequest::AddLine {
                    item,
                    selection,
                    respond_to,
                } => {
                    self.handle_add_line(item, selection, respond_to);
                }
                CartRequest::UpdateQuantity {
                    line_id,
                    quantity,
                    respond_to,
                } => {
                    self.handle_update_quantity(line_id, quantity, respond_to);
                }
                CartRequest::RemoveLine { line_id, respond_to } => {
                    self.handle_remove_line(line_id, respond_to);
                }
                CartRequest::Clear { respond_to } => {
                    self.cart.clear();
                    debug!("Cart cleared");
                    let _ = respond_to.send(Ok(()));
                }
                CartRequest::Settle { lines, respond_to } => {
                    self.handle_settle(lines, respond_to);
                }
                CartRequest::Snapshot { respond_to } => {
                    self.handle_snapshot(respond_to);
                }
                CartRequest::Shutdown => {
                    info!("CartService shutting down");
                    break;
                }
            }
        }

        info!("CartService stopped");
    }

    #[instrument(skip(self, selection, respond_to))]
    fn handle_add_item(
        &mut self,
        item_id: String,
        selection: Selection,
        quantity: u32,
        respond_to: ServiceResponse<CartLine, CartError>,
    ) {
        debug!("Processing add_item request");

        let result = self.add_item(&item_id, selection, quantity);
        match &result {
            Ok(line) => info!(
                line_id = %line.id,
                line_quantity = line.quantity,
                unit_price = %line.unit_price,
                "Item added to cart"
            ),
            Err(e) => warn!(error = %e, "Add to cart rejected"),
        }
        let _ = respond_to.send(result);
    }

    fn add_item(
        &mut self,
        item_id: &str,
        selection: Selection,
        quantity: u32,
    ) -> Result<CartLine, CartError> {
        if quantity == 0 || quantity > MAX_LINE_QUANTITY {
            return Err(CartError::InvalidQuantity(quantity));
        }
        let item = self
            .catalog
            .menu_item(item_id)
            .cloned()
            .ok_or_else(|| CartError::UnknownMenuItem(item_id.to_string()))?;
        validate_required(&item, &selection)?;

        Ok(self.cart.add_units(&item, selection, quantity).clone())
    }

    #[instrument(fields(item_id = %item.id), skip(self, item, selection, respond_to))]
    fn handle_add_line(
        &mut self,
        item: MenuItem,
        selection: Selection,
        respond_to: ServiceResponse<CartLine, CartError>,
    ) {
        debug!("Processing add_line request");
        let line = self.cart.add_line(&item, selection).clone();
        debug!(line_id = %line.id, line_quantity = line.quantity, "Line added");
        let _ = respond_to.send(Ok(line));
    }

    #[instrument(skip(self, respond_to))]
    fn handle_update_quantity(
        &mut self,
        line_id: String,
        quantity: i64,
        respond_to: ServiceResponse<(), CartError>,
    ) {
        debug!("Processing update_quantity request");
        if !self.cart.update_quantity(&line_id, quantity) {
            debug!("No such cart line");
        }
        let _ = respond_to.send(Ok(()));
    }

    #[instrument(skip(self, respond_to))]
    fn handle_remove_line(&mut self, line_id: String, respond_to: ServiceResponse<bool, CartError>) {
        debug!("Processing remove_line request");
        let removed = self.cart.remove_line(&line_id);
        let _ = respond_to.send(Ok(removed));
    }

    #[instrument(skip(self, lines, respond_to), fields(line_count = lines.len()))]
    fn handle_settle(&mut self, lines: Vec<CartLine>, respond_to: ServiceResponse<(), CartError>) {
        self.cart.settle(&lines);
        debug!(remaining = self.cart.lines().len(), "Ordered lines settled");
        let _ = respond_to.send(Ok(()));
    }

    fn handle_snapshot(&self, respond_to: ServiceResponse<CartSnapshot, CartError>) {
        let snapshot = self.cart.snapshot();
        debug!(
            lines = snapshot.lines.len(),
            item_count = snapshot.item_count,
            total = %snapshot.total,
            "Cart snapshot"
        );
        let _ = respond_to.send(Ok(snapshot));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn start() -> CartClient {
        let (service, client) = CartService::new(10, Arc::new(Catalog::standard()));
        tokio::spawn(service.run());
        client
    }

    #[tokio::test]
    async fn test_add_item_merges_and_totals() -> Result<(), Box<dyn std::error::Error>> {
        let cart = start();
        let selection = Selection::new()
            .choose("burger-patty", "triple")
            .toggle("burger-toppings", "extra-cheese")
            .toggle("burger-toppings", "extra-bacon");

        let line = cart.add_item("burger-1".into(), selection.clone(), 1).await?;
        assert_eq!(line.quantity, 1);
        let line = cart.add_item("burger-1".into(), selection, 1).await?;
        assert_eq!(line.quantity, 2);

        let snapshot = cart.snapshot().await?;
        assert_eq!(snapshot.lines.len(), 1);
        assert_eq!(snapshot.item_count, 2);
        assert_eq!(snapshot.total, Decimal::new(4298, 2));

        cart.shutdown().await?;
        Ok(())
    }

    #[tokio::test]
    async fn test_add_item_quantity_stepper() -> Result<(), Box<dyn std::error::Error>> {
        let cart = start();
        let line = cart.add_item("soda-1".into(), Selection::new(), 3).await?;
        assert_eq!(line.quantity, 3);
        assert_eq!(cart.snapshot().await?.lines.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_add_item_rejections() {
        let cart = start();

        assert_eq!(
            cart.add_item("burger-1".into(), Selection::new(), 1).await,
            Err(CartError::MissingRequiredOptions(vec!["Patty Options".to_string()]))
        );
        assert_eq!(
            cart.add_item("wings-1".into(), Selection::new().choose("wings-quantity", "6pc"), 1)
                .await,
            Err(CartError::MissingRequiredOptions(vec!["Sauce".to_string()]))
        );
        assert_eq!(
            cart.add_item("tacos-1".into(), Selection::new(), 1).await,
            Err(CartError::UnknownMenuItem("tacos-1".to_string()))
        );
        assert_eq!(
            cart.add_item("soda-1".into(), Selection::new(), 0).await,
            Err(CartError::InvalidQuantity(0))
        );
        assert_eq!(
            cart.add_item("soda-1".into(), Selection::new(), MAX_LINE_QUANTITY + 1).await,
            Err(CartError::InvalidQuantity(MAX_LINE_QUANTITY + 1))
        );
        assert!(cart.snapshot().await.unwrap().lines.is_empty());
    }

    #[tokio::test]
    async fn test_update_remove_clear() -> Result<(), Box<dyn std::error::Error>> {
        let cart = start();
        let soda = cart.add_item("soda-1".into(), Selection::new(), 1).await?;
        let shake = cart
            .add_item("shake-1".into(), Selection::new().choose("shake-flavor", "oreo"), 1)
            .await?;

        cart.update_quantity(soda.id.clone(), 0).await?;
        let snapshot = cart.snapshot().await?;
        assert_eq!(snapshot.lines.len(), 1);
        assert_eq!(snapshot.total, Decimal::new(999, 2));

        assert!(cart.remove_line(shake.id.clone()).await?);
        assert!(!cart.remove_line(shake.id).await?);

        cart.add_item("soda-1".into(), Selection::new(), 2).await?;
        cart.clear().await?;
        assert_eq!(cart.snapshot().await?, CartSnapshot::default());
        Ok(())
    }

    #[tokio::test]
    async fn test_huge_quantities_keep_service_alive() -> Result<(), Box<dyn std::error::Error>> {
        let cart = start();
        let soda = cart.add_item("soda-1".into(), Selection::new(), MAX_LINE_QUANTITY).await?;
        cart.update_quantity(soda.id, i64::MAX).await?;
        cart.add_item("shake-1".into(), Selection::new().choose("shake-flavor", "vanilla"), 1)
            .await?;

        let snapshot = cart.snapshot().await?;
        assert_eq!(snapshot.item_count, MAX_LINE_QUANTITY + 1);
        assert_eq!(cart.snapshot().await?.lines.len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn test_add_line_skips_validation() -> Result<(), Box<dyn std::error::Error>> {
        let cart = start();
        let burger = Catalog::standard().menu_item("burger-1").cloned().unwrap();
        let line = cart.add_line(burger, Selection::new()).await?;
        assert_eq!(line.unit_price, Decimal::new(1499, 2));
        Ok(())
    }
}
