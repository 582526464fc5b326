use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::menu::{MenuItem, Selection};

/// Most units a single cart line can hold. Larger requests are clamped.
pub const MAX_LINE_QUANTITY: u32 = 999;

/// One row of the cart: a menu item, a customization selection and a quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub id: String,
    pub menu_item: MenuItem,
    pub quantity: u32,
    pub customizations: Selection,
    /// Unit price captured when the line was first added.
    #[serde(rename = "totalPrice")]
    pub unit_price: Decimal,
}

impl CartLine {
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }

    /// Same menu item and structurally identical selection.
    pub fn matches(&self, item_id: &str, selection: &Selection) -> bool {
        self.menu_item.id == item_id && self.customizations == *selection
    }

    /// Names of the selected options in catalog order, comma separated.
    pub fn describe_customizations(&self) -> String {
        let names: Vec<&str> = self
            .menu_item
            .selected_options(&self.customizations)
            .map(|option| option.name.as_str())
            .collect();
        if names.is_empty() {
            "No customizations".to_string()
        } else {
            names.join(", ")
        }
    }
}

/// Point-in-time copy of the cart handed to callers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartSnapshot {
    pub lines: Vec<CartLine>,
    pub total: Decimal,
    pub item_count: u32,
}

/// The cart ledger. Lines keep insertion order.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line(&self, line_id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.id == line_id)
    }

    /// Add one unit of `item` with `selection`.
    ///
    /// Merges into an existing line when one matches, otherwise appends a new
    /// line priced at base price plus selected deltas.
    pub fn add_line(&mut self, item: &MenuItem, selection: Selection) -> &CartLine {
        self.add_units(item, selection, 1)
    }

    /// Same as calling [`Cart::add_line`] `units` times. The line never
    /// exceeds [`MAX_LINE_QUANTITY`].
    pub fn add_units(&mut self, item: &MenuItem, selection: Selection, units: u32) -> &CartLine {
        let index = match self
            .lines
            .iter()
            .position(|line| line.matches(&item.id, &selection))
        {
            Some(index) => {
                let line = &mut self.lines[index];
                line.quantity = line.quantity.saturating_add(units).min(MAX_LINE_QUANTITY);
                index
            }
            None => {
                let id = self.next_line_id(&item.id);
                let unit_price = item.unit_price(&selection);
                self.lines.push(CartLine {
                    id,
                    menu_item: item.clone(),
                    quantity: units.clamp(1, MAX_LINE_QUANTITY),
                    customizations: selection,
                    unit_price,
                });
                self.lines.len() - 1
            }
        };
        &self.lines[index]
    }

    /// Set a line's quantity. Zero or below removes the line.
    ///
    /// Returns false when no line has `line_id`.
    pub fn update_quantity(&mut self, line_id: &str, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove_line(line_id);
        }
        let quantity = u32::try_from(quantity)
            .unwrap_or(u32::MAX)
            .min(MAX_LINE_QUANTITY);
        match self.lines.iter_mut().find(|line| line.id == line_id) {
            Some(line) => {
                line.quantity = quantity;
                true
            }
            None => false,
        }
    }

    pub fn remove_line(&mut self, line_id: &str) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| line.id != line_id);
        self.lines.len() != before
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Take ordered units out of the cart.
    ///
    /// Each ordered line loses the quantity that was ordered and is removed
    /// once nothing is left. Lines added after `ordered` was read stay put.
    pub fn settle(&mut self, ordered: &[CartLine]) {
        for taken in ordered {
            if let Some(line) = self.lines.iter_mut().find(|line| line.id == taken.id) {
                line.quantity = line.quantity.saturating_sub(taken.quantity);
            }
        }
        self.lines.retain(|line| line.quantity > 0);
    }

    pub fn total(&self) -> Decimal {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    pub fn item_count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0u32, |count, line| count.saturating_add(line.quantity))
    }

    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            lines: self.lines.clone(),
            total: self.total(),
            item_count: self.item_count(),
        }
    }

    fn next_line_id(&self, item_id: &str) -> String {
        let base = format!("{}-{}", item_id, Utc::now().timestamp_millis());
        if self.line(&base).is_none() {
            return base;
        }
        (1..)
            .map(|n| format!("{}-{}", base, n))
            .find(|candidate| self.line(candidate).is_none())
            .unwrap_or(base)
    }
}
