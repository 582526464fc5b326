use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Menu section an item is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuCategory {
    Burger,
    Pizza,
    Wings,
    Ice,
    Shake,
    Soda,
}

impl MenuCategory {
    pub const ALL: [MenuCategory; 6] = [
        MenuCategory::Burger,
        MenuCategory::Pizza,
        MenuCategory::Wings,
        MenuCategory::Ice,
        MenuCategory::Shake,
        MenuCategory::Soda,
    ];
}

/// How many options of a group may be picked at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionMode {
    /// Exactly one option; picking another replaces it.
    #[serde(rename = "radio", alias = "select")]
    Single,
    /// Any number of options, each toggled independently.
    #[serde(rename = "checkbox")]
    Multiple,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomizationOption {
    pub id: String,
    pub name: String,
    /// Added to the item's base price. Negative for downgrades.
    pub price: Decimal,
}

impl CustomizationOption {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomizationGroup {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub mode: SelectionMode,
    #[serde(default)]
    pub required: bool,
    pub options: Vec<CustomizationOption>,
}

impl CustomizationGroup {
    pub fn option(&self, option_id: &str) -> Option<&CustomizationOption> {
        self.options.iter().find(|o| o.id == option_id)
    }
}

/// Static catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub image: String,
    pub category: MenuCategory,
    #[serde(default)]
    pub is_popular: bool,
    #[serde(default)]
    pub is_spicy: bool,
    #[serde(default)]
    pub customizations: Vec<CustomizationGroup>,
}

impl MenuItem {
    pub fn group(&self, group_id: &str) -> Option<&CustomizationGroup> {
        self.customizations.iter().find(|g| g.id == group_id)
    }

    /// Base price plus the delta of every selected option.
    ///
    /// Group or option ids that are not part of this item contribute nothing.
    pub fn unit_price(&self, selection: &Selection) -> Decimal {
        self.selected_options(selection)
            .map(|option| option.price)
            .fold(self.price, |total, delta| total + delta)
    }

    /// Options picked in `selection`, in catalog group order.
    pub fn selected_options<'a>(
        &'a self,
        selection: &'a Selection,
    ) -> impl Iterator<Item = &'a CustomizationOption> + 'a {
        self.customizations.iter().flat_map(move |group| {
            selection
                .selected(&group.id)
                .iter()
                .filter_map(move |option_id| group.option(option_id))
        })
    }

    /// Required groups with nothing selected.
    pub fn missing_required<'a>(&'a self, selection: &Selection) -> Vec<&'a CustomizationGroup> {
        self.customizations
            .iter()
            .filter(|group| group.required && selection.selected(&group.id).is_empty())
            .collect()
    }
}

/// Chosen customizations: group id to the option ids picked in that group.
///
/// Two selections are the same when they hold the same groups with the same
/// option ids in the same order. Groups never map to an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection(BTreeMap<String, Vec<String>>);

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Selection::set_choice`].
    pub fn choose(mut self, group_id: impl Into<String>, option_id: impl Into<String>) -> Self {
        self.set_choice(group_id, option_id);
        self
    }

    /// Builder form of [`Selection::toggle_choice`].
    pub fn toggle(mut self, group_id: impl Into<String>, option_id: impl Into<String>) -> Self {
        self.toggle_choice(group_id, option_id);
        self
    }

    /// Single-choice pick: replaces whatever the group held.
    pub fn set_choice(&mut self, group_id: impl Into<String>, option_id: impl Into<String>) {
        self.0.insert(group_id.into(), vec![option_id.into()]);
    }

    /// Multi-choice pick: adds the option if absent, removes it if present.
    pub fn toggle_choice(&mut self, group_id: impl Into<String>, option_id: impl Into<String>) {
        let group_id = group_id.into();
        let option_id = option_id.into();
        let options = self.0.entry(group_id.clone()).or_default();
        match options.iter().position(|id| *id == option_id) {
            Some(index) => {
                options.remove(index);
                if options.is_empty() {
                    self.0.remove(&group_id);
                }
            }
            None => options.push(option_id),
        }
    }

    /// Apply a pick the way the group's mode dictates.
    pub fn pick(&mut self, group: &CustomizationGroup, option_id: impl Into<String>) {
        match group.mode {
            SelectionMode::Single => self.set_choice(group.id.clone(), option_id),
            SelectionMode::Multiple => self.toggle_choice(group.id.clone(), option_id),
        }
    }

    pub fn selected(&self, group_id: &str) -> &[String] {
        self.0.get(group_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn burger() -> MenuItem {
        Catalog::standard().menu_item("burger-1").cloned().unwrap()
    }

    #[test]
    fn test_unit_price_sums_deltas() {
        let item = burger();
        let selection = Selection::new()
            .choose("burger-patty", "triple")
            .toggle("burger-toppings", "extra-cheese")
            .toggle("burger-toppings", "extra-bacon");

        // 14.99 + 3.00 + 1.50 + 2.00
        assert_eq!(item.unit_price(&selection), Decimal::new(2149, 2));
    }

    #[test]
    fn test_negative_delta_and_unknown_ids() {
        let item = burger();
        let selection = Selection::new()
            .choose("burger-patty", "single")
            .toggle("burger-toppings", "no-such-topping")
            .toggle("no-such-group", "lettuce");

        assert_eq!(item.unit_price(&selection), Decimal::new(1199, 2));
    }

    #[test]
    fn test_toggle_removes_and_drops_empty_group() {
        let selection = Selection::new()
            .toggle("burger-sauce", "bbq")
            .toggle("burger-sauce", "ranch")
            .toggle("burger-sauce", "bbq");
        assert_eq!(selection.selected("burger-sauce"), ["ranch".to_string()]);

        let cleared = selection.toggle("burger-sauce", "ranch");
        assert!(cleared.is_empty());
        assert_eq!(cleared, Selection::new());
    }

    #[test]
    fn test_pick_follows_group_mode() {
        let item = burger();
        let patty = item.group("burger-patty").unwrap();
        let toppings = item.group("burger-toppings").unwrap();

        let mut selection = Selection::new();
        selection.pick(patty, "single");
        selection.pick(patty, "triple");
        selection.pick(toppings, "onion");
        selection.pick(toppings, "pickles");

        assert_eq!(selection.selected("burger-patty"), ["triple".to_string()]);
        assert_eq!(selection.selected("burger-toppings").len(), 2);
    }

    #[test]
    fn test_missing_required() {
        let item = burger();
        let missing = item.missing_required(&Selection::new());
        assert_eq!(missing.len(), 1);
        assert_eq!(missing[0].id, "burger-patty");

        let selection = Selection::new().choose("burger-patty", "regular");
        assert!(item.missing_required(&selection).is_empty());
    }

    #[test]
    fn test_select_mode_reads_as_single() {
        let group: CustomizationGroup = serde_json::from_str(
            r#"{"id":"size","name":"Size","type":"select","options":[{"id":"s","name":"Small","price":0}]}"#,
        )
        .unwrap();
        assert_eq!(group.mode, SelectionMode::Single);
        assert!(!group.required);
    }
}
