//! Inventory snapshot (库存快照)
//!
//! One parsed copy of the published inventory sheet. Item rows are kept as
//! published; quantity lookups sum rows that share an item name.

use std::collections::{BTreeSet, HashMap};

use dragonfly_sheet::Row;
use rust_decimal::Decimal;
use shared::models::InventoryItem;
use shared::util::parse_decimal_lenient;

pub const COL_ITEM_NAME: &str = "Item Name";
pub const COL_GROUP: &str = "Group";
pub const COL_VALUE: &str = "Value (₹)";
pub const COL_QUANTITY: &str = "Quantity";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventorySnapshot {
    items: Vec<InventoryItem>,
    quantities: HashMap<String, Decimal>,
}

impl InventorySnapshot {
    pub fn from_items(items: Vec<InventoryItem>) -> Self {
        let mut quantities: HashMap<String, Decimal> = HashMap::new();
        for item in items.iter().filter(|i| !i.item_name.is_empty()) {
            let total = quantities.entry(item.item_name.clone()).or_default();
            *total = total.saturating_add(item.quantity);
        }
        Self { items, quantities }
    }

    /// Build from published sheet rows
    ///
    /// Every row is kept as an item, so views count and list rows with a
    /// blank item name too. Those rows stay out of the quantity lookup.
    /// Non-numeric value and quantity cells read as 0.
    pub fn from_rows(rows: &[Row]) -> Self {
        let items = rows
            .iter()
            .map(|row| InventoryItem {
                item_name: row.get(COL_ITEM_NAME).trim().to_string(),
                group: row.get(COL_GROUP).trim().to_string(),
                value: parse_decimal_lenient(row.get(COL_VALUE)),
                quantity: parse_decimal_lenient(row.get(COL_QUANTITY)),
            })
            .collect();
        Self::from_items(items)
    }

    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Quantity the books report for `item_name`, 0 if unknown
    ///
    /// Rows sharing a name are summed, clamped at the `Decimal` range.
    pub fn current_quantity(&self, item_name: &str) -> Decimal {
        self.quantities
            .get(item_name)
            .copied()
            .unwrap_or(Decimal::ZERO)
    }

    /// Reference quantity per item name
    pub fn reference_quantities(&self) -> &HashMap<String, Decimal> {
        &self.quantities
    }

    /// Distinct item names, sorted
    pub fn item_names(&self) -> BTreeSet<String> {
        self.quantities.keys().cloned().collect()
    }
}
