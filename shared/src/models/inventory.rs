//! Inventory Model (库存)

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Group filter value meaning "no filter"
pub const ALL_GROUPS: &str = "All Groups";

/// One row of the published inventory sheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub item_name: String,
    pub group: String,
    /// Stock value in rupees
    pub value: Decimal,
    /// Quantity the books report, used as the audit reference
    pub quantity: Decimal,
}

/// Value held by one stock group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupTotal {
    pub group: String,
    pub value: Decimal,
    pub items: usize,
}

/// Headline numbers of the inventory dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventorySummary {
    pub total_value: Decimal,
    pub top_group: Option<String>,
    pub unique_items: usize,
    pub groups: Vec<GroupTotal>,
}

/// Filtered, sorted inventory rows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryListing {
    pub items: Vec<InventoryItem>,
    /// Largest value over the whole snapshot, not just the filtered rows
    pub max_value: Decimal,
}
