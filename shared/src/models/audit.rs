//! Stock audit models (盘点)
//!
//! Physical counts are appended to the `Audit_Log` worksheet one batch per
//! row. Rows for the same item are summed at query time, never merged.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Audit entry status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AuditStatus {
    #[default]
    Active,
    Closed,
}

impl AuditStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditStatus::Active => "Active",
            AuditStatus::Closed => "Closed",
        }
    }

    /// Read a status cell. Anything other than `Closed` counts as active.
    pub fn from_cell(cell: &str) -> Self {
        if cell.trim().eq_ignore_ascii_case("closed") {
            AuditStatus::Closed
        } else {
            AuditStatus::Active
        }
    }
}

impl fmt::Display for AuditStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One physical count of one batch of an item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditLogEntry {
    pub timestamp: String,
    pub item_name: String,
    /// Location or batch label
    pub location: Option<String>,
    pub quantity_found: Decimal,
    pub recorded_by: String,
    pub status: AuditStatus,
}

impl AuditLogEntry {
    pub fn is_active(&self) -> bool {
        self.status == AuditStatus::Active
    }
}

/// Record audit entry payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntryCreate {
    pub item_name: String,
    #[serde(default)]
    pub location: Option<String>,
    pub quantity_found: Decimal,
}

/// Physical vs. system quantity for one item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VarianceRow {
    pub item_name: String,
    /// Quantity reported by the inventory snapshot
    pub reference: Decimal,
    /// Sum of active audit counts
    pub physical: Decimal,
    /// `physical - reference`
    pub variance: Decimal,
}

/// Row order of a variance report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VarianceOrder {
    /// Item name ascending
    #[default]
    #[serde(rename = "name")]
    ItemName,
    /// Reference quantity descending, ties by item name
    ReferenceDesc,
    /// Variance ascending (largest shortfall first), ties by item name
    VarianceAsc,
}

/// How far the current count has got
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditProgress {
    pub total_items: usize,
    pub audited: Vec<String>,
    pub remaining: Vec<String>,
}

/// Result of closing the active audit entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchiveOutcome {
    /// Entries switched from Active to Closed by this call
    pub closed: usize,
    /// Entries that were Closed already
    pub already_closed: usize,
}
