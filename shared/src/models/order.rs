//! Order Model (订单)
//!
//! Orders live as rows of the `Orders` worksheet. The identifier grammar is
//! `{DD.MM.YY}..#{N}`: the issue date in the business timezone, then a
//! 1-based per-day sequence number.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator between the date part and the sequence part of an order ID
pub const ORDER_ID_SEPARATOR: &str = "..#";

/// Date format of the order ID prefix
pub const ORDER_DATE_FORMAT: &str = "%d.%m.%y";

/// Order status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum OrderStatus {
    #[default]
    Pending,
    Completed,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Completed => "Completed",
        }
    }

    /// Read a status cell. Anything other than `Completed` counts as pending.
    pub fn from_cell(cell: &str) -> Self {
        if cell.trim().eq_ignore_ascii_case("completed") {
            OrderStatus::Completed
        } else {
            OrderStatus::Pending
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order identifier, e.g. `12.05.24..#3`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    /// Prefix shared by every order issued on `date`
    pub fn prefix_for(date: NaiveDate) -> String {
        format!("{}{}", date.format(ORDER_DATE_FORMAT), ORDER_ID_SEPARATOR)
    }

    pub fn from_parts(prefix: &str, sequence: u64) -> Self {
        Self(format!("{}{}", prefix, sequence))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Sequence number after the separator, if it is a well-formed integer
    pub fn sequence(&self) -> Option<u64> {
        self.0
            .split_once(ORDER_ID_SEPARATOR)
            .and_then(|(_, seq)| seq.parse().ok())
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for OrderId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for OrderId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl AsRef<str> for OrderId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Order record as stored in the `Orders` worksheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub id: OrderId,
    /// `DD-MM-YYYY hh:mm AM/PM` in the business timezone
    pub created_at: String,
    pub customer: String,
    /// Free-text item/quantity description
    pub items: String,
    pub status: OrderStatus,
    pub completed_by: Option<String>,
    pub notes: Option<String>,
}

impl OrderRecord {
    pub fn is_pending(&self) -> bool {
        self.status == OrderStatus::Pending
    }
}

/// Create order payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    pub customer: String,
    pub items: String,
    #[serde(default)]
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_format() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 12).unwrap();
        assert_eq!(OrderId::prefix_for(date), "12.05.24..#");
        assert_eq!(
            OrderId::from_parts(&OrderId::prefix_for(date), 3).as_str(),
            "12.05.24..#3"
        );
    }

    #[test]
    fn test_sequence_parse() {
        assert_eq!(OrderId::from("12.05.24..#17").sequence(), Some(17));
        assert_eq!(OrderId::from("12.05.24..#A").sequence(), None);
        assert_eq!(OrderId::from("legacy-42").sequence(), None);
    }

    #[test]
    fn test_status_from_cell() {
        assert_eq!(OrderStatus::from_cell("Completed"), OrderStatus::Completed);
        assert_eq!(OrderStatus::from_cell(" completed "), OrderStatus::Completed);
        assert_eq!(OrderStatus::from_cell("Pending"), OrderStatus::Pending);
        assert_eq!(OrderStatus::from_cell(""), OrderStatus::Pending);
    }

    #[test]
    fn test_order_id_serializes_as_plain_string() {
        let id = OrderId::from("01.02.25..#1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"01.02.25..#1\"");
    }
}
