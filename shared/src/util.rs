use chrono::{DateTime, TimeZone};
use rust_decimal::Decimal;
use std::fmt::Display;
use std::str::FromStr;

/// Record timestamp format, e.g. `12-05-2024 03:07 PM`
pub const RECORD_TIMESTAMP_FORMAT: &str = "%d-%m-%Y %I:%M %p";

/// Format a moment the way worksheet rows store it
pub fn format_record_timestamp<Tz>(moment: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    moment.format(RECORD_TIMESTAMP_FORMAT).to_string()
}

/// Read a numeric cell. Blank, non-numeric or otherwise unreadable cells are 0.
///
/// Accepts plain decimals (`12`, `-3.5`) and scientific notation (`1e3`).
pub fn parse_decimal_lenient(cell: &str) -> Decimal {
    let cell = cell.trim();
    if cell.is_empty() {
        return Decimal::ZERO;
    }
    Decimal::from_str(cell)
        .or_else(|_| Decimal::from_scientific(cell))
        .unwrap_or(Decimal::ZERO)
}

/// Sum that clamps at `Decimal::MAX` / `Decimal::MIN` instead of panicking
pub fn saturating_sum(values: impl IntoIterator<Item = Decimal>) -> Decimal {
    values
        .into_iter()
        .fold(Decimal::ZERO, |acc, v| acc.saturating_add(v))
}

/// Treat a blank cell as absent
pub fn non_empty(cell: &str) -> Option<String> {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
