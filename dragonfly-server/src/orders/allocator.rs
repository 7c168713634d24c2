//! Daily order-ID allocation
//!
//! IDs look like `12.05.24..#3`: the issue date in the business timezone
//! followed by a per-day sequence number starting at 1.
//!
//! # Concurrency
//!
//! Allocation only reads. Two callers that read the same set of existing
//! orders get the same ID; the caller must append before anyone else reads.
//! [`super::OrderService`] serializes allocate+append inside one process.

use chrono::{DateTime, TimeZone};
use shared::models::{OrderId, OrderRecord};

/// Next order ID for the day of `issue_moment`
///
/// `N = max(existing suffixes) + 1`. If any matching ID carries a suffix
/// that is not an integer, or the largest suffix has no successor,
/// `N = count(matching) + 1` instead, which can repeat an existing ID.
pub fn allocate<Tz: TimeZone>(existing: &[OrderRecord], issue_moment: &DateTime<Tz>) -> OrderId {
    let prefix = OrderId::prefix_for(issue_moment.date_naive());
    let sequence = next_sequence(&prefix, existing.iter().map(|o| o.id.as_str()));
    OrderId::from_parts(&prefix, sequence)
}

/// Sequence number following the IDs in `ids` that start with `prefix`
pub fn next_sequence<'a>(prefix: &str, ids: impl IntoIterator<Item = &'a str>) -> u64 {
    let suffixes: Vec<&str> = ids
        .into_iter()
        .filter_map(|id| id.strip_prefix(prefix))
        .collect();

    if suffixes.is_empty() {
        return 1;
    }

    let parsed: Result<Vec<u64>, _> = suffixes.iter().map(|s| s.parse::<u64>()).collect();
    let next = match parsed {
        Ok(numbers) => match numbers.into_iter().max().unwrap_or(0).checked_add(1) {
            Some(next) => Ok(next),
            None => Err("suffix at u64::MAX".to_string()),
        },
        Err(e) => Err(e.to_string()),
    };

    next.unwrap_or_else(|reason| {
        tracing::warn!(
            prefix = %prefix,
            matching = suffixes.len(),
            reason = %reason,
            "Unusable order ID suffix, numbering by count"
        );
        suffixes.len() as u64 + 1
    })
}
