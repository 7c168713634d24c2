//! Stock count reconciliation (盘点差异)
//!
//! Pure functions over audit entries and reference quantities. Callers pass
//! only the entries that should count; the service passes active ones.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use rust_decimal::Decimal;
use shared::models::{AuditLogEntry, AuditProgress, AuditStatus, VarianceOrder, VarianceRow};

/// Physical counts summed per exact item name
///
/// Sums clamp at the `Decimal` range instead of overflowing.
pub fn physical_totals(entries: &[AuditLogEntry]) -> BTreeMap<&str, Decimal> {
    let mut totals: BTreeMap<&str, Decimal> = BTreeMap::new();
    for entry in entries {
        let total = totals.entry(entry.item_name.as_str()).or_default();
        *total = total.saturating_add(entry.quantity_found);
    }
    totals
}

/// One row per item named by either the entries or the reference
///
/// Missing sides count as 0, so an uncounted item shows `-reference` and a
/// counted item the books do not know shows `+physical`.
pub fn compute_variance(
    entries: &[AuditLogEntry],
    reference: &HashMap<String, Decimal>,
    order: VarianceOrder,
) -> Vec<VarianceRow> {
    let physical = physical_totals(entries);

    let names: BTreeSet<&str> = physical
        .keys()
        .copied()
        .chain(reference.keys().map(String::as_str))
        .collect();

    let mut rows: Vec<VarianceRow> = names
        .into_iter()
        .map(|name| {
            let reference = reference.get(name).copied().unwrap_or(Decimal::ZERO);
            let physical = physical.get(name).copied().unwrap_or(Decimal::ZERO);
            VarianceRow {
                item_name: name.to_string(),
                reference,
                physical,
                variance: physical.saturating_sub(reference),
            }
        })
        .collect();

    // Rows come out of the BTreeSet in name order; the sorts below are stable
    match order {
        VarianceOrder::ItemName => {}
        VarianceOrder::ReferenceDesc => rows.sort_by(|a, b| b.reference.cmp(&a.reference)),
        VarianceOrder::VarianceAsc => rows.sort_by(|a, b| a.variance.cmp(&b.variance)),
    }
    rows
}

/// Which known items have been counted at least once
///
/// A single entry of any quantity, zero included, marks an item audited.
/// Entries for names outside `known_items` do not count towards progress.
pub fn audit_progress(entries: &[AuditLogEntry], known_items: &BTreeSet<String>) -> AuditProgress {
    let counted: BTreeSet<&str> = entries.iter().map(|e| e.item_name.as_str()).collect();

    let (audited, remaining): (Vec<String>, Vec<String>) = known_items
        .iter()
        .cloned()
        .partition(|name| counted.contains(name.as_str()));

    AuditProgress {
        total_items: known_items.len(),
        audited,
        remaining,
    }
}

/// Close every active entry; closed entries pass through unchanged
pub fn archive(entries: &[AuditLogEntry]) -> Vec<AuditLogEntry> {
    entries
        .iter()
        .cloned()
        .map(|mut entry| {
            entry.status = AuditStatus::Closed;
            entry
        })
        .collect()
}
