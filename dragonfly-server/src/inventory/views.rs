//! Dashboard views over a snapshot

use std::collections::{BTreeMap, HashSet};

use rust_decimal::Decimal;
use shared::models::{ALL_GROUPS, GroupTotal, InventoryItem, InventoryListing, InventorySummary};
use shared::util::saturating_sum;

use super::snapshot::InventorySnapshot;

/// Totals per group, sorted by group name
pub fn group_totals(snapshot: &InventorySnapshot) -> Vec<GroupTotal> {
    let mut totals: BTreeMap<&str, (Decimal, usize)> = BTreeMap::new();
    for item in snapshot.items() {
        let entry = totals.entry(item.group.as_str()).or_default();
        entry.0 = entry.0.saturating_add(item.value);
        entry.1 += 1;
    }
    totals
        .into_iter()
        .map(|(group, (value, items))| GroupTotal {
            group: group.to_string(),
            value,
            items,
        })
        .collect()
}

/// Headline numbers
///
/// The top group is the one holding the most value; ties go to the group
/// name that sorts first.
pub fn summary(snapshot: &InventorySnapshot) -> InventorySummary {
    let groups = group_totals(snapshot);

    let mut top: Option<&GroupTotal> = None;
    for g in &groups {
        if top.is_none_or(|t| g.value > t.value) {
            top = Some(g);
        }
    }

    InventorySummary {
        total_value: saturating_sum(snapshot.items().iter().map(|i| i.value)),
        top_group: top.map(|g| g.group.clone()),
        unique_items: snapshot.items().len(),
        groups,
    }
}

/// Items of one group (or all), group ascending then value descending
pub fn listing(snapshot: &InventorySnapshot, group: Option<&str>) -> InventoryListing {
    let group = group.map(str::trim).filter(|g| !g.is_empty() && *g != ALL_GROUPS);

    let mut items: Vec<InventoryItem> = snapshot
        .items()
        .iter()
        .filter(|i| group.is_none_or(|g| i.group == g))
        .cloned()
        .collect();
    items.sort_by(|a, b| a.group.cmp(&b.group).then_with(|| b.value.cmp(&a.value)));

    InventoryListing {
        items,
        max_value: snapshot
            .items()
            .iter()
            .map(|i| i.value)
            .max()
            .unwrap_or(Decimal::ZERO),
    }
}

/// Distinct groups in the order they first appear
pub fn groups(snapshot: &InventorySnapshot) -> Vec<String> {
    let mut seen = HashSet::new();
    snapshot
        .items()
        .iter()
        .filter(|i| seen.insert(i.group.as_str()))
        .map(|i| i.group.clone())
        .collect()
}
