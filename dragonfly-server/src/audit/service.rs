//! Audit workflow over the `Audit_Log` worksheet

use std::sync::Arc;

use chrono_tz::Tz;
use dragonfly_sheet::{Row, RowStore};
use rust_decimal::Decimal;
use shared::models::{
    ArchiveOutcome, AuditEntryCreate, AuditLogEntry, AuditProgress, AuditStatus, VarianceOrder,
    VarianceRow,
};
use shared::util::{non_empty, parse_decimal_lenient};

use super::variance::{self, audit_progress, compute_variance};
use crate::auth::Session;
use crate::inventory::InventoryCache;
use crate::utils::time::record_timestamp;
use crate::utils::{AppError, AppResult, ErrorCode};

/// Worksheet name
pub const AUDIT_SHEET: &str = "Audit_Log";

/// Header row of the `Audit_Log` worksheet
pub const AUDIT_HEADERS: &[&str] = &[
    "Timestamp",
    "Item Name",
    "Location",
    "Quantity Found",
    "Recorded By",
    "Status",
];

const COL_STATUS: usize = 5;

/// Read an audit row. Non-numeric quantities read as 0.
pub fn entry_from_row(row: &Row) -> AuditLogEntry {
    AuditLogEntry {
        timestamp: row.get("Timestamp").to_string(),
        item_name: row.get("Item Name").trim().to_string(),
        location: non_empty(row.get("Location")),
        quantity_found: parse_decimal_lenient(row.get("Quantity Found")),
        recorded_by: row.get("Recorded By").to_string(),
        status: AuditStatus::from_cell(row.get("Status")),
    }
}

fn entry_to_cells(entry: &AuditLogEntry) -> Vec<String> {
    vec![
        entry.timestamp.clone(),
        entry.item_name.clone(),
        entry.location.clone().unwrap_or_default(),
        entry.quantity_found.normalize().to_string(),
        entry.recorded_by.clone(),
        entry.status.as_str().to_string(),
    ]
}

/// 盘点服务
#[derive(Clone)]
pub struct AuditService {
    sheet: Arc<dyn RowStore>,
    inventory: InventoryCache,
    tz: Tz,
}

impl AuditService {
    pub fn new(sheet: Arc<dyn RowStore>, inventory: InventoryCache, tz: Tz) -> Self {
        Self {
            sheet,
            inventory,
            tz,
        }
    }

    /// Append one physical count
    pub fn record(&self, payload: AuditEntryCreate, session: &Session) -> AppResult<AuditLogEntry> {
        let item_name = payload.item_name.trim();
        if item_name.is_empty() {
            return Err(AppError::required("item_name"));
        }
        if payload.quantity_found < Decimal::ZERO {
            return Err(AppError::with_message(
                ErrorCode::ValueOutOfRange,
                "quantity_found must not be negative",
            )
            .with_detail("field", "quantity_found"));
        }

        let entry = AuditLogEntry {
            timestamp: record_timestamp(self.tz),
            item_name: item_name.to_string(),
            location: payload.location.as_deref().and_then(non_empty),
            quantity_found: payload.quantity_found,
            recorded_by: session.operator.clone(),
            status: AuditStatus::Active,
        };

        let locator = self.sheet.append_row(entry_to_cells(&entry))?;
        tracing::info!(
            item = %entry.item_name,
            quantity = %entry.quantity_found,
            row = %locator,
            operator = %session.operator,
            "Audit entry recorded"
        );
        Ok(entry)
    }

    /// Entries of the count in progress
    pub fn active_entries(&self) -> AppResult<Vec<AuditLogEntry>> {
        Ok(self
            .sheet
            .fetch_all_rows()?
            .iter()
            .map(entry_from_row)
            .filter(AuditLogEntry::is_active)
            .collect())
    }

    /// Physical vs. book quantity for every item
    pub async fn variance(&self, order: VarianceOrder) -> AppResult<Vec<VarianceRow>> {
        let snapshot = self.inventory.snapshot().await?;
        let entries = self.active_entries()?;
        Ok(compute_variance(
            &entries,
            snapshot.reference_quantities(),
            order,
        ))
    }

    /// Counted vs. remaining inventory items
    pub async fn progress(&self) -> AppResult<AuditProgress> {
        let snapshot = self.inventory.snapshot().await?;
        let entries = self.active_entries()?;
        Ok(audit_progress(&entries, &snapshot.item_names()))
    }

    /// Close every active entry, one row at a time
    ///
    /// [`variance::archive`] decides the target status of each row; only rows whose
    /// status changes are written. Not atomic. If a write fails after some
    /// rows were closed the error is `AuditArchiveIncomplete` carrying the
    /// counts; calling again closes the rest.
    pub fn archive(&self, session: &Session) -> AppResult<ArchiveOutcome> {
        let rows = self.sheet.fetch_all_rows()?;
        let entries: Vec<AuditLogEntry> = rows.iter().map(entry_from_row).collect();
        let archived = variance::archive(&entries);

        let pending: Vec<(&Row, AuditStatus)> = rows
            .iter()
            .zip(entries.iter().zip(&archived))
            .filter(|(_, (before, after))| before.status != after.status)
            .map(|(row, (_, after))| (row, after.status))
            .collect();
        let total = pending.len();
        let already_closed = rows.len() - total;

        for (done, (row, status)) in pending.iter().enumerate() {
            if let Err(e) = self.sheet.update_cell(row.locator, COL_STATUS, status.as_str()) {
                tracing::warn!(
                    closed = done,
                    remaining = total - done,
                    row = %row.locator,
                    error = %e,
                    "Audit archive stopped part way"
                );
                if done == 0 {
                    return Err(e.into());
                }
                return Err(AppError::with_message(
                    ErrorCode::AuditArchiveIncomplete,
                    format!("Closed {} of {} audit entries: {}", done, total, e),
                )
                .with_detail("closed", done)
                .with_detail("remaining", total - done));
            }
        }

        tracing::info!(
            closed = total,
            already_closed,
            operator = %session.operator,
            "Audit archived"
        );
        Ok(ArchiveOutcome {
            closed: total,
            already_closed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::{InventorySnapshot, MissingSource, StaticSource};
    use dragonfly_sheet::{RowLocator, SheetError, SheetResult, Workbook, Worksheet};
    use shared::models::InventoryItem;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    /// Worksheet whose updates start failing after `ok_updates` successes
    struct FlakyStore {
        inner: Worksheet,
        ok_updates: AtomicUsize,
    }

    impl RowStore for FlakyStore {
        fn name(&self) -> &str {
            self.inner.name()
        }
        fn headers(&self) -> &[String] {
            self.inner.headers()
        }
        fn append_row(&self, fields: Vec<String>) -> SheetResult<RowLocator> {
            self.inner.append_row(fields)
        }
        fn fetch_all_rows(&self) -> SheetResult<Vec<Row>> {
            self.inner.fetch_all_rows()
        }
        fn find_row(&self, match_value: &str) -> SheetResult<RowLocator> {
            self.inner.find_row(match_value)
        }
        fn update_cell(&self, locator: RowLocator, column: usize, value: &str) -> SheetResult<()> {
            let left = self.ok_updates.load(Ordering::SeqCst);
            if left == 0 {
                return Err(SheetError::Unavailable("quota exceeded".into()));
            }
            self.ok_updates.store(left - 1, Ordering::SeqCst);
            self.inner.update_cell(locator, column, value)
        }
    }

    fn worksheet() -> Worksheet {
        Workbook::open_in_memory()
            .unwrap()
            .worksheet(AUDIT_SHEET, AUDIT_HEADERS)
            .unwrap()
    }

    fn inventory() -> InventoryCache {
        let items = [("Box A", 100), ("Tape", 12), ("Glue", 4)]
            .iter()
            .map(|(name, qty)| InventoryItem {
                item_name: name.to_string(),
                group: "Misc".into(),
                value: Decimal::from(10),
                quantity: Decimal::from(*qty),
            })
            .collect();
        InventoryCache::new(
            Arc::new(StaticSource::new(InventorySnapshot::from_items(items))),
            Duration::from_secs(60),
        )
    }

    fn service_over(sheet: Arc<dyn RowStore>) -> AuditService {
        AuditService::new(sheet, inventory(), chrono_tz::Asia::Kolkata)
    }

    fn count(item: &str, qty: i64) -> AuditEntryCreate {
        AuditEntryCreate {
            item_name: item.into(),
            location: None,
            quantity_found: Decimal::from(qty),
        }
    }

    #[test]
    fn test_header_columns_line_up() {
        assert_eq!(AUDIT_HEADERS[COL_STATUS], "Status");
    }

    #[test]
    fn test_record_and_read_back() {
        let svc = service_over(Arc::new(worksheet()));
        let session = Session::new("Meera");

        let mut payload = count("Box A", 50);
        payload.location = Some("Rack 2".into());
        let recorded = svc.record(payload, &session).unwrap();
        assert_eq!(recorded.recorded_by, "Meera");

        let active = svc.active_entries().unwrap();
        assert_eq!(active, vec![recorded]);
        assert_eq!(active[0].location.as_deref(), Some("Rack 2"));
    }

    #[test]
    fn test_record_fractional_quantity() {
        let svc = service_over(Arc::new(worksheet()));
        let mut payload = count("Tape", 0);
        payload.quantity_found = Decimal::new(25, 1);
        svc.record(payload, &Session::new("Meera")).unwrap();

        assert_eq!(svc.active_entries().unwrap()[0].quantity_found, Decimal::new(25, 1));
    }

    #[test]
    fn test_record_validation() {
        let svc = service_over(Arc::new(worksheet()));
        let session = Session::new("Meera");

        let err = svc.record(count("  ", 1), &session).unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);

        let err = svc.record(count("Box A", -1), &session).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);

        // Zero is a valid count
        svc.record(count("Box A", 0), &session).unwrap();
    }

    #[tokio::test]
    async fn test_variance_and_progress() {
        let svc = service_over(Arc::new(worksheet()));
        let session = Session::new("Meera");
        svc.record(count("Box A", 50), &session).unwrap();
        svc.record(count("Box A", 30), &session).unwrap();
        svc.record(count("Tape", 0), &session).unwrap();

        let rows = svc.variance(VarianceOrder::ItemName).await.unwrap();
        let box_a = rows.iter().find(|r| r.item_name == "Box A").unwrap();
        assert_eq!(box_a.physical, Decimal::from(80));
        assert_eq!(box_a.variance, Decimal::from(-20));
        let glue = rows.iter().find(|r| r.item_name == "Glue").unwrap();
        assert_eq!(glue.variance, Decimal::from(-4));

        let progress = svc.progress().await.unwrap();
        assert_eq!(progress.total_items, 3);
        assert_eq!(progress.audited, vec!["Box A", "Tape"]);
        assert_eq!(progress.remaining, vec!["Glue"]);
    }

    #[tokio::test]
    async fn test_variance_surfaces_inventory_errors() {
        let svc = AuditService::new(
            Arc::new(worksheet()),
            InventoryCache::new(Arc::new(MissingSource), Duration::from_secs(60)),
            chrono_tz::Asia::Kolkata,
        );
        let err = svc.variance(VarianceOrder::ItemName).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InventorySourceMissing);
    }

    #[tokio::test]
    async fn test_archive_closes_active_entries_and_is_idempotent() {
        let svc = service_over(Arc::new(worksheet()));
        let session = Session::new("Meera");
        svc.record(count("Box A", 50), &session).unwrap();
        svc.record(count("Tape", 3), &session).unwrap();

        let outcome = svc.archive(&session).unwrap();
        assert_eq!(outcome, ArchiveOutcome { closed: 2, already_closed: 0 });
        assert!(svc.active_entries().unwrap().is_empty());

        let again = svc.archive(&session).unwrap();
        assert_eq!(again, ArchiveOutcome { closed: 0, already_closed: 2 });

        // A new count starts from a clean slate
        svc.record(count("Glue", 4), &session).unwrap();
        let rows = svc.variance(VarianceOrder::ItemName).await.unwrap();
        let box_a = rows.iter().find(|r| r.item_name == "Box A").unwrap();
        assert_eq!(box_a.physical, Decimal::ZERO);
    }

    #[test]
    fn test_archive_writes_the_pure_archive_result() {
        let svc = service_over(Arc::new(worksheet()));
        let session = Session::new("Meera");
        svc.record(count("Box A", 5), &session).unwrap();
        svc.archive(&session).unwrap();
        svc.record(count("Tape", 2), &session).unwrap();

        let before: Vec<AuditLogEntry> = svc
            .sheet
            .fetch_all_rows()
            .unwrap()
            .iter()
            .map(entry_from_row)
            .collect();
        svc.archive(&session).unwrap();
        let after: Vec<AuditLogEntry> = svc
            .sheet
            .fetch_all_rows()
            .unwrap()
            .iter()
            .map(entry_from_row)
            .collect();

        assert_eq!(after, variance::archive(&before));
    }

    #[test]
    fn test_archive_partial_failure_then_rerun() {
        let flaky = Arc::new(FlakyStore {
            inner: worksheet(),
            ok_updates: AtomicUsize::new(1),
        });
        let svc = service_over(flaky.clone());
        let session = Session::new("Meera");
        for item in ["Box A", "Tape", "Glue"] {
            svc.record(count(item, 1), &session).unwrap();
        }

        let err = svc.archive(&session).unwrap_err();
        assert_eq!(err.code, ErrorCode::AuditArchiveIncomplete);
        assert_eq!(svc.active_entries().unwrap().len(), 2);

        flaky.ok_updates.store(10, Ordering::SeqCst);
        let outcome = svc.archive(&session).unwrap();
        assert_eq!(outcome, ArchiveOutcome { closed: 2, already_closed: 1 });
        assert!(svc.active_entries().unwrap().is_empty());
    }

    #[test]
    fn test_archive_failing_first_write_keeps_store_error() {
        let flaky = Arc::new(FlakyStore {
            inner: worksheet(),
            ok_updates: AtomicUsize::new(0),
        });
        let svc = service_over(flaky);
        svc.record(count("Box A", 1), &Session::new("Meera")).unwrap();

        let err = svc.archive(&Session::new("Meera")).unwrap_err();
        assert_eq!(err.code, ErrorCode::StoreUnavailable);
    }
}
