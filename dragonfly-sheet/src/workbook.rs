//! redb-backed workbook
//!
//! # Tables
//!
//! | Table | Key | Value | Purpose |
//! |-------|-----|-------|---------|
//! | `sheet_headers` | sheet name | JSON `Vec<String>` | Header row per worksheet |
//! | `sheet:{name}` | sheet row number | JSON `Vec<String>` | Data rows |
//!
//! Row keys follow sheet numbering (data starts at row 2), so a
//! [`RowLocator`] is simply the table key.
//!
//! # Durability
//!
//! redb commits are durable once `commit()` returns, so a row acknowledged by
//! `append_row` survives a power loss.

use std::path::Path;
use std::sync::Arc;

use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};

use crate::error::{SheetError, SheetResult};
use crate::store::{FIRST_DATA_ROW, Row, RowLocator, RowStore};

/// Header rows: key = sheet name, value = JSON-serialized Vec<String>
const HEADERS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("sheet_headers");

/// A set of worksheets in one redb file
#[derive(Clone)]
pub struct Workbook {
    db: Arc<Database>,
}

impl Workbook {
    /// Open or create the workbook at the given path
    pub fn open(path: impl AsRef<Path>) -> SheetResult<Self> {
        let db = Database::create(path)?;
        Self::init(db)
    }

    /// Open an in-memory workbook (tests, demos)
    pub fn open_in_memory() -> SheetResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        Self::init(db)
    }

    fn init(db: Database) -> SheetResult<Self> {
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(HEADERS_TABLE)?;
        }
        write_txn.commit()?;
        Ok(Self { db: Arc::new(db) })
    }

    /// Open a worksheet, creating it with `headers` on first use
    ///
    /// An existing worksheet must carry exactly the same header row.
    pub fn worksheet(&self, name: &str, headers: &[&str]) -> SheetResult<Worksheet> {
        let expected: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
        let sheet = Worksheet {
            db: self.db.clone(),
            name: name.to_string(),
            table_name: format!("sheet:{}", name),
            headers: expected.clone(),
        };

        let write_txn = self.db.begin_write()?;
        {
            let mut header_table = write_txn.open_table(HEADERS_TABLE)?;
            let stored: Option<Vec<String>> = match header_table.get(name)? {
                Some(guard) => Some(serde_json::from_slice(guard.value())?),
                None => None,
            };
            match stored {
                Some(found) if found != expected => {
                    return Err(SheetError::HeaderMismatch {
                        sheet: name.to_string(),
                        expected,
                        found,
                    });
                }
                Some(_) => {}
                None => {
                    let value = serde_json::to_vec(&expected)?;
                    header_table.insert(name, value.as_slice())?;
                    tracing::info!(sheet = %name, "Created worksheet");
                }
            }
            let _ = write_txn.open_table(sheet.rows_table())?;
        }
        write_txn.commit()?;

        Ok(sheet)
    }
}

impl std::fmt::Debug for Workbook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Workbook").finish_non_exhaustive()
    }
}

/// One worksheet of a [`Workbook`]
#[derive(Clone)]
pub struct Worksheet {
    db: Arc<Database>,
    name: String,
    table_name: String,
    headers: Vec<String>,
}

impl Worksheet {
    fn rows_table(&self) -> TableDefinition<'_, u64, &'static [u8]> {
        TableDefinition::new(&self.table_name)
    }

    fn not_found(&self, what: impl std::fmt::Display) -> SheetError {
        SheetError::RowNotFound(format!("{} in {}", what, self.name))
    }
}

impl std::fmt::Debug for Worksheet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Worksheet")
            .field("name", &self.name)
            .field("headers", &self.headers)
            .finish_non_exhaustive()
    }
}

impl RowStore for Worksheet {
    fn name(&self) -> &str {
        &self.name
    }

    fn headers(&self) -> &[String] {
        &self.headers
    }

    fn append_row(&self, fields: Vec<String>) -> SheetResult<RowLocator> {
        let value = serde_json::to_vec(&fields)?;

        let write_txn = self.db.begin_write()?;
        let key = {
            let mut table = write_txn.open_table(self.rows_table())?;
            let key = table
                .last()?
                .map(|(k, _)| k.value() + 1)
                .unwrap_or(FIRST_DATA_ROW);
            table.insert(key, value.as_slice())?;
            key
        };
        write_txn.commit()?;

        tracing::debug!(sheet = %self.name, row = key, "Appended row");
        Ok(RowLocator(key))
    }

    fn fetch_all_rows(&self) -> SheetResult<Vec<Row>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(self.rows_table())?;

        let mut rows = Vec::new();
        for result in table.iter()? {
            let (key, value) = result?;
            let cells: Vec<String> = serde_json::from_slice(value.value())?;
            rows.push(Row::from_cells(RowLocator(key.value()), &self.headers, cells));
        }
        Ok(rows)
    }

    fn find_row(&self, match_value: &str) -> SheetResult<RowLocator> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(self.rows_table())?;

        for result in table.iter()? {
            let (key, value) = result?;
            let cells: Vec<String> = serde_json::from_slice(value.value())?;
            if cells.iter().any(|c| c == match_value) {
                return Ok(RowLocator(key.value()));
            }
        }
        Err(self.not_found(format!("cell {:?}", match_value)))
    }

    fn update_cell(&self, locator: RowLocator, column: usize, value: &str) -> SheetResult<()> {
        if column >= self.headers.len() {
            return Err(SheetError::ColumnOutOfRange {
                column,
                width: self.headers.len(),
            });
        }

        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(self.rows_table())?;
            let mut cells: Vec<String> = match table.get(locator.0)? {
                Some(guard) => serde_json::from_slice(guard.value())?,
                None => return Err(self.not_found(locator)),
            };
            if cells.len() <= column {
                cells.resize(column + 1, String::new());
            }
            cells[column] = value.to_string();
            let encoded = serde_json::to_vec(&cells)?;
            table.insert(locator.0, encoded.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADERS: &[&str] = &["Order ID", "Customer", "Status"];

    fn sheet() -> Worksheet {
        Workbook::open_in_memory()
            .unwrap()
            .worksheet("Orders", HEADERS)
            .unwrap()
    }

    fn row(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_append_numbers_rows_from_two() {
        let sheet = sheet();
        assert_eq!(
            sheet.append_row(row(&["a", "Asha", "Pending"])).unwrap(),
            RowLocator(2)
        );
        assert_eq!(
            sheet.append_row(row(&["b", "Ravi", "Pending"])).unwrap(),
            RowLocator(3)
        );

        let rows = sheet.fetch_all_rows().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("Customer"), "Asha");
        assert_eq!(rows[1].locator, RowLocator(3));
    }

    #[test]
    fn test_find_row_matches_any_cell() {
        let sheet = sheet();
        sheet.append_row(row(&["a", "Asha", "Pending"])).unwrap();
        sheet.append_row(row(&["b", "Ravi", "Pending"])).unwrap();

        assert_eq!(sheet.find_row("b").unwrap(), RowLocator(3));
        assert_eq!(sheet.find_row("Asha").unwrap(), RowLocator(2));
        assert!(matches!(
            sheet.find_row("zzz"),
            Err(SheetError::RowNotFound(_))
        ));
    }

    #[test]
    fn test_update_cell() {
        let sheet = sheet();
        let loc = sheet.append_row(row(&["a", "Asha", "Pending"])).unwrap();
        let status = sheet.column_index("Status").unwrap();

        sheet.update_cell(loc, status, "Completed").unwrap();
        let rows = sheet.fetch_all_rows().unwrap();
        assert_eq!(rows[0].get("Status"), "Completed");
    }

    #[test]
    fn test_update_cell_pads_short_rows() {
        let sheet = sheet();
        let loc = sheet.append_row(row(&["a"])).unwrap();
        sheet.update_cell(loc, 2, "Completed").unwrap();

        let rows = sheet.fetch_all_rows().unwrap();
        assert_eq!(rows[0].get("Customer"), "");
        assert_eq!(rows[0].get("Status"), "Completed");
    }

    #[test]
    fn test_update_cell_errors() {
        let sheet = sheet();
        let loc = sheet.append_row(row(&["a", "Asha", "Pending"])).unwrap();

        assert!(matches!(
            sheet.update_cell(loc, 3, "x"),
            Err(SheetError::ColumnOutOfRange { column: 3, width: 3 })
        ));
        assert!(matches!(
            sheet.update_cell(RowLocator(99), 0, "x"),
            Err(SheetError::RowNotFound(_))
        ));
    }

    #[test]
    fn test_worksheets_are_independent() {
        let book = Workbook::open_in_memory().unwrap();
        let orders = book.worksheet("Orders", HEADERS).unwrap();
        let audit = book.worksheet("Audit_Log", &["Item Name"]).unwrap();

        orders.append_row(row(&["a", "Asha", "Pending"])).unwrap();
        assert!(audit.fetch_all_rows().unwrap().is_empty());
        assert_eq!(audit.append_row(row(&["Box A"])).unwrap(), RowLocator(2));
    }

    #[test]
    fn test_header_mismatch_rejected() {
        let book = Workbook::open_in_memory().unwrap();
        book.worksheet("Orders", HEADERS).unwrap();
        // Reopening with the same headers is fine
        book.worksheet("Orders", HEADERS).unwrap();

        let err = book.worksheet("Orders", &["Order ID"]).unwrap_err();
        assert!(matches!(err, SheetError::HeaderMismatch { .. }));
    }

    #[test]
    fn test_reopen_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.redb");

        {
            let book = Workbook::open(&path).unwrap();
            let sheet = book.worksheet("Orders", HEADERS).unwrap();
            sheet.append_row(row(&["a", "Asha", "Pending"])).unwrap();
        }

        let book = Workbook::open(&path).unwrap();
        let sheet = book.worksheet("Orders", HEADERS).unwrap();
        let rows = sheet.fetch_all_rows().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("Order ID"), "a");
    }
}
