//! Row store abstraction
//!
//! A worksheet is a header row followed by data rows. Rows are addressed the
//! way spreadsheet UIs number them: row 1 is the header, data starts at row 2.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SheetResult;

/// Sheet row number of the first data row
pub const FIRST_DATA_ROW: u64 = 2;

/// 1-based sheet row number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowLocator(pub u64);

impl fmt::Display for RowLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {}", self.0)
    }
}

/// A data row keyed by header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub locator: RowLocator,
    cells: HashMap<String, String>,
}

impl Row {
    /// Zip cell values onto headers. Missing trailing cells read as empty,
    /// cells past the last header are dropped.
    pub fn from_cells(locator: RowLocator, headers: &[String], values: Vec<String>) -> Self {
        let mut values = values.into_iter();
        let cells = headers
            .iter()
            .map(|h| (h.clone(), values.next().unwrap_or_default()))
            .collect();
        Self { locator, cells }
    }

    /// Cell under `column`, empty if the column does not exist
    pub fn get(&self, column: &str) -> &str {
        self.cells.get(column).map(String::as_str).unwrap_or("")
    }

    pub fn cells(&self) -> &HashMap<String, String> {
        &self.cells
    }
}

/// Append/read/update access to one worksheet
///
/// All calls block until the backing store answers. Nothing here locks
/// across calls: a read followed by an append is two independent operations.
pub trait RowStore: Send + Sync {
    /// Worksheet name
    fn name(&self) -> &str;

    /// Header row
    fn headers(&self) -> &[String];

    /// 0-based index of a header
    fn column_index(&self, header: &str) -> Option<usize> {
        self.headers().iter().position(|h| h == header)
    }

    /// Append a row after the last data row
    fn append_row(&self, fields: Vec<String>) -> SheetResult<RowLocator>;

    /// All data rows in sheet order
    fn fetch_all_rows(&self) -> SheetResult<Vec<Row>>;

    /// First row holding a cell equal to `match_value`
    fn find_row(&self, match_value: &str) -> SheetResult<RowLocator>;

    /// Overwrite one cell; `column` is 0-based
    fn update_cell(&self, locator: RowLocator, column: usize, value: &str) -> SheetResult<()>;
}
