//! # dragonfly-sheet
//!
//! Worksheet-style row storage - header row plus ordered data rows.
//!
//! ## Scope
//!
//! This crate handles WHERE rows live:
//! - The [`RowStore`] trait (append / fetch all / find / update one cell)
//! - A redb-backed [`Workbook`] of named worksheets
//! - CSV parsing and a read-only [`PublishedCsv`] source over HTTP
//!
//! What the rows mean (orders, audit entries, inventory) stays in
//! application code - see dragonfly-server.
//!
//! ## Example
//!
//! ```ignore
//! use dragonfly_sheet::{RowStore, Workbook};
//!
//! let book = Workbook::open("data/database/dragonfly.redb")?;
//! let orders = book.worksheet("Orders", &["Order ID", "Customer"])?;
//!
//! let row = orders.append_row(vec!["12.05.24..#1".into(), "Asha".into()])?;
//! orders.update_cell(row, 1, "Asha K")?;
//! ```

pub mod csv;
mod error;
mod published;
mod store;
mod workbook;

// Re-exports
pub use error::{SheetError, SheetResult};
pub use published::PublishedCsv;
pub use store::{FIRST_DATA_ROW, Row, RowLocator, RowStore};
pub use workbook::{Workbook, Worksheet};
