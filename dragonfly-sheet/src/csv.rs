//! CSV text to rows
//!
//! Spreadsheet exports: quoted fields, `""` escapes, commas and newlines
//! inside quotes, CRLF line endings and a leading UTF-8 BOM. Short records
//! are allowed; missing trailing cells read as empty.

use ::csv::{ReaderBuilder, Trim};

use crate::error::SheetResult;
use crate::store::{Row, RowLocator};

/// Parse CSV text with a header line into rows
///
/// Header names are trimmed. Locators count the header as row 1, so the
/// first data record is row 2 as in the source sheet (skipped blank lines
/// are not counted).
pub fn parse_csv(text: &str) -> SheetResult<Vec<Row>> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::Headers)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    if headers.is_empty() {
        return Ok(Vec::new());
    }

    let mut rows = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let values = record?.iter().map(str::to_string).collect();
        rows.push(Row::from_cells(RowLocator(i as u64 + 2), &headers, values));
    }
    Ok(rows)
}
