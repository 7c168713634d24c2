//! Error types for the sheet library

use shared::AppError;
use thiserror::Error;

/// Row store error types
#[derive(Debug, Error)]
pub enum SheetError {
    /// Backing store unreachable, unauthorized or failing I/O
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// No row matched the lookup
    #[error("Row not found: {0}")]
    RowNotFound(String),

    /// Column index past the last header
    #[error("Column {column} out of range (sheet has {width} columns)")]
    ColumnOutOfRange { column: usize, width: usize },

    /// Worksheet exists with a different header row
    #[error("Worksheet {sheet} has headers {found:?}, expected {expected:?}")]
    HeaderMismatch {
        sheet: String,
        expected: Vec<String>,
        found: Vec<String>,
    },

    /// Malformed CSV text
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for row store operations
pub type SheetResult<T> = Result<T, SheetError>;

macro_rules! unavailable_from {
    ($($err:ty),+ $(,)?) => {
        $(
            impl From<$err> for SheetError {
                fn from(err: $err) -> Self {
                    SheetError::Unavailable(err.to_string())
                }
            }
        )+
    };
}

unavailable_from!(
    redb::DatabaseError,
    redb::TransactionError,
    redb::TableError,
    redb::StorageError,
    redb::CommitError,
    reqwest::Error,
);

impl From<::csv::Error> for SheetError {
    fn from(err: ::csv::Error) -> Self {
        SheetError::Parse(err.to_string())
    }
}

/// Map row store failures onto API error codes
impl From<SheetError> for AppError {
    fn from(err: SheetError) -> Self {
        match err {
            SheetError::Unavailable(msg) => AppError::store_unavailable(msg),
            SheetError::RowNotFound(what) => AppError::not_found(what),
            other => AppError::internal(other.to_string()),
        }
    }
}
