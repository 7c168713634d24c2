//! Where inventory snapshots come from

use std::time::Duration;

use async_trait::async_trait;
use dragonfly_sheet::{PublishedCsv, SheetError};
use thiserror::Error;

use super::snapshot::InventorySnapshot;
use crate::utils::{AppError, ErrorCode};

#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("No inventory source configured")]
    SourceMissing,

    #[error(transparent)]
    Sheet(#[from] SheetError),
}

impl From<&InventoryError> for AppError {
    fn from(err: &InventoryError) -> Self {
        let code = match err {
            InventoryError::SourceMissing => ErrorCode::InventorySourceMissing,
            InventoryError::Sheet(SheetError::Unavailable(_)) => ErrorCode::StoreUnavailable,
            InventoryError::Sheet(SheetError::Parse(_)) => ErrorCode::InventoryParseFailed,
            InventoryError::Sheet(_) => ErrorCode::InternalError,
        };
        AppError::with_message(code, err.to_string())
    }
}

impl From<InventoryError> for AppError {
    fn from(err: InventoryError) -> Self {
        AppError::from(&err)
    }
}

/// Loads a fresh inventory snapshot
#[async_trait]
pub trait InventorySource: Send + Sync {
    async fn load(&self) -> Result<InventorySnapshot, InventoryError>;

    /// Human-readable origin, for logs
    fn describe(&self) -> String;
}

/// The published inventory sheet, fetched as CSV
pub struct PublishedCsvSource {
    csv: PublishedCsv,
}

impl PublishedCsvSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, InventoryError> {
        Ok(Self {
            csv: PublishedCsv::new(url, timeout)?,
        })
    }
}

#[async_trait]
impl InventorySource for PublishedCsvSource {
    async fn load(&self) -> Result<InventorySnapshot, InventoryError> {
        let rows = self.csv.fetch().await?;
        Ok(InventorySnapshot::from_rows(&rows))
    }

    fn describe(&self) -> String {
        self.csv.url().to_string()
    }
}

/// Fixed snapshot (tests and offline demos)
pub struct StaticSource {
    snapshot: InventorySnapshot,
}

impl StaticSource {
    pub fn new(snapshot: InventorySnapshot) -> Self {
        Self { snapshot }
    }
}

#[async_trait]
impl InventorySource for StaticSource {
    async fn load(&self) -> Result<InventorySnapshot, InventoryError> {
        Ok(self.snapshot.clone())
    }

    fn describe(&self) -> String {
        "static".to_string()
    }
}

/// Placeholder when `INVENTORY_CSV_URL` is unset; every load fails
pub struct MissingSource;

#[async_trait]
impl InventorySource for MissingSource {
    async fn load(&self) -> Result<InventorySnapshot, InventoryError> {
        Err(InventoryError::SourceMissing)
    }

    fn describe(&self) -> String {
        "none".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err: AppError = InventoryError::SourceMissing.into();
        assert_eq!(err.code, ErrorCode::InventorySourceMissing);

        let err: AppError = InventoryError::Sheet(SheetError::Unavailable("dns".into())).into();
        assert_eq!(err.code, ErrorCode::StoreUnavailable);

        let err: AppError = InventoryError::Sheet(SheetError::Parse("quote".into())).into();
        assert_eq!(err.code, ErrorCode::InventoryParseFailed);
    }

    #[tokio::test]
    async fn test_missing_source_fails() {
        assert!(matches!(
            MissingSource.load().await,
            Err(InventoryError::SourceMissing)
        ));
    }
}
