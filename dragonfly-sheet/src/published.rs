//! Read-only CSV export of a published sheet

use std::time::Duration;

use reqwest::Client;

use crate::csv::parse_csv;
use crate::error::{SheetError, SheetResult};
use crate::store::Row;

/// A sheet published as CSV at a fixed URL
#[derive(Debug, Clone)]
pub struct PublishedCsv {
    client: Client,
    url: String,
}

impl PublishedCsv {
    /// 创建 CSV 读取器
    pub fn new(url: impl Into<String>, timeout: Duration) -> SheetResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SheetError::Unavailable(format!("HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Download and parse the current export
    ///
    /// Network failures and non-2xx responses are [`SheetError::Unavailable`],
    /// malformed text is [`SheetError::Parse`].
    pub async fn fetch(&self) -> SheetResult<Vec<Row>> {
        let response = self.client.get(&self.url).send().await?;
        let response = response.error_for_status()?;
        let text = response.text().await?;

        let rows = parse_csv(&text)?;
        tracing::debug!(url = %self.url, rows = rows.len(), "Fetched published CSV");
        Ok(rows)
    }
}
