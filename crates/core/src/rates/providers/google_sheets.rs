//! Fetches the rate sheet from a Google spreadsheet through its CSV export.
//!
//! The spreadsheet must be readable by link. Each tab is requested separately
//! from `/spreadsheets/d/{id}/gviz/tq?tqx=out:csv&sheet={title}`.

use std::time::Duration;

use async_trait::async_trait;
use futures::future::try_join_all;
use reqwest::Client;

use crate::errors::Result;
use crate::rates::rates_errors::RateTableError;
use crate::rates::rates_model::{RateSheet, Rule};
use crate::rates::rates_traits::RateTableProvider;
use crate::rates::sheet_parser::parse_sheet;

pub const DEFAULT_SHEETS_BASE_URL: &str = "https://docs.google.com";

pub struct GoogleSheetsProvider {
    client: Client,
    base_url: String,
    spreadsheet_id: String,
    label: String,
}

impl GoogleSheetsProvider {
    pub fn new(spreadsheet_id: impl Into<String>, timeout: Duration) -> Self {
        Self::with_base_url(DEFAULT_SHEETS_BASE_URL, spreadsheet_id, timeout)
    }

    pub fn with_base_url(
        base_url: impl Into<String>,
        spreadsheet_id: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());
        let spreadsheet_id = spreadsheet_id.into();
        let label = format!("google-sheets:{}", spreadsheet_id);
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            spreadsheet_id,
            label,
        }
    }

    pub fn sheet_url(&self, sheet: RateSheet) -> String {
        format!(
            "{}/spreadsheets/d/{}/gviz/tq?tqx=out:csv&sheet={}",
            self.base_url,
            self.spreadsheet_id,
            urlencoding::encode(sheet.title())
        )
    }

    async fn fetch_sheet(&self, sheet: RateSheet) -> Result<Vec<Rule>> {
        let url = self.sheet_url(sheet);
        log::debug!("Fetching {} sheet from {}", sheet, url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(RateTableError::from)?;
        let status = response.status();
        if !status.is_success() {
            return Err(RateTableError::Http {
                sheet,
                status: status.as_u16(),
            }
            .into());
        }

        let text = response.text().await.map_err(RateTableError::from)?;
        Ok(parse_sheet(sheet, &text)?)
    }
}

#[async_trait]
impl RateTableProvider for GoogleSheetsProvider {
    async fn get_rules(&self) -> Result<Vec<Rule>> {
        let per_sheet =
            try_join_all(RateSheet::ALL.into_iter().map(|sheet| self.fetch_sheet(sheet))).await?;
        Ok(per_sheet.into_iter().flatten().collect())
    }

    fn name(&self) -> &str {
        &self.label
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_encoded_export_urls() {
        let provider = GoogleSheetsProvider::with_base_url(
            "https://sheets.example.com/",
            "abc123",
            Duration::from_secs(5),
        );
        assert_eq!(
            provider.sheet_url(RateSheet::WeightHandling),
            "https://sheets.example.com/spreadsheets/d/abc123/gviz/tq?tqx=out:csv&sheet=Weight%20handling%20fees"
        );
        assert_eq!(provider.name(), "google-sheets:abc123");
    }

    #[tokio::test]
    async fn unreachable_host_is_a_rate_table_error() {
        let provider = GoogleSheetsProvider::with_base_url(
            "http://127.0.0.1:9",
            "abc123",
            Duration::from_millis(500),
        );
        let err = provider.get_rules().await.unwrap_err();
        assert!(matches!(
            err,
            crate::errors::Error::RateTable(RateTableError::Network(_))
        ));
    }
}
