//! Reads the rate sheet from a directory of CSV exports, one file per tab.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::errors::Result;
use crate::rates::rates_errors::RateTableError;
use crate::rates::rates_model::{RateSheet, Rule};
use crate::rates::rates_traits::RateTableProvider;
use crate::rates::sheet_parser::parse_sheet;

pub struct CsvDirectoryProvider {
    dir: PathBuf,
    label: String,
}

impl CsvDirectoryProvider {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        let label = format!("csv:{}", dir.display());
        Self { dir, label }
    }
}

#[async_trait]
impl RateTableProvider for CsvDirectoryProvider {
    async fn get_rules(&self) -> Result<Vec<Rule>> {
        let mut rules = Vec::new();
        for sheet in RateSheet::ALL {
            let path = self.dir.join(sheet.file_name());
            let text = tokio::fs::read_to_string(&path)
                .await
                .map_err(|source| RateTableError::Io { sheet, source })?;
            rules.extend(parse_sheet(sheet, &text)?);
        }
        Ok(rules)
    }

    fn name(&self) -> &str {
        &self.label
    }
}
