//! Rate table error types.

use thiserror::Error;

use super::rates_model::RateSheet;

/// Errors raised while fetching or parsing the rate sheet.
#[derive(Error, Debug)]
pub enum RateTableError {
    #[error("Failed to read {sheet} sheet: {source}")]
    Io {
        sheet: RateSheet,
        #[source]
        source: std::io::Error,
    },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Spreadsheet request for {sheet} returned HTTP {status}")]
    Http { sheet: RateSheet, status: u16 },

    #[error("Malformed CSV in {sheet} sheet: {source}")]
    Csv {
        sheet: RateSheet,
        #[source]
        source: csv::Error,
    },

    #[error("Rate table provider returned no rules")]
    EmptyRuleSet,

    #[error("Rate table lock poisoned: {0}")]
    Lock(String),
}
