//! Rate table module - rule models, sheet parsing, providers and snapshots.

pub mod providers;
mod rates_errors;
mod rates_model;
mod rates_service;
mod rates_store;
mod rates_traits;
mod sheet_parser;

pub use providers::{CsvDirectoryProvider, GoogleSheetsProvider, DEFAULT_SHEETS_BASE_URL};
pub use rates_errors::RateTableError;
pub use rates_model::{
    ClosingRule, OtherRule, RateSheet, ReferralRule, Rule, RuleKind, RuleSet, RuleSetSummary,
    WeightRule,
};
pub use rates_service::RateTableService;
pub use rates_store::RuleSetStore;
pub use rates_traits::{RateTableProvider, RateTableServiceTrait};
pub use sheet_parser::parse_sheet;
