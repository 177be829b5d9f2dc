//! Fee resolution error types.

use thiserror::Error;

use crate::rates::RuleKind;

/// Errors raised while resolving fees against the rate table.
///
/// These indicate rate-data or configuration problems rather than bad user
/// input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FeeError {
    #[error("No {kind} rule found for {selectors}")]
    RuleNotFound { kind: RuleKind, selectors: String },

    #[error("Malformed {kind} rule: field '{field}' has unparsable value {value:?}")]
    MalformedRule {
        kind: RuleKind,
        field: String,
        value: Option<String>,
    },

    #[error("Invalid location: {0}")]
    UnrecognizedLocation(String),

    #[error("Invalid shipping mode: {0}")]
    UnrecognizedShippingMode(String),

    #[error("Invalid service level: {0}")]
    UnrecognizedServiceLevel(String),

    #[error("Invalid product size: {0}")]
    UnrecognizedProductSize(String),

    #[error("No rate table has been loaded")]
    RuleSetUnavailable,

    #[error("Arithmetic overflow computing {0}")]
    Overflow(String),
}

impl FeeError {
    pub fn not_found(kind: RuleKind, selectors: impl Into<String>) -> Self {
        FeeError::RuleNotFound {
            kind,
            selectors: selectors.into(),
        }
    }

    pub fn overflow(quantity: &str) -> Self {
        FeeError::Overflow(quantity.to_string())
    }

    pub fn malformed(kind: RuleKind, field: &str, value: Option<&str>) -> Self {
        FeeError::MalformedRule {
            kind,
            field: field.to_string(),
            value: value.map(str::to_string),
        }
    }
}
