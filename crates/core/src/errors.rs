//! Core error types for the pricing calculator.
//!
//! Each domain module owns its error enum; this module folds them into a single
//! root [`Error`] so services can use `?` across module boundaries.

use thiserror::Error;

use crate::fees::FeeError;
use crate::rates::RateTableError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the pricing calculator.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Fee resolution failed: {0}")]
    Fee(#[from] FeeError),

    #[error("Rate table error: {0}")]
    RateTable(#[from] RateTableError),
}

impl Error {
    /// True when the error was caused by the caller's input rather than by
    /// rate data or infrastructure.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }
}

/// Validation errors for calculator requests.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Missing required fields: {0}")]
    MissingField(String),

    #[error("Invalid {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

impl ValidationError {
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidValue {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
