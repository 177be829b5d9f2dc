//! Pricing Calculator Core - fee rule resolution, rate tables and services.
//!
//! This crate contains the marketplace fee calculation logic. It is transport
//! agnostic: rate tables arrive through [`rates::RateTableProvider`]
//! implementations and calculations are exposed through
//! [`fees::FeeCalculatorServiceTrait`].

pub mod constants;
pub mod errors;
pub mod fees;
pub mod rates;
pub mod utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
