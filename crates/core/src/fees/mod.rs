//! Fees module - calculator models, rule resolution engine, aggregation and
//! the calculator service.

mod fee_aggregator;
mod fee_predicates;
mod fee_resolver;
mod fees_errors;
mod fees_model;
mod fees_service;
mod fees_traits;


pub use fee_aggregator::aggregate;
pub use fee_predicates::{
    closing_rule_matches, other_rule_matches, pick_and_pack_descriptor, referral_rule_matches,
    removal_descriptor, size_token_for_weight, weight_rule_matches,
};
pub use fee_resolver::{
    resolve, resolve_closing_fee, resolve_pick_and_pack_fee, resolve_referral_fee,
    resolve_removal_fee, resolve_storage_fee, resolve_weight_handling_fee,
};
pub use fees_errors::FeeError;
pub use fees_model::{
    CalculatorInput, CalculatorRequest, CalculatorResponse, FeeBreakdown, FeeTotals, Location,
    ProductSize, ServiceLevel, ShippingMode,
};
pub use fees_service::FeeCalculatorService;
pub use fees_traits::FeeCalculatorServiceTrait;
