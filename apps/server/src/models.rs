use chrono::{DateTime, Utc};
use pricing_calculator_core::{fees as core_fees, rates as core_rates};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Calculator request body. All fields are optional at the wire level so that
/// missing values are reported as validation errors.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorRequest {
    #[serde(alias = "productCategory")]
    pub category: Option<String>,
    #[schema(value_type = Option<f64>)]
    pub selling_price: Option<Decimal>,
    /// Grams.
    #[schema(value_type = Option<f64>)]
    pub weight: Option<Decimal>,
    /// FBA, EasyShip, SelfShip or SellerFlex.
    pub shipping_mode: Option<String>,
    /// Standard or Express.
    pub service_level: Option<String>,
    /// Standard or NonStandard.
    pub product_size: Option<String>,
    /// Local, Regional, National or Special.
    pub location: Option<String>,
    /// Cubic feet.
    #[schema(value_type = Option<f64>)]
    pub volume: Option<Decimal>,
    pub shipping_speed: Option<String>,
}

impl From<CalculatorRequest> for core_fees::CalculatorRequest {
    fn from(r: CalculatorRequest) -> Self {
        Self {
            category: r.category,
            selling_price: r.selling_price,
            weight: r.weight,
            shipping_mode: r.shipping_mode,
            service_level: r.service_level,
            product_size: r.product_size,
            location: r.location,
            volume: r.volume,
            shipping_speed: r.shipping_speed,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FeeBreakdown {
    #[schema(value_type = f64)]
    pub referral_fee: Decimal,
    #[schema(value_type = f64)]
    pub weight_handling_fee: Decimal,
    #[schema(value_type = f64)]
    pub closing_fee: Decimal,
    #[schema(value_type = f64)]
    pub pick_and_pack_fee: Decimal,
    #[schema(value_type = f64)]
    pub storage_fee: Decimal,
    #[schema(value_type = f64)]
    pub removal_fee: Decimal,
}

impl From<core_fees::FeeBreakdown> for FeeBreakdown {
    fn from(b: core_fees::FeeBreakdown) -> Self {
        Self {
            referral_fee: b.referral_fee,
            weight_handling_fee: b.weight_handling_fee,
            closing_fee: b.closing_fee,
            pick_and_pack_fee: b.pick_and_pack_fee,
            storage_fee: b.storage_fee,
            removal_fee: b.removal_fee,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorResponse {
    pub breakdown: FeeBreakdown,
    #[schema(value_type = f64)]
    pub total_fees: Decimal,
    #[schema(value_type = f64)]
    pub net_earnings: Decimal,
}

impl From<core_fees::CalculatorResponse> for CalculatorResponse {
    fn from(r: core_fees::CalculatorResponse) -> Self {
        Self {
            breakdown: r.breakdown.into(),
            total_fees: r.total_fees,
            net_earnings: r.net_earnings,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RateTableSummary {
    pub referral: usize,
    pub closing: usize,
    pub weight: usize,
    pub other: usize,
    pub total: usize,
    pub loaded_at: DateTime<Utc>,
}

impl From<core_rates::RuleSetSummary> for RateTableSummary {
    fn from(s: core_rates::RuleSetSummary) -> Self {
        Self {
            referral: s.referral,
            closing: s.closing,
            weight: s.weight,
            other: s.other,
            total: s.total,
            loaded_at: s.loaded_at,
        }
    }
}
