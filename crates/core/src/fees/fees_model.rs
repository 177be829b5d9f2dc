//! Calculator domain models.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::fees_errors::FeeError;
use crate::errors::{Result, ValidationError};

/// Lowercases and drops separators so `"Easy Ship"`, `"easy-ship"` and
/// `"EasyShip"` compare equal.
fn normalize_token(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Fulfilment channel; selects the closing-fee column and the weight-handling
/// row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShippingMode {
    #[serde(rename = "FBA")]
    Fba,
    #[serde(rename = "EasyShip", alias = "Easy Ship")]
    EasyShip,
    #[serde(rename = "SelfShip", alias = "Self Ship")]
    SelfShip,
    #[serde(rename = "SellerFlex", alias = "Seller Flex")]
    SellerFlex,
}

impl ShippingMode {
    /// Spellings of this mode that may appear in weight-handling descriptors.
    pub fn sheet_tokens(&self) -> &'static [&'static str] {
        match self {
            ShippingMode::Fba => &["FBA"],
            ShippingMode::EasyShip => &["Easy Ship", "EasyShip"],
            ShippingMode::SelfShip => &["Self Ship", "SelfShip"],
            ShippingMode::SellerFlex => &["Seller Flex", "SellerFlex"],
        }
    }
}

impl fmt::Display for ShippingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sheet_tokens()[0])
    }
}

impl FromStr for ShippingMode {
    type Err = FeeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "fba" => Ok(ShippingMode::Fba),
            "easyship" => Ok(ShippingMode::EasyShip),
            "selfship" => Ok(ShippingMode::SelfShip),
            "sellerflex" => Ok(ShippingMode::SellerFlex),
            _ => Err(FeeError::UnrecognizedShippingMode(s.to_string())),
        }
    }
}

/// Delivery speed tier. Accepted and echoed, but no rate-sheet column depends
/// on it yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceLevel {
    Standard,
    Express,
}

impl FromStr for ServiceLevel {
    type Err = FeeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "standard" => Ok(ServiceLevel::Standard),
            "express" => Ok(ServiceLevel::Express),
            _ => Err(FeeError::UnrecognizedServiceLevel(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductSize {
    Standard,
    #[serde(alias = "Non-Standard", alias = "Oversize")]
    NonStandard,
}

impl FromStr for ProductSize {
    type Err = FeeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "standard" => Ok(ProductSize::Standard),
            "nonstandard" | "oversize" => Ok(ProductSize::NonStandard),
            _ => Err(FeeError::UnrecognizedProductSize(s.to_string())),
        }
    }
}

/// Delivery region; selects the weight-handling column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    Local,
    Regional,
    National,
    Special,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Location::Local => "local",
            Location::Regional => "regional",
            Location::National => "national",
            Location::Special => "special",
        };
        f.write_str(name)
    }
}

impl FromStr for Location {
    type Err = FeeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "local" => Ok(Location::Local),
            "regional" => Ok(Location::Regional),
            "national" => Ok(Location::National),
            "special" => Ok(Location::Special),
            _ => Err(FeeError::UnrecognizedLocation(s.to_string())),
        }
    }
}

/// Raw calculator request as received from a client.
///
/// Every field is optional so that missing values surface as
/// [`ValidationError`]s instead of deserialization failures.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorRequest {
    #[serde(alias = "productCategory")]
    pub category: Option<String>,
    pub selling_price: Option<Decimal>,
    pub weight: Option<Decimal>,
    pub shipping_mode: Option<String>,
    pub service_level: Option<String>,
    pub product_size: Option<String>,
    pub location: Option<String>,
    pub volume: Option<Decimal>,
    pub shipping_speed: Option<String>,
}

impl CalculatorRequest {
    /// Checks field presence and ranges.
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        let mut missing = Vec::new();
        if self.category.as_deref().map_or(true, |c| c.trim().is_empty()) {
            missing.push("category");
        }
        if self.selling_price.is_none() {
            missing.push("sellingPrice");
        }
        if self.weight.is_none() {
            missing.push("weight");
        }
        for (name, value) in [
            ("shippingMode", &self.shipping_mode),
            ("serviceLevel", &self.service_level),
            ("productSize", &self.product_size),
            ("location", &self.location),
        ] {
            if value.as_deref().map_or(true, |v| v.trim().is_empty()) {
                missing.push(name);
            }
        }
        if !missing.is_empty() {
            return Err(ValidationError::MissingField(missing.join(", ")));
        }

        if self.selling_price.is_some_and(|p| p <= Decimal::ZERO) {
            return Err(ValidationError::invalid("sellingPrice", "must be positive"));
        }
        if self.weight.is_some_and(|w| w <= Decimal::ZERO) {
            return Err(ValidationError::invalid("weight", "must be positive"));
        }
        if self.volume.is_some_and(|v| v < Decimal::ZERO) {
            return Err(ValidationError::invalid("volume", "must not be negative"));
        }
        Ok(())
    }

    /// Validates the request and converts it into a typed [`CalculatorInput`].
    ///
    /// Missing or out-of-range fields fail with a validation error; enum values
    /// that are present but unknown fail with a [`FeeError`].
    pub fn into_input(self) -> Result<CalculatorInput> {
        self.validate()?;

        let shipping_mode = self.shipping_mode.unwrap_or_default().parse()?;
        let service_level = self.service_level.unwrap_or_default().parse()?;
        let product_size = self.product_size.unwrap_or_default().parse()?;
        let location = self.location.unwrap_or_default().parse()?;

        Ok(CalculatorInput {
            category: self.category.unwrap_or_default(),
            selling_price: self.selling_price.unwrap_or_default(),
            weight: self.weight.unwrap_or_default(),
            shipping_mode,
            service_level,
            product_size,
            location,
            volume: self.volume,
            shipping_speed: self.shipping_speed,
        })
    }
}

/// One validated calculation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorInput {
    pub category: String,
    /// Selling price in currency units.
    pub selling_price: Decimal,
    /// Shipping weight in grams.
    pub weight: Decimal,
    pub shipping_mode: ShippingMode,
    pub service_level: ServiceLevel,
    pub product_size: ProductSize,
    pub location: Location,
    /// Volume in cubic feet. Storage fees apply when present and non-zero.
    pub volume: Option<Decimal>,
    /// Removal shipping speed, e.g. `"Standard"`. Removal fees apply when set.
    pub shipping_speed: Option<String>,
}

impl CalculatorInput {
    /// Volume that triggers the storage fee, if any.
    pub fn storage_volume(&self) -> Option<Decimal> {
        self.volume.filter(|v| !v.is_zero())
    }

    /// Shipping speed that triggers the removal fee, if any.
    pub fn removal_speed(&self) -> Option<&str> {
        self.shipping_speed
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

/// Per-category fee amounts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeBreakdown {
    pub referral_fee: Decimal,
    pub weight_handling_fee: Decimal,
    pub closing_fee: Decimal,
    pub pick_and_pack_fee: Decimal,
    pub storage_fee: Decimal,
    pub removal_fee: Decimal,
}

/// Aggregated totals for a breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeTotals {
    pub total_fees: Decimal,
    pub net_earnings: Decimal,
}

/// Calculator result returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorResponse {
    pub breakdown: FeeBreakdown,
    pub total_fees: Decimal,
    pub net_earnings: Decimal,
}

impl CalculatorResponse {
    pub fn new(breakdown: FeeBreakdown, totals: FeeTotals) -> Self {
        Self {
            breakdown,
            total_fees: totals.total_fees,
            net_earnings: totals.net_earnings,
        }
    }
}
