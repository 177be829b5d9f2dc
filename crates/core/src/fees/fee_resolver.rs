//! Fee rule resolution engine.
//!
//! Selects the applicable rule per fee category from a [`RuleSet`] snapshot and
//! computes each amount. Resolution is pure: the same input and snapshot always
//! give the same breakdown. When several rows match, the first in table order
//! wins.
//!
//! Empty weight-handling and closing cells count as zero. Referral,
//! pick-and-pack, storage and removal values are required and fail resolution
//! when missing.

use rust_decimal::Decimal;

use super::fee_predicates::{
    closing_rule_matches, other_rule_matches, pick_and_pack_descriptor, referral_rule_matches,
    removal_descriptor, size_token_for_weight, weight_rule_matches,
};
use super::fees_errors::FeeError;
use super::fees_model::{CalculatorInput, FeeBreakdown, Location, ProductSize, ShippingMode};
use crate::constants::{
    PICK_AND_PACK_FEE_TYPE, REMOVAL_FEE_TYPE, STORAGE_ALL_CATEGORIES, STORAGE_FEE_TYPE,
};
use crate::rates::{ClosingRule, OtherRule, RuleKind, RuleSet, WeightRule};
use crate::utils::{parse_amount, parse_percentage};

type FeeResult<T> = std::result::Result<T, FeeError>;

/// Resolves every fee category for `input` against `rules`.
pub fn resolve(input: &CalculatorInput, rules: &RuleSet) -> FeeResult<FeeBreakdown> {
    let referral_fee = resolve_referral_fee(rules, &input.category, input.selling_price)?;
    let weight_handling_fee =
        resolve_weight_handling_fee(rules, input.weight, input.shipping_mode, input.location)?;
    let closing_fee = resolve_closing_fee(rules, input.selling_price, input.shipping_mode)?;
    let pick_and_pack_fee = resolve_pick_and_pack_fee(rules, input.product_size)?;

    let storage_fee = match input.storage_volume() {
        Some(volume) => resolve_storage_fee(rules, volume)?,
        None => Decimal::ZERO,
    };
    let removal_fee = match input.removal_speed() {
        Some(speed) => resolve_removal_fee(rules, input.product_size, speed)?,
        None => Decimal::ZERO,
    };

    Ok(FeeBreakdown {
        referral_fee,
        weight_handling_fee,
        closing_fee,
        pick_and_pack_fee,
        storage_fee,
        removal_fee,
    })
}

/// `price * percentage / 100` for the rule whose category matches exactly.
pub fn resolve_referral_fee(rules: &RuleSet, category: &str, price: Decimal) -> FeeResult<Decimal> {
    let rule = rules
        .referral_rules()
        .find(|rule| referral_rule_matches(rule, category))
        .ok_or_else(|| FeeError::not_found(RuleKind::Referral, format!("category {:?}", category)))?;

    let raw = rule.referral_fee_percentage.as_deref();
    let percentage = raw
        .and_then(parse_percentage)
        .ok_or_else(|| FeeError::malformed(RuleKind::Referral, "referralFeePercentage", raw))?;

    price
        .checked_mul(percentage)
        .and_then(|amount| amount.checked_div(Decimal::ONE_HUNDRED))
        .ok_or_else(|| FeeError::overflow("referral fee"))
}

pub fn resolve_weight_handling_fee(
    rules: &RuleSet,
    weight: Decimal,
    mode: ShippingMode,
    location: Location,
) -> FeeResult<Decimal> {
    let size_token = size_token_for_weight(weight);
    let rule = rules
        .weight_rules()
        .find(|rule| weight_rule_matches(rule, mode, size_token))
        .ok_or_else(|| {
            FeeError::not_found(
                RuleKind::Weight,
                format!("shipping mode {} and size {:?}", mode, size_token),
            )
        })?;

    let (field, cell) = weight_cell(rule, location);
    optional_amount(RuleKind::Weight, field, cell)
}

pub fn resolve_closing_fee(
    rules: &RuleSet,
    price: Decimal,
    mode: ShippingMode,
) -> FeeResult<Decimal> {
    let rule = rules
        .closing_rules()
        .find(|rule| closing_rule_matches(rule, price))
        .ok_or_else(|| FeeError::not_found(RuleKind::Closing, format!("price {}", price)))?;

    let (field, cell) = closing_cell(rule, mode);
    optional_amount(RuleKind::Closing, field, cell)
}

pub fn resolve_pick_and_pack_fee(rules: &RuleSet, size: ProductSize) -> FeeResult<Decimal> {
    let descriptor = pick_and_pack_descriptor(size);
    let rule = find_other_rule(rules, PICK_AND_PACK_FEE_TYPE, descriptor)?;
    required_amount(rule)
}

/// Per-cubic-foot storage rate times `volume`.
pub fn resolve_storage_fee(rules: &RuleSet, volume: Decimal) -> FeeResult<Decimal> {
    let rule = find_other_rule(rules, STORAGE_FEE_TYPE, STORAGE_ALL_CATEGORIES)?;
    required_amount(rule)?
        .checked_mul(volume)
        .ok_or_else(|| FeeError::overflow("storage fee"))
}

pub fn resolve_removal_fee(
    rules: &RuleSet,
    size: ProductSize,
    shipping_speed: &str,
) -> FeeResult<Decimal> {
    let descriptor = removal_descriptor(size, shipping_speed);
    let rule = find_other_rule(rules, REMOVAL_FEE_TYPE, &descriptor)?;
    required_amount(rule)
}

fn weight_cell(rule: &WeightRule, location: Location) -> (&'static str, Option<&str>) {
    match location {
        Location::Local => ("local", rule.local.as_deref()),
        Location::Regional => ("regional", rule.regional.as_deref()),
        Location::National => ("national", rule.national.as_deref()),
        Location::Special => ("specialRegions", rule.special_regions.as_deref()),
    }
}

fn closing_cell(rule: &ClosingRule, mode: ShippingMode) -> (&'static str, Option<&str>) {
    match mode {
        ShippingMode::Fba => ("fbaNormal", rule.fba_normal.as_deref()),
        ShippingMode::EasyShip => ("easyShip", rule.easy_ship.as_deref()),
        ShippingMode::SelfShip => ("selfShip", rule.self_ship.as_deref()),
        ShippingMode::SellerFlex => ("sellerFlex", rule.seller_flex.as_deref()),
    }
}

fn find_other_rule<'a>(
    rules: &'a RuleSet,
    fee_type: &str,
    applicable_on: &str,
) -> FeeResult<&'a OtherRule> {
    rules
        .other_rules()
        .find(|rule| other_rule_matches(rule, fee_type, applicable_on))
        .ok_or_else(|| {
            FeeError::not_found(
                RuleKind::Other,
                format!("fee type {:?} applicable on {:?}", fee_type, applicable_on),
            )
        })
}

/// Empty cell is zero; a present but unparsable cell is an error.
fn optional_amount(kind: RuleKind, field: &str, cell: Option<&str>) -> FeeResult<Decimal> {
    match cell {
        None => Ok(Decimal::ZERO),
        Some(raw) => parse_amount(raw).ok_or_else(|| FeeError::malformed(kind, field, Some(raw))),
    }
}

fn required_amount(rule: &OtherRule) -> FeeResult<Decimal> {
    let raw = rule.value.as_deref();
    raw.and_then(parse_amount)
        .ok_or_else(|| FeeError::malformed(RuleKind::Other, "value", raw))
}
