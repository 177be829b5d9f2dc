//! Rule-matching predicates, one per rule kind.
//!
//! The rate sheet is hand-maintained free text, so weight-handling rows are
//! matched by token containment and "Other Fees" rows by exact descriptor.
//! The token vocabulary lives in [`crate::constants`].

use rust_decimal::Decimal;

use super::fees_model::{ProductSize, ShippingMode};
use crate::constants::{
    HEAVY_BULKY_TOKEN, PICK_AND_PACK_OVERSIZE, PICK_AND_PACK_STANDARD,
    STANDARD_SIZE_MAX_WEIGHT_GRAMS, STANDARD_SIZE_TOKEN,
};
use crate::rates::{ClosingRule, OtherRule, ReferralRule, WeightRule};
use crate::utils::parse_price_range;

/// Size token for a parcel weight in grams. The threshold is inclusive.
pub fn size_token_for_weight(weight_grams: Decimal) -> &'static str {
    if weight_grams <= STANDARD_SIZE_MAX_WEIGHT_GRAMS {
        STANDARD_SIZE_TOKEN
    } else {
        HEAVY_BULKY_TOKEN
    }
}

/// Exact, case-sensitive category match.
pub fn referral_rule_matches(rule: &ReferralRule, category: &str) -> bool {
    rule.category == category
}

/// Descriptor must contain a spelling of the shipping mode and the size token.
pub fn weight_rule_matches(rule: &WeightRule, mode: ShippingMode, size_token: &str) -> bool {
    let descriptor = rule.weight_range.as_str();
    descriptor.contains(size_token)
        && mode
            .sheet_tokens()
            .iter()
            .any(|token| descriptor.contains(token))
}

/// Inclusive `min <= price <= max`. Unparsable ranges never match.
pub fn closing_rule_matches(rule: &ClosingRule, price: Decimal) -> bool {
    match parse_price_range(&rule.price_range) {
        Some((min, max)) => min <= price && price <= max,
        None => {
            log::warn!(
                "Ignoring closing fee row with unparsable price range {:?}",
                rule.price_range
            );
            false
        }
    }
}

/// Exact fee-type and applicability match for "Other Fees" rows.
pub fn other_rule_matches(rule: &OtherRule, fee_type: &str, applicable_on: &str) -> bool {
    rule.fee_type == fee_type && rule.applicable_on == applicable_on
}

pub fn pick_and_pack_descriptor(size: ProductSize) -> &'static str {
    match size {
        ProductSize::Standard => PICK_AND_PACK_STANDARD,
        ProductSize::NonStandard => PICK_AND_PACK_OVERSIZE,
    }
}

/// `"Standard Size - {speed} Shipping"` or `"Heavy & Bulky - {speed} Shipping"`,
/// with the speed substituted verbatim.
pub fn removal_descriptor(size: ProductSize, shipping_speed: &str) -> String {
    let size_token = match size {
        ProductSize::Standard => STANDARD_SIZE_TOKEN,
        ProductSize::NonStandard => HEAVY_BULKY_TOKEN,
    };
    format!("{} - {} Shipping", size_token, shipping_speed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn weight_rule(descriptor: &str) -> WeightRule {
        WeightRule {
            weight_range: descriptor.to_string(),
            local: None,
            regional: None,
            national: None,
            special_regions: None,
        }
    }

    fn closing_rule(range: &str) -> ClosingRule {
        ClosingRule {
            price_range: range.to_string(),
            fba_normal: None,
            easy_ship: None,
            self_ship: None,
            seller_flex: None,
        }
    }

    #[test]
    fn size_token_boundary_is_inclusive() {
        assert_eq!(size_token_for_weight(dec!(500)), "Standard Size");
        assert_eq!(size_token_for_weight(dec!(12000)), "Standard Size");
        assert_eq!(size_token_for_weight(dec!(12000.01)), "Heavy & Bulky");
    }

    #[test]
    fn referral_match_is_case_sensitive() {
        let rule = ReferralRule {
            category: "Books".into(),
            referral_fee_percentage: None,
        };
        assert!(referral_rule_matches(&rule, "Books"));
        assert!(!referral_rule_matches(&rule, "books"));
        assert!(!referral_rule_matches(&rule, "Books "));
    }

    #[test]
    fn weight_rule_needs_both_mode_and_size_tokens() {
        let rule = weight_rule("FBA - Standard Size - First 500 grams");
        assert!(weight_rule_matches(&rule, ShippingMode::Fba, "Standard Size"));
        assert!(!weight_rule_matches(&rule, ShippingMode::Fba, "Heavy & Bulky"));
        assert!(!weight_rule_matches(
            &rule,
            ShippingMode::EasyShip,
            "Standard Size"
        ));
    }

    #[test]
    fn weight_rule_accepts_both_mode_spellings() {
        let spaced = weight_rule("Easy Ship Heavy & Bulky");
        let compact = weight_rule("EasyShip Heavy & Bulky");
        assert!(weight_rule_matches(
            &spaced,
            ShippingMode::EasyShip,
            "Heavy & Bulky"
        ));
        assert!(weight_rule_matches(
            &compact,
            ShippingMode::EasyShip,
            "Heavy & Bulky"
        ));
        assert!(!weight_rule_matches(
            &spaced,
            ShippingMode::SelfShip,
            "Heavy & Bulky"
        ));
    }

    #[test]
    fn closing_range_bounds_are_inclusive() {
        let rule = closing_rule("251-500");
        assert!(closing_rule_matches(&rule, dec!(251)));
        assert!(closing_rule_matches(&rule, dec!(500)));
        assert!(!closing_rule_matches(&rule, dec!(500.01)));
        assert!(!closing_rule_matches(&rule, dec!(250.99)));
    }

    #[test]
    fn unparsable_closing_range_never_matches() {
        assert!(!closing_rule_matches(&closing_rule("above 1000"), dec!(5000)));
    }

    #[test]
    fn other_rules_match_exact_descriptors() {
        let rule = OtherRule {
            fee_type: "Pick & Pack Fee".into(),
            applicable_on: "Oversize/Heavy & Bulky".into(),
            value: Some("₹50".into()),
        };
        assert!(other_rule_matches(
            &rule,
            "Pick & Pack Fee",
            pick_and_pack_descriptor(ProductSize::NonStandard)
        ));
        assert!(!other_rule_matches(
            &rule,
            "Pick & Pack Fee",
            pick_and_pack_descriptor(ProductSize::Standard)
        ));
        assert!(!other_rule_matches(&rule, "Storage Fee", "Oversize/Heavy & Bulky"));
    }

    #[test]
    fn descriptor_vocabulary() {
        assert_eq!(pick_and_pack_descriptor(ProductSize::Standard), "Standard Size");
        assert_eq!(
            pick_and_pack_descriptor(ProductSize::NonStandard),
            "Oversize/Heavy & Bulky"
        );
        assert_eq!(
            removal_descriptor(ProductSize::Standard, "Standard"),
            "Standard Size - Standard Shipping"
        );
        assert_eq!(
            removal_descriptor(ProductSize::NonStandard, "Expedited"),
            "Heavy & Bulky - Expedited Shipping"
        );
    }
}
