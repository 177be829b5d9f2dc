//! Property-based integration tests for fee resolution.
//!
//! A fixed rate sheet is parsed from CSV text through the public API and
//! random calculator inputs are resolved against it.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use pricing_calculator_core::fees::{
    aggregate, resolve, CalculatorInput, Location, ProductSize, ServiceLevel, ShippingMode,
};
use pricing_calculator_core::rates::{parse_sheet, RateSheet, RuleSet};

// =============================================================================
// Fixture
// =============================================================================

fn rate_sheet() -> RuleSet {
    let sheets = [
        (
            RateSheet::Referral,
            "Category,Referral Fee Percentage\nBooks,10%\nElectronics,15\n",
        ),
        (
            RateSheet::Closing,
            "Price Range,FBA Normal,Easy Ship,Self Ship,Seller Flex\n\
             0-500,5,4,4,5\n\
             500-100000,20,18,15,20\n",
        ),
        (
            RateSheet::WeightHandling,
            "Weight Range,Local,Regional,National,Special\n\
             FBA - Standard Size - First 500 grams,30,40,61,86\n\
             Easy Ship - Standard Size - First 500 grams,43,54,74,116\n\
             FBA - Heavy & Bulky - First 12 kg,192,277,371,466\n\
             Easy Ship - Heavy & Bulky - First 12 kg,205,290,384,479\n",
        ),
        (
            RateSheet::Other,
            "Fee Type,Applicable On,Value\n\
             Pick & Pack Fee,Standard Size,₹14\n\
             Pick & Pack Fee,Oversize/Heavy & Bulky,₹26\n\
             Storage Fee,All Categories,₹45 per cubic foot per month\n\
             Removal Fees,Standard Size - Standard Shipping,₹10\n\
             Removal Fees,Heavy & Bulky - Standard Shipping,₹100\n",
        ),
    ];

    let mut rules = Vec::new();
    for (sheet, text) in sheets {
        rules.extend(parse_sheet(sheet, text).expect("fixture sheet parses"));
    }
    RuleSet::new(rules)
}

// =============================================================================
// Generators
// =============================================================================

fn arb_price() -> impl Strategy<Value = Decimal> {
    (1i64..10_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

fn arb_weight() -> impl Strategy<Value = Decimal> {
    (1i64..30_000).prop_map(Decimal::from)
}

fn arb_mode() -> impl Strategy<Value = ShippingMode> {
    prop_oneof![Just(ShippingMode::Fba), Just(ShippingMode::EasyShip)]
}

fn arb_location() -> impl Strategy<Value = Location> {
    prop_oneof![
        Just(Location::Local),
        Just(Location::Regional),
        Just(Location::National),
        Just(Location::Special),
    ]
}

fn arb_size() -> impl Strategy<Value = ProductSize> {
    prop_oneof![Just(ProductSize::Standard), Just(ProductSize::NonStandard)]
}

fn arb_input() -> impl Strategy<Value = CalculatorInput> {
    (
        prop_oneof![Just("Books"), Just("Electronics")],
        arb_price(),
        arb_weight(),
        arb_mode(),
        arb_size(),
        arb_location(),
        proptest::option::of((0i64..100).prop_map(|v| Decimal::new(v, 1))),
        proptest::option::of(Just("Standard".to_string())),
    )
        .prop_map(
            |(category, price, weight, mode, size, location, volume, speed)| CalculatorInput {
                category: category.to_string(),
                selling_price: price,
                weight,
                shipping_mode: mode,
                service_level: ServiceLevel::Standard,
                product_size: size,
                location,
                volume,
                shipping_speed: speed,
            },
        )
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn totals_balance_against_selling_price(input in arb_input()) {
        let rules = rate_sheet();
        let breakdown = resolve(&input, &rules).unwrap();
        let totals = aggregate(&breakdown, input.selling_price).unwrap();

        prop_assert_eq!(totals.total_fees + totals.net_earnings, input.selling_price);
        prop_assert!(breakdown.referral_fee >= Decimal::ZERO);
        prop_assert!(breakdown.storage_fee >= Decimal::ZERO);
    }

    #[test]
    fn referral_fee_is_a_fixed_share_of_price(input in arb_input()) {
        let rules = rate_sheet();
        let breakdown = resolve(&input, &rules).unwrap();
        let pct = if input.category == "Books" { dec!(10) } else { dec!(15) };

        prop_assert_eq!(breakdown.referral_fee, input.selling_price * pct / dec!(100));
    }

    #[test]
    fn weight_class_switches_above_twelve_kilograms(input in arb_input()) {
        let rules = rate_sheet();
        let breakdown = resolve(&input, &rules).unwrap();

        if input.weight <= dec!(12000) {
            prop_assert!(breakdown.weight_handling_fee < dec!(150));
        } else {
            prop_assert!(breakdown.weight_handling_fee > dec!(150));
        }
    }

    #[test]
    fn optional_fees_follow_their_inputs(input in arb_input()) {
        let rules = rate_sheet();
        let breakdown = resolve(&input, &rules).unwrap();

        match input.volume {
            Some(v) if !v.is_zero() => prop_assert_eq!(breakdown.storage_fee, dec!(45) * v),
            _ => prop_assert_eq!(breakdown.storage_fee, Decimal::ZERO),
        }
        if input.shipping_speed.is_none() {
            prop_assert_eq!(breakdown.removal_fee, Decimal::ZERO);
        } else {
            prop_assert!(breakdown.removal_fee > Decimal::ZERO);
        }
    }
}
