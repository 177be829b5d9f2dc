use rust_decimal::Decimal;

use super::fees_errors::FeeError;
use super::fees_model::{FeeBreakdown, FeeTotals};

/// Sums the six fee amounts and derives net earnings. Net earnings may be
/// negative when fees exceed the selling price. Fails only when a sum leaves
/// the `Decimal` range.
pub fn aggregate(
    breakdown: &FeeBreakdown,
    selling_price: Decimal,
) -> Result<FeeTotals, FeeError> {
    let total_fees = [
        breakdown.referral_fee,
        breakdown.weight_handling_fee,
        breakdown.closing_fee,
        breakdown.pick_and_pack_fee,
        breakdown.storage_fee,
        breakdown.removal_fee,
    ]
    .into_iter()
    .try_fold(Decimal::ZERO, |sum, fee| sum.checked_add(fee))
    .ok_or_else(|| FeeError::overflow("total fees"))?;

    let net_earnings = selling_price
        .checked_sub(total_fees)
        .ok_or_else(|| FeeError::overflow("net earnings"))?;

    Ok(FeeTotals {
        total_fees,
        net_earnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    #[test]
    fn sums_all_six_fees() {
        let breakdown = FeeBreakdown {
            referral_fee: dec!(100),
            weight_handling_fee: dec!(30),
            closing_fee: dec!(20),
            pick_and_pack_fee: dec!(20),
            storage_fee: dec!(4.5),
            removal_fee: dec!(10),
        };
        let totals = aggregate(&breakdown, dec!(1000)).unwrap();
        assert_eq!(totals.total_fees, dec!(184.5));
        assert_eq!(totals.net_earnings, dec!(815.5));
    }

    #[test]
    fn net_earnings_can_be_negative() {
        let breakdown = FeeBreakdown {
            referral_fee: dec!(15),
            closing_fee: dec!(25),
            weight_handling_fee: dec!(60),
            ..FeeBreakdown::default()
        };
        let totals = aggregate(&breakdown, dec!(50)).unwrap();
        assert_eq!(totals.total_fees, dec!(100));
        assert_eq!(totals.net_earnings, dec!(-50));
    }

    #[test]
    fn total_beyond_decimal_range_is_an_error() {
        let breakdown = FeeBreakdown {
            referral_fee: Decimal::MAX,
            closing_fee: dec!(1),
            ..FeeBreakdown::default()
        };
        assert_eq!(
            aggregate(&breakdown, dec!(1000)),
            Err(FeeError::Overflow("total fees".to_string()))
        );
    }

    fn cents() -> impl Strategy<Value = Decimal> {
        (0i64..10_000_000).prop_map(|c| Decimal::new(c, 2))
    }

    proptest! {
        #[test]
        fn net_plus_total_equals_price(
            fees in proptest::collection::vec(cents(), 6),
            price in cents(),
        ) {
            let breakdown = FeeBreakdown {
                referral_fee: fees[0],
                weight_handling_fee: fees[1],
                closing_fee: fees[2],
                pick_and_pack_fee: fees[3],
                storage_fee: fees[4],
                removal_fee: fees[5],
            };
            let totals = aggregate(&breakdown, price).unwrap();
            prop_assert_eq!(totals.total_fees, fees.iter().copied().sum::<Decimal>());
            prop_assert_eq!(totals.net_earnings + totals.total_fees, price);
        }
    }
}
