// Property-based tests for new-regime slab tax
//
// - Nothing is owed up to the 12,75,000 exemption limit
// - Above it tax never decreases as income rises
// - Marginal rate never exceeds the top slab (30%)
// - Crossing the limit by one rupee jumps straight to full slab tax

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use freelanceflow::modules::taxes::models::NEW_REGIME_SLABS;
use freelanceflow::modules::taxes::services::{apply_slabs, calculate_income_tax_new_regime};

proptest! {
    #[test]
    fn test_no_tax_up_to_exemption_limit(income in 0i64..=1_275_000i64) {
        let tax = calculate_income_tax_new_regime(Decimal::from(income));
        prop_assert_eq!(tax, Decimal::ZERO);
    }

    #[test]
    fn test_tax_is_monotonic_above_limit(
        income in 1_275_001i64..50_000_000i64,
        raise in 0i64..5_000_000i64
    ) {
        let lower = calculate_income_tax_new_regime(Decimal::from(income));
        let higher = calculate_income_tax_new_regime(Decimal::from(income + raise));
        prop_assert!(higher >= lower, "tax({}) = {} < tax({}) = {}", income + raise, higher, income, lower);
    }

    #[test]
    fn test_marginal_rate_capped_at_top_slab(income in 0i64..50_000_000i64, raise in 1i64..100_000i64) {
        let lower = apply_slabs(Decimal::from(income), &NEW_REGIME_SLABS);
        let higher = apply_slabs(Decimal::from(income + raise), &NEW_REGIME_SLABS);
        prop_assert!(higher - lower <= Decimal::from(raise) * dec!(0.30));
    }

    #[test]
    fn test_tax_never_negative(income in -1_000_000i64..50_000_000i64) {
        prop_assert!(calculate_income_tax_new_regime(Decimal::from(income)) >= Decimal::ZERO);
    }

    #[test]
    fn test_tax_below_income(income in 1i64..100_000_000i64) {
        let income = Decimal::from(income);
        prop_assert!(calculate_income_tax_new_regime(income) < income);
    }
}

#[test]
fn test_cliff_at_exemption_limit() {
    assert_eq!(calculate_income_tax_new_regime(dec!(1275000)), Decimal::ZERO);
    assert_eq!(calculate_income_tax_new_regime(dec!(1275001)), dec!(60000.15));
}

#[test]
fn test_known_slab_values() {
    // 16,75,000 -> slab base 16,00,000: 20k + 40k + 60k
    assert_eq!(calculate_income_tax_new_regime(dec!(1675000)), dec!(120000));
    // 24,75,000 -> slab base 24,00,000: 20k + 40k + 60k + 80k + 1L
    assert_eq!(calculate_income_tax_new_regime(dec!(2475000)), dec!(300000));
}
