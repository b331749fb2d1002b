//! Integration tests for the full tax summary
//!
//! Drives `get_tax_summary` end to end on realistic FY aggregates and checks
//! that sub-results, recommendation and advisory notes line up.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use freelanceflow::modules::taxes::models::{ClientPayment, TaxRegime, TaxSummaryInput};
use freelanceflow::modules::taxes::services::{get_tax_summary, TaxCalculator};

fn input(gross: Decimal, expenses: Decimal) -> TaxSummaryInput {
    TaxSummaryInput {
        gross_receipts: gross,
        domestic_receipts: gross,
        export_receipts: Decimal::ZERO,
        total_expenses: expenses,
        ..Default::default()
    }
}

#[test]
fn test_presumptive_recommended_for_high_receipts_low_expenses() {
    let summary = get_tax_summary(&input(dec!(4000000), dec!(100000)));

    assert_eq!(summary.regular.taxable_income, dec!(3900000));
    assert_eq!(summary.presumptive.result.taxable_income, dec!(2000000));
    // slab base 19,25,000: 20k + 40k + 60k + 0.20 * 3,25,000
    assert_eq!(summary.presumptive.result.income_tax, dec!(185000));
    assert_eq!(summary.recommended, TaxRegime::Presumptive);

    // 7,27,500 / 40,00,000
    assert_eq!(summary.regular.effective_rate, dec!(0.181875));
}

#[test]
fn test_regular_recommended_when_expenses_are_high() {
    // Regular: 30L - 20L = 10L, under the exemption limit
    // Presumptive: 15L, taxable
    let summary = get_tax_summary(&input(dec!(3000000), dec!(2000000)));

    assert_eq!(summary.regular.income_tax, Decimal::ZERO);
    assert!(summary.presumptive.result.income_tax > Decimal::ZERO);
    assert_eq!(summary.recommended, TaxRegime::Regular);
}

#[test]
fn test_expenses_above_receipts_clamp_to_zero() {
    let summary = get_tax_summary(&input(dec!(500000), dec!(800000)));
    assert_eq!(summary.regular.taxable_income, Decimal::ZERO);
    assert_eq!(summary.regular.income_tax, Decimal::ZERO);
}

#[test]
fn test_summary_combines_gst_and_tds() {
    let summary = get_tax_summary(&TaxSummaryInput {
        gross_receipts: dec!(2500000),
        domestic_receipts: dec!(1500000),
        export_receipts: dec!(1000000),
        total_expenses: dec!(300000),
        payments_by_client: vec![
            ClientPayment::new("A", dec!(20000)),
            ClientPayment::new("A", dec!(15000)),
            ClientPayment::new("B", dec!(40000)),
        ],
        special_category_state: false,
        is_gst_registered: false,
    });

    assert!(summary.gst.threshold_exceeded);
    assert_eq!(summary.gst.gst_owed, dec!(270000));
    assert_eq!(summary.gst.notes, vec!["Exports are zero-rated under GST.".to_string()]);

    assert_eq!(summary.tds.tds_withheld, dec!(7500));
    assert_eq!(summary.tds.clients_deducting, vec!["A".to_string(), "B".to_string()]);
}

#[test]
fn test_receipts_are_not_reconciled() {
    // Domestic + export need not add up to gross
    let summary = get_tax_summary(&TaxSummaryInput {
        gross_receipts: dec!(100000),
        domestic_receipts: dec!(900000),
        export_receipts: dec!(50000),
        is_gst_registered: true,
        ..Default::default()
    });

    assert_eq!(summary.gst.gst_owed, dec!(162000));
    assert_eq!(summary.regular.taxable_income, dec!(100000));
}

#[test]
fn test_summary_is_deterministic() {
    let calc = TaxCalculator::new();
    let request = input(dec!(2750000), dec!(450000));
    assert_eq!(calc.tax_summary(&request), calc.tax_summary(&request));
}

#[test]
fn test_negative_inputs_degrade_to_zero() {
    let summary = get_tax_summary(&TaxSummaryInput {
        gross_receipts: dec!(-100),
        domestic_receipts: dec!(-100),
        export_receipts: dec!(-5),
        total_expenses: dec!(-50),
        payments_by_client: vec![ClientPayment::new("A", dec!(-40000))],
        ..Default::default()
    });

    assert_eq!(summary.gst.gst_owed, Decimal::ZERO);
    assert_eq!(summary.tds.tds_withheld, Decimal::ZERO);
    assert_eq!(summary.regular.income_tax, Decimal::ZERO);
    assert_eq!(summary.regular.effective_rate, Decimal::ZERO);
    assert_eq!(summary.recommended, TaxRegime::Regular);
}

#[test]
fn test_extreme_inputs_saturate_instead_of_failing() {
    let summary = get_tax_summary(&TaxSummaryInput {
        gross_receipts: Decimal::MAX,
        domestic_receipts: Decimal::MAX,
        export_receipts: Decimal::MAX,
        total_expenses: Decimal::MIN,
        payments_by_client: vec![
            ClientPayment::new("A", Decimal::MAX),
            ClientPayment::new("A", Decimal::MAX),
        ],
        is_gst_registered: true,
        ..Default::default()
    });

    assert_eq!(summary.regular.taxable_income, Decimal::MAX);
    assert!(summary.regular.income_tax > Decimal::ZERO);
    assert!(summary.gst.gst_owed > Decimal::ZERO);
    assert_eq!(summary.tds.clients_deducting, vec!["A".to_string()]);
    assert!(!summary.presumptive.eligible);
    assert_eq!(summary.recommended, TaxRegime::Regular);
}

#[test]
fn test_tiny_receipts_against_negative_expenses() {
    let summary = get_tax_summary(&input(dec!(0.0000000001), Decimal::MIN));
    assert_eq!(summary.regular.taxable_income, Decimal::MAX);
    assert_eq!(summary.regular.effective_rate, Decimal::MAX);
}
