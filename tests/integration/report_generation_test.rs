//! Integration tests for report generation
//!
//! Rolls a year of records up through the report service and checks the
//! figures fed to the tax engine.

#[path = "../helpers/mod.rs"]
mod helpers;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use freelanceflow::core::{BillingPeriod, ReportingPeriod};
use freelanceflow::modules::clients::models::{BillingModel, Client};
use freelanceflow::modules::reports::models::RecordSnapshot;
use freelanceflow::modules::reports::services::ReportService;
use freelanceflow::modules::taxes::models::{ClientPayment, TaxRegime};

use helpers::{date, entry, fy_snapshot};

#[test]
fn test_financial_year_rollup() {
    let service = ReportService::default();
    let fy = ReportingPeriod::financial_year(2025).unwrap();
    let input = service.rollup_tax_inputs(&fy_snapshot(false), &fy, false);

    assert_eq!(input.gross_receipts, dec!(1080000));
    assert_eq!(input.domestic_receipts, dec!(780000));
    assert_eq!(input.export_receipts, dec!(300000));
    assert_eq!(input.total_expenses, dec!(150000));
    assert!(!input.is_gst_registered);

    // Only TDS-deducting clients with receipts
    assert_eq!(
        input.payments_by_client,
        vec![
            ClientPayment::new("acme", dec!(180000)),
            ClientPayment::new("globex", dec!(600000)),
        ]
    );
}

#[test]
fn test_tax_report_matches_direct_summary() {
    let service = ReportService::default();
    let snapshot = fy_snapshot(false);
    let fy = ReportingPeriod::financial_year(2025).unwrap();

    let report = service.tax_report(&snapshot, fy, false);

    assert_eq!(report.total_receipts(), dec!(1080000));
    assert_eq!(report.receipts_by_client.len(), 3);
    assert_eq!(report.expenses_by_category[0].category, "Internet");

    // Below 20L and unregistered
    assert!(!report.summary.gst.threshold_exceeded);
    assert_eq!(report.summary.tds.tds_withheld, dec!(78000));
    assert_eq!(report.summary.recommended, TaxRegime::Regular);
}

#[test]
fn test_quarter_rollup() {
    let service = ReportService::default();
    let q1 = ReportingPeriod::new(
        BillingPeriod::new(4, 2025).unwrap(),
        BillingPeriod::new(6, 2025).unwrap(),
    )
    .unwrap();

    let input = service.rollup_tax_inputs(&fy_snapshot(false), &q1, false);
    // 45,000 hourly + 1,50,000 retainer + 3,00,000 project
    assert_eq!(input.gross_receipts, dec!(495000));
    assert_eq!(input.total_expenses, dec!(120000));
}

#[test]
fn test_dashboard_totals() {
    let service = ReportService::default();
    let dashboard = service.monthly_dashboard(&fy_snapshot(true), BillingPeriod::new(3, 2026).unwrap());

    assert_eq!(dashboard.invoices.len(), 3);
    // acme: 15,000 + 2,700 GST; YTD 2026 is 45,000 so TDS 1,500
    assert_eq!(dashboard.invoices[0].tds, dec!(1500));
    // globex: 50,000 + 9,000 GST - 5,000 TDS
    assert_eq!(dashboard.invoices[1].total, dec!(54000));
    // initech: export, no GST
    assert_eq!(dashboard.invoices[2].gst, Decimal::ZERO);

    assert_eq!(dashboard.gst, dec!(11700));
    assert_eq!(dashboard.tds, dec!(6500));
    assert_eq!(dashboard.revenue, dec!(16200) + dec!(54000) + dec!(300000));
}

#[test]
fn test_empty_snapshot_produces_empty_reports() {
    let service = ReportService::default();
    let snapshot = RecordSnapshot::default();

    let dashboard = service.monthly_dashboard(&snapshot, BillingPeriod::new(5, 2025).unwrap());
    assert!(dashboard.is_empty());
    assert_eq!(dashboard.revenue, Decimal::ZERO);

    let report = service.tax_report(&snapshot, ReportingPeriod::financial_year(2025).unwrap(), false);
    assert_eq!(report.total_receipts(), Decimal::ZERO);
    assert_eq!(report.summary.recommended, TaxRegime::Regular);
}

#[test]
fn test_snapshot_is_left_untouched() {
    let service = ReportService::default();
    let snapshot = RecordSnapshot {
        clients: vec![Client::new("h-1", "Hooli", BillingModel::Hourly)],
        time_entries: vec![entry("t-1", "h-1", date(2025, 7, 1), dec!(2), dec!(999.75))],
        ..Default::default()
    };
    let before = serde_json::to_value(&snapshot).unwrap();

    service.tax_report(&snapshot, ReportingPeriod::financial_year(2025).unwrap(), true);

    assert_eq!(serde_json::to_value(&snapshot).unwrap(), before);
}
