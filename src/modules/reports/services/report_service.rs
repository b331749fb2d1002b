use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::core::money::saturating_sum;
use crate::core::{BillingPeriod, ReportingPeriod};
use crate::modules::clients::models::{BillingModel, Client};
use crate::modules::expenses::services::{total_expenses_in, totals_by_category};
use crate::modules::invoices::services::InvoiceAggregator;
use crate::modules::reports::models::{ClientReceipts, MonthlyDashboard, RecordSnapshot, TaxReport};
use crate::modules::taxes::models::{ClientPayment, TaxSummaryInput};
use crate::modules::taxes::services::TaxCalculator;

/// Service for rolling raw records up into dashboards and tax reports.
///
/// This is the collaborator-side glue between the invoice aggregator and
/// the tax engine; the two never call each other directly.
pub struct ReportService {
    aggregator: InvoiceAggregator,
    calculator: TaxCalculator,
}

impl ReportService {
    /// Create a new report service
    pub fn new(aggregator: InvoiceAggregator, calculator: TaxCalculator) -> Self {
        Self {
            aggregator,
            calculator,
        }
    }

    /// Aggregate every client's invoice for one month and sum the KPIs
    pub fn monthly_dashboard(&self, snapshot: &RecordSnapshot, period: BillingPeriod) -> MonthlyDashboard {
        let invoices = snapshot
            .clients
            .iter()
            .map(|client| {
                self.aggregator.aggregate_monthly(
                    client,
                    &snapshot.time_entries,
                    snapshot.gst_registered,
                    period.month,
                    period.year,
                )
            })
            .collect();

        let dashboard = MonthlyDashboard::new(period.month, period.year, invoices);

        if dashboard.is_empty() {
            warn!("Empty dashboard generated for {}", period);
        } else {
            info!(
                "Dashboard generated for {}: {} invoices, revenue={}",
                period,
                dashboard.invoices.len(),
                dashboard.revenue
            );
        }

        dashboard
    }

    /// Pre-tax receipts per client over `period`.
    ///
    /// Hourly clients contribute their billed time month by month, Monthly
    /// clients their retainer for each month they were active, Project
    /// clients their fixed price once.
    pub fn receipts_by_client(
        &self,
        snapshot: &RecordSnapshot,
        period: &ReportingPeriod,
    ) -> Vec<ClientReceipts> {
        snapshot
            .clients
            .iter()
            .map(|client| ClientReceipts {
                client_id: client.id.clone(),
                client_name: client.name.clone(),
                domestic: client.domestic,
                tds_deducts: client.tds_deducts,
                amount: self.client_receipts(client, snapshot, period),
            })
            .collect()
    }

    fn client_receipts(
        &self,
        client: &Client,
        snapshot: &RecordSnapshot,
        period: &ReportingPeriod,
    ) -> Decimal {
        let active_from = client.created_at.map(BillingPeriod::of);
        let mut months = period
            .months()
            .filter(|month| active_from.map_or(true, |start| *month >= start));

        match client.billing_model {
            BillingModel::Project => {
                if months.next().is_some() {
                    client.amount
                } else {
                    Decimal::ZERO
                }
            }
            BillingModel::Hourly | BillingModel::Monthly => saturating_sum(months.map(|month| {
                self.aggregator
                    .aggregate_monthly(
                        client,
                        &snapshot.time_entries,
                        snapshot.gst_registered,
                        month.month,
                        month.year,
                    )
                    .subtotal
            })),
        }
    }

    /// Roll the snapshot up into the FY aggregates the tax engine consumes.
    ///
    /// Only clients flagged as TDS deductors appear in `paymentsByClient`.
    pub fn rollup_tax_inputs(
        &self,
        snapshot: &RecordSnapshot,
        period: &ReportingPeriod,
        special_category_state: bool,
    ) -> TaxSummaryInput {
        let receipts = self.receipts_by_client(snapshot, period);
        Self::tax_inputs_from(&receipts, snapshot, period, special_category_state)
    }

    fn tax_inputs_from(
        receipts: &[ClientReceipts],
        snapshot: &RecordSnapshot,
        period: &ReportingPeriod,
        special_category_state: bool,
    ) -> TaxSummaryInput {
        let mut input = TaxSummaryInput {
            total_expenses: total_expenses_in(&snapshot.expenses, period),
            special_category_state,
            is_gst_registered: snapshot.gst_registered,
            ..Default::default()
        };

        for r in receipts {
            input.gross_receipts = input.gross_receipts.saturating_add(r.amount);
            if r.domestic {
                input.domestic_receipts = input.domestic_receipts.saturating_add(r.amount);
            } else {
                input.export_receipts = input.export_receipts.saturating_add(r.amount);
            }
            if r.tds_deducts && r.amount > Decimal::ZERO {
                input
                    .payments_by_client
                    .push(ClientPayment::new(r.client_id.clone(), r.amount));
            }
        }

        input
    }

    /// Receipts rollup plus the full tax summary for `period`
    pub fn tax_report(
        &self,
        snapshot: &RecordSnapshot,
        period: ReportingPeriod,
        special_category_state: bool,
    ) -> TaxReport {
        info!(
            "Generating tax report: period={}, clients={}, expenses={}",
            period,
            snapshot.clients.len(),
            snapshot.expenses.len()
        );

        let receipts_by_client = self.receipts_by_client(snapshot, &period);
        let input =
            Self::tax_inputs_from(&receipts_by_client, snapshot, &period, special_category_state);
        let summary = self.calculator.tax_summary(&input);

        let expenses_in_period: Vec<_> = snapshot
            .expenses
            .iter()
            .filter(|e| period.contains(e.date))
            .cloned()
            .collect();

        if input.gross_receipts.is_zero() {
            warn!("Tax report for {} has no receipts", period);
        }

        TaxReport {
            period,
            receipts_by_client,
            expenses_by_category: totals_by_category(&expenses_in_period),
            input,
            summary,
        }
    }
}

impl Default for ReportService {
    fn default() -> Self {
        Self::new(InvoiceAggregator::new(), TaxCalculator::new())
    }
}
