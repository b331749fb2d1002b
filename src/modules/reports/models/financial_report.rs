use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::money::saturating_sum;
use crate::core::ReportingPeriod;
use crate::modules::expenses::services::CategoryTotal;
use crate::modules::invoices::models::AggregatedInvoice;
use crate::modules::taxes::models::{TaxSummary, TaxSummaryInput};

/// Every client's invoice for one month plus dashboard KPIs
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyDashboard {
    pub month: u32,
    pub year: i32,
    pub invoices: Vec<AggregatedInvoice>,
    /// Σ invoice totals (after GST and TDS)
    pub revenue: Decimal,
    pub gst: Decimal,
    pub tds: Decimal,
}

impl MonthlyDashboard {
    pub fn new(month: u32, year: i32, invoices: Vec<AggregatedInvoice>) -> Self {
        let revenue = saturating_sum(invoices.iter().map(|i| i.total));
        let gst = saturating_sum(invoices.iter().map(|i| i.gst));
        let tds = saturating_sum(invoices.iter().map(|i| i.tds));

        Self {
            month,
            year,
            invoices,
            revenue,
            gst,
            tds,
        }
    }

    /// Check if no client billed anything
    pub fn is_empty(&self) -> bool {
        self.invoices.iter().all(AggregatedInvoice::is_empty)
    }
}

/// Pre-tax receipts from one client over a reporting period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientReceipts {
    pub client_id: String,
    pub client_name: String,
    pub domestic: bool,
    pub tds_deducts: bool,
    pub amount: Decimal,
}

/// Receipts, expenses and the resulting tax summary for a period
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxReport {
    pub period: ReportingPeriod,
    pub receipts_by_client: Vec<ClientReceipts>,
    pub expenses_by_category: Vec<CategoryTotal>,
    /// The aggregates fed to the tax engine
    pub input: TaxSummaryInput,
    pub summary: TaxSummary,
}

impl TaxReport {
    pub fn total_receipts(&self) -> Decimal {
        saturating_sum(self.receipts_by_client.iter().map(|r| r.amount))
    }
}
