use rust_decimal::Decimal;
use tracing::debug;

use crate::core::money::{percent, round_rupees, saturating_sum};
use crate::core::BillingPeriod;
use crate::modules::clients::models::{BillingModel, Client};
use crate::modules::invoices::models::line_item::sum_amounts;
use crate::modules::invoices::models::{AggregatedInvoice, LineItem};
use crate::modules::taxes::models::tax_rules::{GST_RATE_PERCENT, TDS_RATE_PERCENT, TDS_THRESHOLD};
use crate::modules::time_tracking::models::TimeEntry;

const MONTHS_PER_YEAR: i64 = 12;

/// Builds monthly invoices from client records and time entries.
///
/// Pure: reads the snapshot it is given and returns a new invoice.
pub struct InvoiceAggregator;

impl InvoiceAggregator {
    pub fn new() -> Self {
        Self
    }

    /// Aggregate one client's invoice for (`month`, `year`).
    ///
    /// GST is charged only for domestic clients when the freelancer is
    /// registered. TDS eligibility is tested on an annualized estimate but
    /// withheld from this month's base.
    pub fn aggregate_monthly(
        &self,
        client: &Client,
        entries: &[TimeEntry],
        gst_registered: bool,
        month: u32,
        year: i32,
    ) -> AggregatedInvoice {
        let period = BillingPeriod { year, month };

        let items: Vec<LineItem> = entries
            .iter()
            .filter(|e| e.belongs_to(&client.id) && period.contains(e.date))
            .map(LineItem::from_entry)
            .collect();

        let base = if client.is_fixed_fee() {
            client.amount
        } else {
            sum_amounts(&items)
        };

        let gst = if client.domestic && gst_registered {
            round_rupees(base.saturating_mul(percent(GST_RATE_PERCENT)))
        } else {
            Decimal::ZERO
        };

        let annualized = self.annualized_receipts(client, entries, period);
        let tds = if client.tds_deducts && annualized > Decimal::from(TDS_THRESHOLD) {
            round_rupees(base.saturating_mul(percent(TDS_RATE_PERCENT)))
        } else {
            Decimal::ZERO
        };

        let invoice = AggregatedInvoice {
            client_id: client.id.clone(),
            client_name: client.name.clone(),
            month,
            year,
            items,
            subtotal: base,
            gst,
            tds,
            total: base.saturating_add(gst).saturating_sub(tds),
        };

        debug!(
            client_id = %client.id,
            period = %period,
            items = invoice.items.len(),
            hours = %invoice.total_hours(),
            base = %base,
            annualized = %annualized,
            gst = %gst,
            tds = %tds,
            "Aggregated monthly invoice"
        );

        invoice
    }

    /// Projected annual receipts used only for the TDS threshold test.
    ///
    /// Monthly retainers project twelve months; Hourly and Project clients
    /// use year-to-date billed time, target month included.
    pub fn annualized_receipts(
        &self,
        client: &Client,
        entries: &[TimeEntry],
        period: BillingPeriod,
    ) -> Decimal {
        match client.billing_model {
            BillingModel::Monthly => client.amount.saturating_mul(Decimal::from(MONTHS_PER_YEAR)),
            BillingModel::Hourly | BillingModel::Project => saturating_sum(
                entries
                    .iter()
                    .filter(|e| e.belongs_to(&client.id) && period.is_year_to_date(e.date))
                    .map(TimeEntry::billed_amount),
            ),
        }
    }
}

impl Default for InvoiceAggregator {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience wrapper over [`InvoiceAggregator::aggregate_monthly`]
pub fn aggregate_monthly_invoice(
    client: &Client,
    entries: &[TimeEntry],
    gst_registered: bool,
    month: u32,
    year: i32,
) -> AggregatedInvoice {
    InvoiceAggregator::new().aggregate_monthly(client, entries, gst_registered, month, year)
}
