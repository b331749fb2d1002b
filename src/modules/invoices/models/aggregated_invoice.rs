// Monthly invoice derived from a client and its time entries.
//
// Never persisted: recomputed on demand from the client record, its time
// entries and the GST-registration flag.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::line_item::LineItem;
use crate::core::money::saturating_sum;

/// A client's bill for one calendar month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedInvoice {
    pub client_id: String,

    pub client_name: String,

    /// 1-12
    pub month: u32,

    pub year: i32,

    /// Entries logged in the month, in input order
    pub items: Vec<LineItem>,

    /// Pre-tax base: Σ item amounts for Hourly, the fixed fee otherwise
    pub subtotal: Decimal,

    pub gst: Decimal,

    pub tds: Decimal,

    /// subtotal + gst - tds
    pub total: Decimal,
}

impl AggregatedInvoice {
    /// Check if nothing is billed this month
    pub fn is_empty(&self) -> bool {
        self.subtotal.is_zero() && self.items.is_empty()
    }

    /// Hours logged across all items
    pub fn total_hours(&self) -> Decimal {
        saturating_sum(self.items.iter().map(|item| item.hours))
    }
}
