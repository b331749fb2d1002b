// Invoice line item built from a single time entry.
//
// The amount is hours × rate rounded half up to whole rupees. Invoice
// subtotals add up these rounded amounts; they never round the raw sum.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::money::saturating_sum;
use crate::modules::time_tracking::models::TimeEntry;

/// Represents a single billed line on an aggregated invoice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Work description copied from the time entry
    pub description: String,

    /// Hours logged
    pub hours: Decimal,

    /// ₹/hour
    pub rate: Decimal,

    /// Rounded rupee amount (hours × rate, half up)
    pub amount: Decimal,
}

impl LineItem {
    /// Build a line item from a time entry, rounding its amount
    pub fn from_entry(entry: &TimeEntry) -> Self {
        Self {
            description: entry.description.clone(),
            hours: entry.hours,
            rate: entry.rate,
            amount: entry.billed_amount(),
        }
    }
}

/// Sum of already-rounded line amounts
pub fn sum_amounts(items: &[LineItem]) -> Decimal {
    saturating_sum(items.iter().map(|item| item.amount))
}
