use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::money::round_rupees;

/// Hours logged against a single client on a calendar day
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntry {
    pub id: String,

    pub client_id: String,

    #[serde(default)]
    pub description: String,

    /// Local calendar date (`YYYY-MM-DD`), no time-of-day
    pub date: NaiveDate,

    pub hours: Decimal,

    /// ₹/hour
    pub rate: Decimal,
}

impl TimeEntry {
    pub fn new(
        id: impl Into<String>,
        client_id: impl Into<String>,
        date: NaiveDate,
        hours: Decimal,
        rate: Decimal,
    ) -> Self {
        Self {
            id: id.into(),
            client_id: client_id.into(),
            description: String::new(),
            date,
            hours,
            rate,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// hours × rate rounded half up to whole rupees
    pub fn billed_amount(&self) -> Decimal {
        round_rupees(self.hours.saturating_mul(self.rate))
    }

    pub fn belongs_to(&self, client_id: &str) -> bool {
        self.client_id == client_id
    }
}
