use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::{AppError, Result};

/// First month of the Indian financial year (April)
pub const FINANCIAL_YEAR_START_MONTH: u32 = 4;

/// A calendar month, the unit invoices are aggregated over
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BillingPeriod {
    // Field order matters for the derived ordering: year first.
    pub year: i32,
    pub month: u32,
}

impl BillingPeriod {
    /// Create a validated billing period (month 1-12, year within the
    /// calendar range `NaiveDate` can represent)
    pub fn new(month: u32, year: i32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(AppError::validation(format!(
                "month must be between 1 and 12, got: {}",
                month
            )));
        }

        let (min_year, max_year) = (NaiveDate::MIN.year(), NaiveDate::MAX.year());
        if !(min_year..=max_year).contains(&year) {
            return Err(AppError::validation(format!(
                "year must be between {} and {}, got: {}",
                min_year, max_year, year
            )));
        }

        Ok(Self { year, month })
    }

    /// Billing period a date falls in
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// True when `date` is inside this calendar month
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// True when `date` is in the same calendar year, on or before the end of
    /// this month
    pub fn is_year_to_date(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() <= self.month
    }

    /// The following calendar month, `None` past the last representable year
    pub fn next(&self) -> Option<Self> {
        if self.month >= 12 {
            self.year.checked_add(1).map(|year| Self { year, month: 1 })
        } else {
            Some(Self {
                year: self.year,
                month: self.month + 1,
            })
        }
    }
}

impl fmt::Display for BillingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// An inclusive run of billing periods, e.g. a financial year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportingPeriod {
    pub from: BillingPeriod,
    pub to: BillingPeriod,
}

impl ReportingPeriod {
    /// Create a reporting period, rejecting `from` after `to`
    pub fn new(from: BillingPeriod, to: BillingPeriod) -> Result<Self> {
        if from > to {
            return Err(AppError::validation(format!(
                "period start ({}) must be before or equal to period end ({})",
                from, to
            )));
        }

        Ok(Self { from, to })
    }

    /// April `start_year` through March `start_year + 1`
    pub fn financial_year(start_year: i32) -> Result<Self> {
        let end_year = start_year.checked_add(1).ok_or_else(|| {
            AppError::validation(format!("financial year {} is out of range", start_year))
        })?;

        Self::new(
            BillingPeriod::new(FINANCIAL_YEAR_START_MONTH, start_year)?,
            BillingPeriod::new(FINANCIAL_YEAR_START_MONTH - 1, end_year)?,
        )
    }

    /// Every billing period in order, both ends included
    pub fn months(&self) -> impl Iterator<Item = BillingPeriod> {
        let to = self.to;
        std::iter::successors(Some(self.from), move |p| p.next().filter(|next| *next <= to))
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        let period = BillingPeriod::of(date);
        period >= self.from && period <= self.to
    }
}

impl fmt::Display for ReportingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.from, self.to)
    }
}
