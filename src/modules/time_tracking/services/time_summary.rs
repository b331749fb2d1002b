use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::core::money::{round_tenth, saturating_sum};
use crate::modules::time_tracking::models::TimeEntry;

const DAYS_PER_WEEK: usize = 7;

/// Hours logged on one date
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyHours {
    pub date: NaiveDate,
    pub hours: Decimal,
}

/// Totals for one client's time entries
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientTimeSummary {
    pub client_id: String,
    /// Rounded to 0.1h
    pub total_hours: Decimal,
    /// Σ per-entry rounded hours × rate
    pub total_amount: Decimal,
    /// One point per logged date, ascending
    pub per_day: Vec<DailyHours>,
}

/// Monday-to-Sunday hours for the week containing a reference date
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekHours {
    pub week_start: NaiveDate,
    /// Index 0 is Monday; each rounded to 0.1h
    pub hours: Vec<Decimal>,
}

impl WeekHours {
    pub fn total(&self) -> Decimal {
        saturating_sum(self.hours.iter().copied())
    }
}

/// Summary of a client's logged time. Entries for other clients are ignored.
pub fn client_time_summary(client_id: &str, entries: &[TimeEntry]) -> ClientTimeSummary {
    let mut total_hours = Decimal::ZERO;
    let mut total_amount = Decimal::ZERO;
    let mut by_day: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();

    for entry in entries.iter().filter(|e| e.belongs_to(client_id)) {
        total_hours = total_hours.saturating_add(entry.hours);
        total_amount = total_amount.saturating_add(entry.billed_amount());
        let day = by_day.entry(entry.date).or_insert(Decimal::ZERO);
        *day = day.saturating_add(entry.hours);
    }

    ClientTimeSummary {
        client_id: client_id.to_string(),
        total_hours: round_tenth(total_hours),
        total_amount,
        per_day: by_day
            .into_iter()
            .map(|(date, hours)| DailyHours {
                date,
                hours: round_tenth(hours),
            })
            .collect(),
    }
}

/// Monday of the week containing `date`
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date.checked_sub_signed(Duration::days(i64::from(
        date.weekday().num_days_from_monday(),
    )))
    .unwrap_or(NaiveDate::MIN)
}

/// Hours per weekday for the week containing `reference`, across all clients.
///
/// The reference date is passed in; nothing here reads the clock.
pub fn week_hours(reference: NaiveDate, entries: &[TimeEntry]) -> WeekHours {
    let start = week_start(reference);
    let mut buckets = vec![Decimal::ZERO; DAYS_PER_WEEK];

    for entry in entries {
        let offset = (entry.date - start).num_days();
        if (0..DAYS_PER_WEEK as i64).contains(&offset) {
            buckets[offset as usize] = buckets[offset as usize].saturating_add(entry.hours);
        }
    }

    WeekHours {
        week_start: start,
        hours: buckets.into_iter().map(round_tenth).collect(),
    }
}
