// Test Data Factory
//
// Builds clients, time entries and snapshots shared across test targets.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use freelanceflow::modules::clients::models::{BillingModel, Client};
use freelanceflow::modules::expenses::models::Expense;
use freelanceflow::modules::reports::models::RecordSnapshot;
use freelanceflow::modules::time_tracking::models::TimeEntry;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn entry(id: &str, client_id: &str, on: NaiveDate, hours: Decimal, rate: Decimal) -> TimeEntry {
    TimeEntry::new(id, client_id, on, hours, rate).with_description(format!("Work log {}", id))
}

/// Domestic hourly client that withholds TDS
pub fn hourly_client() -> Client {
    Client::new("acme", "Acme Pvt Ltd", BillingModel::Hourly)
        .with_default_rate(dec!(1500))
        .deducting_tds()
}

/// Domestic ₹50,000/month retainer that withholds TDS
pub fn retainer_client() -> Client {
    Client::new("globex", "Globex India", BillingModel::Monthly)
        .with_amount(dec!(50000))
        .deducting_tds()
        .created_on(date(2025, 4, 1))
}

/// Export fixed-price project
pub fn export_project_client() -> Client {
    Client::new("initech", "Initech LLC", BillingModel::Project)
        .with_amount(dec!(300000))
        .export()
}

/// A year of records for FY 2025-26:
/// - acme logs 10h/month at ₹1,500 from April through March
/// - globex pays ₹50,000 every month
/// - initech pays ₹3,00,000 once
pub fn fy_snapshot(gst_registered: bool) -> RecordSnapshot {
    let fy_months = (4..=12)
        .map(|m| (2025, m))
        .chain((1..=3).map(|m| (2026, m)));

    let time_entries = fy_months
        .enumerate()
        .map(|(i, (y, m))| entry(&format!("t-{}", i + 1), "acme", date(y, m, 15), dec!(10), dec!(1500)))
        .collect();

    RecordSnapshot {
        clients: vec![hourly_client(), retainer_client(), export_project_client()],
        time_entries,
        expenses: vec![
            Expense::new("e-1", "Laptop", dec!(120000), date(2025, 6, 3)),
            Expense::new("e-2", "Internet", dec!(12000), date(2025, 9, 1)),
            Expense::new("e-3", "Software", dec!(18000), date(2026, 2, 20)),
            // Outside FY 2025-26
            Expense::new("e-4", "Software", dec!(5000), date(2026, 4, 2)),
        ],
        gst_registered,
    }
}
