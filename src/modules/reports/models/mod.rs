mod financial_report;
mod record_snapshot;

pub use financial_report::{ClientReceipts, MonthlyDashboard, TaxReport};
pub use record_snapshot::RecordSnapshot;
