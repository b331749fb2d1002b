//! FreelanceFlow financial engine
//!
//! Invoice aggregation, Indian tax estimation (GST, TDS, income tax) and
//! report rollups for a single freelancer, served over a small JSON API.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use modules::clients::{BillingModel, Client};
pub use modules::expenses::Expense;
pub use modules::invoices::{aggregate_monthly_invoice, AggregatedInvoice, InvoiceAggregator};
pub use modules::reports::{RecordSnapshot, ReportService};
pub use modules::taxes::{TaxCalculator, TaxSummary, TaxSummaryInput};
pub use modules::time_tracking::TimeEntry;
