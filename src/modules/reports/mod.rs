pub mod controllers;
pub mod models;
pub mod services;

pub use models::{MonthlyDashboard, RecordSnapshot, TaxReport};
pub use services::ReportService;
