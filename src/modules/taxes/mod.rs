pub mod controllers;
pub mod models;
pub mod services;

pub use models::{TaxRegime, TaxSummary, TaxSummaryInput};
pub use services::TaxCalculator;
