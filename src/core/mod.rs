pub mod error;
pub mod money;
pub mod period;

pub use error::{AppError, Result};
pub use period::{BillingPeriod, ReportingPeriod};
