pub mod tax_rules;
mod tax_summary;

pub use tax_rules::{TaxSlab, NEW_REGIME_SLABS};
pub use tax_summary::{
    ClientPayment, GstInput, GstResult, IncomeTaxResult, PresumptiveResult, TaxRegime,
    TaxSummary, TaxSummaryInput, TdsResult,
};
