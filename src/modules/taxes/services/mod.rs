pub mod income_tax;
pub mod tax_calculator;

pub use income_tax::{
    apply_slabs, calculate_income_tax_new_regime, calculate_presumptive_44ada, effective_rate,
};
pub use tax_calculator::{get_tax_summary, TaxCalculator};
