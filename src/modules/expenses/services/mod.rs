pub mod expense_totals;

pub use expense_totals::{total_expenses, total_expenses_in, totals_by_category, CategoryTotal};
