use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::money::saturating_sum;
use crate::core::ReportingPeriod;
use crate::modules::expenses::models::Expense;

/// Expense total for one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTotal {
    pub category: String,
    pub amount: Decimal,
    pub count: usize,
}

/// Sum of every expense amount
pub fn total_expenses(expenses: &[Expense]) -> Decimal {
    saturating_sum(expenses.iter().map(|e| e.amount))
}

/// Sum of expenses dated inside `period`
pub fn total_expenses_in(expenses: &[Expense], period: &ReportingPeriod) -> Decimal {
    saturating_sum(
        expenses
            .iter()
            .filter(|e| period.contains(e.date))
            .map(|e| e.amount),
    )
}

/// Per-category totals, sorted by category name
pub fn totals_by_category(expenses: &[Expense]) -> Vec<CategoryTotal> {
    let mut by_category: BTreeMap<&str, (Decimal, usize)> = BTreeMap::new();
    for expense in expenses {
        let slot = by_category
            .entry(expense.category.as_str())
            .or_insert((Decimal::ZERO, 0));
        slot.0 = slot.0.saturating_add(expense.amount);
        slot.1 += 1;
    }

    by_category
        .into_iter()
        .map(|(category, (amount, count))| CategoryTotal {
            category: category.to_string(),
            amount,
            count,
        })
        .collect()
}
