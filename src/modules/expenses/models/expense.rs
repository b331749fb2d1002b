use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A deductible business expense (laptop, internet, subscriptions)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub category: String,
    pub amount: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub date: NaiveDate,
}

impl Expense {
    pub fn new(
        id: impl Into<String>,
        category: impl Into<String>,
        amount: Decimal,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            category: category.into(),
            amount,
            note: None,
            date,
        }
    }
}
