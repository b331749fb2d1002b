// Client record as supplied by the storage collaborator.
//
// A client's billing model decides which monetary field is authoritative:
// `amount` for Monthly/Project retainers, the time entries' rates for Hourly.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How a client is billed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BillingModel {
    /// Billed from logged hours × rate
    Hourly,
    /// Fixed retainer every month
    Monthly,
    /// Fixed price for the project period
    Project,
}

impl std::fmt::Display for BillingModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BillingModel::Hourly => write!(f, "Hourly"),
            BillingModel::Monthly => write!(f, "Monthly"),
            BillingModel::Project => write!(f, "Project"),
        }
    }
}

impl std::str::FromStr for BillingModel {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hourly" => Ok(BillingModel::Hourly),
            "monthly" => Ok(BillingModel::Monthly),
            "project" => Ok(BillingModel::Project),
            _ => Err(format!("Invalid billing model: {}", s)),
        }
    }
}

/// A freelancer's client
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: String,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    pub billing_model: BillingModel,

    /// Monthly retainer or fixed project price (pre-tax)
    #[serde(default)]
    pub amount: Decimal,

    /// `false` marks an export client, zero-rated for GST
    pub domestic: bool,

    /// Whether this client is assumed to withhold TDS
    pub tds_deducts: bool,

    /// ₹/hour default for Hourly clients
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_rate: Option<Decimal>,

    /// Date the client was added; reports skip months before it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDate>,
}

impl Client {
    pub fn new(id: impl Into<String>, name: impl Into<String>, billing_model: BillingModel) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: None,
            billing_model,
            amount: Decimal::ZERO,
            domestic: true,
            tds_deducts: false,
            default_rate: None,
            created_at: None,
        }
    }

    pub fn with_amount(mut self, amount: Decimal) -> Self {
        self.amount = amount;
        self
    }

    pub fn with_default_rate(mut self, rate: Decimal) -> Self {
        self.default_rate = Some(rate);
        self
    }

    pub fn export(mut self) -> Self {
        self.domestic = false;
        self
    }

    pub fn deducting_tds(mut self) -> Self {
        self.tds_deducts = true;
        self
    }

    pub fn created_on(mut self, date: NaiveDate) -> Self {
        self.created_at = Some(date);
        self
    }

    pub fn is_fixed_fee(&self) -> bool {
        matches!(self.billing_model, BillingModel::Monthly | BillingModel::Project)
    }
}
