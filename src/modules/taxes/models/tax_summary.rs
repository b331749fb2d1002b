use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Payment received from one client (several may share a client id)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientPayment {
    pub client_id: String,
    pub amount: Decimal,
}

impl ClientPayment {
    pub fn new(client_id: impl Into<String>, amount: Decimal) -> Self {
        Self {
            client_id: client_id.into(),
            amount,
        }
    }
}

/// Inputs for the GST sub-computation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GstInput {
    /// Total revenue for the FY
    pub gross_receipts: Decimal,
    /// Receipts from clients in India
    pub domestic_receipts: Decimal,
    /// INR equivalent of receipts from foreign clients
    pub export_receipts: Decimal,
    /// Special category states register at 10L instead of 20L
    #[serde(default)]
    pub special_category_state: bool,
    /// Explicit registration forces liability below the threshold
    #[serde(default)]
    pub is_registered: bool,
}

/// FY-level aggregates supplied by the caller. Receipts are not reconciled
/// against each other.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxSummaryInput {
    pub gross_receipts: Decimal,
    pub domestic_receipts: Decimal,
    pub export_receipts: Decimal,
    /// Deductible expenses
    pub total_expenses: Decimal,
    #[serde(default)]
    pub payments_by_client: Vec<ClientPayment>,
    #[serde(default)]
    pub special_category_state: bool,
    #[serde(default, rename = "isGSTRegistered", alias = "isGstRegistered")]
    pub is_gst_registered: bool,
}

impl TaxSummaryInput {
    pub fn gst_input(&self) -> GstInput {
        GstInput {
            gross_receipts: self.gross_receipts,
            domestic_receipts: self.domestic_receipts,
            export_receipts: self.export_receipts,
            special_category_state: self.special_category_state,
            is_registered: self.is_gst_registered,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GstResult {
    pub threshold_exceeded: bool,
    pub gst_owed: Decimal,
    pub notes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TdsResult {
    pub tds_withheld: Decimal,
    /// Client ids in first-seen order
    pub clients_deducting: Vec<String>,
    pub notes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeTaxResult {
    pub taxable_income: Decimal,
    pub income_tax: Decimal,
    /// income_tax / gross receipts, zero when there are no receipts
    pub effective_rate: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresumptiveResult {
    #[serde(flatten)]
    pub result: IncomeTaxResult,
    pub eligible: bool,
}

/// Which income-tax computation the freelancer should file under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaxRegime {
    Regular,
    Presumptive,
}

impl std::fmt::Display for TaxRegime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaxRegime::Regular => write!(f, "regular"),
            TaxRegime::Presumptive => write!(f, "presumptive"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxSummary {
    pub gst: GstResult,
    pub tds: TdsResult,
    pub regular: IncomeTaxResult,
    pub presumptive: PresumptiveResult,
    pub recommended: TaxRegime,
}
