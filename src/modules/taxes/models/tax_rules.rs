//! Rates and thresholds for FY 2025-26 as the estimator models them.
//!
//! Amounts are whole rupees, rates are whole percentages.

/// Assessment rules the constants below describe
pub const RULES_YEAR: &str = "FY 2025-26";

/// GST on domestic services
pub const GST_RATE_PERCENT: u32 = 18;

/// Aggregate turnover threshold for compulsory GST registration
pub const GST_THRESHOLD: i64 = 20_00_000;

/// Lower threshold for special category states
pub const GST_THRESHOLD_SPECIAL_CATEGORY: i64 = 10_00_000;

/// TDS u/s 194J on professional fees
pub const TDS_RATE_PERCENT: u32 = 10;

/// Annual payment a client must exceed (strictly) before withholding TDS
pub const TDS_THRESHOLD: i64 = 30_000;

/// New-regime income up to this is tax free (12L rebate + 75k standard deduction).
/// One rupee above it, the full slab computation applies: a cliff edge.
pub const NEW_REGIME_EXEMPTION_LIMIT: i64 = 12_75_000;

/// Standard deduction subtracted before slabs
pub const STANDARD_DEDUCTION: i64 = 75_000;

/// Sec 44ADA gross receipts ceiling
pub const PRESUMPTIVE_RECEIPTS_LIMIT: i64 = 50_00_000;

/// Sec 44ADA deemed profit ratio
pub const PRESUMPTIVE_PROFIT_PERCENT: u32 = 50;

/// One progressive band: income up to `up_to` (None = unbounded) taxed at
/// `rate_percent`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxSlab {
    pub up_to: Option<i64>,
    pub rate_percent: u32,
}

/// New-regime slabs, ordered by limit
pub const NEW_REGIME_SLABS: [TaxSlab; 7] = [
    TaxSlab { up_to: Some(4_00_000), rate_percent: 0 },
    TaxSlab { up_to: Some(8_00_000), rate_percent: 5 },
    TaxSlab { up_to: Some(12_00_000), rate_percent: 10 },
    TaxSlab { up_to: Some(16_00_000), rate_percent: 15 },
    TaxSlab { up_to: Some(20_00_000), rate_percent: 20 },
    TaxSlab { up_to: Some(24_00_000), rate_percent: 25 },
    TaxSlab { up_to: None, rate_percent: 30 },
];
