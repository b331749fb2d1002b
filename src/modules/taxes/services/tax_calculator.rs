use std::collections::HashMap;

use rust_decimal::Decimal;
use tracing::debug;

use crate::core::money::{format_inr, format_lakhs, percent};
use crate::modules::taxes::models::tax_rules::{
    GST_RATE_PERCENT, GST_THRESHOLD, GST_THRESHOLD_SPECIAL_CATEGORY, PRESUMPTIVE_RECEIPTS_LIMIT,
    TDS_RATE_PERCENT, TDS_THRESHOLD,
};
use crate::modules::taxes::models::{
    ClientPayment, GstInput, GstResult, IncomeTaxResult, PresumptiveResult, TaxRegime,
    TaxSummary, TaxSummaryInput, TdsResult,
};
use crate::modules::taxes::services::income_tax::{
    calculate_income_tax_new_regime, calculate_presumptive_44ada, effective_rate,
};

/// TaxCalculator turns FY aggregates into GST, TDS and income-tax estimates.
///
/// Every method is a pure function of its arguments.
pub struct TaxCalculator;

impl TaxCalculator {
    pub fn new() -> Self {
        Self
    }

    /// GST liability for the year.
    ///
    /// The threshold test is inclusive (`>=`); explicit registration forces
    /// liability. Exports never enter the taxable base.
    pub fn calculate_gst(&self, input: &GstInput) -> GstResult {
        let threshold = if input.special_category_state {
            GST_THRESHOLD_SPECIAL_CATEGORY
        } else {
            GST_THRESHOLD
        };
        let threshold_exceeded =
            input.gross_receipts >= Decimal::from(threshold) || input.is_registered;

        let mut notes = Vec::new();
        if !threshold_exceeded {
            notes.push(format!(
                "GST registration optional until ₹{} turnover.",
                format_lakhs(threshold)
            ));
        }

        let taxable_base = input.domestic_receipts.max(Decimal::ZERO);
        let gst_owed = if threshold_exceeded {
            taxable_base.saturating_mul(percent(GST_RATE_PERCENT))
        } else {
            Decimal::ZERO
        };

        if input.export_receipts > Decimal::ZERO {
            notes.push("Exports are zero-rated under GST.".to_string());
        }

        debug!(
            gross = %input.gross_receipts,
            threshold,
            threshold_exceeded,
            gst_owed = %gst_owed,
            "Calculated GST"
        );

        GstResult {
            threshold_exceeded,
            gst_owed,
            notes,
        }
    }

    /// Simulated TDS withheld by clients.
    ///
    /// Payments are summed per client first; a client withholds only when its
    /// total strictly exceeds the threshold.
    pub fn calculate_tds(&self, payments_by_client: &[ClientPayment]) -> TdsResult {
        let mut order: Vec<&str> = Vec::new();
        let mut totals: HashMap<&str, Decimal> = HashMap::new();
        for payment in payments_by_client {
            let id = payment.client_id.as_str();
            match totals.get_mut(id) {
                Some(total) => *total = total.saturating_add(payment.amount),
                None => {
                    order.push(id);
                    totals.insert(id, payment.amount);
                }
            }
        }

        let threshold = Decimal::from(TDS_THRESHOLD);
        let rate = percent(TDS_RATE_PERCENT);
        let mut clients_deducting = Vec::new();
        let mut tds_withheld = Decimal::ZERO;
        for id in order {
            let total = totals.get(id).copied().unwrap_or(Decimal::ZERO);
            if total > threshold {
                tds_withheld = tds_withheld.saturating_add(total.saturating_mul(rate));
                clients_deducting.push(id.to_string());
            }
        }

        debug!(
            clients = totals.len(),
            deducting = clients_deducting.len(),
            tds_withheld = %tds_withheld,
            "Calculated TDS"
        );

        TdsResult {
            tds_withheld,
            clients_deducting,
            notes: vec![
                format!(
                    "Clients may deduct {}% TDS u/s 194J when annual payment exceeds {}.",
                    TDS_RATE_PERCENT,
                    format_inr(threshold)
                ),
                "TDS is adjustable/refundable during filing.".to_string(),
            ],
        }
    }

    /// Regular (new regime) income tax on receipts less expenses
    pub fn calculate_regular(&self, gross_receipts: Decimal, total_expenses: Decimal) -> IncomeTaxResult {
        let taxable_income = gross_receipts.saturating_sub(total_expenses).max(Decimal::ZERO);
        let income_tax = calculate_income_tax_new_regime(taxable_income);

        IncomeTaxResult {
            taxable_income,
            income_tax,
            effective_rate: effective_rate(income_tax, gross_receipts),
        }
    }

    /// Sec 44ADA presumptive income tax
    pub fn calculate_presumptive(&self, gross_receipts: Decimal) -> PresumptiveResult {
        let eligible = gross_receipts <= Decimal::from(PRESUMPTIVE_RECEIPTS_LIMIT);
        let taxable_income = calculate_presumptive_44ada(gross_receipts);
        let income_tax = calculate_income_tax_new_regime(taxable_income);

        PresumptiveResult {
            result: IncomeTaxResult {
                taxable_income,
                income_tax,
                effective_rate: effective_rate(income_tax, gross_receipts),
            },
            eligible,
        }
    }

    /// Full tax summary with a regime recommendation. Ties go to regular.
    pub fn tax_summary(&self, input: &TaxSummaryInput) -> TaxSummary {
        let gst = self.calculate_gst(&input.gst_input());
        let tds = self.calculate_tds(&input.payments_by_client);
        let regular = self.calculate_regular(input.gross_receipts, input.total_expenses);
        let presumptive = self.calculate_presumptive(input.gross_receipts);

        let recommended =
            if presumptive.eligible && presumptive.result.income_tax < regular.income_tax {
                TaxRegime::Presumptive
            } else {
                TaxRegime::Regular
            };

        debug!(
            regular_tax = %regular.income_tax,
            presumptive_tax = %presumptive.result.income_tax,
            eligible = presumptive.eligible,
            %recommended,
            "Built tax summary"
        );

        TaxSummary {
            gst,
            tds,
            regular,
            presumptive,
            recommended,
        }
    }
}

impl Default for TaxCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience wrapper over [`TaxCalculator::tax_summary`]
pub fn get_tax_summary(input: &TaxSummaryInput) -> TaxSummary {
    TaxCalculator::new().tax_summary(input)
}
