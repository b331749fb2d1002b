use rust_decimal::Decimal;

use crate::core::money::percent;
use crate::modules::taxes::models::tax_rules::{
    TaxSlab, NEW_REGIME_EXEMPTION_LIMIT, NEW_REGIME_SLABS, PRESUMPTIVE_PROFIT_PERCENT,
    STANDARD_DEDUCTION,
};

/// Progressive tax on `income` over ordered slabs.
///
/// Each band taxes `min(remaining, limit - previous_limit)`; the fold stops
/// once nothing remains. Non-positive income yields zero.
pub fn apply_slabs(income: Decimal, slabs: &[TaxSlab]) -> Decimal {
    let mut remaining = income.max(Decimal::ZERO);
    let mut previous_limit = Decimal::ZERO;
    let mut tax = Decimal::ZERO;

    for slab in slabs {
        if remaining <= Decimal::ZERO {
            break;
        }

        let band = match slab.up_to {
            Some(limit) => remaining.min(Decimal::from(limit) - previous_limit),
            None => remaining,
        }
        .max(Decimal::ZERO);

        tax += band * percent(slab.rate_percent);
        remaining -= band;
        if let Some(limit) = slab.up_to {
            previous_limit = Decimal::from(limit);
        }
    }

    tax.max(Decimal::ZERO)
}

/// Income tax under the new regime.
///
/// Up to 12,75,000 the tax is zero. Above it the standard deduction comes
/// off and the full slab table applies, so 12,75,001 owes tax on 12,00,001.
pub fn calculate_income_tax_new_regime(taxable_income: Decimal) -> Decimal {
    if taxable_income <= Decimal::from(NEW_REGIME_EXEMPTION_LIMIT) {
        return Decimal::ZERO;
    }

    let slab_base = (taxable_income - Decimal::from(STANDARD_DEDUCTION)).max(Decimal::ZERO);
    apply_slabs(slab_base, &NEW_REGIME_SLABS)
}

/// Deemed taxable income under Sec 44ADA (expenses are ignored)
pub fn calculate_presumptive_44ada(gross_receipts: Decimal) -> Decimal {
    gross_receipts * percent(PRESUMPTIVE_PROFIT_PERCENT)
}

/// `income_tax / gross_receipts`, zero when there are no receipts.
///
/// A quotient too large to represent clamps to `Decimal::MAX`.
pub fn effective_rate(income_tax: Decimal, gross_receipts: Decimal) -> Decimal {
    if gross_receipts > Decimal::ZERO {
        income_tax.checked_div(gross_receipts).unwrap_or(Decimal::MAX)
    } else {
        Decimal::ZERO
    }
}
