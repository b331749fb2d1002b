use rust_decimal::Decimal;

/// 0.5, the half-up rounding offset
const HALF: Decimal = Decimal::from_parts(5, 0, 0, false, 1);
const TEN: Decimal = Decimal::TEN;
const RUPEES_PER_LAKH: i64 = 1_00_000;

/// Rounds to whole rupees, half up (`2.5 -> 3`, `-2.5 -> -2`).
///
/// Invoices never carry paise; every line item and every tax figure on an
/// invoice goes through this.
pub fn round_rupees(amount: Decimal) -> Decimal {
    amount.saturating_add(HALF).floor()
}

/// Rounds to one decimal place, half up. Used for hour totals.
pub fn round_tenth(value: Decimal) -> Decimal {
    value.saturating_mul(TEN).saturating_add(HALF).floor() / TEN
}

/// Sum that clamps at `Decimal::MAX`/`Decimal::MIN` instead of panicking.
///
/// Every rollup over user-supplied amounts goes through this.
pub fn saturating_sum<I>(values: I) -> Decimal
where
    I: IntoIterator<Item = Decimal>,
{
    values
        .into_iter()
        .fold(Decimal::ZERO, |acc, value| acc.saturating_add(value))
}

/// Decimal rate for a whole percentage (`percent(18) == 0.18`)
pub fn percent(p: u32) -> Decimal {
    Decimal::new(i64::from(p), 2)
}

/// Formats an amount the way `en-IN` renders INR: rupee sign, lakh/crore
/// grouping, no fraction.
pub fn format_inr(amount: Decimal) -> String {
    let rounded = round_rupees(amount);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let digits = rounded.abs().trunc().to_string();

    let grouped = group_indian(&digits);
    if negative {
        format!("-₹{}", grouped)
    } else {
        format!("₹{}", grouped)
    }
}

/// Whole-lakh label used in advisory notes (`20,00,000 -> "20L"`)
pub fn format_lakhs(amount: i64) -> String {
    format!("{}L", amount / RUPEES_PER_LAKH)
}

// Last three digits form one group, the rest are grouped in pairs.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}
