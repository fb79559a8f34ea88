//! Number formatting for report presentation
//!
//! Indian digit grouping (last three digits, then pairs), lakhs conversion and
//! the `"-"` placeholder for values that cannot be shown (NaN, infinities).

use rust_decimal::{Decimal, RoundingStrategy};

/// Placeholder printed for non-finite values
pub const PLACEHOLDER: &str = "-";

/// One lakh (1,00,000)
pub const LAKH: f64 = 100_000.0;

/// Format `value` with `decimals` places using Indian digit grouping.
///
/// `1234567.0` with 0 decimals becomes `"12,34,567"`. Negative values keep the
/// sign ahead of the grouped digits and non-finite values return `"-"`.
pub fn format_indian_number(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return PLACEHOLDER.to_string();
    }

    let fixed = fixed_magnitude(value.abs(), decimals);
    let (int_part, dec_part) = match fixed.split_once('.') {
        Some((int_part, dec_part)) => (int_part, Some(dec_part)),
        None => (fixed.as_str(), None),
    };

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 2 + 1);
    if value < 0.0 && !is_zero_digits(&fixed) {
        out.push('-');
    }
    out.push_str(&group_indian(int_part));
    if let Some(dec_part) = dec_part {
        out.push('.');
        out.push_str(dec_part);
    }
    out
}

/// Format `value` in lakhs (value / 1,00,000) with Indian grouping.
pub fn format_lakhs(value: f64, decimals: usize) -> String {
    format_indian_number(value / LAKH, decimals)
}

/// [`format_lakhs`] with the usual two decimal places.
pub fn format_lakhs_default(value: f64) -> String {
    format_lakhs(value, 2)
}

/// Fixed-decimal percentage with a `%` suffix, e.g. `"25.0%"`.
pub fn format_percent(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return PLACEHOLDER.to_string();
    }
    format!("{}%", to_fixed(value, decimals))
}

/// Two-decimal ratio, e.g. `"1.33"`.
pub fn format_ratio(value: f64) -> String {
    if !value.is_finite() {
        return PLACEHOLDER.to_string();
    }
    to_fixed(value, 2)
}

/// Signed fixed-decimal rendering without grouping.
pub fn to_fixed(value: f64, decimals: usize) -> String {
    let fixed = fixed_magnitude(value.abs(), decimals);
    if value < 0.0 && !is_zero_digits(&fixed) {
        format!("-{}", fixed)
    } else {
        fixed
    }
}

/// Render a non-negative magnitude with `decimals` places.
///
/// Rounds the exact binary value half away from zero, so only true ties round
/// up (`2.675` is stored below the half and gives `"2.67"`). Magnitudes outside
/// the `Decimal` range use the standard formatter.
fn fixed_magnitude(abs: f64, decimals: usize) -> String {
    let rounded = u32::try_from(decimals).ok().and_then(|dp| {
        let mut value = Decimal::from_f64_retain(abs)?
            .round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
        value.rescale(dp);
        (value.scale() == dp).then_some(value)
    });

    match rounded {
        Some(value) => value.to_string(),
        None => format!("{:.*}", decimals, abs),
    }
}

fn is_zero_digits(fixed: &str) -> bool {
    fixed.chars().all(|c| c == '0' || c == '.')
}

/// Insert Indian-style separators into a string of ASCII digits.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, last_three) = digits.split_at(digits.len() - 3);
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 2);

    // Leading group is one or two digits, then pairs.
    let lead = head.len() % 2;
    if lead == 1 {
        grouped.push_str(&head[..1]);
    }
    for (i, pair) in head.as_bytes()[lead..].chunks(2).enumerate() {
        if i > 0 || lead == 1 {
            grouped.push(',');
        }
        // chunks of ASCII digits are always valid UTF-8
        grouped.push_str(std::str::from_utf8(pair).unwrap_or_default());
    }
    grouped.push(',');
    grouped.push_str(last_three);
    grouped
}
