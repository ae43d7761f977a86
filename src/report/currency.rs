//! Euro amount formatting.
//!
//! Amounts are rounded to cents here and nowhere else. Output follows the
//! `es-ES` convention: `,` as decimal separator, `.` grouping thousands only
//! when the integer part has at least five digits (`1234,50 €` but
//! `12.345,50 €`).

use rust_decimal::{Decimal, RoundingStrategy};

/// Smallest integer-part length that gets thousands separators.
const MIN_GROUPING_DIGITS: usize = 5;

/// Formats an amount as euros with the `€` sign.
///
/// # Examples
///
/// ```
/// use employer_cost_engine::report::format_eur;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_eur(Decimal::from(39594)), "39.594,00 €");
/// assert_eq!(format_eur(Decimal::new(329950, 2)), "3299,50 €");
/// ```
pub fn format_eur(amount: Decimal) -> String {
    format!("{} €", format_amount(amount))
}

/// Formats an amount as euros with an `EUR` suffix, for plain-text output.
pub fn format_eur_ascii(amount: Decimal) -> String {
    format!("{} EUR", format_amount(amount))
}

fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();

    let mut magnitude = rounded.abs();
    magnitude.rescale(2);
    let digits = magnitude.to_string();
    let (integer, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut out = String::with_capacity(digits.len() + 4);
    if negative {
        out.push('-');
    }
    out.push_str(&group_thousands(integer));
    out.push(',');
    out.push_str(fraction);
    out
}

fn group_thousands(integer: &str) -> String {
    if integer.len() < MIN_GROUPING_DIGITS {
        return integer.to_string();
    }

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}
