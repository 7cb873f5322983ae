//! Shared money helpers: financial rounding and es-AR currency formatting.
//!
//! Every peso amount the tool prints goes through [`format_ars`]; sections
//! that formatted currency on their own have historically drifted apart, so
//! this is the single place where the display convention lives.

use rust_decimal::{Decimal, RoundingStrategy};

/// Months in a fiscal year, used to annualize monthly amounts.
pub const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 are rounded away from zero, matching the rounding
/// the calculation service applies on its side.
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats an amount as Argentine pesos: `$ 1.234,50`.
///
/// Two fixed decimal digits, `.` as thousands separator, `,` as decimal
/// separator, and a non-breaking space between the symbol and the number,
/// mirroring what `Intl.NumberFormat("es-AR")` produces. Negative amounts
/// carry a leading minus: `-$ 500,00`.
pub fn format_ars(value: Decimal) -> String {
    let rounded = round_half_up(value);
    let negative = rounded < Decimal::ZERO;
    let fixed = format!("{:.2}", rounded.abs());

    let (int_part, dec_part) = fixed
        .split_once('.')
        .unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::new();
    for (i, c) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    if negative {
        format!("-$\u{a0}{grouped},{dec_part}")
    } else {
        format!("$\u{a0}{grouped},{dec_part}")
    }
}

/// Formats a percentage with a fixed number of decimal places, e.g. `12.35%`.
pub fn format_pct(
    value: Decimal,
    decimals: usize,
) -> String {
    let rounded = value
        .round_dp_with_strategy(decimals as u32, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.decimals$}%")
}
