//! Numeric form field parsing.
//!
//! Fields are parsed the way a browser `parseInt` reads them: leading
//! whitespace is skipped, an optional sign and the leading run of digits are
//! kept, anything after is ignored. Values beyond the `i64` range saturate.

use crate::domain::entities::DEFAULT_PCT;

/// Parses the leading integer of a form value.
#[must_use]
pub fn parse_leading_int(value: &str) -> Option<i64> {
    let trimmed = value.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());

    if end == 0 {
        return None;
    }

    let magnitude = digits[..end].bytes().fold(0_i64, |acc, d| {
        acc.saturating_mul(10).saturating_add(i64::from(d - b'0'))
    });

    Some(if negative { -magnitude } else { magnitude })
}

/// Parses the amount field. No fallback: unparsable amounts stay `None`.
/// Amounts too large for `i64` saturate to `i64::MAX`.
#[must_use]
pub fn parse_amount(value: &str) -> Option<i64> {
    parse_leading_int(value)
}

/// Parses the VAT percentage field, falling back to [`DEFAULT_PCT`] when
/// the value is unparsable or zero.
#[must_use]
pub fn parse_pct(value: &str) -> i64 {
    match parse_leading_int(value) {
        Some(pct) if pct != 0 => pct,
        _ => DEFAULT_PCT,
    }
}
