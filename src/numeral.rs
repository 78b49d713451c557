//! Count rendering for [Pluralizer::format](crate::Pluralizer::format).
//!
//! A format spec is a kind letter plus optional precision digits, in the
//! style of standard numeric format strings: `G` (plain), `N0` / `N2`
//! (grouped), `F1` (fixed-point), `D4` (zero-padded). An invalid spec is an
//! error here; the formatter recovers it and the error never travels any
//! further.

use thiserror::Error;

#[derive(Debug, Error)]
#[error("{0:?} is not a valid count format spec")]
pub(crate) struct FormatSpecError(String);

pub(crate) fn format_count(count: i64, spec: &str) -> Result<String, FormatSpecError> {
    let invalid = || FormatSpecError(spec.to_string());

    let mut chars = spec.chars();
    let kind = chars.next().ok_or_else(invalid)?;
    let precision_digits = chars.as_str();
    let precision = if precision_digits.is_empty() {
        None
    } else if precision_digits.len() <= 2 {
        Some(precision_digits.parse::<usize>().map_err(|_| invalid())?)
    } else {
        return Err(invalid());
    };

    match kind.to_ascii_uppercase() {
        // A precision is legal for "G" but means nothing for an integer.
        'G' => Ok(count.to_string()),
        'D' => Ok(zero_pad(count, precision.unwrap_or(0))),
        'N' => Ok(with_decimals(group_thousands(count), precision.unwrap_or(2))),
        'F' => Ok(with_decimals(count.to_string(), precision.unwrap_or(2))),
        _ => Err(invalid()),
    }
}

fn group_thousands(count: i64) -> String {
    let digits = count.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if count < 0 {
        grouped.push('-');
    }
    for (i, digit) in digits.bytes().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit as char);
    }
    grouped
}

fn with_decimals(mut rendered: String, precision: usize) -> String {
    if precision > 0 {
        rendered.push('.');
        for _ in 0..precision {
            rendered.push('0');
        }
    }
    rendered
}

fn zero_pad(count: i64, width: usize) -> String {
    let digits = count.unsigned_abs().to_string();
    let mut padded = String::with_capacity(digits.len().max(width) + 1);
    if count < 0 {
        padded.push('-');
    }
    for _ in digits.len()..width {
        padded.push('0');
    }
    padded.push_str(&digits);
    padded
}
