// ============================================================================
// Digit Separators
// Thousands grouping and separator removal
// ============================================================================

use crate::numeric::{NumericError, NumericResult};
use crate::utils::group_digits;

/// Split plain decimal text (`-?\d+(\.\d+)?`) into sign, integer and fraction.
fn split_plain(value: &str) -> NumericResult<(bool, &str, &str)> {
    let (negative, body) = match value.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, value),
    };
    let (integer, fraction) = match body.split_once('.') {
        Some((integer, fraction)) if !fraction.is_empty() => (integer, fraction),
        Some(_) => return Err(NumericError::InvalidNumber),
        None => (body, ""),
    };

    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if integer.is_empty() || !all_digits(integer) || !all_digits(fraction) {
        return Err(NumericError::InvalidNumber);
    }
    Ok((negative, integer, fraction))
}

/// Group the integer digits of a plain decimal string.
///
/// The input is taken verbatim (zero-padded fractions survive); with
/// `group_fraction` the fraction digits are grouped too, counted from the
/// decimal point.
///
/// # Errors
/// Returns `InvalidNumber` unless the input matches `-?\d+(\.\d+)?`.
///
/// # Example
/// ```
/// use digit_decimal::format::format_by;
///
/// assert_eq!(format_by("-1234567.5", ',', 3, false).unwrap(), "-1,234,567.5");
/// assert_eq!(format_by("1234.56789", ' ', 3, true).unwrap(), "1 234.567 89");
/// ```
pub fn format_by(
    value: &str,
    separator: char,
    group_size: usize,
    group_fraction: bool,
) -> NumericResult<String> {
    let (negative, integer, fraction) = split_plain(value)?;

    let mut out = String::with_capacity(value.len() * 2);
    if negative {
        out.push('-');
    }
    out.push_str(&group_digits(integer, separator, group_size, true));
    if !fraction.is_empty() {
        out.push('.');
        if group_fraction {
            out.push_str(&group_digits(fraction, separator, group_size, false));
        } else {
            out.push_str(fraction);
        }
    }
    Ok(out)
}

/// Group integer digits in threes with `,`.
///
/// # Errors
/// Returns `InvalidNumber` unless the input is plain decimal text.
pub fn format_thousands(value: &str) -> NumericResult<String> {
    format_by(value, ',', 3, false)
}

/// Remove every occurrence of `separator` from `input`.
pub fn clear_separators(input: &str, separator: &str) -> String {
    if separator.is_empty() {
        return input.to_string();
    }
    input.replace(separator, "")
}
