// ============================================================================
// Comparator
// Sign-aware ordering of decimal strings
// ============================================================================

use super::canonical::DecimalParts;
use super::errors::NumericResult;
use std::cmp::Ordering;

/// Order two magnitudes, ignoring sign.
///
/// Relies on canonical integer digits (no leading zeros), so integer digit
/// count decides first; fractions are compared as if right-padded with zeros
/// to a common length.
pub(crate) fn compare_magnitude(a: &DecimalParts, b: &DecimalParts) -> Ordering {
    a.integer
        .len()
        .cmp(&b.integer.len())
        .then_with(|| a.integer.cmp(&b.integer))
        .then_with(|| {
            let len = a.fraction.len().max(b.fraction.len());
            let padded = |digits: &[u8]| {
                (0..len)
                    .map(|i| digits.get(i).copied().unwrap_or(0))
                    .collect::<Vec<u8>>()
            };
            padded(&a.fraction).cmp(&padded(&b.fraction))
        })
}

/// Full signed ordering. Any positive value (zero included) beats any
/// negative one; two negatives invert their magnitude ordering.
pub(crate) fn compare_parts(a: &DecimalParts, b: &DecimalParts) -> Ordering {
    match (a.negative, b.negative) {
        (false, true) => Ordering::Greater,
        (true, false) => Ordering::Less,
        (false, false) => compare_magnitude(a, b),
        (true, true) => compare_magnitude(b, a),
    }
}

/// Order plain digit runs that may carry leading zeros.
pub(crate) fn compare_digits(a: &[u8], b: &[u8]) -> Ordering {
    let a = trim_leading_zeros(a);
    let b = trim_leading_zeros(b);
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

pub(crate) fn trim_leading_zeros(digits: &[u8]) -> &[u8] {
    let leading = digits.iter().take_while(|&&d| d == 0).count();
    &digits[leading..]
}

/// Compare two decimal strings numerically.
///
/// Inputs need not be canonical: `compare("-0", "0.000")` is `Equal`.
///
/// # Errors
/// Returns `InvalidNumber` if either input is not numeric.
///
/// # Example
/// ```
/// use digit_decimal::numeric::compare;
/// use std::cmp::Ordering;
///
/// assert_eq!(compare("-5", "-3").unwrap(), Ordering::Less);
/// assert_eq!(compare("1.50", "1.5").unwrap(), Ordering::Equal);
/// ```
pub fn compare(a: &str, b: &str) -> NumericResult<Ordering> {
    let a = DecimalParts::parse(a)?;
    let b = DecimalParts::parse(b)?;
    Ok(compare_parts(&a, &b))
}
