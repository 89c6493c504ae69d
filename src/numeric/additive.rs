// ============================================================================
// Adder / Subtractor
// Digit-wise addition and subtraction with carry/borrow propagation
// ============================================================================

use super::canonical::DecimalParts;
use super::compare::compare_magnitude;
use super::errors::NumericResult;
use std::cmp::Ordering;

/// Line both magnitudes up on the decimal point.
///
/// Returns equal-length digit runs and the shared fraction length.
fn align(a: &DecimalParts, b: &DecimalParts) -> (Vec<u8>, Vec<u8>, usize) {
    let int_len = a.integer.len().max(b.integer.len());
    let frac_len = a.fraction.len().max(b.fraction.len());

    let pad = |parts: &DecimalParts| {
        let mut digits = Vec::with_capacity(int_len + frac_len);
        digits.resize(int_len - parts.integer.len(), 0);
        digits.extend_from_slice(&parts.integer);
        digits.extend_from_slice(&parts.fraction);
        digits.resize(int_len + frac_len, 0);
        digits
    };

    (pad(a), pad(b), frac_len)
}

/// Add two digit runs, least significant position first.
///
/// `y` may be shorter than `x`; missing high digits count as zero.
pub(crate) fn add_digits(x: &[u8], y: &[u8]) -> Vec<u8> {
    let len = x.len().max(y.len());
    let mut out = Vec::with_capacity(len + 1);
    let mut carry = 0u8;
    for i in 0..len {
        let dx = if i < x.len() { x[x.len() - 1 - i] } else { 0 };
        let dy = if i < y.len() { y[y.len() - 1 - i] } else { 0 };
        let sum = dx + dy + carry;
        out.push(sum % 10);
        carry = sum / 10;
    }
    if carry > 0 {
        out.push(carry);
    }
    out.reverse();
    out
}

/// Subtract `y` from `x` with borrow propagation. Requires `x >= y`.
pub(crate) fn sub_digits(x: &[u8], y: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(x.len());
    let mut borrow = 0u8;
    for i in 0..x.len() {
        let dx = x[x.len() - 1 - i];
        let dy = if i < y.len() { y[y.len() - 1 - i] } else { 0 };
        let subtrahend = dy + borrow;
        if dx < subtrahend {
            out.push(dx + 10 - subtrahend);
            borrow = 1;
        } else {
            out.push(dx - subtrahend);
            borrow = 0;
        }
    }
    out.reverse();
    out
}

pub(crate) fn add_parts(a: &DecimalParts, b: &DecimalParts) -> DecimalParts {
    if a.is_zero() {
        return b.clone();
    }
    if b.is_zero() {
        return a.clone();
    }

    match (a.negative, b.negative) {
        // -x + y == y - x
        (true, false) => sub_parts(b, &a.abs()),
        // x + -y == x - y
        (false, true) => sub_parts(a, &b.abs()),
        _ => {
            let (x, y, frac_len) = align(a, b);
            DecimalParts::from_digits(a.negative, &add_digits(&x, &y), frac_len)
        }
    }
}

pub(crate) fn sub_parts(a: &DecimalParts, b: &DecimalParts) -> DecimalParts {
    if b.is_zero() {
        return a.clone();
    }
    if a.is_zero() {
        return b.negated();
    }
    if a.negative != b.negative {
        return add_parts(a, &b.negated());
    }

    let (x, y, frac_len) = align(a, b);
    match compare_magnitude(a, b) {
        Ordering::Equal => DecimalParts::zero(),
        Ordering::Greater => DecimalParts::from_digits(a.negative, &sub_digits(&x, &y), frac_len),
        // |a| < |b|: compute the reverse difference and flip the sign
        Ordering::Less => DecimalParts::from_digits(!a.negative, &sub_digits(&y, &x), frac_len),
    }
}

/// Exact sum of two decimal strings.
///
/// # Errors
/// Returns `InvalidNumber` if either input is not numeric.
///
/// # Example
/// ```
/// use digit_decimal::numeric::add;
///
/// assert_eq!(add("0.1", "0.2").unwrap(), "0.3");
/// assert_eq!(add("-1.25", "1.25").unwrap(), "0");
/// ```
pub fn add(a: &str, b: &str) -> NumericResult<String> {
    let a = DecimalParts::parse(a)?;
    let b = DecimalParts::parse(b)?;
    Ok(add_parts(&a, &b).to_canonical())
}

/// Exact difference `a - b` of two decimal strings.
///
/// # Errors
/// Returns `InvalidNumber` if either input is not numeric.
pub fn subtract(a: &str, b: &str) -> NumericResult<String> {
    let a = DecimalParts::parse(a)?;
    let b = DecimalParts::parse(b)?;
    Ok(sub_parts(&a, &b).to_canonical())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::NumericError;

    #[test]
    fn test_add_exact_fractions() {
        assert_eq!(add("0.1", "0.2").unwrap(), "0.3");
        assert_eq!(add("1.005", "2.995").unwrap(), "4");
        assert_eq!(add("999.99", "0.01").unwrap(), "1000");
    }

    #[test]
    fn test_add_carry_into_new_digit() {
        assert_eq!(add("99999", "1").unwrap(), "100000");
        assert_eq!(add("0.9", "0.1").unwrap(), "1");
    }

    #[test]
    fn test_add_mixed_signs() {
        assert_eq!(add("-5", "3").unwrap(), "-2");
        assert_eq!(add("5", "-3").unwrap(), "2");
        assert_eq!(add("-1.5", "-2.25").unwrap(), "-3.75");
        assert_eq!(add("-1.25", "1.25").unwrap(), "0");
    }

    #[test]
    fn test_add_zero_fast_path() {
        assert_eq!(add("0", "-7.5").unwrap(), "-7.5");
        assert_eq!(add("12.30", "0").unwrap(), "12.3");
    }

    #[test]
    fn test_subtract_basic() {
        assert_eq!(subtract("10", "3").unwrap(), "7");
        assert_eq!(subtract("3", "10").unwrap(), "-7");
        assert_eq!(subtract("1", "0.001").unwrap(), "0.999");
        assert_eq!(subtract("100.5", "100.5").unwrap(), "0");
    }

    #[test]
    fn test_subtract_negative_operands() {
        assert_eq!(subtract("-2", "-3").unwrap(), "1");
        assert_eq!(subtract("-3", "-2").unwrap(), "-1");
        assert_eq!(subtract("-2", "3").unwrap(), "-5");
        assert_eq!(subtract("2", "-3").unwrap(), "5");
    }

    #[test]
    fn test_subtract_from_zero() {
        assert_eq!(subtract("0", "4.2").unwrap(), "-4.2");
        assert_eq!(subtract("0", "-4.2").unwrap(), "4.2");
        assert_eq!(subtract("0", "0").unwrap(), "0");
    }

    #[test]
    fn test_subtract_borrow_chain() {
        assert_eq!(subtract("1000", "1").unwrap(), "999");
        assert_eq!(subtract("1.0001", "0.0002").unwrap(), "0.9999");
    }

    #[test]
    fn test_subtract_matches_add_negated() {
        for (a, b) in [("5", "8"), ("-1.5", "0.25"), ("3.3", "-3.3"), ("0", "9")] {
            let negated = crate::numeric::negate(b).unwrap();
            assert_eq!(subtract(a, b).unwrap(), add(a, &negated).unwrap());
        }
    }

    #[test]
    fn test_additive_invalid_input() {
        assert_eq!(add("1", "one"), Err(NumericError::InvalidNumber));
        assert_eq!(subtract("", "1"), Err(NumericError::InvalidNumber));
    }

    #[test]
    fn test_digit_helpers() {
        assert_eq!(add_digits(&[9, 9], &[1]), vec![1, 0, 0]);
        assert_eq!(sub_digits(&[1, 0, 0], &[1]), vec![0, 9, 9]);
    }
}
