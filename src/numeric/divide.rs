// ============================================================================
// Divider
// Long division on digit strings with a fractional-digit cap
// ============================================================================

use super::additive::{sub_digits, sub_parts};
use super::canonical::DecimalParts;
use super::compare::{compare_digits, compare_magnitude, trim_leading_zeros};
use super::errors::{NumericError, NumericResult};
use super::multiply::multiply_parts;
use std::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fractional digits produced before a non-terminating quotient is cut off.
pub const DEFAULT_MAX_DECIMAL_LENGTH: u32 = 15;

/// Quotient and remainder of a capped division.
///
/// `remainder` is the exact non-negative value `|a| - |quotient| * |b|`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DivisionResult {
    pub quotient: String,
    pub remainder: String,
}

impl DivisionResult {
    /// True when the quotient is exact (nothing was cut off).
    pub fn is_exact(&self) -> bool {
        self.remainder == "0"
    }
}

/// Feed one dividend digit into the running remainder and return the next
/// quotient digit (repeated subtract-and-count).
fn long_division_step(remainder: &mut Vec<u8>, digit: u8, divisor: &[u8]) -> u8 {
    remainder.push(digit);
    trim_in_place(remainder);

    let mut count = 0;
    while compare_digits(remainder, divisor) != Ordering::Less {
        *remainder = sub_digits(remainder, divisor);
        trim_in_place(remainder);
        count += 1;
    }
    count
}

/// Drop leading zeros so an empty run means a zero remainder.
fn trim_in_place(digits: &mut Vec<u8>) {
    let leading = digits.len() - trim_leading_zeros(digits).len();
    digits.drain(..leading);
}

pub(crate) fn divide_parts(
    a: &DecimalParts,
    b: &DecimalParts,
    max_decimal_length: u32,
) -> NumericResult<DecimalParts> {
    if b.is_zero() {
        return Err(NumericError::DivisionByZero);
    }
    if a.is_zero() {
        return Ok(DecimalParts::zero());
    }

    let negative = a.negative != b.negative;

    // Covers b == +-1 as well as 10^k divisors
    if let Some(k) = b.power_of_ten() {
        return Ok(a.shift(-k).with_sign(negative));
    }
    if compare_magnitude(a, b) == Ordering::Equal {
        return Ok(DecimalParts::one().with_sign(negative));
    }

    // Scale both sides until the divisor is an integer
    let scale = b.fraction.len() as i64;
    let dividend = a.abs().shift(scale);
    let divisor = b.abs().shift(scale);

    let mut remainder = Vec::with_capacity(divisor.integer.len() + 1);
    let mut quotient =
        Vec::with_capacity(dividend.integer.len() + max_decimal_length as usize);

    for &digit in &dividend.integer {
        quotient.push(long_division_step(&mut remainder, digit, &divisor.integer));
    }

    // Keep extending with the dividend's own fraction digits, then zeros,
    // until the division terminates or the cap is reached.
    let mut pending = dividend.fraction.iter().copied();
    let mut fraction_len = 0usize;
    while fraction_len < max_decimal_length as usize {
        let digit = match pending.next() {
            Some(digit) => digit,
            None if remainder.is_empty() => break,
            None => 0,
        };
        quotient.push(long_division_step(&mut remainder, digit, &divisor.integer));
        fraction_len += 1;
    }

    Ok(DecimalParts::from_digits(negative, &quotient, fraction_len))
}

pub(crate) fn divide_with_remainder_parts(
    a: &DecimalParts,
    b: &DecimalParts,
    max_decimal_length: u32,
) -> NumericResult<(DecimalParts, DecimalParts)> {
    let quotient = divide_parts(a, b, max_decimal_length)?;
    let remainder = sub_parts(&a.abs(), &multiply_parts(&quotient.abs(), &b.abs()));
    Ok((quotient, remainder))
}

/// Divide `a` by `b`, producing at most `max_decimal_length` fractional
/// digits. Terminating quotients are exact; repeating ones are truncated.
///
/// # Errors
/// - `InvalidNumber` if either input is not numeric
/// - `DivisionByZero` if `b` is zero
///
/// # Example
/// ```
/// use digit_decimal::numeric::{divide, DEFAULT_MAX_DECIMAL_LENGTH};
///
/// assert_eq!(divide("1", "3", 5).unwrap(), "0.33333");
/// assert_eq!(divide("10", "2", DEFAULT_MAX_DECIMAL_LENGTH).unwrap(), "5");
/// ```
pub fn divide(a: &str, b: &str, max_decimal_length: u32) -> NumericResult<String> {
    let a = DecimalParts::parse(a)?;
    let b = DecimalParts::parse(b)?;
    divide_parts(&a, &b, max_decimal_length).map(|q| q.to_canonical())
}

/// Like [`divide`], also reporting what the capped quotient left over.
///
/// # Errors
/// - `InvalidNumber` if either input is not numeric
/// - `DivisionByZero` if `b` is zero
pub fn divide_with_remainder(
    a: &str,
    b: &str,
    max_decimal_length: u32,
) -> NumericResult<DivisionResult> {
    let a = DecimalParts::parse(a)?;
    let b = DecimalParts::parse(b)?;
    let (quotient, remainder) = divide_with_remainder_parts(&a, &b, max_decimal_length)?;
    Ok(DivisionResult {
        quotient: quotient.to_canonical(),
        remainder: remainder.to_canonical(),
    })
}
