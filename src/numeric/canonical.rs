// ============================================================================
// Canonicalizer
// Normalizes numeric text into sign + integer digits + fraction digits
// ============================================================================

use super::errors::{NumericError, NumericResult};
use std::fmt;

/// Largest exponent magnitude accepted in scientific-notation input.
///
/// Bounds the number of zeros a single literal can expand into.
pub const MAX_EXPONENT: i64 = 10_000;

/// Sign-magnitude decomposition of a decimal value.
///
/// Digits are stored as values `0..=9`, most significant first. Every
/// instance handed out by this module is canonical:
/// - `integer` has no leading zero except a lone `0`
/// - `fraction` has no trailing zero
/// - zero is never negative
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct DecimalParts {
    pub(crate) negative: bool,
    pub(crate) integer: Vec<u8>,
    pub(crate) fraction: Vec<u8>,
}

impl DecimalParts {
    pub(crate) fn zero() -> Self {
        Self {
            negative: false,
            integer: vec![0],
            fraction: Vec::new(),
        }
    }

    pub(crate) fn one() -> Self {
        Self {
            negative: false,
            integer: vec![1],
            fraction: Vec::new(),
        }
    }

    /// Build from an unsigned integer magnitude.
    pub(crate) fn from_integer(negative: bool, magnitude: u128) -> Self {
        let integer = magnitude
            .to_string()
            .bytes()
            .map(|b| b - b'0')
            .collect();
        Self {
            negative,
            integer,
            fraction: Vec::new(),
        }
        .normalize()
    }

    /// Build from a run of magnitude digits whose last `fraction_len`
    /// digits sit after the decimal point.
    pub(crate) fn from_digits(negative: bool, digits: &[u8], fraction_len: usize) -> Self {
        let split = digits.len().saturating_sub(fraction_len);
        let mut fraction = Vec::with_capacity(fraction_len);
        fraction.resize(fraction_len - (digits.len() - split), 0);
        fraction.extend_from_slice(&digits[split..]);
        Self {
            negative,
            integer: digits[..split].to_vec(),
            fraction,
        }
        .normalize()
    }

    /// Parse integer, decimal or scientific-notation text.
    pub(crate) fn parse(input: &str) -> NumericResult<Self> {
        let text = input.trim();
        let (negative, body) = match text.as_bytes().first() {
            Some(b'-') => (true, &text[1..]),
            Some(b'+') => (false, &text[1..]),
            _ => (false, text),
        };

        let (mantissa, exponent) = match body.find(['e', 'E']) {
            Some(pos) => (&body[..pos], parse_exponent(&body[pos + 1..])?),
            None => (body, 0),
        };

        let (int_text, frac_text) = mantissa.split_once('.').unwrap_or((mantissa, ""));
        if int_text.is_empty() && frac_text.is_empty() {
            return Err(NumericError::InvalidNumber);
        }

        let parts = Self {
            negative,
            integer: digits_of(int_text)?,
            fraction: digits_of(frac_text)?,
        };

        if exponent == 0 {
            Ok(parts.normalize())
        } else {
            Ok(parts.shift(exponent))
        }
    }

    /// Move the decimal point `places` positions to the right (left when
    /// negative), i.e. multiply by `10^places`.
    pub(crate) fn shift(&self, places: i64) -> Self {
        let mut digits = Vec::with_capacity(self.integer.len() + self.fraction.len());
        digits.extend_from_slice(&self.integer);
        digits.extend_from_slice(&self.fraction);

        let point = self.integer.len() as i64 + places;
        if point <= 0 {
            let mut fraction = vec![0; point.unsigned_abs() as usize];
            fraction.extend_from_slice(&digits);
            return Self {
                negative: self.negative,
                integer: Vec::new(),
                fraction,
            }
            .normalize();
        }

        let point = point as usize;
        if point >= digits.len() {
            digits.resize(point, 0);
            return Self {
                negative: self.negative,
                integer: digits,
                fraction: Vec::new(),
            }
            .normalize();
        }

        let fraction = digits.split_off(point);
        Self {
            negative: self.negative,
            integer: digits,
            fraction,
        }
        .normalize()
    }

    fn normalize(mut self) -> Self {
        let leading = self.integer.iter().take_while(|&&d| d == 0).count();
        self.integer.drain(..leading);
        if self.integer.is_empty() {
            self.integer.push(0);
        }
        while self.fraction.last() == Some(&0) {
            self.fraction.pop();
        }
        if self.is_zero() {
            self.negative = false;
        }
        self
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub(crate) fn is_zero(&self) -> bool {
        self.integer.iter().all(|&d| d == 0) && self.fraction.iter().all(|&d| d == 0)
    }

    /// Returns `k` when the magnitude is exactly `10^k` (`k` may be negative).
    pub(crate) fn power_of_ten(&self) -> Option<i64> {
        if self.fraction.is_empty() {
            let (head, zeros) = self.integer.split_first()?;
            (*head == 1 && zeros.iter().all(|&d| d == 0)).then_some(zeros.len() as i64)
        } else {
            let (last, zeros) = self.fraction.split_last()?;
            (self.integer == [0] && *last == 1 && zeros.iter().all(|&d| d == 0))
                .then(|| -(self.fraction.len() as i64))
        }
    }

    /// Integer digits followed by fraction digits, without the point.
    pub(crate) fn magnitude_digits(&self) -> Vec<u8> {
        let mut digits = Vec::with_capacity(self.integer.len() + self.fraction.len());
        digits.extend_from_slice(&self.integer);
        digits.extend_from_slice(&self.fraction);
        digits
    }

    // ========================================================================
    // Sign Manipulation
    // ========================================================================

    pub(crate) fn negated(&self) -> Self {
        let mut out = self.clone();
        out.negative = !self.negative && !self.is_zero();
        out
    }

    pub(crate) fn abs(&self) -> Self {
        let mut out = self.clone();
        out.negative = false;
        out
    }

    pub(crate) fn with_sign(mut self, negative: bool) -> Self {
        self.negative = negative && !self.is_zero();
        self
    }

    pub(crate) fn to_canonical(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for DecimalParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::with_capacity(self.integer.len() + self.fraction.len() + 2);
        if self.negative {
            out.push('-');
        }
        out.extend(self.integer.iter().map(|&d| char::from(b'0' + d)));
        if !self.fraction.is_empty() {
            out.push('.');
            out.extend(self.fraction.iter().map(|&d| char::from(b'0' + d)));
        }
        f.write_str(&out)
    }
}

fn digits_of(text: &str) -> NumericResult<Vec<u8>> {
    if !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(NumericError::InvalidNumber);
    }
    Ok(text.bytes().map(|b| b - b'0').collect())
}

fn parse_exponent(text: &str) -> NumericResult<i64> {
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(NumericError::InvalidNumber);
    }
    let exponent: i64 = text.parse().map_err(|_| NumericError::InvalidNumber)?;
    if exponent.abs() > MAX_EXPONENT {
        return Err(NumericError::InvalidNumber);
    }
    Ok(exponent)
}

// ============================================================================
// Public String API
// ============================================================================

/// Normalize numeric text into its canonical decimal string.
///
/// Accepts integers, decimals and scientific notation (`1.5e-3`). The result
/// has no redundant leading or trailing zeros and never reads `-0`.
///
/// # Errors
/// Returns `InvalidNumber` if the input is not numeric.
///
/// # Example
/// ```
/// use digit_decimal::numeric::canonicalize;
///
/// assert_eq!(canonicalize("007.2500").unwrap(), "7.25");
/// assert_eq!(canonicalize("-1.5e2").unwrap(), "-150");
/// assert_eq!(canonicalize("-0.000").unwrap(), "0");
/// ```
pub fn canonicalize(input: &str) -> NumericResult<String> {
    DecimalParts::parse(input).map(|parts| parts.to_canonical())
}

/// Flip the sign of a decimal string. Zero stays `"0"`.
///
/// # Errors
/// Returns `InvalidNumber` if the input is not numeric.
pub fn negate(value: &str) -> NumericResult<String> {
    DecimalParts::parse(value).map(|parts| parts.negated().to_canonical())
}

/// Absolute value of a decimal string.
///
/// # Errors
/// Returns `InvalidNumber` if the input is not numeric.
pub fn abs(value: &str) -> NumericResult<String> {
    DecimalParts::parse(value).map(|parts| parts.abs().to_canonical())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonicalize_strips_redundant_zeros() {
        assert_eq!(canonicalize("007.2500").unwrap(), "7.25");
        assert_eq!(canonicalize("0.10").unwrap(), "0.1");
        assert_eq!(canonicalize("100").unwrap(), "100");
        assert_eq!(canonicalize("12.000").unwrap(), "12");
    }

    #[test]
    fn test_canonicalize_zero_forms() {
        assert_eq!(canonicalize("0").unwrap(), "0");
        assert_eq!(canonicalize("-0").unwrap(), "0");
        assert_eq!(canonicalize("-0.000").unwrap(), "0");
        assert_eq!(canonicalize("000").unwrap(), "0");
        assert_eq!(canonicalize("+0.0e5").unwrap(), "0");
    }

    #[test]
    fn test_canonicalize_signs_and_bare_points() {
        assert_eq!(canonicalize("+5").unwrap(), "5");
        assert_eq!(canonicalize("-5").unwrap(), "-5");
        assert_eq!(canonicalize(".5").unwrap(), "0.5");
        assert_eq!(canonicalize("-.5").unwrap(), "-0.5");
        assert_eq!(canonicalize("5.").unwrap(), "5");
        assert_eq!(canonicalize("  42  ").unwrap(), "42");
    }

    #[test]
    fn test_canonicalize_scientific_notation() {
        assert_eq!(canonicalize("1.5e3").unwrap(), "1500");
        assert_eq!(canonicalize("1.5e-3").unwrap(), "0.0015");
        assert_eq!(canonicalize("-1.23E+1").unwrap(), "-12.3");
        assert_eq!(canonicalize("123e-1").unwrap(), "12.3");
        assert_eq!(canonicalize("1e-7").unwrap(), "0.0000001");
        assert_eq!(canonicalize("2.5e0").unwrap(), "2.5");
    }

    #[test]
    fn test_canonicalize_invalid() {
        for input in ["", " ", ".", "-", "abc", "1.2.3", "1e", "1e+", "e5", "--1", "1,000", "1 2"] {
            assert_eq!(
                canonicalize(input),
                Err(NumericError::InvalidNumber),
                "input {input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_canonicalize_exponent_bound() {
        assert!(canonicalize("1e10000").is_ok());
        assert_eq!(canonicalize("1e10001"), Err(NumericError::InvalidNumber));
        assert_eq!(canonicalize("1e99999999999999999999"), Err(NumericError::InvalidNumber));
    }

    #[test]
    fn test_canonicalize_idempotent() {
        for input in ["0012.3400", "-0.5e1", "7", "-0.000120", "9e-3"] {
            let once = canonicalize(input).unwrap();
            assert_eq!(canonicalize(&once).unwrap(), once);
        }
    }

    #[test]
    fn test_negate_and_abs() {
        assert_eq!(negate("5").unwrap(), "-5");
        assert_eq!(negate("-5.50").unwrap(), "5.5");
        assert_eq!(negate("0").unwrap(), "0");
        assert_eq!(abs("-3.25").unwrap(), "3.25");
        assert_eq!(abs("3").unwrap(), "3");
    }

    #[test]
    fn test_shift() {
        let x = DecimalParts::parse("12.345").unwrap();
        assert_eq!(x.shift(2).to_canonical(), "1234.5");
        assert_eq!(x.shift(5).to_canonical(), "1234500");
        assert_eq!(x.shift(-2).to_canonical(), "0.12345");
        assert_eq!(x.shift(-4).to_canonical(), "0.0012345");
        assert_eq!(x.shift(0), x);
    }

    #[test]
    fn test_power_of_ten() {
        assert_eq!(DecimalParts::parse("1").unwrap().power_of_ten(), Some(0));
        assert_eq!(DecimalParts::parse("-1000").unwrap().power_of_ten(), Some(3));
        assert_eq!(DecimalParts::parse("0.01").unwrap().power_of_ten(), Some(-2));
        assert_eq!(DecimalParts::parse("1010").unwrap().power_of_ten(), None);
        assert_eq!(DecimalParts::parse("0.11").unwrap().power_of_ten(), None);
        assert_eq!(DecimalParts::parse("2").unwrap().power_of_ten(), None);
        assert_eq!(DecimalParts::zero().power_of_ten(), None);
    }

    #[test]
    fn test_from_digits_pads_short_fraction() {
        let x = DecimalParts::from_digits(false, &[5], 3);
        assert_eq!(x.to_canonical(), "0.005");
        let y = DecimalParts::from_digits(true, &[0, 1, 2, 5, 0], 2);
        assert_eq!(y.to_canonical(), "-12.5");
    }

    #[test]
    fn test_from_integer() {
        assert_eq!(DecimalParts::from_integer(false, 0).to_canonical(), "0");
        assert_eq!(DecimalParts::from_integer(true, 0).to_canonical(), "0");
        assert_eq!(DecimalParts::from_integer(true, 1200).to_canonical(), "-1200");
    }
}
