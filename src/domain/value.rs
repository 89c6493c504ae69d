// ============================================================================
// Exact Decimal Value
// Typed wrapper around a canonical decimal
// ============================================================================

use crate::format::{render_padded, round_parts, RoundingMode};
use crate::numeric::{
    add_parts, compare_parts, divide_parts, divide_with_remainder_parts, multiply_parts,
    sub_parts, DecimalParts, NumericError, NumericResult,
};
use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Arbitrary-precision decimal, always held in canonical form.
///
/// Addition, subtraction and multiplication are exact and infallible.
/// Division is the only capped operation and is exposed as
/// [`checked_div`](Self::checked_div).
///
/// # Example
/// ```
/// use digit_decimal::domain::ExactDecimal;
///
/// let a: ExactDecimal = "0.1".parse().unwrap();
/// let b: ExactDecimal = "0.2".parse().unwrap();
/// assert_eq!((a + b).to_string(), "0.3");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ExactDecimal(DecimalParts);

impl ExactDecimal {
    pub fn zero() -> Self {
        Self(DecimalParts::zero())
    }

    pub fn one() -> Self {
        Self(DecimalParts::one())
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.0.negative
    }

    pub fn is_integer(&self) -> bool {
        self.0.fraction.is_empty()
    }

    /// Number of fractional digits
    pub fn scale(&self) -> usize {
        self.0.fraction.len()
    }

    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Divide, producing at most `max_decimal_length` fractional digits.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `rhs` is zero.
    pub fn checked_div(&self, rhs: &Self, max_decimal_length: u32) -> NumericResult<Self> {
        divide_parts(&self.0, &rhs.0, max_decimal_length).map(Self)
    }

    /// Capped quotient together with the non-negative remainder it leaves.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `rhs` is zero.
    pub fn div_rem(&self, rhs: &Self, max_decimal_length: u32) -> NumericResult<(Self, Self)> {
        let (quotient, remainder) = divide_with_remainder_parts(&self.0, &rhs.0, max_decimal_length)?;
        Ok((Self(quotient), Self(remainder)))
    }

    /// Round to `decimals` fractional digits.
    pub fn round(&self, decimals: u32, mode: RoundingMode) -> Self {
        Self(round_parts(&self.0, decimals, mode))
    }

    /// Render with exactly `decimals` fractional digits (half-up).
    pub fn to_fixed(&self, decimals: u32) -> String {
        render_padded(&round_parts(&self.0, decimals, RoundingMode::HalfUp), decimals)
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for ExactDecimal {
    fn default() -> Self {
        Self::zero()
    }
}

impl PartialOrd for ExactDecimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ExactDecimal {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_parts(&self.0, &other.0)
    }
}

impl Neg for ExactDecimal {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(self.0.negated())
    }
}

impl Add for ExactDecimal {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(add_parts(&self.0, &rhs.0))
    }
}

impl Sub for ExactDecimal {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(sub_parts(&self.0, &rhs.0))
    }
}

impl Mul for ExactDecimal {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(multiply_parts(&self.0, &rhs.0))
    }
}

impl<'a> Add<&'a ExactDecimal> for &'a ExactDecimal {
    type Output = ExactDecimal;

    fn add(self, rhs: &'a ExactDecimal) -> Self::Output {
        ExactDecimal(add_parts(&self.0, &rhs.0))
    }
}

impl<'a> Sub<&'a ExactDecimal> for &'a ExactDecimal {
    type Output = ExactDecimal;

    fn sub(self, rhs: &'a ExactDecimal) -> Self::Output {
        ExactDecimal(sub_parts(&self.0, &rhs.0))
    }
}

impl<'a> Mul<&'a ExactDecimal> for &'a ExactDecimal {
    type Output = ExactDecimal;

    fn mul(self, rhs: &'a ExactDecimal) -> Self::Output {
        ExactDecimal(multiply_parts(&self.0, &rhs.0))
    }
}

impl Sum for ExactDecimal {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc + x)
    }
}

impl From<i64> for ExactDecimal {
    fn from(value: i64) -> Self {
        Self(DecimalParts::from_integer(value < 0, u128::from(value.unsigned_abs())))
    }
}

impl From<u64> for ExactDecimal {
    fn from(value: u64) -> Self {
        Self(DecimalParts::from_integer(false, u128::from(value)))
    }
}

impl FromStr for ExactDecimal {
    type Err = NumericError;

    /// Accepts anything [`canonicalize`](crate::numeric::canonicalize) does.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DecimalParts::parse(s).map(Self)
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Display for ExactDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for ExactDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExactDecimal({})", self.0)
    }
}

// ============================================================================
// Conversion from rust_decimal (for API boundaries)
// ============================================================================

impl ExactDecimal {
    /// Convert from rust_decimal::Decimal. Always exact.
    pub fn from_decimal(d: rust_decimal::Decimal) -> Self {
        let mantissa = d.mantissa();
        let parts = DecimalParts::from_integer(mantissa < 0, mantissa.unsigned_abs());
        Self(parts.shift(-i64::from(d.scale())))
    }

    /// Convert to rust_decimal::Decimal.
    ///
    /// # Errors
    /// Returns `InvalidNumber` if the value does not fit rust_decimal's
    /// 96-bit mantissa and 28-digit scale.
    pub fn to_decimal(&self) -> NumericResult<rust_decimal::Decimal> {
        rust_decimal::Decimal::from_str_exact(&self.to_string())
            .map_err(|_| NumericError::InvalidNumber)
    }
}

// ============================================================================
// Serde (as canonical string)
// ============================================================================

#[cfg(feature = "serde")]
impl Serialize for ExactDecimal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for ExactDecimal {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn d(s: &str) -> ExactDecimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!(d("007.2500").to_string(), "7.25");
        assert_eq!(d("-0").to_string(), "0");
        assert_eq!(d("1.5e3").to_string(), "1500");
        assert_eq!("abc".parse::<ExactDecimal>(), Err(NumericError::InvalidNumber));
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(d("0.1") + d("0.2"), d("0.3"));
        assert_eq!(d("1") - d("1.75"), d("-0.75"));
        assert_eq!(d("1.5") * d("-4"), d("-6"));
        assert_eq!(&d("2") * &d("0.5"), ExactDecimal::one());
        assert_eq!(-d("3"), d("-3"));
        assert_eq!(-ExactDecimal::zero(), ExactDecimal::zero());
    }

    #[test]
    fn test_sum() {
        let total: ExactDecimal = ["0.1", "0.2", "0.3"].iter().map(|s| d(s)).sum();
        assert_eq!(total, d("0.6"));
    }

    #[test]
    fn test_ordering() {
        assert!(d("-5") < d("-3"));
        assert!(d("0.001") > d("-1000"));
        assert_eq!(d("-0").cmp(&d("0")), Ordering::Equal);

        let mut values = vec![d("2"), d("-1.5"), d("0.25")];
        values.sort();
        assert_eq!(values, vec![d("-1.5"), d("0.25"), d("2")]);
    }

    #[test]
    fn test_division() {
        assert_eq!(d("1").checked_div(&d("3"), 5).unwrap(), d("0.33333"));
        assert_eq!(d("1").checked_div(&d("0"), 5), Err(NumericError::DivisionByZero));

        let (q, r) = d("10").div_rem(&d("3"), 2).unwrap();
        assert_eq!(q, d("3.33"));
        assert_eq!(r, d("0.01"));
    }

    #[test]
    fn test_round_and_fixed() {
        assert_eq!(d("12.351").round(2, RoundingMode::HalfUp), d("12.35"));
        assert_eq!(d("-1.21").round(1, RoundingMode::Floor), d("-1.3"));
        assert_eq!(d("2.5").to_fixed(3), "2.500");
        assert_eq!(d("7").to_fixed(0), "7");
    }

    #[test]
    fn test_queries() {
        let value = d("-12.340");
        assert!(value.is_negative());
        assert!(!value.is_integer());
        assert_eq!(value.scale(), 2);
        assert_eq!(value.abs(), d("12.34"));
        assert!(ExactDecimal::default().is_zero());
    }

    #[test]
    fn test_from_integers() {
        assert_eq!(ExactDecimal::from(-42i64).to_string(), "-42");
        assert_eq!(ExactDecimal::from(i64::MIN).to_string(), i64::MIN.to_string());
        assert_eq!(ExactDecimal::from(u64::MAX).to_string(), u64::MAX.to_string());
    }

    #[test]
    fn test_rust_decimal_interop() {
        assert_eq!(ExactDecimal::from_decimal(Decimal::new(12345, 2)), d("123.45"));
        assert_eq!(ExactDecimal::from_decimal(Decimal::new(-100, 2)), d("-1"));
        assert_eq!(d("-0.125").to_decimal().unwrap(), Decimal::new(-125, 3));
        assert_eq!(d("1e40").to_decimal(), Err(NumericError::InvalidNumber));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&d("-1.50")).unwrap();
        assert_eq!(json, "\"-1.5\"");
        let back: ExactDecimal = serde_json::from_str(&json).unwrap();
        assert_eq!(back, d("-1.5"));
        assert!(serde_json::from_str::<ExactDecimal>("\"x\"").is_err());
    }
}
