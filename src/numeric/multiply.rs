// ============================================================================
// Multiplier
// Grade-school digit-pair multiplication with deferred carry resolution
// ============================================================================

use super::canonical::DecimalParts;
use super::errors::NumericResult;
use smallvec::{smallvec, SmallVec};

/// Accumulator cells kept inline before spilling to the heap.
type Accumulator = SmallVec<[u64; 64]>;

pub(crate) fn multiply_parts(a: &DecimalParts, b: &DecimalParts) -> DecimalParts {
    if a.is_zero() || b.is_zero() {
        return DecimalParts::zero();
    }

    let negative = a.negative != b.negative;

    // 10^k (including +-1) only moves the decimal point
    if let Some(k) = b.power_of_ten() {
        return a.shift(k).with_sign(negative);
    }
    if let Some(k) = a.power_of_ten() {
        return b.shift(k).with_sign(negative);
    }

    let x = a.magnitude_digits();
    let y = b.magnitude_digits();
    let fraction_len = a.fraction.len() + b.fraction.len();

    // Cell i+j+1 collects every digit pair (i, j); the extra leading cell
    // absorbs the final carry.
    let mut cells: Accumulator = smallvec![0; x.len() + y.len()];
    for (i, &dx) in x.iter().enumerate() {
        for (j, &dy) in y.iter().enumerate() {
            cells[i + j + 1] += u64::from(dx) * u64::from(dy);
        }
    }

    let mut carry = 0u64;
    for cell in cells.iter_mut().rev() {
        let total = *cell + carry;
        *cell = total % 10;
        carry = total / 10;
    }

    let digits: Vec<u8> = cells.iter().map(|&d| d as u8).collect();
    DecimalParts::from_digits(negative, &digits, fraction_len)
}

/// Exact product of two decimal strings.
///
/// # Errors
/// Returns `InvalidNumber` if either input is not numeric.
///
/// # Example
/// ```
/// use digit_decimal::numeric::multiply;
///
/// assert_eq!(multiply("1.5", "1.5").unwrap(), "2.25");
/// assert_eq!(multiply("123", "100").unwrap(), "12300");
/// ```
pub fn multiply(a: &str, b: &str) -> NumericResult<String> {
    let a = DecimalParts::parse(a)?;
    let b = DecimalParts::parse(b)?;
    Ok(multiply_parts(&a, &b).to_canonical())
}
