// ============================================================================
// Rounding
// Decimal rounding to a fixed number of fractional digits
// ============================================================================

use crate::numeric::{add_parts, DecimalParts, NumericResult};
use crate::utils::pad_right;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How digits past the cutoff are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RoundingMode {
    /// First dropped digit >= 5 increases the magnitude (ties away from zero)
    #[default]
    HalfUp,
    /// Toward negative infinity: positives truncate, negatives with dropped
    /// digits move one unit further from zero
    Floor,
}

/// Round canonical parts to `decimals` fractional digits.
///
/// The adjustment is exact: one unit of `10^-decimals` is added to the
/// truncated magnitude, never a binary rounding step.
pub(crate) fn round_parts(value: &DecimalParts, decimals: u32, mode: RoundingMode) -> DecimalParts {
    let decimals = decimals as usize;
    if value.fraction.len() <= decimals {
        return value.clone();
    }

    // Canonical fractions end in a non-zero digit, so `dropped` is never
    // all zeros here.
    let (kept, dropped) = value.fraction.split_at(decimals);
    let truncated = DecimalParts::from_digits(
        value.negative,
        &[value.integer.as_slice(), kept].concat(),
        decimals,
    );

    let bump = match mode {
        RoundingMode::HalfUp => dropped[0] >= 5,
        RoundingMode::Floor => value.negative,
    };
    if !bump {
        return truncated;
    }

    let unit = DecimalParts::one()
        .shift(-(decimals as i64))
        .with_sign(value.negative);
    add_parts(&truncated, &unit)
}

/// Render with the fraction right-padded to exactly `decimals` digits.
pub(crate) fn render_padded(value: &DecimalParts, decimals: u32) -> String {
    let text = value.to_canonical();
    if decimals == 0 {
        return text;
    }
    let (integer, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));
    format!(
        "{integer}.{}",
        pad_right(fraction, decimals as usize, '0')
    )
}

/// Round a decimal string to `decimals` fractional digits.
///
/// With `pad` set the fraction is right-padded with zeros to exactly
/// `decimals` digits (no effect when `decimals` is 0).
///
/// # Errors
/// Returns `InvalidNumber` if the input is not numeric.
///
/// # Example
/// ```
/// use digit_decimal::format::{round, RoundingMode};
///
/// assert_eq!(round("12.351", 2, false, RoundingMode::HalfUp).unwrap(), "12.35");
/// assert_eq!(round("12.351", 1, false, RoundingMode::HalfUp).unwrap(), "12.4");
/// assert_eq!(round("-2.1", 0, false, RoundingMode::Floor).unwrap(), "-3");
/// assert_eq!(round("3", 2, true, RoundingMode::HalfUp).unwrap(), "3.00");
/// ```
pub fn round(value: &str, decimals: u32, pad: bool, mode: RoundingMode) -> NumericResult<String> {
    let rounded = round_parts(&DecimalParts::parse(value)?, decimals, mode);
    if pad {
        Ok(render_padded(&rounded, decimals))
    } else {
        Ok(rounded.to_canonical())
    }
}
