// ============================================================================
// Number Format
// Rounding + grouping policy with million/billion/money scaling
// ============================================================================

use super::rounding::{render_padded, round_parts, RoundingMode};
use super::separators::format_by;
use crate::numeric::{compare_magnitude, DecimalParts, NumericResult};
use std::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const MILLION_EXPONENT: i64 = 6;
const BILLION_EXPONENT: i64 = 9;

/// Suffix appended to million-scaled output
pub const MILLION_SUFFIX: &str = "mn";

/// Suffix appended to billion-scaled output
pub const BILLION_SUFFIX: &str = "bn";

/// Rendering policy for human-facing numbers.
///
/// # Example
/// ```
/// use digit_decimal::format::{NumberFormat, RoundingMode};
///
/// let fmt = NumberFormat::new(2, true, RoundingMode::HalfUp);
/// assert_eq!(fmt.format("1234567.891").unwrap(), "1,234,567.89");
/// assert_eq!(fmt.format_money("1234567.891").unwrap(), "1.23 mn");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NumberFormat {
    /// Fractional digits kept after rounding
    pub decimals: u32,

    /// Right-pad the fraction with zeros to exactly `decimals` digits
    pub pad: bool,

    /// Rounding policy for dropped digits
    pub mode: RoundingMode,

    /// Character inserted between integer digit groups
    pub separator: char,

    /// Digits per group (0 disables grouping)
    pub group_size: usize,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            decimals: 2,
            pad: false,
            mode: RoundingMode::HalfUp,
            separator: ',',
            group_size: 3,
        }
    }
}

impl NumberFormat {
    /// Create a format with `,` thousands grouping
    pub fn new(decimals: u32, pad: bool, mode: RoundingMode) -> Self {
        Self {
            decimals,
            pad,
            mode,
            ..Self::default()
        }
    }

    /// Builder method: Set digit grouping
    pub fn with_grouping(mut self, separator: char, group_size: usize) -> Self {
        self.separator = separator;
        self.group_size = group_size;
        self
    }

    // ========================================================================
    // Rounding Only
    // ========================================================================

    /// Round without grouping.
    ///
    /// # Errors
    /// Returns `InvalidNumber` if the input is not numeric.
    pub fn round(&self, value: &str) -> NumericResult<String> {
        Ok(self.render(&DecimalParts::parse(value)?))
    }

    /// Divide by one million, then round.
    ///
    /// # Errors
    /// Returns `InvalidNumber` if the input is not numeric.
    pub fn fix_to_million(&self, value: &str) -> NumericResult<String> {
        let parts = DecimalParts::parse(value)?;
        Ok(self.render(&parts.shift(-MILLION_EXPONENT)))
    }

    /// Divide by one billion, then round.
    ///
    /// # Errors
    /// Returns `InvalidNumber` if the input is not numeric.
    pub fn fix_to_billion(&self, value: &str) -> NumericResult<String> {
        let parts = DecimalParts::parse(value)?;
        Ok(self.render(&parts.shift(-BILLION_EXPONENT)))
    }

    // ========================================================================
    // Rounding + Grouping
    // ========================================================================

    /// Round, then group integer digits.
    ///
    /// # Errors
    /// Returns `InvalidNumber` if the input is not numeric.
    pub fn format(&self, value: &str) -> NumericResult<String> {
        self.group(&DecimalParts::parse(value)?)
    }

    /// Million-scaled with suffix when `|value| > 10^6`, plain otherwise.
    ///
    /// # Errors
    /// Returns `InvalidNumber` if the input is not numeric.
    pub fn format_million(&self, value: &str) -> NumericResult<String> {
        self.format_scaled(&DecimalParts::parse(value)?, MILLION_EXPONENT, MILLION_SUFFIX)
    }

    /// Billion-scaled with suffix when `|value| > 10^9`, plain otherwise.
    ///
    /// # Errors
    /// Returns `InvalidNumber` if the input is not numeric.
    pub fn format_billion(&self, value: &str) -> NumericResult<String> {
        self.format_scaled(&DecimalParts::parse(value)?, BILLION_EXPONENT, BILLION_SUFFIX)
    }

    /// Pick the largest applicable scale: billions, then millions, then plain.
    ///
    /// # Errors
    /// Returns `InvalidNumber` if the input is not numeric.
    pub fn format_money(&self, value: &str) -> NumericResult<String> {
        let parts = DecimalParts::parse(value)?;
        if exceeds_power_of_ten(&parts, BILLION_EXPONENT) {
            self.format_scaled(&parts, BILLION_EXPONENT, BILLION_SUFFIX)
        } else {
            self.format_scaled(&parts, MILLION_EXPONENT, MILLION_SUFFIX)
        }
    }

    fn render(&self, parts: &DecimalParts) -> String {
        let rounded = round_parts(parts, self.decimals, self.mode);
        if self.pad {
            render_padded(&rounded, self.decimals)
        } else {
            rounded.to_canonical()
        }
    }

    fn group(&self, parts: &DecimalParts) -> NumericResult<String> {
        format_by(&self.render(parts), self.separator, self.group_size, false)
    }

    fn format_scaled(
        &self,
        parts: &DecimalParts,
        exponent: i64,
        suffix: &str,
    ) -> NumericResult<String> {
        if exceeds_power_of_ten(parts, exponent) {
            let scaled = self.group(&parts.shift(-exponent))?;
            Ok(format!("{scaled} {suffix}"))
        } else {
            self.group(parts)
        }
    }
}

/// `|value| > 10^exponent`
fn exceeds_power_of_ten(parts: &DecimalParts, exponent: i64) -> bool {
    compare_magnitude(parts, &DecimalParts::one().shift(exponent)) == Ordering::Greater
}

// ============================================================================
// Free Functions (default `,` grouping in threes)
// ============================================================================

/// Round, then group with `,` in threes.
///
/// # Errors
/// Returns `InvalidNumber` if the input is not numeric.
pub fn format_number(value: &str, decimals: u32, pad: bool, mode: RoundingMode) -> NumericResult<String> {
    NumberFormat::new(decimals, pad, mode).format(value)
}

/// Divide by one million, then round.
///
/// # Errors
/// Returns `InvalidNumber` if the input is not numeric.
pub fn fix_to_million(value: &str, decimals: u32, pad: bool, mode: RoundingMode) -> NumericResult<String> {
    NumberFormat::new(decimals, pad, mode).fix_to_million(value)
}

/// Divide by one billion, then round.
///
/// # Errors
/// Returns `InvalidNumber` if the input is not numeric.
pub fn fix_to_billion(value: &str, decimals: u32, pad: bool, mode: RoundingMode) -> NumericResult<String> {
    NumberFormat::new(decimals, pad, mode).fix_to_billion(value)
}

/// See [`NumberFormat::format_million`].
///
/// # Errors
/// Returns `InvalidNumber` if the input is not numeric.
pub fn format_million(value: &str, decimals: u32, pad: bool, mode: RoundingMode) -> NumericResult<String> {
    NumberFormat::new(decimals, pad, mode).format_million(value)
}

/// See [`NumberFormat::format_billion`].
///
/// # Errors
/// Returns `InvalidNumber` if the input is not numeric.
pub fn format_billion(value: &str, decimals: u32, pad: bool, mode: RoundingMode) -> NumericResult<String> {
    NumberFormat::new(decimals, pad, mode).format_billion(value)
}

/// See [`NumberFormat::format_money`].
///
/// # Errors
/// Returns `InvalidNumber` if the input is not numeric.
pub fn format_money(value: &str, decimals: u32, pad: bool, mode: RoundingMode) -> NumericResult<String> {
    NumberFormat::new(decimals, pad, mode).format_money(value)
}
