// ============================================================================
// Calculator Configuration
// Division precision and output formatting policy
// ============================================================================

use crate::format::{NumberFormat, RoundingMode};
use crate::numeric::DEFAULT_MAX_DECIMAL_LENGTH;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Upper bound for `max_decimal_length` and rounding decimals
pub const MAX_DECIMAL_LENGTH_LIMIT: u32 = 1000;

/// Configuration for a [`Calculator`](crate::engine::Calculator)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalculatorConfig {
    /// Fractional digits produced by a division before it is truncated
    pub max_decimal_length: u32,

    /// Rounding and grouping applied when rendering results
    pub format: NumberFormat,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DECIMAL_LENGTH)
    }
}

impl CalculatorConfig {
    /// Create a new configuration with the default number format
    pub fn new(max_decimal_length: u32) -> Self {
        Self {
            max_decimal_length,
            format: NumberFormat::default(),
        }
    }

    /// Builder method: Replace the whole number format
    pub fn with_format(mut self, format: NumberFormat) -> Self {
        self.format = format;
        self
    }

    /// Builder method: Set rounding decimals
    pub fn with_decimals(mut self, decimals: u32) -> Self {
        self.format.decimals = decimals;
        self
    }

    /// Builder method: Pad fractions to the configured decimals
    pub fn with_padding(mut self, pad: bool) -> Self {
        self.format.pad = pad;
        self
    }

    /// Builder method: Set rounding mode
    pub fn with_rounding_mode(mut self, mode: RoundingMode) -> Self {
        self.format.mode = mode;
        self
    }

    /// Builder method: Set digit grouping
    pub fn with_grouping(mut self, separator: char, group_size: usize) -> Self {
        self.format = self.format.with_grouping(separator, group_size);
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_decimal_length > MAX_DECIMAL_LENGTH_LIMIT {
            return Err(format!(
                "Max decimal length cannot exceed {MAX_DECIMAL_LENGTH_LIMIT}"
            ));
        }

        if self.format.decimals > MAX_DECIMAL_LENGTH_LIMIT {
            return Err(format!(
                "Rounding decimals cannot exceed {MAX_DECIMAL_LENGTH_LIMIT}"
            ));
        }

        // The separator must not be confused with the number itself
        let separator = self.format.separator;
        if separator.is_ascii_digit() || separator == '-' || separator == '.' {
            return Err(format!("Invalid group separator '{separator}'"));
        }

        Ok(())
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl CalculatorConfig {
    /// General purpose configuration
    /// - 15 fractional digits for divisions
    /// - Half-up rounding to 2 decimals, no padding
    pub fn standard() -> Self {
        Self::default()
    }

    /// Currency amounts
    /// - 15 fractional digits for divisions
    /// - Half-up rounding to exactly 2 decimals
    pub fn financial() -> Self {
        Self::default().with_padding(true)
    }

    /// Quantities that must never be over-reported
    /// - 15 fractional digits for divisions
    /// - Floor rounding to 2 decimals
    pub fn truncating() -> Self {
        Self::default().with_rounding_mode(RoundingMode::Floor)
    }
}
