// ============================================================================
// Calculator Factory
// Creates calculators with validated configuration
// ============================================================================

use crate::domain::CalculatorConfig;
use crate::engine::Calculator;
use crate::format::{NumberFormat, RoundingMode};
use crate::interfaces::EvaluationObserver;
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a calculator from configuration
///
/// # Arguments
/// * `config` - Calculator configuration
/// * `observer` - Observer for evaluation events
///
/// # Returns
/// * `Result<Calculator, String>` - Configured calculator or validation error
///
/// # Example
/// ```
/// use digit_decimal::prelude::*;
/// use std::sync::Arc;
///
/// let calc = create_from_config(CalculatorConfig::financial(), Arc::new(NoOpObserver)).unwrap();
/// assert_eq!(calc.evaluate("0.1+0.2").unwrap(), "0.3");
/// ```
pub fn create_from_config(
    config: CalculatorConfig,
    observer: Arc<dyn EvaluationObserver>,
) -> Result<Calculator, String> {
    config.validate()?;

    tracing::debug!(
        max_decimal_length = config.max_decimal_length,
        decimals = config.format.decimals,
        "Calculator created"
    );

    Ok(Calculator::new(config, observer))
}

// ============================================================================
// Builder Pattern for Advanced Configuration
// ============================================================================

/// Builder for creating calculators with fluent API
///
/// # Example
/// ```
/// use digit_decimal::prelude::*;
/// use std::sync::Arc;
///
/// let calc = CalculatorBuilder::new()
///     .max_decimal_length(4)
///     .decimals(2)
///     .floor_rounding()
///     .build(Arc::new(NoOpObserver))
///     .unwrap();
/// assert_eq!(calc.evaluate("2/3").unwrap(), "0.6666");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CalculatorBuilder {
    config: CalculatorConfig,
}

impl CalculatorBuilder {
    /// Create a builder with the standard configuration
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Precision Configuration
    // ========================================================================

    /// Fractional digits produced by division before truncation
    pub fn max_decimal_length(mut self, max_decimal_length: u32) -> Self {
        self.config.max_decimal_length = max_decimal_length;
        self
    }

    // ========================================================================
    // Rounding Configuration
    // ========================================================================

    pub fn decimals(mut self, decimals: u32) -> Self {
        self.config.format.decimals = decimals;
        self
    }

    pub fn padded(mut self, pad: bool) -> Self {
        self.config.format.pad = pad;
        self
    }

    /// Round half-up (default)
    pub fn half_up_rounding(mut self) -> Self {
        self.config.format.mode = RoundingMode::HalfUp;
        self
    }

    /// Round toward negative infinity
    pub fn floor_rounding(mut self) -> Self {
        self.config.format.mode = RoundingMode::Floor;
        self
    }

    // ========================================================================
    // Grouping Configuration
    // ========================================================================

    pub fn grouping(mut self, separator: char, group_size: usize) -> Self {
        self.config.format = self.config.format.with_grouping(separator, group_size);
        self
    }

    pub fn number_format(mut self, format: NumberFormat) -> Self {
        self.config.format = format;
        self
    }

    // ========================================================================
    // Preset Configurations
    // ========================================================================

    /// Apply the standard configuration
    pub fn standard() -> Self {
        Self {
            config: CalculatorConfig::standard(),
        }
    }

    /// Apply the financial configuration
    pub fn financial() -> Self {
        Self {
            config: CalculatorConfig::financial(),
        }
    }

    /// Apply the truncating configuration
    pub fn truncating() -> Self {
        Self {
            config: CalculatorConfig::truncating(),
        }
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Build the calculator
    pub fn build(self, observer: Arc<dyn EvaluationObserver>) -> Result<Calculator, String> {
        create_from_config(self.config, observer)
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &CalculatorConfig {
        &self.config
    }
}
