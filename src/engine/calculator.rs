// ============================================================================
// Calculator
// Configured entry point binding precision, formatting and an observer
// ============================================================================

use crate::domain::CalculatorConfig;
use crate::expression::{Evaluator, ExpressionResult};
use crate::interfaces::{EvaluationEvent, EvaluationObserver};
use crate::numeric::{divide_with_remainder_parts, DecimalParts, DivisionResult, NumericResult};
use std::sync::Arc;

/// Stateless calculator: every call is independent, so one instance can be
/// shared across threads.
pub struct Calculator {
    config: CalculatorConfig,

    /// Observer for evaluation events
    observer: Arc<dyn EvaluationObserver>,
}

impl Calculator {
    /// Create a calculator. The configuration is taken as-is; use
    /// [`create_from_config`](crate::engine::create_from_config) to validate
    /// it first.
    pub fn new(config: CalculatorConfig, observer: Arc<dyn EvaluationObserver>) -> Self {
        Self { config, observer }
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Evaluate an infix expression to a canonical decimal string
    pub fn evaluate(&self, expression: &str) -> ExpressionResult<String> {
        Evaluator::new(self.config.max_decimal_length, self.observer.as_ref()).evaluate(expression)
    }

    /// Evaluate, then render through the configured number format
    pub fn evaluate_formatted(&self, expression: &str) -> ExpressionResult<String> {
        let value = self.evaluate(expression)?;
        Ok(self.config.format.format(&value)?)
    }

    /// Divide with the configured decimal-length cap
    pub fn divide(&self, a: &str, b: &str) -> NumericResult<String> {
        self.divide_with_remainder(a, b).map(|result| result.quotient)
    }

    /// Divide with the configured cap, keeping the remainder.
    ///
    /// A truncated quotient is reported to the observer.
    pub fn divide_with_remainder(&self, a: &str, b: &str) -> NumericResult<DivisionResult> {
        let dividend = DecimalParts::parse(a)?;
        let divisor = DecimalParts::parse(b)?;
        let (quotient, remainder) =
            divide_with_remainder_parts(&dividend, &divisor, self.config.max_decimal_length)?;

        let result = DivisionResult {
            quotient: quotient.to_canonical(),
            remainder: remainder.to_canonical(),
        };
        if !result.is_exact() {
            self.observer.on_event(EvaluationEvent::DivisionTruncated {
                dividend: dividend.to_canonical(),
                divisor: divisor.to_canonical(),
                quotient: result.quotient.clone(),
                remainder: result.remainder.clone(),
            });
        }
        Ok(result)
    }

    /// Round with the configured decimals, padding and mode
    pub fn round(&self, value: &str) -> NumericResult<String> {
        self.config.format.round(value)
    }

    /// Round and group with the configured format
    pub fn format(&self, value: &str) -> NumericResult<String> {
        self.config.format.format(value)
    }

    pub fn format_million(&self, value: &str) -> NumericResult<String> {
        self.config.format.format_million(value)
    }

    pub fn format_billion(&self, value: &str) -> NumericResult<String> {
        self.config.format.format_billion(value)
    }

    pub fn format_money(&self, value: &str) -> NumericResult<String> {
        self.config.format.format_money(value)
    }
}
