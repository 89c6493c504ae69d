// ============================================================================
// Digit Decimal Library
// Exact decimal arithmetic over digit strings with an expression evaluator
// ============================================================================

//! # Digit Decimal
//!
//! Exact decimal arithmetic on numbers written as digit strings. No binary
//! floating point is involved anywhere, so `0.1 + 0.2` is exactly `0.3`.
//!
//! ## Features
//!
//! - **Canonical strings** with no redundant zeros and no negative zero
//! - **Digit-by-digit arithmetic**: add, subtract, multiply, long division
//!   with a caller-chosen decimal-length cap
//! - **Deterministic rounding** (half-up or floor) and number formatting
//!   with thousands grouping and million/billion suffixes
//! - **Expression evaluator** for `+ - * /` with parentheses and unary
//!   minus, running multiplications before divisions to limit truncation
//!
//! ## Example
//!
//! ```rust
//! use digit_decimal::prelude::*;
//! use std::sync::Arc;
//!
//! // Free functions work on plain strings
//! assert_eq!(add("0.1", "0.2").unwrap(), "0.3");
//! assert_eq!(divide("1", "3", 5).unwrap(), "0.33333");
//! assert_eq!(evaluate("(1+2)*3", DEFAULT_MAX_DECIMAL_LENGTH).unwrap(), "9");
//!
//! // A configured calculator binds precision, formatting and an observer
//! let calc = CalculatorBuilder::financial()
//!     .build(Arc::new(NoOpObserver))
//!     .unwrap();
//! assert_eq!(calc.evaluate_formatted("1234.5*2").unwrap(), "2,469.00");
//!
//! // Typed values
//! let price: ExactDecimal = "19.99".parse().unwrap();
//! let total = price * ExactDecimal::from(3i64);
//! assert_eq!(total.to_string(), "59.97");
//! ```

pub mod domain;
pub mod engine;
pub mod expression;
pub mod format;
pub mod interfaces;
#[cfg(feature = "logging")]
pub mod logging;
pub mod numeric;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{CalculatorConfig, ExactDecimal, MAX_DECIMAL_LENGTH_LIMIT};
    pub use crate::engine::{create_from_config, Calculator, CalculatorBuilder};
    pub use crate::expression::{
        evaluate, Evaluator, ExpressionError, ExpressionResult, ExpressionTree, Node, Operator,
        SyntaxError, MAX_NESTING_DEPTH,
    };
    pub use crate::format::{
        clear_separators, format_by, format_money, format_number, format_thousands, round,
        NumberFormat, RoundingMode,
    };
    pub use crate::interfaces::{
        EvaluationEvent, EvaluationObserver, LoggingObserver, NoOpObserver,
    };
    pub use crate::numeric::{
        abs, add, canonicalize, compare, divide, divide_with_remainder, multiply, negate,
        subtract, DivisionResult, NumericError, NumericResult, DEFAULT_MAX_DECIMAL_LENGTH,
    };
}
