// ============================================================================
// Numeric Errors
// Error types for digit-string arithmetic operations
// ============================================================================

use std::fmt;

/// Errors that can occur during digit-string arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Input is not a well-formed decimal or scientific-notation number
    InvalidNumber,
    /// Divisor canonicalizes to zero
    DivisionByZero,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::InvalidNumber => {
                write!(f, "invalid number: input is not a decimal digit string")
            },
            NumericError::DivisionByZero => write!(f, "division by zero"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
