// ============================================================================
// Expression Errors
// Syntax and evaluation failures for infix expressions
// ============================================================================

use crate::numeric::NumericError;
use std::fmt;

/// Reasons an expression is rejected before or during parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyntaxError {
    /// Characters outside digits, `.`, `+ - * / ( )`, or a bad first/last character
    DisallowedCharacter,
    /// `---`, `++`, `**` or `//`
    DuplicateOperator,
    /// `-*`, `-/`, `+*` or `+/`
    IllegalOperatorSequence,
    /// `)(`
    AdjacentParentheses,
    /// `()`
    EmptyParentheses,
    /// A digit directly after `)`
    DigitAfterParenthesis,
    /// `(` directly after a digit
    ParenthesisAfterDigit,
    /// `)` with no open group
    UnmatchedClosingParenthesis,
    /// Input ended inside a group
    UnclosedParenthesis,
    /// Parentheses nested deeper than `MAX_NESTING_DEPTH`
    NestingTooDeep,
    /// An operator with nothing to apply it to
    MissingOperand,
    /// Two operands with no operator between them
    MissingOperator,
    /// An operator where an operand is required
    UnexpectedOperator,
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            SyntaxError::DisallowedCharacter => "expression contains disallowed content",
            SyntaxError::DuplicateOperator => "expression contains a duplicated operator",
            SyntaxError::IllegalOperatorSequence => "expression contains an illegal operator sequence",
            SyntaxError::AdjacentParentheses => "adjacent parenthesis groups are not allowed",
            SyntaxError::EmptyParentheses => "empty parentheses are not allowed",
            SyntaxError::DigitAfterParenthesis => "a digit cannot directly follow a closing parenthesis",
            SyntaxError::ParenthesisAfterDigit => "an opening parenthesis cannot directly follow a digit",
            SyntaxError::UnmatchedClosingParenthesis => "closing parenthesis without a matching opening one",
            SyntaxError::UnclosedParenthesis => "parenthesis is not closed",
            SyntaxError::NestingTooDeep => "parentheses are nested too deeply",
            SyntaxError::MissingOperand => "operator is missing an operand",
            SyntaxError::MissingOperator => "operands must be separated by an operator",
            SyntaxError::UnexpectedOperator => "operator found where an operand was expected",
        };
        f.write_str(message)
    }
}

impl std::error::Error for SyntaxError {}

/// Errors returned by expression evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpressionError {
    /// The expression text is malformed
    Syntax(SyntaxError),
    /// A literal is malformed or a division by zero occurred
    Numeric(NumericError),
}

impl fmt::Display for ExpressionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpressionError::Syntax(e) => write!(f, "syntax error: {e}"),
            ExpressionError::Numeric(e) => write!(f, "evaluation error: {e}"),
        }
    }
}

impl std::error::Error for ExpressionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExpressionError::Syntax(e) => Some(e),
            ExpressionError::Numeric(e) => Some(e),
        }
    }
}

impl From<SyntaxError> for ExpressionError {
    fn from(e: SyntaxError) -> Self {
        ExpressionError::Syntax(e)
    }
}

impl From<NumericError> for ExpressionError {
    fn from(e: NumericError) -> Self {
        ExpressionError::Numeric(e)
    }
}

/// Result type alias for expression operations
pub type ExpressionResult<T> = Result<T, ExpressionError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_error_display() {
        assert_eq!(
            ExpressionError::from(SyntaxError::UnclosedParenthesis).to_string(),
            "syntax error: parenthesis is not closed"
        );
        assert_eq!(
            ExpressionError::from(NumericError::DivisionByZero).to_string(),
            "evaluation error: division by zero"
        );
    }

    #[test]
    fn test_error_source_chain() {
        let err = ExpressionError::from(NumericError::DivisionByZero);
        let source = err.source().map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("division by zero"));
    }
}
