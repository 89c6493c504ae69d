// ============================================================================
// Expression Validation
// Conservative pre-parse gate over the raw expression text
// ============================================================================

use super::errors::SyntaxError;
use regex::Regex;
use std::sync::LazyLock;

/// Optional leading `(` or `-`, a digit first, and a digit or `)` last.
/// A lone digit such as `7` is accepted; `.` may appear inside literals.
static GRAMMAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[(\-]?[0-9](?:[0-9.+\-*/()]*[0-9)])?$").expect("grammar pattern is valid")
});

static DIGIT_AFTER_CLOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\)[0-9.]").expect("pattern is valid"));

static OPEN_AFTER_DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9.]\(").expect("pattern is valid"));

const DUPLICATE_OPERATORS: [&str; 4] = ["---", "++", "**", "//"];
const ILLEGAL_SEQUENCES: [&str; 4] = ["-*", "-/", "+*", "+/"];

/// Reject malformed expressions before tokenizing.
///
/// Checks run in a fixed order and the first failing one is reported. `--`
/// is legal (`-2--3` subtracts a negative).
pub(crate) fn validate(expression: &str) -> Result<(), SyntaxError> {
    if !GRAMMAR.is_match(expression) {
        return Err(SyntaxError::DisallowedCharacter);
    }
    if DUPLICATE_OPERATORS.iter().any(|p| expression.contains(p)) {
        return Err(SyntaxError::DuplicateOperator);
    }
    if ILLEGAL_SEQUENCES.iter().any(|p| expression.contains(p)) {
        return Err(SyntaxError::IllegalOperatorSequence);
    }
    if expression.contains(")(") {
        return Err(SyntaxError::AdjacentParentheses);
    }
    if expression.contains("()") {
        return Err(SyntaxError::EmptyParentheses);
    }
    if DIGIT_AFTER_CLOSE.is_match(expression) {
        return Err(SyntaxError::DigitAfterParenthesis);
    }
    if OPEN_AFTER_DIGIT.is_match(expression) {
        return Err(SyntaxError::ParenthesisAfterDigit);
    }
    Ok(())
}
