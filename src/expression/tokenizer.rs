// ============================================================================
// Tokenizer
// Left-to-right scan into literals, operators and raw parenthesis groups
// ============================================================================

use super::errors::SyntaxError;
use super::operator::Operator;
use std::mem;

/// Deepest parenthesis nesting an expression may use.
pub const MAX_NESTING_DEPTH: usize = 256;

/// One atom of a single nesting level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token {
    /// Unparsed literal text, possibly carrying a folded `-` sign
    Literal(String),
    Operator(Operator),
    /// Raw text between a top-level `(` and its matching `)`
    Group { source: String, negated: bool },
}

/// Scan one nesting level. Nested groups are captured as raw text and parsed
/// later, once the matching `)` closes them. Nesting past
/// [`MAX_NESTING_DEPTH`] is rejected here, before any group is parsed.
pub(crate) fn scan(expression: &str) -> Result<Vec<Token>, SyntaxError> {
    let mut tokens = Vec::new();
    let mut literal = String::new();
    let mut group = String::new();
    let mut depth = 0usize;

    for ch in expression.chars() {
        match ch {
            '(' => {
                if depth > 0 {
                    group.push(ch);
                } else if !literal.is_empty() {
                    tokens.push(Token::Literal(mem::take(&mut literal)));
                }
                depth += 1;
                if depth > MAX_NESTING_DEPTH {
                    return Err(SyntaxError::NestingTooDeep);
                }
            }
            ')' => {
                if depth == 0 {
                    return Err(SyntaxError::UnmatchedClosingParenthesis);
                }
                depth -= 1;
                if depth == 0 {
                    tokens.push(Token::Group {
                        source: mem::take(&mut group),
                        negated: false,
                    });
                } else {
                    group.push(ch);
                }
            }
            _ if depth > 0 => group.push(ch),
            _ => match Operator::from_char(ch) {
                Some(op) => {
                    if !literal.is_empty() {
                        tokens.push(Token::Literal(mem::take(&mut literal)));
                    }
                    tokens.push(Token::Operator(op));
                }
                None => literal.push(ch),
            },
        }
    }

    if depth > 0 {
        return Err(SyntaxError::UnclosedParenthesis);
    }
    if !literal.is_empty() {
        tokens.push(Token::Literal(literal));
    }
    Ok(tokens)
}

/// Fold unary minus into the following operand.
///
/// A `-` at the start or right after another operator is a sign, not a
/// subtraction. `- -x` cancels to `x`; `- +x` is `-x`.
pub(crate) fn fold_unary_minus(tokens: Vec<Token>) -> Result<Vec<Token>, SyntaxError> {
    let mut out = Vec::with_capacity(tokens.len());
    let mut iter = tokens.into_iter();
    let mut after_operand = false;

    while let Some(token) = iter.next() {
        if token == Token::Operator(Operator::Subtract) && !after_operand {
            let operand = match iter.next() {
                // Double negation: the next operand stays positive
                Some(Token::Operator(Operator::Subtract)) => continue,
                Some(Token::Operator(Operator::Add)) => negate(iter.next())?,
                next => negate(next)?,
            };
            out.push(operand);
            after_operand = true;
            continue;
        }

        after_operand = !matches!(token, Token::Operator(_));
        out.push(token);
    }

    Ok(out)
}

fn negate(token: Option<Token>) -> Result<Token, SyntaxError> {
    match token {
        Some(Token::Literal(text)) => Ok(Token::Literal(format!("-{text}"))),
        Some(Token::Group { source, negated }) => Ok(Token::Group {
            source,
            negated: !negated,
        }),
        Some(Token::Operator(_)) => Err(SyntaxError::UnexpectedOperator),
        None => Err(SyntaxError::MissingOperand),
    }
}
