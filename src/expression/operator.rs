// ============================================================================
// Operators
// The four binary arithmetic operators
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Binary arithmetic operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Subtract),
            '*' => Some(Operator::Multiply),
            '/' => Some(Operator::Divide),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    /// `+` or `-`
    pub fn is_additive(self) -> bool {
        matches!(self, Operator::Add | Operator::Subtract)
    }

    /// `*` or `/`
    pub fn is_multiplicative(self) -> bool {
        matches!(self, Operator::Multiply | Operator::Divide)
    }

    /// Execution order inside one flat run: additive terms keep their
    /// position, every multiplication runs before any division.
    pub(crate) fn execution_rank(self) -> u8 {
        match self {
            Operator::Add | Operator::Subtract => 0,
            Operator::Multiply => 1,
            Operator::Divide => 2,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_char_roundtrip() {
        for ch in ['+', '-', '*', '/'] {
            assert_eq!(Operator::from_char(ch).map(Operator::symbol), Some(ch));
        }
        assert_eq!(Operator::from_char('^'), None);
    }

    #[test]
    fn test_classes() {
        assert!(Operator::Subtract.is_additive());
        assert!(!Operator::Subtract.is_multiplicative());
        assert!(Operator::Divide.is_multiplicative());
        assert!(Operator::Multiply.execution_rank() < Operator::Divide.execution_rank());
    }
}
