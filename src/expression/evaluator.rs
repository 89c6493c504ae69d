// ============================================================================
// Expression Evaluator
// Depth-first reduction of an expression tree with exact arithmetic
// ============================================================================

use super::errors::{ExpressionResult, SyntaxError};
use super::operator::Operator;
use super::tree::{ExpressionTree, Node};
use crate::interfaces::{EvaluationEvent, EvaluationObserver, NoOpObserver};
use crate::numeric::{
    add_parts, divide_with_remainder_parts, multiply_parts, sub_parts, DecimalParts,
};

/// Evaluates expressions against a decimal-length cap, reporting to an
/// observer.
pub struct Evaluator<'a> {
    max_decimal_length: u32,
    observer: &'a dyn EvaluationObserver,
}

impl<'a> Evaluator<'a> {
    pub fn new(max_decimal_length: u32, observer: &'a dyn EvaluationObserver) -> Self {
        Self {
            max_decimal_length,
            observer,
        }
    }

    pub fn max_decimal_length(&self) -> u32 {
        self.max_decimal_length
    }

    /// Evaluate `expression` to a canonical decimal string.
    ///
    /// Events collected along the way are delivered in one batch, also when
    /// evaluation fails part-way.
    pub fn evaluate(&self, expression: &str) -> ExpressionResult<String> {
        let mut events = Vec::new();
        let result = self.run(expression, &mut events);

        match &result {
            Ok(value) => tracing::debug!(expression, result = %value, "Expression evaluated"),
            Err(e) => tracing::debug!(expression, error = %e, "Expression rejected"),
        }

        self.observer.on_events(events);
        result
    }

    fn run(&self, expression: &str, events: &mut Vec<EvaluationEvent>) -> ExpressionResult<String> {
        let tree = ExpressionTree::parse(expression)?;
        events.push(EvaluationEvent::ExpressionParsed {
            expression: expression.trim().to_string(),
            terms: tree.term_count(),
        });

        let value = self.reduce(tree.nodes(), events)?.to_canonical();
        events.push(EvaluationEvent::ExpressionEvaluated {
            expression: expression.trim().to_string(),
            result: value.clone(),
        });
        Ok(value)
    }

    /// Reduce one level: operands and operators must alternate. All
    /// additive steps keep their order; within a multiplicative run every
    /// multiplication happens before any division, so truncating divisions
    /// come last.
    fn reduce(
        &self,
        nodes: &[Node],
        events: &mut Vec<EvaluationEvent>,
    ) -> ExpressionResult<DecimalParts> {
        let mut iter = nodes.iter();
        let mut acc = match iter.next() {
            Some(node) => self.operand(node, events)?,
            None => return Err(SyntaxError::MissingOperand.into()),
        };

        let mut steps: Vec<(Operator, DecimalParts)> = Vec::with_capacity(nodes.len() / 2);
        while let Some(node) = iter.next() {
            let op = match node {
                Node::Op(op) => *op,
                _ => return Err(SyntaxError::MissingOperator.into()),
            };
            let rhs = match iter.next() {
                Some(node) => self.operand(node, events)?,
                None => return Err(SyntaxError::MissingOperand.into()),
            };
            steps.push((op, rhs));
        }

        // Stable: equal ranks keep their left-to-right order
        steps.sort_by_key(|(op, _)| op.execution_rank());

        for (op, rhs) in steps {
            acc = self.apply(op, acc, rhs, events)?;
        }
        Ok(acc)
    }

    fn operand(
        &self,
        node: &Node,
        events: &mut Vec<EvaluationEvent>,
    ) -> ExpressionResult<DecimalParts> {
        match node {
            Node::Literal(text) => Ok(DecimalParts::parse(text)?),
            Node::Group(children) => self.reduce(children, events),
            Node::Op(_) => Err(SyntaxError::UnexpectedOperator.into()),
        }
    }

    fn apply(
        &self,
        op: Operator,
        lhs: DecimalParts,
        rhs: DecimalParts,
        events: &mut Vec<EvaluationEvent>,
    ) -> ExpressionResult<DecimalParts> {
        let result = match op {
            Operator::Add => add_parts(&lhs, &rhs),
            Operator::Subtract => sub_parts(&lhs, &rhs),
            Operator::Multiply => multiply_parts(&lhs, &rhs),
            Operator::Divide => {
                let (quotient, remainder) =
                    divide_with_remainder_parts(&lhs, &rhs, self.max_decimal_length)?;
                if !remainder.is_zero() {
                    events.push(EvaluationEvent::DivisionTruncated {
                        dividend: lhs.to_canonical(),
                        divisor: rhs.to_canonical(),
                        quotient: quotient.to_canonical(),
                        remainder: remainder.to_canonical(),
                    });
                }
                quotient
            }
        };

        tracing::trace!(%lhs, operator = %op, %rhs, %result, "Operation applied");
        events.push(EvaluationEvent::OperationApplied {
            operator: op,
            lhs: lhs.to_canonical(),
            rhs: rhs.to_canonical(),
            result: result.to_canonical(),
        });
        Ok(result)
    }
}

/// Evaluate an infix expression with exact decimal arithmetic.
///
/// # Errors
/// - `ExpressionError::Syntax` for malformed expressions
/// - `ExpressionError::Numeric` for malformed literals or division by zero
///
/// # Example
/// ```
/// use digit_decimal::expression::evaluate;
///
/// assert_eq!(evaluate("1+2*3", 15).unwrap(), "7");
/// assert_eq!(evaluate("10/3*3", 15).unwrap(), "10");
/// ```
pub fn evaluate(expression: &str, max_decimal_length: u32) -> ExpressionResult<String> {
    Evaluator::new(max_decimal_length, &NoOpObserver).evaluate(expression)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expression::ExpressionError;
    use crate::numeric::{NumericError, DEFAULT_MAX_DECIMAL_LENGTH};
    use std::sync::Mutex;

    struct Recording(Mutex<Vec<EvaluationEvent>>);

    impl Recording {
        fn new() -> Self {
            Self(Mutex::new(Vec::new()))
        }

        fn events(&self) -> Vec<EvaluationEvent> {
            self.0.lock().unwrap().clone()
        }
    }

    impl EvaluationObserver for Recording {
        fn on_event(&self, event: EvaluationEvent) {
            self.0.lock().unwrap().push(event);
        }
    }

    fn eval(expr: &str) -> ExpressionResult<String> {
        evaluate(expr, DEFAULT_MAX_DECIMAL_LENGTH)
    }

    #[test]
    fn test_precedence() {
        assert_eq!(eval("1+2*3").unwrap(), "7");
        assert_eq!(eval("(1+2)*3").unwrap(), "9");
        assert_eq!(eval("2*3+4*5-6/2").unwrap(), "23");
    }

    #[test]
    fn test_unary_minus() {
        assert_eq!(eval("-2--3").unwrap(), "1");
        assert_eq!(eval("2*-(1+1)").unwrap(), "-4");
        assert_eq!(eval("-1.5*-2").unwrap(), "3");
    }

    #[test]
    fn test_multiplication_runs_before_division() {
        assert_eq!(eval("10/3*3").unwrap(), "10");
        assert_eq!(eval("1/3*6/2").unwrap(), "1");
    }

    #[test]
    fn test_exact_decimals() {
        assert_eq!(eval("0.1+0.2").unwrap(), "0.3");
        assert_eq!(eval("1.10*3").unwrap(), "3.3");
    }

    #[test]
    fn test_division_cap() {
        assert_eq!(evaluate("1/3", 5).unwrap(), "0.33333");
        assert_eq!(evaluate("2/3", 0).unwrap(), "0");
    }

    #[test]
    fn test_syntax_errors() {
        assert_eq!(
            eval("1+(2*3"),
            Err(ExpressionError::Syntax(SyntaxError::UnclosedParenthesis))
        );
        assert_eq!(
            eval("1()2"),
            Err(ExpressionError::Syntax(SyntaxError::EmptyParentheses))
        );
        assert_eq!(
            eval("2*(+1)"),
            Err(ExpressionError::Syntax(SyntaxError::UnexpectedOperator))
        );
    }

    #[test]
    fn test_adjacent_operands_need_an_operator() {
        let evaluator = Evaluator::new(DEFAULT_MAX_DECIMAL_LENGTH, &NoOpObserver);
        let nodes = [
            Node::Literal("1".to_string()),
            Node::Group(vec![Node::Literal("2".to_string())]),
        ];

        assert_eq!(
            evaluator.reduce(&nodes, &mut Vec::new()),
            Err(ExpressionError::Syntax(SyntaxError::MissingOperator))
        );
    }

    #[test]
    fn test_deep_nesting_is_rejected() {
        let depth = 10_000;
        let expression = format!("1+{}1{}", "(".repeat(depth), ")".repeat(depth));
        assert_eq!(
            eval(&expression),
            Err(ExpressionError::Syntax(SyntaxError::NestingTooDeep))
        );
    }

    #[test]
    fn test_numeric_errors() {
        assert_eq!(
            eval("1/0"),
            Err(ExpressionError::Numeric(NumericError::DivisionByZero))
        );
        assert_eq!(
            eval("1.2.3+1"),
            Err(ExpressionError::Numeric(NumericError::InvalidNumber))
        );
    }

    #[test]
    fn test_events_in_order() {
        let observer = Recording::new();
        let value = Evaluator::new(15, &observer).evaluate("1+2*3").unwrap();
        assert_eq!(value, "7");

        let events = observer.events();
        assert_eq!(
            events.first(),
            Some(&EvaluationEvent::ExpressionParsed {
                expression: "1+2*3".to_string(),
                terms: 2,
            })
        );
        assert_eq!(
            events[1],
            EvaluationEvent::OperationApplied {
                operator: Operator::Multiply,
                lhs: "2".to_string(),
                rhs: "3".to_string(),
                result: "6".to_string(),
            }
        );
        assert_eq!(
            events.last(),
            Some(&EvaluationEvent::ExpressionEvaluated {
                expression: "1+2*3".to_string(),
                result: "7".to_string(),
            })
        );
        assert_eq!(events.len(), 4);
    }

    #[test]
    fn test_truncated_division_is_reported() {
        let observer = Recording::new();
        Evaluator::new(3, &observer).evaluate("1/3").unwrap();

        assert!(observer.events().contains(&EvaluationEvent::DivisionTruncated {
            dividend: "1".to_string(),
            divisor: "3".to_string(),
            quotient: "0.333".to_string(),
            remainder: "0.001".to_string(),
        }));
    }

    #[test]
    fn test_exact_division_is_not_reported() {
        let observer = Recording::new();
        Evaluator::new(3, &observer).evaluate("1/4").unwrap();

        assert!(!observer
            .events()
            .iter()
            .any(|e| matches!(e, EvaluationEvent::DivisionTruncated { .. })));
    }

    #[test]
    fn test_failed_evaluation_still_delivers_events() {
        let observer = Recording::new();
        let result = Evaluator::new(15, &observer).evaluate("2*3+1/0");
        assert!(result.is_err());

        let events = observer.events();
        assert!(matches!(events[0], EvaluationEvent::ExpressionParsed { .. }));
        assert!(!events
            .iter()
            .any(|e| matches!(e, EvaluationEvent::ExpressionEvaluated { .. })));
    }
}
