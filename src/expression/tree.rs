// ============================================================================
// Expression Tree
// Parenthesis nesting and precedence grouping
// ============================================================================

use super::errors::{ExpressionResult, SyntaxError};
use super::operator::Operator;
use super::tokenizer::{fold_unary_minus, scan, Token};
use super::validate::validate;
use std::fmt;

/// Node of an expression tree
///
/// A `Group` is either a parenthesised sub-expression or a multiply/divide
/// run lifted out of an additive level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Literal(String),
    Op(Operator),
    Group(Vec<Node>),
}

impl Node {
    pub fn is_operand(&self) -> bool {
        !matches!(self, Node::Op(_))
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Literal(text) => f.write_str(text),
            Node::Op(op) => write!(f, "{op}"),
            Node::Group(children) => {
                f.write_str("(")?;
                for child in children {
                    write!(f, "{child}")?;
                }
                f.write_str(")")
            }
        }
    }
}

/// Validated, precedence-grouped expression
///
/// Built once per evaluation and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpressionTree {
    nodes: Vec<Node>,
}

impl ExpressionTree {
    /// Validate and build the tree for `expression`.
    ///
    /// Surrounding whitespace is ignored.
    pub fn parse(expression: &str) -> ExpressionResult<Self> {
        let expression = expression.trim();
        validate(expression)?;
        let nodes = build_level(expression)?;
        Ok(Self { nodes })
    }

    /// Top-level nodes
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Number of top-level operands
    pub fn term_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_operand()).count()
    }
}

impl fmt::Display for ExpressionTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in &self.nodes {
            write!(f, "{node}")?;
        }
        Ok(())
    }
}

fn build_level(expression: &str) -> Result<Vec<Node>, SyntaxError> {
    let tokens = fold_unary_minus(scan(expression)?)?;

    let mut nodes = Vec::with_capacity(tokens.len());
    for token in tokens {
        let node = match token {
            Token::Literal(text) => Node::Literal(text),
            Token::Operator(op) => Node::Op(op),
            Token::Group { source, negated } => {
                let inner = Node::Group(build_level(&source)?);
                if negated {
                    Node::Group(vec![
                        Node::Literal("-1".to_string()),
                        Node::Op(Operator::Multiply),
                        inner,
                    ])
                } else {
                    inner
                }
            }
        };
        nodes.push(node);
    }

    Ok(group_precedence(nodes))
}

/// When a level mixes additive and multiplicative operators, lift every
/// `*`/`/` run (together with the operand before it) into its own group.
fn group_precedence(nodes: Vec<Node>) -> Vec<Node> {
    let ops = || {
        nodes.iter().filter_map(|n| match n {
            Node::Op(op) => Some(*op),
            _ => None,
        })
    };
    let mixed = ops().any(Operator::is_additive) && ops().any(Operator::is_multiplicative);
    if !mixed {
        return nodes;
    }

    let mut out: Vec<Node> = Vec::with_capacity(nodes.len());
    let mut run: Option<Vec<Node>> = None;

    for node in nodes {
        match node {
            Node::Op(op) if op.is_multiplicative() => {
                run.get_or_insert_with(|| out.pop().into_iter().collect())
                    .push(Node::Op(op));
            }
            Node::Op(op) => {
                if let Some(group) = run.take() {
                    out.push(Node::Group(group));
                }
                out.push(Node::Op(op));
            }
            operand => match run.as_mut() {
                Some(group) => group.push(operand),
                None => out.push(operand),
            },
        }
    }
    if let Some(group) = run {
        out.push(Node::Group(group));
    }

    out
}
