// ============================================================================
// Expression Module
// Infix arithmetic over exact decimals
// ============================================================================
//
// Pipeline: validate -> scan -> fold unary minus -> nest groups ->
// lift multiply/divide runs -> reduce depth-first.

mod errors;
mod evaluator;
mod operator;
mod tokenizer;
mod tree;
mod validate;

pub use errors::{ExpressionError, ExpressionResult, SyntaxError};
pub use evaluator::{evaluate, Evaluator};
pub use operator::Operator;
pub use tokenizer::MAX_NESTING_DEPTH;
pub use tree::{ExpressionTree, Node};
