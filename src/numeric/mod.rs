// ============================================================================
// Numeric Module
// Exact decimal arithmetic over digit strings
// ============================================================================
//
// This module provides:
// - canonicalize/negate/abs: normalization of numeric text
// - compare: sign-aware ordering
// - add/subtract/multiply/divide: exact digit-by-digit arithmetic
// - NumericError: Error types for arithmetic operations
//
// Design principles:
// - No floating-point operations anywhere
// - Every value is a canonical string: no leading/trailing redundant zeros,
//   no negative zero
// - All entry points return Result (no panics)
// - Division is the only inexact operation, capped at a caller-chosen number
//   of fractional digits

mod additive;
mod canonical;
mod compare;
mod divide;
mod errors;
mod multiply;

pub use additive::{add, subtract};
pub use canonical::{abs, canonicalize, negate, MAX_EXPONENT};
pub use compare::compare;
pub use divide::{divide, divide_with_remainder, DivisionResult, DEFAULT_MAX_DECIMAL_LENGTH};
pub use errors::{NumericError, NumericResult};
pub use multiply::multiply;

pub(crate) use additive::{add_parts, sub_parts};
pub(crate) use canonical::DecimalParts;
pub(crate) use compare::{compare_magnitude, compare_parts};
pub(crate) use divide::{divide_parts, divide_with_remainder_parts};
pub(crate) use multiply::multiply_parts;
