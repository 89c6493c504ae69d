// ============================================================================
// Utilities Module
// String helpers shared by the formatter
// ============================================================================

mod padding;

pub use padding::{group_digits, pad_left, pad_right};
