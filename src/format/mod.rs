// ============================================================================
// Format Module
// Rounding and human-facing rendering of decimal strings
// ============================================================================

mod number_format;
mod rounding;
mod separators;

pub use number_format::{
    fix_to_billion, fix_to_million, format_billion, format_million, format_money, format_number,
    NumberFormat, BILLION_SUFFIX, MILLION_SUFFIX,
};
pub use rounding::{round, RoundingMode};
pub use separators::{clear_separators, format_by, format_thousands};

pub(crate) use rounding::{render_padded, round_parts};
