// ============================================================================
// Domain Models Module
// Typed values and calculator configuration
// ============================================================================

pub mod config;
pub mod value;

pub use config::{CalculatorConfig, MAX_DECIMAL_LENGTH_LIMIT};
pub use value::ExactDecimal;
