// ============================================================================
// Engine Module
// Configured calculators and their construction
// ============================================================================

mod calculator;

pub mod factory;

pub use calculator::Calculator;
pub use factory::{create_from_config, CalculatorBuilder};
