// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod observer;

pub use observer::{EvaluationEvent, EvaluationObserver, LoggingObserver, NoOpObserver};
