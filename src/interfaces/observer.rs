// ============================================================================
// Evaluation Observer Interface
// Defines the contract for watching expression evaluation
// ============================================================================

use crate::expression::Operator;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Events emitted while an expression is evaluated
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EvaluationEvent {
    /// Expression passed validation and was built into a tree
    ExpressionParsed { expression: String, terms: usize },

    /// One binary operation was reduced
    OperationApplied {
        operator: Operator,
        lhs: String,
        rhs: String,
        result: String,
    },

    /// A division stopped at the decimal-length cap with digits left over
    DivisionTruncated {
        dividend: String,
        divisor: String,
        quotient: String,
        remainder: String,
    },

    /// Expression fully reduced
    ExpressionEvaluated { expression: String, result: String },
}

/// Observer trait for evaluation events
/// Implementations can handle logging, auditing, precision warnings, etc.
pub trait EvaluationObserver: Send + Sync {
    /// Handle a single event
    fn on_event(&self, event: EvaluationEvent);

    /// Batch handler, called once per evaluation
    fn on_events(&self, events: Vec<EvaluationEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// Observer that ignores every event
pub struct NoOpObserver;

impl EvaluationObserver for NoOpObserver {
    fn on_event(&self, _event: EvaluationEvent) {}

    fn on_events(&self, _events: Vec<EvaluationEvent>) {}
}

/// Observer that forwards events to `tracing`
pub struct LoggingObserver;

impl EvaluationObserver for LoggingObserver {
    fn on_event(&self, event: EvaluationEvent) {
        match &event {
            EvaluationEvent::DivisionTruncated { .. } => {
                tracing::warn!("Division truncated: {:?}", event)
            }
            _ => tracing::debug!("Evaluation event: {:?}", event),
        }
    }
}
