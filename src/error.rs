//! Error types for the simulation engine
//!
//! Every fallible engine entry point returns [`SimError`]. The binary wraps
//! these (and I/O / YAML failures) in `anyhow`.

use std::fmt;

use crate::simulation::entity::EntityKind;

/// Errors reported by the engine, the scenario builder and the kind parsers
#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    /// Entity kind code or name that is not `Point`, `Bound` or `Puller`
    InvalidKind(String),
    /// Negative or non-finite radius / width / height
    InvalidShape { kind: EntityKind, reason: String },
    /// `advance` called with zero sub-steps
    InvalidSubSteps,
    /// `step` called with a non-positive or non-finite dt
    InvalidTimeStep(f64),
    /// Tuning constants that would make the force field meaningless
    InvalidParameters(String),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::InvalidKind(kind) => write!(f, "Bad entity kind in insert ({})", kind),
            SimError::InvalidShape { kind, reason } => {
                write!(f, "Invalid shape for {:?}: {}", kind, reason)
            }
            SimError::InvalidSubSteps => write!(f, "advance needs at least one sub-step"),
            SimError::InvalidTimeStep(dt) => {
                write!(f, "Time step must be positive and finite, got {}", dt)
            }
            SimError::InvalidParameters(msg) => write!(f, "Invalid parameters: {}", msg),
        }
    }
}

impl std::error::Error for SimError {}
