use thiserror::Error;

use crate::solver::tour::InvalidSequenceError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum OptimizeError {
    /// The request cannot be optimized as submitted. Caller-facing.
    #[error("{0}")]
    Validation(String),

    /// A planner produced a sequence that is not a permutation of the stops.
    #[error("planner produced an invalid sequence: {0}")]
    InvalidSequence(#[from] InvalidSequenceError),
}

impl OptimizeError {
    pub fn validation(message: impl Into<String>) -> Self {
        OptimizeError::Validation(message.into())
    }

    pub fn is_caller_error(&self) -> bool {
        matches!(self, OptimizeError::Validation(_))
    }
}
