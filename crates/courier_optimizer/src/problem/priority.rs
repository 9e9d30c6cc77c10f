use std::num::NonZeroU32;

use serde::Serialize;

use crate::error::OptimizeError;

/// Weight of a stop in greedy selection. Higher values make a stop more
/// attractive at the same distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Priority(NonZeroU32);

impl Priority {
    pub const DEFAULT: Priority = Priority(NonZeroU32::MIN);

    pub fn new(value: NonZeroU32) -> Self {
        Priority(value)
    }

    /// Accepts any finite number that is a positive integer (`2` and `2.0`
    /// alike, as JSON clients do not distinguish them).
    pub fn try_from_number(value: f64) -> Result<Self, OptimizeError> {
        if !value.is_finite() || value.fract() != 0.0 || value < 1.0 || value > u32::MAX as f64 {
            return Err(OptimizeError::validation(format!(
                "priority must be a positive integer, got {value}"
            )));
        }

        NonZeroU32::new(value as u32)
            .map(Priority)
            .ok_or_else(|| OptimizeError::validation("priority must be positive"))
    }

    pub fn get(&self) -> u32 {
        self.0.get()
    }

    pub fn weight(&self) -> f64 {
        f64::from(self.0.get())
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::DEFAULT
    }
}
