use crate::define_index_newtype;

use super::{coordinate::Coordinate, priority::Priority};

define_index_newtype!(StopIdx, Stop);

/// A delivery stop, or the depot when used as the start location.
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    coordinate: Coordinate,
    address: String,
    priority: Priority,
}

impl Stop {
    pub fn new(coordinate: Coordinate, address: impl Into<String>, priority: Priority) -> Self {
        Stop {
            coordinate,
            address: address.into(),
            priority,
        }
    }

    pub fn coordinate(&self) -> &Coordinate {
        &self.coordinate
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }
}
