use crate::data::position::Position;
use serde::{Deserialize, Serialize};

/// A depletable food resource pinned to a grid cell.
///
/// The radius of influence is shared by every source and lives in the
/// world configuration, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodSource {
    position: Position,
    capacity: u32,
    remaining: u32,
}

impl FoodSource {
    /// Creates a full source. A capacity of zero is raised to one so a
    /// freshly placed source always holds food.
    #[must_use]
    pub fn new(position: Position, capacity: u32) -> Self {
        let capacity = capacity.max(1);
        Self {
            position,
            capacity,
            remaining: capacity,
        }
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    #[must_use]
    pub fn contains_food(&self) -> bool {
        self.remaining > 0
    }

    /// Removes one unit of food. Returns `true` while food remains
    /// afterwards, `false` once the source is exhausted.
    ///
    /// # Panics
    /// Panics when called on an exhausted source.
    pub fn take_food(&mut self) -> bool {
        assert!(
            self.contains_food(),
            "take_food called on exhausted source at {}",
            self.position
        );
        self.remaining -= 1;
        self.contains_food()
    }
}
