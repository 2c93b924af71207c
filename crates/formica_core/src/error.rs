//! Error types for world construction.
//!
//! Runtime operations on a world never fail: out-of-bounds positions are
//! silent no-ops and contract violations panic. Only building a world can
//! go wrong.

use formica_data::Position;
use thiserror::Error;

/// Main error type for formica_core operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorldError {
    /// Configuration rejected by validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Not enough free room for the requested number of food sources
    #[error(
        "Placed only {placed} of {requested} food sources with radius {radius} on a {width}x{height} grid"
    )]
    FoodPlacement {
        requested: usize,
        placed: usize,
        width: i32,
        height: i32,
        radius: i32,
    },

    /// Explicit food source outside the grid
    #[error("Food source at {position} lies outside the grid")]
    FoodOutOfBounds { position: Position },

    /// Explicit food source overlapping an earlier one
    #[error("Food source at {position} overlaps another source")]
    FoodOverlap { position: Position },

    /// Explicit food source that holds no food
    #[error("Food source at {position} is already exhausted")]
    FoodExhausted { position: Position },
}

/// Result type alias for formica_core operations.
pub type Result<T> = std::result::Result<T, WorldError>;

impl WorldError {
    /// Creates a new configuration error.
    #[must_use]
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        Self::InvalidConfig(msg.into())
    }
}

impl From<anyhow::Error> for WorldError {
    fn from(err: anyhow::Error) -> Self {
        Self::InvalidConfig(err.to_string())
    }
}
