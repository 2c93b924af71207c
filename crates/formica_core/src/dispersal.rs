//! Pluggable per-cell pheromone update rules.

use crate::config::DispersalConfig;
use crate::error::{Result, WorldError};
use crate::pheromone::PheromonePair;
use formica_data::Position;
use std::fmt;

/// Read-only view of the pheromone state a policy may inspect.
pub trait PheromoneSense {
    fn width(&self) -> i32;
    fn height(&self) -> i32;

    /// Cells that never carry pheromone. Only off-grid cells for now.
    fn is_obstacle(&self, p: Position) -> bool {
        !p.is_in_bounds(self.width(), self.height())
    }

    fn food_strength(&self, p: Position) -> f32;
    fn foraging_strength(&self, p: Position) -> f32;
}

/// Computes one cell's next-tick values from the current fields.
///
/// Implementations must be pure: the world evaluates every cell against the
/// same pre-tick view, possibly from several threads at once.
pub trait DispersalPolicy: Send + Sync + fmt::Debug {
    fn dispersed_value(&self, view: &dyn PheromoneSense, p: Position) -> PheromonePair;
}

/// Neighborhood averaging with retention and global decay.
///
/// `next = ((1 - K) * mean(moore neighbors) + K * own) * F`, with off-grid
/// neighbors replaced by the cell's own value so edges do not leak.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiffusionDecay {
    retention: f32,
    decay: f32,
}

impl Default for DiffusionDecay {
    fn default() -> Self {
        Self {
            retention: 0.5,
            decay: 0.95,
        }
    }
}

impl DiffusionDecay {
    /// `retention` (K) must lie in `[0, 1]` and `decay` (F) in `(0, 1]`.
    pub fn new(retention: f32, decay: f32) -> Result<Self> {
        if !(0.0..=1.0).contains(&retention) {
            return Err(WorldError::invalid_config(format!(
                "Dispersal retention {retention} outside [0.0, 1.0]"
            )));
        }
        if !(decay > 0.0 && decay <= 1.0) {
            return Err(WorldError::invalid_config(format!(
                "Dispersal decay {decay} outside (0.0, 1.0]"
            )));
        }
        Ok(Self { retention, decay })
    }

    pub fn from_config(config: &DispersalConfig) -> Result<Self> {
        Self::new(config.retention, config.decay)
    }

    #[must_use]
    pub fn retention(&self) -> f32 {
        self.retention
    }

    #[must_use]
    pub fn decay(&self) -> f32 {
        self.decay
    }

    fn next_value(
        &self,
        width: i32,
        height: i32,
        p: Position,
        read: impl Fn(Position) -> f32,
    ) -> f32 {
        let own = read(p);
        let sum: f32 = p
            .moore_neighbors()
            .map(|n| {
                if n.is_in_bounds(width, height) {
                    read(n)
                } else {
                    own
                }
            })
            .sum();
        ((1.0 - self.retention) * sum / 8.0 + self.retention * own) * self.decay
    }
}

impl DispersalPolicy for DiffusionDecay {
    fn dispersed_value(&self, view: &dyn PheromoneSense, p: Position) -> PheromonePair {
        let (width, height) = (view.width(), view.height());
        PheromonePair::new(
            self.next_value(width, height, p, |q| view.food_strength(q)),
            self.next_value(width, height, p, |q| view.foraging_strength(q)),
        )
    }
}
