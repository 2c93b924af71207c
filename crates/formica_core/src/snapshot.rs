//! Serializable copies of world state for offline inspection.

use formica_data::{FoodSource, Position};
use serde::{Deserialize, Serialize};

/// Everything needed to redraw a world at one tick. Fields are row-major,
/// `y * width + x`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WorldSnapshot {
    pub width: i32,
    pub height: i32,
    pub tick: u64,
    pub home: Position,
    pub home_radius: i32,
    pub food_radius: i32,
    pub food_sources: Vec<FoodSource>,
    pub food_pheromone: Vec<f32>,
    pub foraging_pheromone: Vec<f32>,
}

impl WorldSnapshot {
    /// Food pheromone at `p`, or 0.0 outside the grid.
    #[must_use]
    pub fn food_at(&self, p: Position) -> f32 {
        self.cell(&self.food_pheromone, p)
    }

    /// Foraging pheromone at `p`, or 0.0 outside the grid.
    #[must_use]
    pub fn foraging_at(&self, p: Position) -> f32 {
        self.cell(&self.foraging_pheromone, p)
    }

    fn cell(&self, values: &[f32], p: Position) -> f32 {
        if !p.is_in_bounds(self.width, self.height) {
            return 0.0;
        }
        values
            .get(p.y as usize * self.width as usize + p.x as usize)
            .copied()
            .unwrap_or(0.0)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
