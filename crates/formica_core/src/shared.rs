//! Thread-safe access to a world shared by many agents.
//!
//! Deposits and reads run under the read lock and rely on per-cell
//! compare-and-swap, so any number of agents may sense and mark trails at
//! once. Picking up food and advancing a tick take the write lock: a food
//! source is never decremented by two callers at the same time, and readers
//! observe either the whole pre-tick or the whole post-tick fields.

use crate::food::FoodPickup;
use crate::pheromone::PheromoneKind;
use crate::world::{World, WorldStats};
use formica_data::Position;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Debug)]
pub struct SharedWorld {
    inner: RwLock<World>,
}

impl From<World> for SharedWorld {
    fn from(world: World) -> Self {
        Self::new(world)
    }
}

impl SharedWorld {
    #[must_use]
    pub fn new(world: World) -> Self {
        Self {
            inner: RwLock::new(world),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, World> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, World> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }

    /// Runs `f` against a consistent view of the world.
    pub fn with_world<T>(&self, f: impl FnOnce(&World) -> T) -> T {
        f(&self.read())
    }

    pub fn width(&self) -> i32 {
        self.read().width()
    }

    pub fn height(&self) -> i32 {
        self.read().height()
    }

    pub fn is_obstacle(&self, p: Position) -> bool {
        self.read().is_obstacle(p)
    }

    pub fn contains_food(&self, p: Position) -> bool {
        self.read().contains_food(p)
    }

    pub fn is_home(&self, p: Position) -> bool {
        self.read().is_home(p)
    }

    pub fn strength(&self, kind: PheromoneKind, p: Position) -> f32 {
        self.read().strength(kind, p)
    }

    pub fn food_strength(&self, p: Position) -> f32 {
        self.read().food_strength(p)
    }

    pub fn foraging_strength(&self, p: Position) -> f32 {
        self.read().foraging_strength(p)
    }

    pub fn drop_food_pheromone(&self, p: Position, amount: f32) {
        self.read().drop_food_pheromone(p, amount);
    }

    pub fn drop_foraging_pheromone(&self, p: Position, amount: f32) {
        self.read().drop_foraging_pheromone(p, amount);
    }

    pub fn pick_up_food(&self, p: Position) -> FoodPickup {
        self.write().pick_up_food(p)
    }

    pub fn disperse_pheromones(&self) {
        self.write().disperse_pheromones();
    }

    pub fn stats(&self) -> WorldStats {
        self.read().stats()
    }

    #[must_use]
    pub fn into_inner(self) -> World {
        self.inner.into_inner().unwrap_or_else(|e| e.into_inner())
    }
}
