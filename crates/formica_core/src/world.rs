//! The foraging environment: two pheromone fields, replenishing food
//! sources and a home region, advanced one tick at a time.

use crate::config::AppConfig;
use crate::dispersal::{DiffusionDecay, DispersalPolicy, PheromoneSense};
use crate::error::Result;
use crate::food::{FoodPickup, FoodSupply};
use crate::pheromone::{PheromoneField, PheromoneKind, PheromonePair, MAX_STRENGTH};
use crate::snapshot::WorldSnapshot;
use formica_data::{FoodSource, Position};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Operations ants perform on their environment.
///
/// Obstacles, dropped food, dead ants and the global food count are part
/// of the interface but carry no behavior yet.
pub trait AntWorld: PheromoneSense {
    fn contains_food(&self, p: Position) -> bool;
    fn pick_up_food(&mut self, p: Position) -> FoodPickup;
    fn drop_food_pheromone(&self, p: Position, amount: f32);
    fn drop_foraging_pheromone(&self, p: Position, amount: f32);
    fn is_home(&self, p: Position) -> bool;
    fn disperse_pheromones(&mut self);

    fn drop_food(&mut self, _p: Position) {}

    fn dead_ant_count(&self, _p: Position) -> f32 {
        0.0
    }

    fn food_count(&self) -> u64 {
        0
    }

    fn set_obstacle(&mut self, _p: Position, _add: bool) {}

    fn hit_obstacle(&mut self, _p: Position, _strength: f32) {}
}

/// Aggregate numbers describing a world after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WorldStats {
    pub tick: u64,
    pub food_sources: usize,
    pub remaining_food: u64,
    pub depleted_sources: u64,
    pub food_pheromone_total: f64,
    pub foraging_pheromone_total: f64,
    pub food_pheromone_peak: f32,
    pub foraging_pheromone_peak: f32,
}

pub struct World {
    width: i32,
    height: i32,
    food_pheromone: PheromoneField,
    foraging_pheromone: PheromoneField,
    food: FoodSupply,
    home: Position,
    home_radius: i32,
    policy: Arc<dyn DispersalPolicy>,
    rng: ChaCha8Rng,
    tick: u64,
    depleted_sources: u64,
}

impl fmt::Debug for World {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("World")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("food_sources", &self.food.len())
            .field("home", &self.home)
            .field("policy", &self.policy)
            .field("tick", &self.tick)
            .finish_non_exhaustive()
    }
}

impl World {
    /// Builds a world with the diffusion-and-decay policy described by
    /// `config.dispersal`.
    pub fn new(config: &AppConfig) -> Result<Self> {
        let policy = DiffusionDecay::from_config(&config.dispersal)?;
        Self::with_policy(config, Arc::new(policy))
    }

    /// Builds a world with a caller-supplied policy, placing
    /// `config.world.food_sources` sources at random.
    pub fn with_policy(config: &AppConfig, policy: Arc<dyn DispersalPolicy>) -> Result<Self> {
        let mut world = Self::empty(config, policy)?;
        world
            .food
            .populate(config.world.food_sources, &mut world.rng)?;
        tracing::info!(
            width = world.width,
            height = world.height,
            food_sources = world.food.len(),
            home = %world.home,
            "World created"
        );
        Ok(world)
    }

    /// Builds a world around explicit initial sources. Their number becomes
    /// the fixed source count; `config.world.food_sources` is ignored.
    pub fn from_sources(
        config: &AppConfig,
        policy: Arc<dyn DispersalPolicy>,
        sources: impl IntoIterator<Item = FoodSource>,
    ) -> Result<Self> {
        let mut world = Self::empty(config, policy)?;
        for source in sources {
            world.food.insert(source)?;
        }
        Ok(world)
    }

    fn empty(config: &AppConfig, policy: Arc<dyn DispersalPolicy>) -> Result<Self> {
        config.validate()?;
        let width = i32::from(config.world.width);
        let height = i32::from(config.world.height);
        let rng = match config.world.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Ok(Self {
            width,
            height,
            food_pheromone: PheromoneField::new(width, height),
            foraging_pheromone: PheromoneField::new(width, height),
            food: FoodSupply::new(
                width,
                height,
                &config.food,
                config.world.max_placement_attempts,
            ),
            home: config.world.home_position(),
            home_radius: config.world.home_radius,
            policy,
            rng,
            tick: 0,
            depleted_sources: 0,
        })
    }

    #[must_use]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Ticks advanced so far.
    #[must_use]
    pub fn tick(&self) -> u64 {
        self.tick
    }

    #[must_use]
    pub fn home(&self) -> Position {
        self.home
    }

    #[must_use]
    pub fn home_radius(&self) -> i32 {
        self.home_radius
    }

    #[must_use]
    pub fn food_radius(&self) -> i32 {
        self.food.radius()
    }

    /// Active sources in insertion order.
    #[must_use]
    pub fn food_sources(&self) -> &[FoodSource] {
        self.food.sources()
    }

    /// Sources exhausted and replaced since construction.
    #[must_use]
    pub fn depleted_sources(&self) -> u64 {
        self.depleted_sources
    }

    #[must_use]
    pub fn policy(&self) -> &Arc<dyn DispersalPolicy> {
        &self.policy
    }

    #[must_use]
    pub fn is_obstacle(&self, p: Position) -> bool {
        PheromoneSense::is_obstacle(self, p)
    }

    #[must_use]
    pub fn contains_food(&self, p: Position) -> bool {
        self.food.contains_food(p)
    }

    pub fn pick_up_food(&mut self, p: Position) -> FoodPickup {
        let outcome = self.food.pick_up(p, &mut self.rng);
        if matches!(outcome, FoodPickup::Depleted { .. }) {
            self.depleted_sources += 1;
        }
        outcome
    }

    fn field(&self, kind: PheromoneKind) -> &PheromoneField {
        match kind {
            PheromoneKind::Food => &self.food_pheromone,
            PheromoneKind::Foraging => &self.foraging_pheromone,
        }
    }

    /// Adds pheromone at `p`, saturating at 1.0. Safe to call from many
    /// threads sharing `&World`.
    pub fn drop_pheromone(&self, kind: PheromoneKind, p: Position, amount: f32) {
        self.field(kind).deposit(p, amount);
    }

    pub fn drop_food_pheromone(&self, p: Position, amount: f32) {
        self.drop_pheromone(PheromoneKind::Food, p, amount);
    }

    pub fn drop_foraging_pheromone(&self, p: Position, amount: f32) {
        self.drop_pheromone(PheromoneKind::Foraging, p, amount);
    }

    #[must_use]
    pub fn strength(&self, kind: PheromoneKind, p: Position) -> f32 {
        self.field(kind).get(p)
    }

    #[must_use]
    pub fn food_strength(&self, p: Position) -> f32 {
        self.food_pheromone.get(p)
    }

    #[must_use]
    pub fn foraging_strength(&self, p: Position) -> f32 {
        self.foraging_pheromone.get(p)
    }

    #[must_use]
    pub fn is_home(&self, p: Position) -> bool {
        p.is_within_radius(&self.home, self.home_radius)
    }

    /// Advances the pheromone fields by one tick.
    ///
    /// Every food source is re-lit at full strength, then each cell's next
    /// values are computed from the pre-tick fields and both fields are
    /// replaced together.
    pub fn disperse_pheromones(&mut self) {
        for source in self.food.sources() {
            self.food_pheromone.deposit(source.position(), MAX_STRENGTH);
        }

        let (food, foraging) = self.dispersed_fields();
        self.food_pheromone = food;
        self.foraging_pheromone = foraging;
        self.tick += 1;
    }

    fn dispersed_fields(&self) -> (PheromoneField, PheromoneField) {
        let width = self.width as usize;
        let size = width * self.height as usize;
        let (food, foraging): (Vec<f32>, Vec<f32>) = (0..size)
            .into_par_iter()
            .map(|idx| {
                let view: &dyn PheromoneSense = self;
                let p = Position::new((idx % width) as i32, (idx / width) as i32);
                if view.is_obstacle(p) {
                    return (0.0, 0.0);
                }
                let PheromonePair { food, foraging } = self.policy.dispersed_value(view, p);
                (food, foraging)
            })
            .unzip();
        (
            PheromoneField::from_values(self.width, self.height, food),
            PheromoneField::from_values(self.width, self.height, foraging),
        )
    }

    #[must_use]
    pub fn stats(&self) -> WorldStats {
        WorldStats {
            tick: self.tick,
            food_sources: self.food.len(),
            remaining_food: self.food.remaining_food(),
            depleted_sources: self.depleted_sources,
            food_pheromone_total: self.food_pheromone.total(),
            foraging_pheromone_total: self.foraging_pheromone.total(),
            food_pheromone_peak: self.food_pheromone.peak(),
            foraging_pheromone_peak: self.foraging_pheromone.peak(),
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot {
            width: self.width,
            height: self.height,
            tick: self.tick,
            home: self.home,
            home_radius: self.home_radius,
            food_radius: self.food.radius(),
            food_sources: self.food.sources().to_vec(),
            food_pheromone: self.food_pheromone.values(),
            foraging_pheromone: self.foraging_pheromone.values(),
        }
    }
}

impl PheromoneSense for World {
    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn food_strength(&self, p: Position) -> f32 {
        self.food_pheromone.get(p)
    }

    fn foraging_strength(&self, p: Position) -> f32 {
        self.foraging_pheromone.get(p)
    }
}

impl AntWorld for World {
    fn contains_food(&self, p: Position) -> bool {
        World::contains_food(self, p)
    }

    fn pick_up_food(&mut self, p: Position) -> FoodPickup {
        World::pick_up_food(self, p)
    }

    fn drop_food_pheromone(&self, p: Position, amount: f32) {
        World::drop_food_pheromone(self, p, amount);
    }

    fn drop_foraging_pheromone(&self, p: Position, amount: f32) {
        World::drop_foraging_pheromone(self, p, amount);
    }

    fn is_home(&self, p: Position) -> bool {
        World::is_home(self, p)
    }

    fn disperse_pheromones(&mut self) {
        World::disperse_pheromones(self);
    }
}
