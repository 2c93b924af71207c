pub mod macros;

use formica_lib::model::config::{AppConfig, CapacityMode};
use formica_lib::model::dispersal::DiffusionDecay;
use formica_lib::model::food::FoodSource;
use formica_lib::model::position::Position;
use formica_lib::model::world::World;
use formica_lib::model::DispersalPolicy;
use std::sync::Arc;

#[allow(dead_code)]
pub struct WorldBuilder {
    config: AppConfig,
    sources: Vec<FoodSource>,
    policy: Option<Arc<dyn DispersalPolicy>>,
    deposits: Vec<(Position, f32, f32)>,
}

#[allow(dead_code)]
impl WorldBuilder {
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.world.food_sources = 0;
        config.world.seed = Some(0);
        config.food.capacity = CapacityMode::Fixed;
        Self {
            config,
            sources: Vec::new(),
            policy: None,
            deposits: Vec::new(),
        }
    }

    pub fn with_size(mut self, width: u16, height: u16) -> Self {
        self.config.world.width = width;
        self.config.world.height = height;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.world.seed = Some(seed);
        self
    }

    pub fn with_config<F>(mut self, modifier: F) -> Self
    where
        F: FnOnce(&mut AppConfig),
    {
        modifier(&mut self.config);
        self
    }

    /// Places an explicit source; the world then skips random placement.
    pub fn with_source(mut self, x: i32, y: i32, capacity: u32) -> Self {
        self.sources
            .push(FoodSource::new(Position::new(x, y), capacity));
        self
    }

    pub fn with_policy(mut self, policy: Arc<dyn DispersalPolicy>) -> Self {
        self.policy = Some(policy);
        self
    }

    pub fn with_pheromone(mut self, x: i32, y: i32, food: f32, foraging: f32) -> Self {
        self.deposits.push((Position::new(x, y), food, foraging));
        self
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn build(self) -> World {
        let policy = match self.policy {
            Some(policy) => policy,
            None => Arc::new(
                DiffusionDecay::from_config(&self.config.dispersal).expect("valid dispersal"),
            ),
        };
        let world = if self.sources.is_empty() {
            World::with_policy(&self.config, policy).expect("Failed to build world")
        } else {
            World::from_sources(&self.config, policy, self.sources)
                .expect("Failed to build world")
        };
        for (p, food, foraging) in self.deposits {
            world.drop_food_pheromone(p, food);
            world.drop_foraging_pheromone(p, foraging);
        }
        world
    }
}
