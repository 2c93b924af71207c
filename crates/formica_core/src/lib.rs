//! # Formica Core
//!
//! The environment engine behind an ant-colony foraging simulation.
//!
//! This crate contains the deterministic world model:
//! - Two pheromone fields (food trail, foraging trail) on a bounded grid
//! - Depletable food sources that are replaced the moment they run dry
//! - A home region ants return to
//! - A pluggable per-cell dispersal policy applied once per tick
//!
//! ## Architecture
//!
//! - **World**: owns all grid storage and food sources
//! - **DispersalPolicy**: pure strategy computing a cell's next values
//! - **SharedWorld**: lock discipline for many concurrent agents
//! - **Parallel processing**: Rayon-powered per-cell dispersal
//! - **Deterministic simulation**: Seeded RNG for reproducible placement
//!
//! ## Example
//!
//! ```
//! use formica_core::config::AppConfig;
//! use formica_core::world::World;
//! use formica_data::Position;
//!
//! let mut config = AppConfig::default();
//! config.world.seed = Some(42);
//! let mut world = World::new(&config).unwrap();
//!
//! world.drop_foraging_pheromone(Position::new(10, 10), 0.8);
//! world.disperse_pheromones();
//! assert!(world.foraging_strength(Position::new(10, 10)) < 0.8);
//! ```

/// Configuration management for simulation parameters
pub mod config;
/// Pheromone dispersal policies
pub mod dispersal;
/// World construction errors
pub mod error;
/// Food source placement and replenishment
pub mod food;
/// Performance metrics collection and logging
pub mod metrics;
/// Dense pheromone fields
pub mod pheromone;
/// Lock discipline for concurrent agents
pub mod shared;
/// Serializable world state
pub mod snapshot;
/// The foraging environment
pub mod world;

pub use dispersal::{DiffusionDecay, DispersalPolicy, PheromoneSense};
pub use error::{Result, WorldError};
pub use food::FoodPickup;
pub use metrics::{init_logging, Metrics};
pub use pheromone::{PheromoneKind, PheromonePair};
pub use shared::SharedWorld;
pub use world::{AntWorld, World, WorldStats};
