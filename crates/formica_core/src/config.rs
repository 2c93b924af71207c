//! Configuration management for simulation parameters.
//!
//! Strongly-typed structures mapping to `config.toml`. Every field has a
//! default, so a partial file only overrides what it names.
//!
//! ## Configuration Hierarchy
//!
//! 1. Default values (hardcoded in `Default` impls)
//! 2. `config.toml` file (overrides defaults)
//! 3. Command-line flags of the `formica` binary (seed, tick count)
//!
//! ## Example `config.toml`
//!
//! ```toml
//! [world]
//! width = 100
//! height = 100
//! food_sources = 5
//! seed = 42
//!
//! [food]
//! radius = 3
//! amount = 100
//! capacity = "random"
//!
//! [dispersal]
//! retention = 0.5
//! decay = 0.95
//! ```

use formica_data::Position;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Grid-level configuration.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct WorldConfig {
    pub width: u16,
    pub height: u16,
    /// Number of food sources kept active at all times.
    pub food_sources: usize,
    /// Discovery radius around the home position.
    pub home_radius: i32,
    /// Home position; `None` means `(width, height / 2)`.
    pub home: Option<Position>,
    /// Random draws tried per food source before sweeping the whole grid.
    pub max_placement_attempts: usize,
    pub seed: Option<u64>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 100,
            height: 100,
            food_sources: 5,
            home_radius: 20,
            home: None,
            max_placement_attempts: 1000,
            seed: None,
        }
    }
}

impl WorldConfig {
    /// Resolved home position.
    #[must_use]
    pub fn home_position(&self) -> Position {
        self.home.unwrap_or_else(|| {
            Position::new(i32::from(self.width), i32::from(self.height) / 2)
        })
    }
}

/// How a new food source picks its capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CapacityMode {
    /// Uniform in `[1, amount]`.
    #[default]
    Random,
    /// Always `amount`.
    Fixed,
}

/// Food source parameters shared by every source.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct FoodConfig {
    pub radius: i32,
    pub amount: u32,
    pub capacity: CapacityMode,
}

impl Default for FoodConfig {
    fn default() -> Self {
        Self {
            radius: 3,
            amount: 100,
            capacity: CapacityMode::Random,
        }
    }
}

/// Constants of the diffusion-and-decay rule.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DispersalConfig {
    /// Weight kept by a cell's own value (K).
    pub retention: f32,
    /// Global per-tick decay multiplier (F).
    pub decay: f32,
}

impl Default for DispersalConfig {
    fn default() -> Self {
        Self {
            retention: 0.5,
            decay: 0.95,
        }
    }
}

/// Settings for the headless driver.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct RunConfig {
    pub ticks: u64,
    /// Log a progress line every this many ticks.
    pub log_interval: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            ticks: 1000,
            log_interval: 100,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct AppConfig {
    pub world: WorldConfig,
    pub food: FoodConfig,
    pub dispersal: DispersalConfig,
    pub run: RunConfig,
}

impl AppConfig {
    pub const MAX_DIMENSION: u16 = 4096;

    /// Validates all configuration parameters.
    ///
    /// Returns `Ok(())` if all parameters are valid, or `Err` with a description
    /// of the first validation failure.
    pub fn validate(&self) -> anyhow::Result<()> {
        // World validation
        anyhow::ensure!(self.world.width > 0, "World width must be positive");
        anyhow::ensure!(
            self.world.width <= Self::MAX_DIMENSION,
            "World width too large (max {})",
            Self::MAX_DIMENSION
        );
        anyhow::ensure!(self.world.height > 0, "World height must be positive");
        anyhow::ensure!(
            self.world.height <= Self::MAX_DIMENSION,
            "World height too large (max {})",
            Self::MAX_DIMENSION
        );
        anyhow::ensure!(
            self.world.home_radius >= 0,
            "Home radius must be non-negative"
        );
        anyhow::ensure!(
            self.world.max_placement_attempts > 0,
            "Max placement attempts must be positive"
        );

        // Food validation
        anyhow::ensure!(self.food.radius >= 0, "Food radius must be non-negative");
        anyhow::ensure!(
            self.food.radius <= i32::from(Self::MAX_DIMENSION),
            "Food radius too large (max {})",
            Self::MAX_DIMENSION
        );
        anyhow::ensure!(self.food.amount > 0, "Food amount must be positive");

        // Dispersal validation
        anyhow::ensure!(
            (0.0..=1.0).contains(&self.dispersal.retention),
            "Dispersal retention must be in [0.0, 1.0]"
        );
        anyhow::ensure!(
            self.dispersal.decay > 0.0 && self.dispersal.decay <= 1.0,
            "Dispersal decay must be in (0.0, 1.0]"
        );

        anyhow::ensure!(self.run.log_interval > 0, "Log interval must be positive");

        Ok(())
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from `path`, falling back to defaults when the
    /// file does not exist.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml(&content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(path = %path.display(), "Config file not found, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Stable hash of every parameter that changes simulation results.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(format!("{:?}", self.world).as_bytes());
        hasher.update(format!("{:?}", self.food).as_bytes());
        hasher.update(format!("{:?}", self.dispersal).as_bytes());
        hex::encode(hasher.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_world_width() {
        let config = AppConfig {
            world: WorldConfig {
                width: 0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_world_height() {
        let config = AppConfig {
            world: WorldConfig {
                height: AppConfig::MAX_DIMENSION + 1,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_retention() {
        let config = AppConfig {
            dispersal: DispersalConfig {
                retention: 1.5,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_decay_rejected() {
        let config = AppConfig {
            dispersal: DispersalConfig {
                decay: 0.0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_food_amount_rejected() {
        let config = AppConfig {
            food: FoodConfig {
                amount: 0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_food_radius_bounded() {
        let mut config = AppConfig::default();
        config.food.radius = i32::from(AppConfig::MAX_DIMENSION);
        assert!(config.validate().is_ok());
        config.food.radius = 20_000;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [world]
            width = 40
            seed = 7

            [food]
            capacity = "fixed"
            "#,
        )
        .unwrap();
        assert_eq!(config.world.width, 40);
        assert_eq!(config.world.height, 100);
        assert_eq!(config.world.seed, Some(7));
        assert_eq!(config.food.capacity, CapacityMode::Fixed);
        assert_eq!(config.food.radius, 3);
        assert_eq!(config.dispersal, DispersalConfig::default());
    }

    #[test]
    fn test_toml_rejects_invalid_values() {
        assert!(AppConfig::from_toml("[dispersal]\ndecay = 1.5\n").is_err());
    }

    #[test]
    fn test_home_defaults_to_right_edge_middle() {
        let world = WorldConfig {
            width: 80,
            height: 60,
            ..Default::default()
        };
        assert_eq!(world.home_position(), Position::new(80, 30));
    }

    #[test]
    fn test_explicit_home_from_toml() {
        let config = AppConfig::from_toml("[world]\nhome = { x = 3, y = 4 }\n").unwrap();
        assert_eq!(config.world.home_position(), Position::new(3, 4));
    }

    #[test]
    fn test_fingerprint_consistency() {
        let a = AppConfig::default();
        let mut b = AppConfig::default();
        assert_eq!(a.fingerprint(), b.fingerprint());
        b.dispersal.decay = 0.9;
        assert_ne!(a.fingerprint(), b.fingerprint());
        // Driver settings do not change results
        let mut c = AppConfig::default();
        c.run.ticks = 5;
        assert_eq!(a.fingerprint(), c.fingerprint());
    }
}
