//! Headless driver advancing a world for a fixed number of ticks.

use crate::model::config::AppConfig;
use crate::model::metrics::Metrics;
use crate::model::snapshot::WorldSnapshot;
use crate::model::world::{World, WorldStats};
use anyhow::{Context, Result};
use std::path::Path;
use std::time::Instant;

pub struct Simulation {
    pub world: World,
    pub config: AppConfig,
    metrics: Metrics,
}

impl Simulation {
    pub fn new(config: AppConfig) -> Result<Self> {
        let world = World::new(&config).context("Failed to build world")?;
        let metrics = Metrics::new(config.run.log_interval);
        tracing::info!(fingerprint = %config.fingerprint(), "Simulation configured");
        Ok(Self {
            world,
            config,
            metrics,
        })
    }

    #[must_use]
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Advances one tick and records its duration.
    pub fn step(&mut self) -> WorldStats {
        let start = Instant::now();
        self.world.disperse_pheromones();
        let stats = self.world.stats();
        self.metrics.record_tick(start.elapsed(), &stats);
        stats
    }

    /// Runs `ticks` ticks and returns the final statistics.
    pub fn run(&mut self, ticks: u64) -> WorldStats {
        let mut stats = self.world.stats();
        for _ in 0..ticks {
            stats = self.step();
        }
        tracing::info!(
            ticks = self.metrics.tick_count(),
            mean_tick_us = self.metrics.mean_tick_duration().as_micros() as u64,
            elapsed_ms = self.metrics.elapsed().as_millis() as u64,
            "Simulation finished"
        );
        stats
    }

    #[must_use]
    pub fn snapshot(&self) -> WorldSnapshot {
        self.world.snapshot()
    }

    /// Writes the current world state as JSON.
    pub fn write_snapshot(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = self
            .snapshot()
            .to_json()
            .context("Failed to serialize snapshot")?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write snapshot to {}", path.display()))?;
        tracing::info!(path = %path.display(), tick = self.world.tick(), "Snapshot written");
        Ok(())
    }
}
