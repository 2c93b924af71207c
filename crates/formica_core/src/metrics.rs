//! Performance metrics collection for the simulation.
//!
//! Provides structured logging and metrics tracking for monitoring
//! simulation performance and health.

use crate::world::WorldStats;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Metrics collector for a running simulation.
pub struct Metrics {
    tick_count: AtomicU64,
    food_sources: AtomicU64,
    tick_nanos: AtomicU64,
    log_interval: u64,
    start_time: Instant,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new(1000)
    }
}

impl Metrics {
    /// Creates a collector that logs every `log_interval` ticks.
    #[must_use]
    pub fn new(log_interval: u64) -> Self {
        Self {
            tick_count: AtomicU64::new(0),
            food_sources: AtomicU64::new(0),
            tick_nanos: AtomicU64::new(0),
            log_interval: log_interval.max(1),
            start_time: Instant::now(),
        }
    }

    /// Records a completed tick with its duration.
    pub fn record_tick(&self, duration: Duration, stats: &WorldStats) {
        let tick = self.tick_count.fetch_add(1, Ordering::Relaxed) + 1;
        self.food_sources
            .store(stats.food_sources as u64, Ordering::Relaxed);
        self.tick_nanos.fetch_add(
            u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX),
            Ordering::Relaxed,
        );

        if tick.is_multiple_of(self.log_interval) {
            tracing::info!(
                tick = stats.tick,
                food_sources = stats.food_sources,
                remaining_food = stats.remaining_food,
                depleted = stats.depleted_sources,
                food_total = stats.food_pheromone_total,
                foraging_total = stats.foraging_pheromone_total,
                duration_us = duration.as_micros() as u64,
                "Simulation tick"
            );
        }
    }

    /// Gets the current tick count.
    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count.load(Ordering::Relaxed)
    }

    /// Active food sources at the last recorded tick.
    #[must_use]
    pub fn food_sources(&self) -> u64 {
        self.food_sources.load(Ordering::Relaxed)
    }

    /// Mean duration of the recorded ticks.
    #[must_use]
    pub fn mean_tick_duration(&self) -> Duration {
        let ticks = self.tick_count();
        if ticks == 0 {
            return Duration::ZERO;
        }
        Duration::from_nanos(self.tick_nanos.load(Ordering::Relaxed) / ticks)
    }

    /// Gets elapsed time since metrics creation.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

/// Initialize tracing subscriber for logging.
///
/// `RUST_LOG` overrides `default_filter` when set.
pub fn init_logging(default_filter: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_env_filter(filter)
            .finish(),
    )
    .ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(food_sources: usize) -> WorldStats {
        WorldStats {
            food_sources,
            ..Default::default()
        }
    }

    #[test]
    fn test_metrics_new() {
        let metrics = Metrics::new(10);
        assert_eq!(metrics.tick_count(), 0);
        assert_eq!(metrics.mean_tick_duration(), Duration::ZERO);
    }

    #[test]
    fn test_record_tick() {
        let metrics = Metrics::new(10);
        metrics.record_tick(Duration::from_millis(4), &stats(5));
        metrics.record_tick(Duration::from_millis(2), &stats(5));
        assert_eq!(metrics.tick_count(), 2);
        assert_eq!(metrics.food_sources(), 5);
        assert_eq!(metrics.mean_tick_duration(), Duration::from_millis(3));
    }
}
