use anyhow::{Context, Result};
use clap::Parser;
use formica_lib::app::Simulation;
use formica_lib::model::config::AppConfig;
use formica_lib::model::metrics::init_logging;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Headless ant-colony foraging environment", long_about = None)]
struct Args {
    /// Custom config file path
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Ticks to run, overriding `[run] ticks`
    #[arg(short, long)]
    ticks: Option<u64>,

    /// Placement seed, overriding `[world] seed`
    #[arg(short, long)]
    seed: Option<u64>,

    /// Write the final world state as JSON
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(if args.verbose { "debug" } else { "info" });

    let mut config = AppConfig::load(&args.config)
        .with_context(|| format!("Failed to load config from {}", args.config.display()))?;
    if let Some(seed) = args.seed {
        config.world.seed = Some(seed);
    }
    let ticks = args.ticks.unwrap_or(config.run.ticks);

    let mut sim = Simulation::new(config)?;
    let stats = sim.run(ticks);
    println!(
        "tick {} | sources {} | remaining food {} | depleted {} | food trail {:.3} | foraging trail {:.3}",
        stats.tick,
        stats.food_sources,
        stats.remaining_food,
        stats.depleted_sources,
        stats.food_pheromone_total,
        stats.foraging_pheromone_total
    );

    if let Some(path) = &args.snapshot {
        sim.write_snapshot(path)?;
    }
    Ok(())
}
