use std::path::PathBuf;

use anyhow::{Context, Result};
use blobworld_lib::app::App;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// World seed. Omit for a random seed (the chosen value is logged, so
    /// any run can be reproduced).
    #[arg(short, long)]
    seed: Option<u64>,

    /// Config file path
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Number of ticks to simulate
    #[arg(short, long, default_value_t = 2000)]
    ticks: u64,

    /// Simulated time per tick, in time-units
    #[arg(long, default_value_t = 0.1)]
    dt: f64,

    /// Write the final world snapshot as JSON to this path
    #[arg(long)]
    snapshot_out: Option<PathBuf>,
}

fn main() -> Result<()> {
    blobworld_core::init_logging();
    let args = Args::parse();

    let config = App::load_config(&args.config)
        .with_context(|| format!("loading {}", args.config.display()))?;
    let seed = args.seed.unwrap_or_else(rand::random);

    let mut app = App::initialize(seed, config).context("initializing simulation")?;

    for _ in 0..args.ticks {
        let summary = app.tick(args.dt);
        if summary.population == 0 {
            tracing::warn!(tick = summary.tick, "population extinct, stopping early");
            break;
        }
    }

    let snapshot = app.shutdown();
    if let Some(path) = args.snapshot_out {
        let json = serde_json::to_string_pretty(&snapshot)?;
        std::fs::write(&path, json)
            .with_context(|| format!("writing snapshot to {}", path.display()))?;
        tracing::info!(path = %path.display(), "snapshot written");
    }

    Ok(())
}
