//! Command-line entry point: build a scenario, run it, print the reports.

mod report;

use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use schoolsim_core::{SimConfig, Simulation};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "schoolsim",
    about = "Discrete-time simulation of a protected school ecosystem under external selection pressure"
)]
struct Cli {
    /// Years to simulate
    #[arg(long)]
    years: Option<u32>,

    /// RNG seed; omit for a non-deterministic run
    #[arg(long)]
    seed: Option<u64>,

    /// TOML config file; omit for the built-in demo scenario
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the per-year history as JSON after the run
    #[arg(long)]
    history: bool,
}

fn main() -> anyhow::Result<()> {
    schoolsim_core::init_logging();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            SimConfig::from_toml(&text)?
        }
        None => SimConfig::demo(),
    };
    if let Some(seed) = cli.seed {
        config.run.seed = Some(seed);
    }
    let years = cli.years.unwrap_or(config.run.years);

    tracing::info!(
        years,
        seed = ?config.run.seed,
        fingerprint = %config.fingerprint(),
        "Starting run"
    );

    let mut sim = Simulation::from_config(&config)?;

    println!("# schoolsim run @ {}", Utc::now().to_rfc3339());
    println!();
    println!("{}", report::summary(&sim.ecosystem));
    println!();
    println!("{}", report::world_comparison(&sim.ecosystem, &sim.world));
    println!();
    println!("{}", report::stakeholder_scores(&sim));

    sim.run(years);
    sim.resolve_outcomes()?;

    println!();
    println!("{}", report::summary(&sim.ecosystem));
    println!();
    println!("{}", report::world_comparison(&sim.ecosystem, &sim.world));
    println!();
    println!("{}", report::reintegration_report(&sim.ecosystem));
    println!();
    println!("{}", report::stakeholder_scores(&sim));

    if cli.history {
        println!();
        println!("{}", serde_json::to_string_pretty(sim.history.records())?);
    }

    Ok(())
}
