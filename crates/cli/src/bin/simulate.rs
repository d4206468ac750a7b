use std::path::PathBuf;

use anyhow::anyhow;
use clap::Parser;
use kepler_orrery::config::{SimulationConfig, load_bodies, load_simulation};
use kepler_orrery::sim::Simulation;
use orrery_cli::{DEFAULT_BODIES_DIR, init_tracing};
use tracing::info;

/// Run the headless viewer loop and report the final frame.
#[derive(Parser, Debug)]
#[command(author, version, about = "Headless orrery simulation")]
struct Cli {
    /// Body catalog: YAML file, TOML file, or directory of TOML files
    #[arg(long, default_value = DEFAULT_BODIES_DIR)]
    bodies: PathBuf,

    /// Simulation settings file (YAML or TOML); built-in defaults when omitted
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Number of frames to advance
    #[arg(long, default_value_t = 100)]
    frames: usize,

    /// Override the time step per frame
    #[arg(long, allow_negative_numbers = true)]
    time_step: Option<f64>,

    /// Override the trail length
    #[arg(long)]
    trail_length: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut settings = match &cli.settings {
        Some(path) => load_simulation(path)?,
        None => SimulationConfig::default(),
    };
    if let Some(step) = cli.time_step {
        settings.time_step = step;
    }
    if let Some(length) = cli.trail_length {
        settings.trail_length = length;
    }

    let catalog = load_bodies(&cli.bodies)?;
    let mut simulation = Simulation::from_config(&settings, &catalog)?;
    info!(
        bodies = simulation.system.len(),
        frames = cli.frames,
        step = settings.time_step,
        "running simulation"
    );

    let frame = simulation
        .run(cli.frames)
        .ok_or_else(|| anyhow!("frames must be at least 1"))?;

    println!("=== Frame at t = {:.3} ===", frame.time);
    println!(
        "{:<10} {:>12} {:>12} {:>10} {:>10} {:>6}",
        "body", "x", "y", "screen_x", "screen_y", "trail"
    );
    for body in &frame.bodies {
        let trail = simulation
            .trails
            .get(&body.name)
            .map(|t| t.len())
            .unwrap_or(0);
        println!(
            "{:<10} {:>12.6} {:>12.6} {:>10.1} {:>10.1} {:>6}",
            body.name, body.world.x, body.world.y, body.screen.x, body.screen.y, trail
        );
    }

    Ok(())
}
