use std::path::PathBuf;

use anyhow::anyhow;
use clap::Parser;
use kepler_orrery::config::load_bodies;
use kepler_orrery::export::path::{PathSidecar, write_sidecar};
use orrery_cli::{DEFAULT_BODIES_DIR, find_body, init_tracing};
use tracing::info;

/// Sample a body's orbit ellipse by true anomaly and write it as JSON.
#[derive(Parser, Debug)]
#[command(author, version, about = "Orbit outline sampler (JSON)")]
struct Cli {
    /// Body name (case-insensitive)
    #[arg(long)]
    body: String,

    /// Body catalog: YAML file, TOML file, or directory of TOML files
    #[arg(long, default_value = DEFAULT_BODIES_DIR)]
    bodies: PathBuf,

    /// Number of equal true-anomaly steps around the ellipse
    #[arg(long, default_value_t = 360)]
    steps: usize,

    /// Output JSON file (use '-' for stdout)
    #[arg(long, default_value = "-")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    if cli.steps == 0 {
        return Err(anyhow!("steps must be at least 1"));
    }

    let catalog = load_bodies(&cli.bodies)?;
    let body = find_body(&catalog, &cli.body)?;
    let elements = body.elements()?;
    let points = elements.path(cli.steps);
    info!(body = %body.name, points = points.len(), "sampled orbit path");

    let sidecar = PathSidecar {
        body: body.name.clone(),
        semi_major_axis: elements.semi_major_axis(),
        eccentricity: elements.eccentricity(),
        argument_of_periapsis_rad: elements.argument_of_periapsis(),
        steps: cli.steps,
        points: points.into_iter().map(|p| p.to_array()).collect(),
    };
    write_sidecar(&cli.output, &sidecar)?;

    Ok(())
}
