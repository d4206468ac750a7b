use std::io::Write;
use std::path::PathBuf;

use anyhow::anyhow;
use clap::Parser;
use kepler_orrery::config::load_bodies;
use kepler_orrery::export::{trajectory, writer_for_path};
use kepler_orrery::sim::OrbitSystem;
use orrery_cli::{DEFAULT_BODIES_DIR, find_body, init_tracing};
use tracing::info;

/// Sample body positions over a time range and write them as CSV.
#[derive(Parser, Debug)]
#[command(author, version, about = "Keplerian position table (CSV)")]
struct Cli {
    /// Body name (case-insensitive); all bodies when omitted
    #[arg(long)]
    body: Option<String>,

    /// Body catalog: YAML file, TOML file, or directory of TOML files
    #[arg(long, default_value = DEFAULT_BODIES_DIR)]
    bodies: PathBuf,

    /// First sample time
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    start: f64,

    /// Last sample time (inclusive when it falls on a step)
    #[arg(long, allow_negative_numbers = true)]
    end: f64,

    /// Time between samples
    #[arg(long, default_value_t = 1.0)]
    step: f64,

    /// Output CSV file (use '-' for stdout)
    #[arg(long, default_value = "-")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    if !(cli.start.is_finite() && cli.end.is_finite()) {
        return Err(anyhow!("start and end must be finite"));
    }
    if !(cli.step.is_finite() && cli.step > 0.0) {
        return Err(anyhow!("step must be positive"));
    }
    if cli.end < cli.start {
        return Err(anyhow!("end must not precede start"));
    }

    let catalog = load_bodies(&cli.bodies)?;
    let system = OrbitSystem::from_configs(&catalog)?;
    let names: Vec<&str> = match &cli.body {
        Some(name) => vec![find_body(&catalog, name)?.name.as_str()],
        None => system.bodies().iter().map(|b| b.name.as_str()).collect(),
    };

    let samples = ((cli.end - cli.start) / cli.step + 1e-9).floor() as usize;
    info!(samples = samples + 1, bodies = names.len(), "propagating");

    let mut writer = writer_for_path(&cli.output)?;
    trajectory::write_header(writer.as_mut())?;
    for i in 0..=samples {
        let time = cli.start + cli.step * i as f64;
        for &name in &names {
            let position = system
                .position_of(name, time)
                .ok_or_else(|| anyhow!("Body '{}' missing from system", name))?;
            let record = trajectory::Record {
                time,
                body: name,
                x: position.x,
                y: position.y,
                r: position.radius(),
            };
            record.write_to(writer.as_mut())?;
        }
    }
    writer.flush()?;

    Ok(())
}
