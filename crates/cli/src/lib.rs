//! Helpers shared by the orrery binaries.

use anyhow::anyhow;
use kepler_orrery::config::BodyConfig;
use tracing_subscriber::EnvFilter;

/// Default catalog location, relative to the working directory.
pub const DEFAULT_BODIES_DIR: &str = "configs/bodies";

/// Install a stderr `fmt` subscriber filtered by `RUST_LOG` (default `warn`).
///
/// Output goes to stderr so CSV/JSON written to stdout stays clean.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Case-insensitive lookup of a body in the catalog.
pub fn find_body<'a>(bodies: &'a [BodyConfig], name: &str) -> anyhow::Result<&'a BodyConfig> {
    let upper = name.to_uppercase();
    bodies
        .iter()
        .find(|b| b.name.to_uppercase() == upper)
        .ok_or_else(|| anyhow!("Body '{}' not found in catalog", name))
}
