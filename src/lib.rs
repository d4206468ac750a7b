//! Keplerian orbit propagation for planets and moons.
//!
//! The propagator itself lives in [`orbits`]; the other crates add the
//! catalog loader, headless viewer state, and exporters around it. Front-ends
//! (the CLI today) depend on this facade rather than on each crate.

pub use orrery_config as config;
pub use orrery_core as primitives;
pub use orrery_export as export;
pub use orrery_orbits as orbits;
pub use orrery_sim as sim;

pub use orrery_orbits::{OrbitalElements, Position, orbit_path, position, satellite_position};

/// Returns the version of the library for smoke tests.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
