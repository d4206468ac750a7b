//! Headless viewer state built on the propagator: body systems with parent
//! relationships, a simulation clock, a camera transform, and bounded trails.
//!
//! Nothing here draws. A front-end owns a [`Simulation`] (or the individual
//! pieces), calls [`Simulation::step`] once per frame, and renders the
//! returned [`Frame`] plus the trail buffers however it likes.

pub mod camera;
pub mod clock;
pub mod simulation;
pub mod system;
pub mod trail;

pub use camera::{Camera, ScreenPoint};
pub use clock::SimulationClock;
pub use simulation::{Frame, FrameBody, Simulation, SimulationError};
pub use system::{BodyPosition, BodySpec, OrbitSystem, SystemError};
pub use trail::{TrailBuffer, Trails};

use thiserror::Error;

/// Rejected viewer settings.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ViewError {
    #[error("time step must be finite (got {0})")]
    InvalidStep(f64),
    #[error("simulation time must be finite (got {0})")]
    InvalidTime(f64),
    #[error("zoom must be positive and finite (got {0})")]
    InvalidZoom(f64),
    #[error("zoom limits must satisfy 0 < min <= max (got {min}..{max})")]
    InvalidZoomLimits { min: f64, max: f64 },
    #[error("scale must be positive and finite (got {0})")]
    InvalidScale(f64),
    #[error("viewport must be non-empty (got {width}x{height})")]
    InvalidViewport { width: u32, height: u32 },
    #[error("trail capacity must be at least one point")]
    InvalidTrailCapacity,
}
