//! Per-frame stepping that ties the system, clock, camera, and trails together.

use orrery_config::{BodyConfig, SimulationConfig};
use orrery_orbits::Position;
use thiserror::Error;
use tracing::trace;

use crate::ViewError;
use crate::camera::{Camera, ScreenPoint};
use crate::clock::SimulationClock;
use crate::system::{OrbitSystem, SystemError};
use crate::trail::Trails;

/// Top-level error when assembling a simulation.
#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("invalid body system: {0}")]
    System(#[from] SystemError),
    #[error("invalid view settings: {0}")]
    View(#[from] ViewError),
}

/// One body's placement in a frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBody {
    pub name: String,
    pub world: Position,
    pub screen: ScreenPoint,
}

/// Snapshot produced by [`Simulation::step`].
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub time: f64,
    pub bodies: Vec<FrameBody>,
}

/// Everything a front-end needs to animate a system, with no ambient state.
#[derive(Debug, Clone)]
pub struct Simulation {
    pub system: OrbitSystem,
    pub clock: SimulationClock,
    pub camera: Camera,
    pub trails: Trails,
}

impl Simulation {
    pub fn new(
        system: OrbitSystem,
        clock: SimulationClock,
        camera: Camera,
        trails: Trails,
    ) -> Self {
        Self {
            system,
            clock,
            camera,
            trails,
        }
    }

    /// Assemble a simulation from catalog records and frame settings.
    pub fn from_config(
        settings: &SimulationConfig,
        bodies: &[BodyConfig],
    ) -> Result<Self, SimulationError> {
        let system = OrbitSystem::from_configs(bodies)?;
        let clock = SimulationClock::new(settings.start_time, settings.time_step)?;
        let mut camera = Camera::new(settings.scale, settings.width, settings.height)?;
        camera.set_zoom(settings.zoom)?;
        if camera.zoom() != settings.zoom {
            return Err(ViewError::InvalidZoom(settings.zoom).into());
        }
        let trails = Trails::new(settings.trail_length)?;
        Ok(Self::new(system, clock, camera, trails))
    }

    /// Advance the clock one frame, place every body, and extend the trails.
    pub fn step(&mut self) -> Frame {
        let time = self.clock.tick();
        let frame = self.frame_at(time);
        for body in &frame.bodies {
            self.trails.record(&body.name, body.screen);
        }
        trace!(time, bodies = frame.bodies.len(), "advanced frame");
        frame
    }

    /// Run `frames` steps and return the last frame, if any were run.
    pub fn run(&mut self, frames: usize) -> Option<Frame> {
        let mut last = None;
        for _ in 0..frames {
            last = Some(self.step());
        }
        last
    }

    /// Frame for an arbitrary time without touching the clock or trails.
    pub fn frame_at(&self, time: f64) -> Frame {
        let bodies = self
            .system
            .positions_at(time)
            .into_iter()
            .map(|body| FrameBody {
                name: body.name.to_string(),
                world: body.position,
                screen: self.camera.to_screen(body.position),
            })
            .collect();
        Frame { time, bodies }
    }
}
