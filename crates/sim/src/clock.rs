//! Caller-owned simulation time.

use crate::ViewError;

/// Simulation time advanced by a fixed step per frame.
///
/// The step may be negative to play an orbit backwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationClock {
    time: f64,
    step: f64,
    paused: bool,
}

impl SimulationClock {
    pub fn new(start_time: f64, step: f64) -> Result<Self, ViewError> {
        if !start_time.is_finite() {
            return Err(ViewError::InvalidTime(start_time));
        }
        if !step.is_finite() {
            return Err(ViewError::InvalidStep(step));
        }
        Ok(Self {
            time: start_time,
            step,
            paused: false,
        })
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Advance one frame and return the new time. A paused clock stays put.
    pub fn tick(&mut self) -> f64 {
        if !self.paused {
            self.time += self.step;
        }
        self.time
    }

    pub fn set_step(&mut self, step: f64) -> Result<(), ViewError> {
        if !step.is_finite() {
            return Err(ViewError::InvalidStep(step));
        }
        self.step = step;
        Ok(())
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    pub fn reset(&mut self, time: f64) -> Result<(), ViewError> {
        if !time.is_finite() {
            return Err(ViewError::InvalidTime(time));
        }
        self.time = time;
        Ok(())
    }
}
