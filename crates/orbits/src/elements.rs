//! Validated Keplerian elements for a bound, planar, elliptical orbit.

use orrery_core::constants::TAU;
use thiserror::Error;

use crate::path;
use crate::position::Position;

/// Rejections raised while constructing [`OrbitalElements`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ElementsError {
    #[error("semi-major axis must be positive and finite (got {0})")]
    InvalidSemiMajorAxis(f64),
    #[error("eccentricity must lie in [0, 1) for a bound elliptical orbit (got {0})")]
    InvalidEccentricity(f64),
    #[error("orbital period must be positive and finite (got {0})")]
    InvalidPeriod(f64),
    #[error("argument of periapsis must be finite (got {0})")]
    InvalidArgumentOfPeriapsis(f64),
    #[error("time of periapsis passage must be finite (got {0})")]
    InvalidPeriapsisTime(f64),
}

/// Fixed orbital elements of one body.
///
/// Fields are private so an instance can only exist in a validated state;
/// propagation never has to re-check them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalElements {
    semi_major_axis: f64,
    eccentricity: f64,
    period: f64,
    argument_of_periapsis: f64,
    periapsis_time: f64,
}

impl OrbitalElements {
    /// Build elements with the periapsis passage at `t = 0`.
    ///
    /// Inputs:
    /// - `semi_major_axis`: `a > 0`, in the caller's distance unit
    /// - `eccentricity`: `0 <= e < 1`
    /// - `period`: `T > 0`, in the caller's time unit
    /// - `argument_of_periapsis`: `ω` in radians
    pub fn new(
        semi_major_axis: f64,
        eccentricity: f64,
        period: f64,
        argument_of_periapsis: f64,
    ) -> Result<Self, ElementsError> {
        if !(semi_major_axis.is_finite() && semi_major_axis > 0.0) {
            return Err(ElementsError::InvalidSemiMajorAxis(semi_major_axis));
        }
        if !(eccentricity.is_finite() && (0.0..1.0).contains(&eccentricity)) {
            return Err(ElementsError::InvalidEccentricity(eccentricity));
        }
        if !(period.is_finite() && period > 0.0) {
            return Err(ElementsError::InvalidPeriod(period));
        }
        if !argument_of_periapsis.is_finite() {
            return Err(ElementsError::InvalidArgumentOfPeriapsis(
                argument_of_periapsis,
            ));
        }
        Ok(Self {
            semi_major_axis,
            eccentricity,
            period,
            argument_of_periapsis,
            periapsis_time: 0.0,
        })
    }

    /// Same elements with the periapsis passage moved to `periapsis_time`.
    pub fn with_periapsis_time(self, periapsis_time: f64) -> Result<Self, ElementsError> {
        if !periapsis_time.is_finite() {
            return Err(ElementsError::InvalidPeriapsisTime(periapsis_time));
        }
        Ok(Self {
            periapsis_time,
            ..self
        })
    }

    pub fn semi_major_axis(&self) -> f64 {
        self.semi_major_axis
    }

    pub fn eccentricity(&self) -> f64 {
        self.eccentricity
    }

    pub fn period(&self) -> f64 {
        self.period
    }

    pub fn argument_of_periapsis(&self) -> f64 {
        self.argument_of_periapsis
    }

    pub fn periapsis_time(&self) -> f64 {
        self.periapsis_time
    }

    /// Mean motion `n = 2π / T` (radians per time unit).
    pub fn mean_motion(&self) -> f64 {
        TAU / self.period
    }

    /// Closest approach to the focus, `a(1 - e)`.
    pub fn periapsis_distance(&self) -> f64 {
        self.semi_major_axis * (1.0 - self.eccentricity)
    }

    /// Farthest distance from the focus, `a(1 + e)`.
    pub fn apoapsis_distance(&self) -> f64 {
        self.semi_major_axis * (1.0 + self.eccentricity)
    }

    /// Semi-latus rectum `p = a(1 - e²)`.
    pub fn semi_latus_rectum(&self) -> f64 {
        self.semi_major_axis * (1.0 - self.eccentricity * self.eccentricity)
    }

    /// Sampled outline of this orbit's ellipse; see [`path::orbit_path`].
    pub fn path(&self, angle_step_count: usize) -> Vec<Position> {
        path::orbit_path(
            self.semi_major_axis,
            self.eccentricity,
            self.argument_of_periapsis,
            angle_step_count,
        )
    }
}
