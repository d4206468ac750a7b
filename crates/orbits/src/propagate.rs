//! Time-indexed propagation along a Keplerian ellipse.

use orrery_core::angle::wrap_two_pi;
use orrery_core::vector;

use crate::elements::OrbitalElements;
use crate::kepler::{KeplerSolution, solve_kepler};
use crate::position::Position;

/// Every intermediate quantity of one propagation step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitState {
    /// Mean anomaly wrapped into `[0, 2π)`.
    pub mean_anomaly: f64,
    pub eccentric_anomaly: f64,
    /// True anomaly measured from periapsis; `[0, 2π)` up to solver round-off.
    pub true_anomaly: f64,
    /// Distance from the focus.
    pub radius: f64,
    /// Position before rotation by the argument of periapsis (periapsis on +x).
    pub orbital_plane: Position,
    /// Position after rotation by the argument of periapsis.
    pub position: Position,
    pub kepler: KeplerSolution,
}

/// Mean anomaly `M = n·(t - τ)` wrapped into `[0, 2π)` with a floor-modulo.
///
/// Both times are reduced modulo the period first. The reductions are exact,
/// so `n·Δt` stays finite and precise for any finite `t` and `τ`.
pub fn mean_anomaly(elements: &OrbitalElements, t: f64) -> f64 {
    let period = elements.period();
    let dt = t.rem_euclid(period) - elements.periapsis_time().rem_euclid(period);
    wrap_two_pi(elements.mean_motion() * dt)
}

/// True anomaly from eccentric anomaly using the half-angle `atan2` form,
/// which keeps the quadrant right over the whole orbit.
pub fn true_anomaly(eccentric_anomaly: f64, e: f64) -> f64 {
    let (sin_half, cos_half) = (0.5 * eccentric_anomaly).sin_cos();
    2.0 * ((1.0 + e).sqrt() * sin_half).atan2((1.0 - e).sqrt() * cos_half)
}

/// Full propagation of `elements` to simulation time `t`.
pub fn state(elements: &OrbitalElements, t: f64) -> OrbitState {
    let e = elements.eccentricity();
    let m = mean_anomaly(elements, t);
    let kepler = solve_kepler(m, e);
    let ea = kepler.eccentric_anomaly;

    let theta = true_anomaly(ea, e);
    let radius = elements.semi_major_axis() * (1.0 - e * ea.cos());

    let orbital_plane: Position = vector::from_polar(radius, theta).into();
    let position = orbital_plane.rotated(elements.argument_of_periapsis());

    OrbitState {
        mean_anomaly: m,
        eccentric_anomaly: ea,
        true_anomaly: theta,
        radius,
        orbital_plane,
        position,
        kepler,
    }
}

/// Position of a body at simulation time `t`, relative to its primary.
///
/// Any finite `t` is accepted, including negative times and times many
/// periods away from the periapsis passage.
pub fn position(elements: &OrbitalElements, t: f64) -> Position {
    state(elements, t).position
}

/// Absolute position of a satellite whose primary itself orbits the origin.
///
/// Both solves use the same `t` and are independent of one another.
pub fn satellite_position(
    parent: &OrbitalElements,
    satellite: &OrbitalElements,
    t: f64,
) -> Position {
    position(parent, t) + position(satellite, t)
}
