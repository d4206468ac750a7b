//! Static orbit outlines sampled by true anomaly.

use orrery_core::constants::TAU;
use orrery_core::vector;

use crate::position::Position;

/// Sample the ellipse with semi-major axis `a`, eccentricity `e` and argument of
/// periapsis `omega` at `angle_step_count` equal true-anomaly steps.
///
/// The radius comes straight from the polar conic `r = a(1 - e²) / (1 + e·cos θ)`;
/// no Kepler solve is involved because this traces the shape, not a moment in
/// time. The returned polygon holds `angle_step_count + 1` points and is closed:
/// the last point repeats the first at `θ = 2π`. A step count of zero yields an
/// empty path.
///
/// Callers must pass a bound ellipse (`a > 0`, `0 <= e < 1`);
/// [`OrbitalElements::path`](crate::OrbitalElements::path) goes through validation.
pub fn orbit_path(a: f64, e: f64, omega: f64, angle_step_count: usize) -> Vec<Position> {
    debug_assert!(
        a > 0.0 && (0.0..1.0).contains(&e),
        "orbit_path needs a bound ellipse (a = {a}, e = {e})"
    );
    if angle_step_count == 0 {
        return Vec::new();
    }
    let p = a * (1.0 - e * e);
    let dtheta = TAU / angle_step_count as f64;
    (0..=angle_step_count)
        .map(|k| {
            let theta = dtheta * k as f64;
            let r = p / (1.0 + e * theta.cos());
            let local: Position = vector::from_polar(r, theta).into();
            local.rotated(omega)
        })
        .collect()
}
