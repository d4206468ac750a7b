//! Core units, constants, and shared primitives for the Kepler orrery workspace.

/// Constants shared by the propagator and the viewer state.
pub mod constants {
    /// One full turn in radians.
    pub const TAU: f64 = std::f64::consts::TAU;
}

/// Angle conversion and wrapping helpers.
pub mod angle {
    use super::constants::TAU;

    /// Convert degrees to radians.
    #[inline]
    pub fn deg_to_rad(v: f64) -> f64 {
        v.to_radians()
    }

    /// Wrap an angle into `[0, 2π)` using a floor-modulo.
    ///
    /// A truncating remainder would leave negative inputs negative; `rem_euclid`
    /// does not. Tiny negative inputs can round up to exactly `2π`, which is
    /// folded back to zero so the half-open range holds.
    #[inline]
    pub fn wrap_two_pi(angle: f64) -> f64 {
        let wrapped = angle.rem_euclid(TAU);
        if wrapped >= TAU { 0.0 } else { wrapped }
    }
}

/// Minimal planar vector helpers to avoid ad-hoc `[f64; 2]` math everywhere.
pub mod vector {
    /// Alias for a 2D vector in the orbital plane.
    pub type Vector2 = [f64; 2];

    /// Euclidean norm of a vector.
    #[inline]
    pub fn norm(v: &Vector2) -> f64 {
        v[0].hypot(v[1])
    }

    /// Vector addition.
    #[inline]
    pub fn add(a: &Vector2, b: &Vector2) -> Vector2 {
        [a[0] + b[0], a[1] + b[1]]
    }

    /// Vector subtraction.
    #[inline]
    pub fn sub(a: &Vector2, b: &Vector2) -> Vector2 {
        [a[0] - b[0], a[1] - b[1]]
    }

    /// Rotate a vector counter-clockwise by `angle` radians.
    #[inline]
    pub fn rotate(v: &Vector2, angle: f64) -> Vector2 {
        let (sin, cos) = angle.sin_cos();
        [v[0] * cos - v[1] * sin, v[0] * sin + v[1] * cos]
    }

    /// Point at distance `r` along direction `theta` from the origin.
    #[inline]
    pub fn from_polar(r: f64, theta: f64) -> Vector2 {
        let (sin, cos) = theta.sin_cos();
        [r * cos, r * sin]
    }
}
