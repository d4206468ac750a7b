//! Newton–Raphson solver for Kepler's equation `E - e·sin(E) = M`.

use std::f64::consts::PI;

use tracing::warn;

/// Absolute residual tolerance on `E - e·sin(E) - M`, in radians.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;
/// Hard cap on Newton iterations.
pub const DEFAULT_MAX_ITERATIONS: usize = 100;
/// At or above this eccentricity the iteration starts from `π` instead of `M`.
pub const HIGH_ECCENTRICITY_SEED: f64 = 0.8;

/// Outcome of one Kepler solve.
///
/// `converged == false` means the iteration cap was hit; `eccentric_anomaly`
/// is still the last iterate and is meant to be used as a best estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeplerSolution {
    pub eccentric_anomaly: f64,
    pub iterations: usize,
    pub residual: f64,
    pub converged: bool,
}

/// Stopping rules for the Newton iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeplerSolver {
    pub tolerance: f64,
    pub max_iterations: usize,
}

impl Default for KeplerSolver {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl KeplerSolver {
    /// Solve for the eccentric anomaly given mean anomaly `m` (radians) and eccentricity `e`.
    ///
    /// Never fails: when the cap is reached the last iterate is returned with
    /// `converged` cleared and a warning is logged.
    pub fn solve(&self, m: f64, e: f64) -> KeplerSolution {
        let mut ea = if e < HIGH_ECCENTRICITY_SEED { m } else { PI };

        for iteration in 0..self.max_iterations {
            let residual = kepler_residual(ea, e, m);
            if residual.abs() < self.tolerance {
                return KeplerSolution {
                    eccentric_anomaly: ea,
                    iterations: iteration,
                    residual,
                    converged: true,
                };
            }
            // 1 - e·cos(E) >= 1 - e > 0 for bound orbits.
            ea -= residual / (1.0 - e * ea.cos());
        }

        let residual = kepler_residual(ea, e, m);
        let converged = residual.abs() < self.tolerance;
        if !converged {
            warn!(
                mean_anomaly = m,
                eccentricity = e,
                residual,
                iterations = self.max_iterations,
                "Kepler solve hit the iteration cap; using last estimate"
            );
        }
        KeplerSolution {
            eccentric_anomaly: ea,
            iterations: self.max_iterations,
            residual,
            converged,
        }
    }
}

/// Solve Kepler's equation with the default tolerance (1e-6) and cap (100).
pub fn solve_kepler(m: f64, e: f64) -> KeplerSolution {
    KeplerSolver::default().solve(m, e)
}

/// Solve Kepler's equation with caller-supplied stopping rules.
pub fn solve_kepler_with(m: f64, e: f64, solver: KeplerSolver) -> KeplerSolution {
    solver.solve(m, e)
}

#[inline]
fn kepler_residual(ea: f64, e: f64, m: f64) -> f64 {
    ea - e * ea.sin() - m
}
