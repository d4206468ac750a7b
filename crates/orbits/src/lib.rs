//! Keplerian orbit propagation: elements, Kepler's equation, positions, and orbit paths.
//!
//! Everything here is a pure function of its inputs. Simulation time is always
//! supplied by the caller and no state survives between calls, so independent
//! bodies can be evaluated in any order (or in parallel) without coordination.

pub mod elements;
pub mod kepler;
pub mod path;
pub mod position;
pub mod propagate;

pub use elements::{ElementsError, OrbitalElements};
pub use kepler::{KeplerSolution, KeplerSolver, solve_kepler, solve_kepler_with};
pub use path::orbit_path;
pub use position::Position;
pub use propagate::{
    OrbitState, mean_anomaly, position, satellite_position, state, true_anomaly,
};
