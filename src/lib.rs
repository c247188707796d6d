//! Stronghold Triangulation
//!
//! Predicts the location of a hidden stronghold from two eye-of-ender
//! throws. Each throw records the player's position on the horizontal
//! (x, z) plane and the in-game yaw toward the stronghold; intersecting
//! the two bearing rays via the law of sines yields the prediction and
//! the distance from the first throw.

pub mod algorithms;
pub mod api;
pub mod core;
pub mod processing;
pub mod utils;
pub mod validation;

// Re-export commonly used types
pub use algorithms::{solve, solve_raw, SolveResult, TriangulationSolver};
pub use api::{CalculatorSession, InputSource, JsonFormatter, OutputSink, TextFormatter};
pub use core::{
    ObservationPoint, StrongholdEstimate, MIN_THROW_SEPARATION, PARALLEL_SIN_TOLERANCE,
};
pub use processing::{InputParser, RawInputs};
pub use utils::{ConfigError, SolverConfig};
pub use validation::TriangulationError;
