//! Bearing conversion and the triangulation core

pub mod bearing;
pub mod triangulation;

pub use triangulation::{solve, solve_raw, SolveResult, TriangulationSolver};
