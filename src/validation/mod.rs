//! Failure classification for triangulation requests

pub mod error;

pub use error::TriangulationError;
