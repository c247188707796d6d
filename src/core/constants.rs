//! Geometric thresholds for the triangulation

/// Minimum separation between the two throw positions for a usable baseline (blocks)
pub const MIN_THROW_SEPARATION: f64 = 1.0;

/// Tolerance on the sine of the ray crossing angle below which the two
/// bearings are treated as parallel
pub const PARALLEL_SIN_TOLERANCE: f64 = 1e-9;
