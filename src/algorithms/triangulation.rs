//! Two-throw stronghold triangulation via the law of sines
//!
//! The two throw positions O and P and the unknown stronghold M form a
//! triangle. With standard bearing angles alpha (at O) and beta (at P)
//! and the baseline angle gamma of the vector O->P, the signed distance
//! from O to M along the first bearing is
//!
//! ```text
//! om = |OP| * sin(beta - gamma) / sin(beta - alpha)
//! ```
//!
//! Walking om along alpha from O lands on the intersection. The sines
//! carry their signs so the result is correct on either side of the
//! baseline; the reported distance is the absolute value.

use crate::algorithms::bearing::{baseline_angle, bearing_to_standard_rad, polar_offset};
use crate::core::{
    ObservationPoint, StrongholdEstimate, MIN_THROW_SEPARATION, PARALLEL_SIN_TOLERANCE,
};
use crate::validation::TriangulationError;

/// Result type for triangulation operations
pub type SolveResult<T> = Result<T, TriangulationError>;

/// Triangulation engine carrying the geometric degeneracy thresholds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangulationSolver {
    /// Minimum baseline length before two throws count as coincident (blocks)
    pub min_separation: f64,
    /// Tolerance on the crossing-angle sine before bearings count as parallel
    pub parallel_tolerance: f64,
}

impl Default for TriangulationSolver {
    fn default() -> Self {
        Self {
            min_separation: MIN_THROW_SEPARATION,
            parallel_tolerance: PARALLEL_SIN_TOLERANCE,
        }
    }
}

impl TriangulationSolver {
    /// Create a solver with the default thresholds
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a solver with explicit thresholds
    pub fn with_thresholds(min_separation: f64, parallel_tolerance: f64) -> Self {
        Self { min_separation, parallel_tolerance }
    }

    /// Predict the stronghold position from two throw observations
    ///
    /// Pure and deterministic: identical inputs give bit-identical output.
    pub fn solve(
        &self,
        first: &ObservationPoint,
        second: &ObservationPoint,
    ) -> SolveResult<StrongholdEstimate> {
        reject_non_finite(first, ["x1", "z1", "bearing1"])?;
        reject_non_finite(second, ["x2", "z2", "bearing2"])?;

        let alpha = bearing_to_standard_rad(first.bearing_deg);
        let beta = bearing_to_standard_rad(second.bearing_deg);

        let baseline = second.position() - first.position();
        let baseline_length = baseline.norm();
        if baseline_length < self.min_separation {
            return Err(TriangulationError::PointsTooClose {
                separation: baseline_length,
                minimum: self.min_separation,
            });
        }

        let gamma = baseline_angle(&baseline);

        // Crossing angle at the intersection; zero sine means the rays
        // never meet in a single point (parallel or anti-parallel mod 180)
        let sin_crossing = (beta - alpha).sin();
        if sin_crossing.abs() < self.parallel_tolerance {
            return Err(TriangulationError::ParallelBearings {
                sin_crossing,
                tolerance: self.parallel_tolerance,
            });
        }

        let om = baseline_length * (beta - gamma).sin() / sin_crossing;
        let target = polar_offset(&first.position(), om, alpha);

        Ok(StrongholdEstimate {
            x: target.x,
            z: target.y,
            distance_from_first: om.abs(),
        })
    }
}

/// Predict the stronghold position using the default thresholds
pub fn solve(
    first: &ObservationPoint,
    second: &ObservationPoint,
) -> SolveResult<StrongholdEstimate> {
    TriangulationSolver::new().solve(first, second)
}

/// Convenience entry point taking the six raw values directly
pub fn solve_raw(
    x1: f64,
    z1: f64,
    bearing1: f64,
    x2: f64,
    z2: f64,
    bearing2: f64,
) -> SolveResult<StrongholdEstimate> {
    solve(
        &ObservationPoint::new(x1, z1, bearing1),
        &ObservationPoint::new(x2, z2, bearing2),
    )
}

fn reject_non_finite(
    point: &ObservationPoint,
    field_names: [&'static str; 3],
) -> SolveResult<()> {
    let fields = [point.x, point.z, point.bearing_deg];
    for (value, name) in fields.iter().zip(field_names.iter()) {
        if !value.is_finite() {
            return Err(TriangulationError::InvalidInput {
                field: (*name).to_string(),
                value: value.to_string(),
            });
        }
    }
    Ok(())
}
