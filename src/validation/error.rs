use serde::{Deserialize, Serialize};
use std::fmt;

/// Classified failures of a triangulation request
///
/// Every failure is terminal for the call that produced it; there is no
/// partial result and nothing to retry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TriangulationError {
    /// A supplied value was empty, unparseable, or not a finite number
    InvalidInput {
        /// Name of the offending field (e.g. "x1", "bearing2")
        field: String,
        /// The raw value as received
        value: String,
    },
    /// The two throw positions are too close for a reliable baseline
    PointsTooClose {
        /// Measured separation (blocks)
        separation: f64,
        /// Minimum required separation (blocks)
        minimum: f64,
    },
    /// The two bearing rays are parallel or anti-parallel; no unique intersection
    ParallelBearings {
        /// Sine of the crossing angle at the would-be intersection
        sin_crossing: f64,
        /// Tolerance below which the rays count as parallel
        tolerance: f64,
    },
}

impl fmt::Display for TriangulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TriangulationError::InvalidInput { field, value } => {
                write!(f, "Invalid input for '{}': '{}' is not a finite number", field, value)
            }
            TriangulationError::PointsTooClose { separation, minimum } => {
                write!(
                    f,
                    "Throw positions are too close: {:.3} blocks apart, need at least {:.0}",
                    separation, minimum
                )
            }
            TriangulationError::ParallelBearings { sin_crossing, .. } => {
                write!(
                    f,
                    "Throw directions are parallel (crossing sine {:.3e}); no unique intersection",
                    sin_crossing
                )
            }
        }
    }
}

impl std::error::Error for TriangulationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages_name_the_failure() {
        let err = TriangulationError::InvalidInput {
            field: "x1".to_string(),
            value: "abc".to_string(),
        };
        assert!(err.to_string().contains("x1"));
        assert!(err.to_string().contains("abc"));

        let err = TriangulationError::PointsTooClose { separation: 0.5, minimum: 1.0 };
        assert!(err.to_string().contains("too close"));

        let err = TriangulationError::ParallelBearings { sin_crossing: 0.0, tolerance: 1e-9 };
        assert!(err.to_string().contains("parallel"));
    }

    #[test]
    fn test_error_serde_round_trip() {
        let err = TriangulationError::PointsTooClose { separation: 0.25, minimum: 1.0 };
        let json = serde_json::to_string(&err).unwrap();
        let back: TriangulationError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, back);
    }
}
