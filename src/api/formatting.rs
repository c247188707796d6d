//! Output formatting for stronghold estimates
//!
//! Presentation lives here, not in the solver: the calculator shows
//! coordinates to one decimal and the distance as a whole number of
//! blocks, but any caller can pick its own precision.

use crate::core::StrongholdEstimate;
use crate::validation::TriangulationError;

/// Human-readable text formatter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextFormatter {
    /// Decimal places for the predicted coordinates
    pub coordinate_decimals: usize,
    /// Decimal places for the distance
    pub distance_decimals: usize,
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self {
            coordinate_decimals: 1,
            distance_decimals: 0,
        }
    }
}

impl TextFormatter {
    /// Create a text formatter with the calculator's presentation defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a text formatter with explicit precision
    pub fn with_precision(coordinate_decimals: usize, distance_decimals: usize) -> Self {
        Self { coordinate_decimals, distance_decimals }
    }

    /// The coordinates line of the result display
    pub fn coordinates_line(&self, estimate: &StrongholdEstimate) -> String {
        format!(
            "Predicted stronghold coordinates (X, Z): ({:.*}, {:.*})",
            self.coordinate_decimals, estimate.x, self.coordinate_decimals, estimate.z
        )
    }

    /// The distance line of the result display
    pub fn distance_line(&self, estimate: &StrongholdEstimate) -> String {
        format!(
            "About {:.*} blocks from the first throw",
            self.distance_decimals, estimate.distance_from_first
        )
    }

    /// Both display lines joined with a newline
    pub fn format_estimate(&self, estimate: &StrongholdEstimate) -> String {
        format!("{}\n{}", self.coordinates_line(estimate), self.distance_line(estimate))
    }

    /// User-facing message for a failed calculation
    pub fn format_error(&self, error: &TriangulationError) -> String {
        format!("Error: {}", error)
    }
}

/// JSON formatter for structured output
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter {
    /// Pretty print JSON
    pub pretty: bool,
}

impl JsonFormatter {
    /// Create a compact JSON formatter
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pretty-printing JSON formatter
    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    /// Format an estimate as JSON
    pub fn format_estimate(&self, estimate: &StrongholdEstimate) -> Result<String, serde_json::Error> {
        if self.pretty {
            serde_json::to_string_pretty(estimate)
        } else {
            serde_json::to_string(estimate)
        }
    }

    /// Format an error as JSON
    pub fn format_error(&self, error: &TriangulationError) -> Result<String, serde_json::Error> {
        if self.pretty {
            serde_json::to_string_pretty(error)
        } else {
            serde_json::to_string(error)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> StrongholdEstimate {
        StrongholdEstimate {
            x: -13.25,
            z: 862.04,
            distance_from_first: 421.7,
        }
    }

    #[test]
    fn test_text_defaults_match_the_calculator_display() {
        let formatter = TextFormatter::new();
        assert_eq!(
            formatter.coordinates_line(&sample()),
            "Predicted stronghold coordinates (X, Z): (-13.2, 862.0)"
        );
        assert_eq!(formatter.distance_line(&sample()), "About 422 blocks from the first throw");
    }

    #[test]
    fn test_text_precision_is_configurable() {
        let formatter = TextFormatter::with_precision(3, 1);
        assert!(formatter.coordinates_line(&sample()).contains("-13.250"));
        assert!(formatter.distance_line(&sample()).contains("421.7"));
    }

    #[test]
    fn test_text_error_message_uses_display() {
        let err = TriangulationError::PointsTooClose { separation: 0.5, minimum: 1.0 };
        let message = TextFormatter::new().format_error(&err);
        assert!(message.starts_with("Error: "));
        assert!(message.contains("too close"));
    }

    #[test]
    fn test_json_output_round_trips() {
        let json = JsonFormatter::new().format_estimate(&sample()).unwrap();
        let back: StrongholdEstimate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sample());
    }

    #[test]
    fn test_pretty_json_is_multiline() {
        let json = JsonFormatter::pretty().format_estimate(&sample()).unwrap();
        assert!(json.contains('\n'));
        assert!(json.contains("distance_from_first"));
    }
}
