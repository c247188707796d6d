//! Parsing of raw form fields into typed throw observations
//!
//! The calculator front end hands over six text fields exactly as the
//! player typed them. Parsing classifies every bad field as
//! `InvalidInput` with the field name so the caller can point at the
//! offending box.

use crate::core::ObservationPoint;
use crate::validation::TriangulationError;
use serde::{Deserialize, Serialize};

/// The six text fields of a calculation request, untouched
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawInputs {
    pub x1: String,
    pub z1: String,
    pub bearing1: String,
    pub x2: String,
    pub z2: String,
    pub bearing2: String,
}

impl RawInputs {
    /// Build a request from six field values
    pub fn new(
        x1: impl Into<String>,
        z1: impl Into<String>,
        bearing1: impl Into<String>,
        x2: impl Into<String>,
        z2: impl Into<String>,
        bearing2: impl Into<String>,
    ) -> Self {
        Self {
            x1: x1.into(),
            z1: z1.into(),
            bearing1: bearing1.into(),
            x2: x2.into(),
            z2: z2.into(),
            bearing2: bearing2.into(),
        }
    }
}

/// Parser turning raw fields into observation points
#[derive(Debug, Clone, Copy, Default)]
pub struct InputParser;

impl InputParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse all six fields, yielding the two observations in throw order
    pub fn parse(
        &self,
        inputs: &RawInputs,
    ) -> Result<(ObservationPoint, ObservationPoint), TriangulationError> {
        let first = ObservationPoint::new(
            parse_field("x1", &inputs.x1)?,
            parse_field("z1", &inputs.z1)?,
            parse_field("bearing1", &inputs.bearing1)?,
        );
        let second = ObservationPoint::new(
            parse_field("x2", &inputs.x2)?,
            parse_field("z2", &inputs.z2)?,
            parse_field("bearing2", &inputs.bearing2)?,
        );
        Ok((first, second))
    }
}

/// Parse one field to a finite f64
///
/// "NaN" and "inf" parse successfully as f64 but are useless as
/// coordinates, so finiteness is checked here as well.
fn parse_field(name: &'static str, raw: &str) -> Result<f64, TriangulationError> {
    let invalid = || TriangulationError::InvalidInput {
        field: name.to_string(),
        value: raw.to_string(),
    };
    let value: f64 = raw.trim().parse().map_err(|_| invalid())?;
    if !value.is_finite() {
        return Err(invalid());
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_six_well_formed_fields() {
        let inputs = RawInputs::new("100.5", "-200", "45.0", " 300 ", "400.25", "-90");
        let (first, second) = InputParser::new().parse(&inputs).unwrap();
        assert!((first.x - 100.5).abs() < 1e-12);
        assert!((first.z - -200.0).abs() < 1e-12);
        assert!((first.bearing_deg - 45.0).abs() < 1e-12);
        assert!((second.x - 300.0).abs() < 1e-12);
        assert!((second.z - 400.25).abs() < 1e-12);
        assert!((second.bearing_deg - -90.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_field_is_invalid_input_with_field_name() {
        let inputs = RawInputs::new("1", "2", "3", "4", "", "6");
        let err = InputParser::new().parse(&inputs).unwrap_err();
        match err {
            TriangulationError::InvalidInput { field, .. } => assert_eq!(field, "z2"),
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_unparseable_text_is_invalid_input() {
        let inputs = RawInputs::new("abc", "2", "3", "4", "5", "6");
        let err = InputParser::new().parse(&inputs).unwrap_err();
        match err {
            TriangulationError::InvalidInput { field, value } => {
                assert_eq!(field, "x1");
                assert_eq!(value, "abc");
            }
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_nan_and_infinity_text_are_rejected() {
        for bad in ["NaN", "inf", "-inf", "infinity"] {
            let inputs = RawInputs::new("1", "2", bad, "4", "5", "6");
            let err = InputParser::new().parse(&inputs).unwrap_err();
            assert!(
                matches!(err, TriangulationError::InvalidInput { ref field, .. } if field == "bearing1"),
                "'{}' should be rejected, got {:?}",
                bad,
                err
            );
        }
    }

    #[test]
    fn test_fields_are_checked_in_form_order() {
        let inputs = RawInputs::new("x", "y", "z", "4", "5", "6");
        let err = InputParser::new().parse(&inputs).unwrap_err();
        assert!(matches!(err, TriangulationError::InvalidInput { ref field, .. } if field == "x1"));
    }
}
