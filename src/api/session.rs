//! Calculator session wiring an input source and an output sink to the solver
//!
//! The front end (a form, a test harness, anything that can hand over six
//! text fields) stays behind two small capability traits so the solver
//! itself remains a pure function.

use crate::algorithms::{SolveResult, TriangulationSolver};
use crate::core::StrongholdEstimate;
use crate::processing::{InputParser, RawInputs};
use crate::validation::TriangulationError;

/// Supplier of the six raw calculation fields
pub trait InputSource {
    /// Read the current field values, as typed
    fn read_fields(&self) -> Result<RawInputs, TriangulationError>;
}

/// Consumer of calculation outcomes
pub trait OutputSink {
    /// Display a successful prediction
    fn show_estimate(&mut self, estimate: &StrongholdEstimate);
    /// Display a classified failure
    fn show_error(&mut self, error: &TriangulationError);
    /// Return the display to its idle state
    fn clear(&mut self);
}

/// One calculator instance: source, sink, parser, solver
#[derive(Debug)]
pub struct CalculatorSession<I: InputSource, O: OutputSink> {
    input: I,
    output: O,
    parser: InputParser,
    solver: TriangulationSolver,
}

impl<I: InputSource, O: OutputSink> CalculatorSession<I, O> {
    /// Create a session with the default solver thresholds
    pub fn new(input: I, output: O) -> Self {
        Self::with_solver(input, output, TriangulationSolver::new())
    }

    /// Create a session around a specific solver
    pub fn with_solver(input: I, output: O, solver: TriangulationSolver) -> Self {
        Self {
            input,
            output,
            parser: InputParser::new(),
            solver,
        }
    }

    /// Run one calculation: read, parse, solve, display
    ///
    /// The outcome is both pushed to the sink and returned to the caller.
    pub fn calculate(&mut self) -> SolveResult<StrongholdEstimate> {
        let outcome = self.run_solver();
        match &outcome {
            Ok(estimate) => self.output.show_estimate(estimate),
            Err(error) => self.output.show_error(error),
        }
        outcome
    }

    /// Reset the display without touching the source fields
    pub fn reset(&mut self) {
        self.output.clear();
    }

    /// Access the output sink (for front ends that own extra state there)
    pub fn output(&self) -> &O {
        &self.output
    }

    fn run_solver(&self) -> SolveResult<StrongholdEstimate> {
        let raw = self.input.read_fields()?;
        let (first, second) = self.parser.parse(&raw)?;
        self.solver.solve(&first, &second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedFields(RawInputs);

    impl InputSource for FixedFields {
        fn read_fields(&self) -> Result<RawInputs, TriangulationError> {
            Ok(self.0.clone())
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        estimates: Vec<StrongholdEstimate>,
        errors: Vec<TriangulationError>,
        clears: usize,
    }

    impl OutputSink for RecordingSink {
        fn show_estimate(&mut self, estimate: &StrongholdEstimate) {
            self.estimates.push(*estimate);
        }
        fn show_error(&mut self, error: &TriangulationError) {
            self.errors.push(error.clone());
        }
        fn clear(&mut self) {
            self.clears += 1;
        }
    }

    #[test]
    fn test_successful_calculation_reaches_the_sink() {
        let input = FixedFields(RawInputs::new("0", "0", "0", "100", "100", "90"));
        let mut session = CalculatorSession::new(input, RecordingSink::default());

        let estimate = session.calculate().unwrap();
        assert!((estimate.x - 0.0).abs() < 1e-6);
        assert!((estimate.z - 100.0).abs() < 1e-6);

        let sink = session.output();
        assert_eq!(sink.estimates.len(), 1);
        assert!(sink.errors.is_empty());
    }

    #[test]
    fn test_parse_failure_is_shown_not_computed() {
        let input = FixedFields(RawInputs::new("0", "0", "zero", "100", "100", "90"));
        let mut session = CalculatorSession::new(input, RecordingSink::default());

        let err = session.calculate().unwrap_err();
        assert!(matches!(err, TriangulationError::InvalidInput { ref field, .. } if field == "bearing1"));

        let sink = session.output();
        assert!(sink.estimates.is_empty());
        assert_eq!(sink.errors.len(), 1);
    }

    #[test]
    fn test_geometric_failure_is_shown() {
        let input = FixedFields(RawInputs::new("0", "0", "45", "100", "0", "45"));
        let mut session = CalculatorSession::new(input, RecordingSink::default());

        assert!(session.calculate().is_err());
        assert!(matches!(
            session.output().errors[0],
            TriangulationError::ParallelBearings { .. }
        ));
    }

    #[test]
    fn test_reset_clears_the_display_only() {
        let input = FixedFields(RawInputs::new("0", "0", "0", "100", "100", "90"));
        let mut session = CalculatorSession::new(input, RecordingSink::default());

        session.calculate().unwrap();
        session.reset();

        let sink = session.output();
        assert_eq!(sink.clears, 1);
        assert_eq!(sink.estimates.len(), 1);
    }

    #[test]
    fn test_custom_solver_thresholds_flow_through() {
        let input = FixedFields(RawInputs::new("0", "0", "0", "5", "5", "90"));
        let solver = TriangulationSolver::with_thresholds(10.0, 1e-9);
        let mut session =
            CalculatorSession::with_solver(input, RecordingSink::default(), solver);

        let err = session.calculate().unwrap_err();
        assert!(matches!(err, TriangulationError::PointsTooClose { .. }));
    }
}
