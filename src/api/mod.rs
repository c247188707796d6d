//! Caller-facing surfaces: the calculator session and output formatting

pub mod formatting;
pub mod session;

pub use formatting::{JsonFormatter, TextFormatter};
pub use session::{CalculatorSession, InputSource, OutputSink};
