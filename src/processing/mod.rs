//! Raw input processing

pub mod parser;

pub use parser::{InputParser, RawInputs};
