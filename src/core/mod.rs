//! Core types and constants for the triangulation system

pub mod constants;
pub mod types;

pub use constants::*;
pub use types::*;
