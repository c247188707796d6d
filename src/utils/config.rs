use crate::algorithms::TriangulationSolver;
use crate::api::TextFormatter;
use crate::core::{MIN_THROW_SEPARATION, PARALLEL_SIN_TOLERANCE};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// Calculator-wide configuration parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Minimum separation between throw positions (blocks)
    pub min_throw_separation: f64,
    /// Tolerance on the crossing-angle sine below which bearings are parallel
    pub parallel_sin_tolerance: f64,
    /// Decimal places for coordinates in text output
    pub coordinate_decimals: u8,
    /// Decimal places for the distance in text output
    pub distance_decimals: u8,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            min_throw_separation: MIN_THROW_SEPARATION,
            parallel_sin_tolerance: PARALLEL_SIN_TOLERANCE,
            coordinate_decimals: 1,
            distance_decimals: 0,
        }
    }
}

/// Configuration errors
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Invalid parameter value
    InvalidParameter { parameter: String, value: String, reason: String },
    /// Configuration file I/O error
    IoError { message: String },
    /// JSON serialization/deserialization error
    SerializationError { message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidParameter { parameter, value, reason } => {
                write!(f, "Invalid parameter '{}' = '{}': {}", parameter, value, reason)
            }
            ConfigError::IoError { message } => write!(f, "I/O error: {}", message),
            ConfigError::SerializationError { message } => {
                write!(f, "Serialization error: {}", message)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl SolverConfig {
    /// Create a configuration with the default parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Load and validate a configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path_str = path.as_ref().to_string_lossy().to_string();

        let content = fs::read_to_string(&path).map_err(|e| ConfigError::IoError {
            message: format!("Failed to read config file '{}': {}", path_str, e),
        })?;

        let config: SolverConfig =
            serde_json::from_str(&content).map_err(|e| ConfigError::SerializationError {
                message: format!("Failed to parse config file '{}': {}", path_str, e),
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Save the configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path_str = path.as_ref().to_string_lossy().to_string();

        let content =
            serde_json::to_string_pretty(self).map_err(|e| ConfigError::SerializationError {
                message: format!("Failed to serialize config: {}", e),
            })?;

        fs::write(&path, content).map_err(|e| ConfigError::IoError {
            message: format!("Failed to write config file '{}': {}", path_str, e),
        })
    }

    /// Validate parameter ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.min_throw_separation.is_finite() || self.min_throw_separation <= 0.0 {
            return Err(ConfigError::InvalidParameter {
                parameter: "min_throw_separation".to_string(),
                value: self.min_throw_separation.to_string(),
                reason: "Minimum throw separation must be a positive number of blocks".to_string(),
            });
        }

        if !self.parallel_sin_tolerance.is_finite()
            || self.parallel_sin_tolerance <= 0.0
            || self.parallel_sin_tolerance > 1e-3
        {
            return Err(ConfigError::InvalidParameter {
                parameter: "parallel_sin_tolerance".to_string(),
                value: self.parallel_sin_tolerance.to_string(),
                reason: "Parallel tolerance must lie in (0, 1e-3]".to_string(),
            });
        }

        if self.coordinate_decimals > 6 || self.distance_decimals > 6 {
            return Err(ConfigError::InvalidParameter {
                parameter: "coordinate_decimals / distance_decimals".to_string(),
                value: format!("{} / {}", self.coordinate_decimals, self.distance_decimals),
                reason: "Display precision beyond 6 decimals is not meaningful for block coordinates"
                    .to_string(),
            });
        }

        Ok(())
    }

    /// Build a solver from the configured thresholds
    pub fn solver(&self) -> TriangulationSolver {
        TriangulationSolver::with_thresholds(self.min_throw_separation, self.parallel_sin_tolerance)
    }

    /// Build a text formatter from the configured display precision
    pub fn text_formatter(&self) -> TextFormatter {
        TextFormatter::with_precision(
            self.coordinate_decimals as usize,
            self.distance_decimals as usize,
        )
    }
}
