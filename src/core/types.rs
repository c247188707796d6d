//! Core data types for the triangulation system

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// A single throw observation: where the player stood and which way the
/// eye flew, read as the in-game yaw.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObservationPoint {
    /// X coordinate of the throw position (blocks)
    pub x: f64,
    /// Z coordinate of the throw position (blocks)
    pub z: f64,
    /// Facing angle in the game's yaw convention (degrees, 0 = +Z, clockwise positive)
    pub bearing_deg: f64,
}

impl ObservationPoint {
    /// Create an observation from raw coordinates and a yaw reading
    pub fn new(x: f64, z: f64, bearing_deg: f64) -> Self {
        Self { x, z, bearing_deg }
    }

    /// Position on the horizontal plane as a vector
    pub fn position(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.z)
    }

    /// Euclidean separation between two throw positions (blocks)
    pub fn separation(&self, other: &ObservationPoint) -> f64 {
        (other.position() - self.position()).norm()
    }

    /// Whether every field holds a finite value
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.z.is_finite() && self.bearing_deg.is_finite()
    }
}

/// Predicted stronghold location plus the distance from the first throw
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrongholdEstimate {
    /// Predicted X coordinate (blocks)
    pub x: f64,
    /// Predicted Z coordinate (blocks)
    pub z: f64,
    /// Distance from the first throw position to the prediction (blocks, non-negative)
    pub distance_from_first: f64,
}

impl StrongholdEstimate {
    /// Predicted position as a vector
    pub fn position(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.z)
    }
}
