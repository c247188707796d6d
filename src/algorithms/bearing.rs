//! Conversion between the game's yaw convention and standard planar angles
//!
//! The game reports yaw with 0 degrees looking toward +Z, +90 toward -X,
//! -90 toward +X, increasing clockwise seen from above. The math below
//! maps that onto a standard angle measured counter-clockwise from the
//! +X axis, with Z playing the role of the mathematical y axis:
//!
//! ```text
//! theta_deg = yaw_deg + 90
//! ```
//!
//! Every angle-dependent step in this crate (the baseline atan2 and the
//! polar-to-Cartesian inverse) uses this same mapping, so converting a
//! yaw to a standard angle and back recovers the yaw mod 360.

use nalgebra::Vector2;

/// Offset between the game's zero bearing (+Z) and the standard zero angle (+X), degrees
const BEARING_TO_STANDARD_OFFSET_DEG: f64 = 90.0;

/// Convert a game bearing in degrees to a standard angle in radians
pub fn bearing_to_standard_rad(bearing_deg: f64) -> f64 {
    (bearing_deg + BEARING_TO_STANDARD_OFFSET_DEG).to_radians()
}

/// Convert a standard angle in radians back to a game bearing in degrees,
/// normalized into the game's canonical [-180, 180) range
pub fn standard_rad_to_bearing(standard_rad: f64) -> f64 {
    normalize_bearing_deg(standard_rad.to_degrees() - BEARING_TO_STANDARD_OFFSET_DEG)
}

/// Normalize a bearing in degrees into [-180, 180)
pub fn normalize_bearing_deg(bearing_deg: f64) -> f64 {
    (bearing_deg + 180.0).rem_euclid(360.0) - 180.0
}

/// Standard angle of a baseline vector on the (x, z) plane, radians
///
/// The Z component is the y argument of atan2, matching the mapping above.
pub fn baseline_angle(baseline: &Vector2<f64>) -> f64 {
    baseline.y.atan2(baseline.x)
}

/// Walk a signed distance along a standard angle from an origin point
pub fn polar_offset(origin: &Vector2<f64>, distance: f64, standard_rad: f64) -> Vector2<f64> {
    Vector2::new(
        origin.x + distance * standard_rad.cos(),
        origin.y + distance * standard_rad.sin(),
    )
}
