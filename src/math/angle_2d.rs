//! Single-quadrant edge angles.
//!
//! Both angle functions use a plain arctangent of a slope, so the result lies
//! in `[-π/2, π/2]` and cannot tell a direction from its reverse. Callers that
//! need a specific side of an edge must check the projected point and flip by
//! `π` themselves, as the ring buffer does.

use super::{Point2, Vector2};

/// Angle of the directed segment `a → b`, ambiguous modulo `π`.
///
/// A vertical segment yields `±π/2`; a zero-length segment yields `NaN`.
#[must_use]
pub fn edge_angle(a: &Point2, b: &Point2) -> f64 {
    ((b.y - a.y) / (b.x - a.x)).atan()
}

/// Angle of the direction perpendicular to segment `a → b`, ambiguous modulo `π`.
///
/// A horizontal segment yields `±π/2`.
#[must_use]
pub fn normal_angle(a: &Point2, b: &Point2) -> f64 {
    (-(b.x - a.x) / (b.y - a.y)).atan()
}

/// Returns `p + magnitude * (cos theta, sin theta)`.
#[must_use]
pub fn project_point(p: &Point2, theta: f64, magnitude: f64) -> Point2 {
    p + Vector2::new(theta.cos(), theta.sin()) * magnitude
}

/// Whether two angles agree within an absolute tolerance.
#[must_use]
pub fn angles_close(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() <= tolerance
}
