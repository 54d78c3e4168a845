//! Tunable parameters shared by the ring operations.

use crate::math::Point2;

/// Default origin of the point-in-ring ray, in feet.
///
/// State plane coordinates for the service area are all far to the north-east
/// of this point, so it lies outside every parcel ring.
pub const DEFAULT_RAY_ORIGIN: (f64, f64) = (-1.0, -1.0);

/// Default tolerance, in radians, when comparing an offset normal with the
/// following edge direction.
pub const DEFAULT_DIRECTION_TOLERANCE: f64 = 1e-3;

/// Parameters for point-in-ring classification and ring buffering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryConfig {
    /// Fixed exterior point that every ray is cast from.
    pub ray_origin: Point2,
    /// Angle tolerance for the straight-run direction correction.
    pub direction_tolerance: f64,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            ray_origin: Point2::new(DEFAULT_RAY_ORIGIN.0, DEFAULT_RAY_ORIGIN.1),
            direction_tolerance: DEFAULT_DIRECTION_TOLERANCE,
        }
    }
}

impl GeometryConfig {
    /// Sets the ray origin.
    #[must_use]
    pub fn with_ray_origin(mut self, origin: Point2) -> Self {
        self.ray_origin = origin;
        self
    }

    /// Sets the direction tolerance.
    #[must_use]
    pub fn with_direction_tolerance(mut self, tolerance: f64) -> Self {
        self.direction_tolerance = tolerance;
        self
    }
}
