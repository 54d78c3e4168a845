use tracing::trace;

use crate::config::GeometryConfig;
use crate::error::{GeometryError, Result};
use crate::geometry::Ring;
use crate::math::intersect_2d::{line_line_intersect_2d, within_segment_bounds};
use crate::math::Point2;

/// Classifies a point as inside or outside a ring by ray casting.
///
/// A ray is cast from the configured exterior origin to the query point and
/// the ring edges it crosses are counted:
///
/// ```text
///     o --> | --> | --> X   (2 crossings, X is outside)
///     o --> | --> X |       (1 crossing, X is inside)
/// ```
pub struct PointInRing<'a> {
    ring: &'a Ring,
    point: Point2,
    config: GeometryConfig,
}

impl<'a> PointInRing<'a> {
    /// Creates a new `PointInRing` query with the default configuration.
    #[must_use]
    pub fn new(ring: &'a Ring, point: Point2) -> Self {
        Self {
            ring,
            point,
            config: GeometryConfig::default(),
        }
    }

    /// Sets a custom configuration.
    #[must_use]
    pub fn with_config(mut self, config: GeometryConfig) -> Self {
        self.config = config;
        self
    }

    /// Executes the query, returning `true` if the point is outside the ring.
    ///
    /// # Errors
    ///
    /// - `GeometryError::NonFinitePoint` if the query point is not finite
    /// - `GeometryError::InvalidRing` if the ray origin is inside or on the ring
    pub fn execute(&self) -> Result<bool> {
        if !self.point.x.is_finite() || !self.point.y.is_finite() {
            return Err(GeometryError::NonFinitePoint {
                x: self.point.x,
                y: self.point.y,
            }
            .into());
        }
        self.ring.check_ray_origin(&self.config.ray_origin)?;
        Ok(is_outside(self.ring, &self.point, &self.config.ray_origin))
    }
}

/// Ray-casting parity test without input checks.
///
/// `origin` must lie outside the ring; nothing here verifies it. An
/// intersection landing exactly on a vertex is reported by both edges sharing
/// that vertex, so each such hit counts as half a crossing. An even total
/// means outside; an odd or half-integral total means inside.
///
/// Intersections are accepted on their bounding boxes alone, so a ray that
/// runs along a collinear edge may be miscounted.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn is_outside(ring: &Ring, point: &Point2, origin: &Point2) -> bool {
    let mut crossings = 0usize;
    let mut vertex_hits = 0usize;
    for (start, end) in ring.edges() {
        let Some(hit) = line_line_intersect_2d(origin, point, start, end) else {
            continue;
        };
        if !within_segment_bounds(&hit, (start, end), (origin, point)) {
            continue;
        }
        if hit == *start || hit == *end {
            vertex_hits += 1;
        }
        crossings += 1;
    }

    // Parity of `crossings - vertex_hits / 2`, kept in integers by doubling.
    let doubled = 2 * crossings - vertex_hits;
    let outside = doubled % 4 == 0;
    trace!(crossings, vertex_hits, outside, "ray cast");
    outside
}
