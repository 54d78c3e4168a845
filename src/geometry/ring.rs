use tracing::warn;

use super::Envelope;
use crate::error::{RingDefect, Result};
use crate::math::polygon_2d::{on_boundary_2d, signed_area_2d, winding_number_2d};
use crate::math::Point2;

/// A simple closed polygon boundary.
///
/// Vertices are stored once each: a closing point equal to the first vertex is
/// dropped on construction and the last vertex implicitly connects back to the
/// first. Winding order is not normalized.
///
/// Construction rejects rings that would make the slope arithmetic of the
/// ring operations divide by zero:
/// - fewer than 3 distinct vertices
/// - two coincident adjacent vertices
/// - non-finite coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct Ring {
    vertices: Vec<Point2>,
}

impl Ring {
    /// Creates a ring from boundary points, with or without a closing point.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidRing` describing the first defect found.
    pub fn new(mut points: Vec<Point2>) -> Result<Self> {
        if points.len() > 1 && points.first() == points.last() {
            points.pop();
        }
        if let Err(defect) = validate(&points) {
            warn!(%defect, vertices = points.len(), "rejecting ring");
            return Err(defect.into());
        }
        Ok(Self { vertices: points })
    }

    /// Creates a ring from raw `[x, y]` coordinate pairs.
    ///
    /// # Errors
    ///
    /// Same as [`Ring::new`].
    pub fn from_coords(coords: &[[f64; 2]]) -> Result<Self> {
        Self::new(coords.iter().map(|&[x, y]| Point2::new(x, y)).collect())
    }

    /// The distinct vertices, without a closing point.
    #[must_use]
    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Iterates over `(start, end)` of every edge, ending with the edge from
    /// the last vertex back to the first.
    pub fn edges(&self) -> impl Iterator<Item = (&Point2, &Point2)> {
        let n = self.vertices.len();
        (0..n).map(move |i| (&self.vertices[(i + n - 1) % n], &self.vertices[i]))
    }

    /// Axis-aligned bounds over all vertices.
    #[must_use]
    pub fn envelope(&self) -> Envelope {
        Envelope::enclosing(&self.vertices[0], &self.vertices[1..])
    }

    /// Arithmetic mean of the vertices.
    ///
    /// This is the vertex centroid, not the area centroid.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn centroid(&self) -> Point2 {
        let n = self.vertices.len() as f64;
        let (sx, sy) = self
            .vertices
            .iter()
            .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
        Point2::new(sx / n, sy / n)
    }

    /// Shoelace area; positive for counter-clockwise rings.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        signed_area_2d(&self.vertices)
    }

    /// Checks that `origin` is strictly outside the ring.
    ///
    /// Ray casting assumes its origin is exterior; this verifies it with an
    /// independent winding-number test.
    ///
    /// # Errors
    ///
    /// Returns [`RingDefect::EnclosesRayOrigin`] if `origin` is inside or on
    /// the boundary.
    pub fn check_ray_origin(&self, origin: &Point2) -> std::result::Result<(), RingDefect> {
        if winding_number_2d(origin, &self.vertices) != 0 || on_boundary_2d(origin, &self.vertices)
        {
            return Err(RingDefect::EnclosesRayOrigin {
                x: origin.x,
                y: origin.y,
            });
        }
        Ok(())
    }
}

fn validate(points: &[Point2]) -> std::result::Result<(), RingDefect> {
    if let Some(i) = points
        .iter()
        .position(|p| !p.x.is_finite() || !p.y.is_finite())
    {
        return Err(RingDefect::NonFiniteVertex(i));
    }

    let distinct = count_distinct(points);
    if distinct < 3 {
        return Err(RingDefect::TooFewVertices(distinct));
    }

    let n = points.len();
    for i in 0..n {
        let j = (i + 1) % n;
        if points[i] == points[j] {
            return Err(RingDefect::CoincidentVertices {
                first: i,
                second: j,
            });
        }
    }
    Ok(())
}

fn count_distinct(points: &[Point2]) -> usize {
    let mut sorted: Vec<(f64, f64)> = points.iter().map(|p| (p.x, p.y)).collect();
    sorted.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.total_cmp(&b.1)));
    sorted.dedup();
    sorted.len()
}
