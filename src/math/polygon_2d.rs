use super::distance_2d::point_to_segment_dist;
use super::{Point2, TOLERANCE};

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Winding number of `point` with respect to the polygon `verts`.
///
/// Non-zero => inside, zero => outside. Points exactly on the boundary may go
/// either way; pair with [`on_boundary_2d`] when that matters.
#[must_use]
pub fn winding_number_2d(point: &Point2, verts: &[Point2]) -> i32 {
    let n = verts.len();
    let mut winding = 0i32;
    for i in 0..n {
        let v0 = verts[i];
        let v1 = verts[(i + 1) % n];
        let cross = cross_2d(v1.x - v0.x, v1.y - v0.y, point.x - v0.x, point.y - v0.y);

        if v0.y <= point.y {
            if v1.y > point.y && cross > 0.0 {
                winding += 1;
            }
        } else if v1.y <= point.y && cross < 0.0 {
            winding -= 1;
        }
    }
    winding
}

/// Whether `point` lies within [`TOLERANCE`] of any edge of the closed polygon.
#[must_use]
pub fn on_boundary_2d(point: &Point2, verts: &[Point2]) -> bool {
    let n = verts.len();
    (0..n).any(|i| point_to_segment_dist(point, &verts[i], &verts[(i + 1) % n]) < TOLERANCE)
}

/// 2D cross product: `(ax * by - ay * bx)`.
#[inline]
fn cross_2d(ax: f64, ay: f64, bx: f64, by: f64) -> f64 {
    ax * by - ay * bx
}
