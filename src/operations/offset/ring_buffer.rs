use std::f64::consts::PI;

use tracing::{debug, trace};

use crate::config::GeometryConfig;
use crate::error::{OperationError, Result};
use crate::geometry::Ring;
use crate::math::angle_2d::{angles_close, edge_angle, normal_angle, project_point};
use crate::math::intersect_2d::within_segment_bounds;
use crate::math::Point2;
use crate::operations::query::is_outside;

/// Pushes every vertex of a ring outward by a fixed distance.
///
/// # Algorithm
///
/// For each vertex `V` with predecessor `P` and successor `S`:
///
/// 1. Offset `V` by `distance` along the normal of `P → V`, and separately
///    along the normal of `S → V`.
/// 2. The normal angles are single-quadrant, so each offset may point into
///    the ring. An offset that is flipped back onto a straight run, or that
///    the ray-casting test does not place outside the ring, is rotated by `π`.
///    At an acute corner both directions can test outside, one of them by
///    running along the edge past the opposite side; there the offset on the
///    exterior side of its own edge, judged by the ring's winding, is kept.
/// 3. The two single-edge offsets are combined as `nA + nC - V`.
///
/// Step 3 is a parallelogram stand-in for a true miter joint. It is exact
/// when the edges meet at a right angle and drifts as the corner angle moves
/// away from 90°, which is acceptable for a search buffer around a parcel.
///
/// The output is closed and starts with the offset of the input's last
/// vertex, followed by vertices `0, 1, …, n-2`.
#[derive(Debug)]
pub struct RingBuffer2D<'a> {
    ring: &'a Ring,
    distance: f64,
    config: GeometryConfig,
}

impl<'a> RingBuffer2D<'a> {
    /// Creates a new ring buffer operation with the default configuration.
    #[must_use]
    pub fn new(ring: &'a Ring, distance: f64) -> Self {
        Self {
            ring,
            distance,
            config: GeometryConfig::default(),
        }
    }

    /// Sets a custom configuration.
    #[must_use]
    pub fn with_config(mut self, config: GeometryConfig) -> Self {
        self.config = config;
        self
    }

    /// Executes the buffer, returning the closed offset ring.
    ///
    /// # Errors
    ///
    /// - `OperationError::InvalidInput` if the distance is not positive and finite
    /// - `GeometryError::InvalidRing` if the ray origin is inside or on the ring
    pub fn execute(&self) -> Result<Vec<Point2>> {
        if !self.distance.is_finite() || self.distance <= 0.0 {
            return Err(OperationError::InvalidInput(format!(
                "buffer distance must be positive and finite, got {}",
                self.distance
            ))
            .into());
        }
        self.ring.check_ray_origin(&self.config.ray_origin)?;

        let vertices = self.ring.vertices();
        let n = vertices.len();
        // Exterior lies right of travel for counter-clockwise rings.
        let winding = self.ring.signed_area().signum();
        let mut buffered = Vec::with_capacity(n + 1);

        for i in 0..n {
            let prev = &vertices[(i + n - 2) % n];
            let vertex = &vertices[(i + n - 1) % n];
            let next = &vertices[i];

            let from_prev = self.offset_from_edge(prev, vertex, next, winding);
            let from_next = self.offset_from_edge(next, vertex, prev, -winding);
            buffered.push(from_prev + (from_next - vertex));
        }

        if buffered.first() != buffered.last() {
            buffered.push(buffered[0]);
        }

        debug!(
            distance = self.distance,
            input = ?self.ring.vertices(),
            output = ?buffered,
            "buffered ring"
        );
        Ok(buffered)
    }

    /// Offsets `vertex` along the normal of the edge `from → vertex`, making
    /// sure the result lands outside the ring.
    ///
    /// `toward` is the vertex on the other side of `vertex`. `winding` is the
    /// sign of the ring's area as seen travelling `from → vertex`.
    fn offset_from_edge(
        &self,
        from: &Point2,
        vertex: &Point2,
        toward: &Point2,
        winding: f64,
    ) -> Point2 {
        let mut theta = normal_angle(from, vertex);
        let mut offset = project_point(vertex, theta, self.distance);

        // A normal parallel to the next edge means a locally straight run;
        // if the offset also sits on that edge it points back along the ring.
        if angles_close(
            theta,
            edge_angle(vertex, toward),
            self.config.direction_tolerance,
        ) && within_segment_bounds(&offset, (toward, vertex), (vertex, &offset))
        {
            theta += PI;
            offset = project_point(vertex, theta, self.distance);
            trace!(?vertex, "flipped offset off the adjacent edge");
        }

        if !is_outside(self.ring, &offset, &self.config.ray_origin) {
            theta += PI;
            offset = project_point(vertex, theta, self.distance);
            trace!(?vertex, "flipped offset out of the ring");
        } else if (vertex - from).perp(&(offset - vertex)) * winding > 0.0 {
            let flipped = project_point(vertex, theta + PI, self.distance);
            if is_outside(self.ring, &flipped, &self.config.ray_origin) {
                offset = flipped;
                trace!(?vertex, "flipped offset to the exterior side of its edge");
            }
        }

        offset
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{GeometryError, PlangeoError, RingDefect};
    use crate::operations::query::PointInRing;
    use approx::assert_abs_diff_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn ring(coords: &[[f64; 2]]) -> Ring {
        Ring::from_coords(coords).unwrap()
    }

    /// Regular polygon with `sides` vertices around `center`.
    #[allow(clippy::cast_precision_loss)]
    fn regular(sides: usize, center: Point2, radius: f64, clockwise: bool) -> Ring {
        let mut points: Vec<Point2> = (0..sides)
            .map(|k| {
                let angle = 2.0 * PI * k as f64 / sides as f64 + 0.3;
                p(
                    center.x + radius * angle.cos(),
                    center.y + radius * angle.sin(),
                )
            })
            .collect();
        if clockwise {
            points.reverse();
        }
        Ring::new(points).unwrap()
    }

    /// Convex ring with `sides` vertices at random angles on a rotated
    /// ellipse around a state-plane location. Clustered angles give acute
    /// corners.
    fn irregular_convex(rng: &mut StdRng, sides: usize) -> Option<Ring> {
        let center = p(
            rng.gen_range(1_190_000.0..1_240_000.0),
            rng.gen_range(140_000.0..160_000.0),
        );
        let (a, b) = (rng.gen_range(20.0..400.0), rng.gen_range(20.0..400.0));
        let rotation: f64 = rng.gen_range(0.0..PI);
        let mut angles: Vec<f64> = (0..sides).map(|_| rng.gen_range(0.0..2.0 * PI)).collect();
        angles.sort_by(f64::total_cmp);
        let mut points: Vec<Point2> = angles
            .iter()
            .map(|t| {
                let (x, y) = (a * t.cos(), b * t.sin());
                p(
                    center.x + x * rotation.cos() - y * rotation.sin(),
                    center.y + x * rotation.sin() + y * rotation.cos(),
                )
            })
            .collect();
        if rng.gen_bool(0.5) {
            points.reverse();
        }
        Ring::new(points).ok()
    }

    fn assert_all_outside(source: &Ring, buffered: &[Point2]) {
        for v in buffered {
            assert!(
                PointInRing::new(source, *v).execute().unwrap(),
                "{v:?} is not outside the source ring"
            );
        }
    }

    #[test]
    fn unit_square() {
        let r = ring(&[[0.0, 0.0], [0.0, 1.0], [1.0, 1.0], [1.0, 0.0]]);
        let out = RingBuffer2D::new(&r, 0.5).execute().unwrap();
        let expected = [p(1.5, -0.5), p(-0.5, -0.5), p(-0.5, 1.5), p(1.5, 1.5)];

        assert_eq!(out.len(), 5);
        for (got, want) in out.iter().zip(expected.iter()) {
            assert_abs_diff_eq!(got.x, want.x, epsilon = 0.1);
            assert_abs_diff_eq!(got.y, want.y, epsilon = 0.1);
        }
        assert_eq!(out[0], out[4]);
    }

    #[test]
    fn closed_input_matches_open_input() {
        let open = ring(&[[0.0, 0.0], [0.0, 1.0], [1.0, 1.0], [1.0, 0.0]]);
        let closed = ring(&[[0.0, 0.0], [0.0, 1.0], [1.0, 1.0], [1.0, 0.0], [0.0, 0.0]]);
        assert_eq!(
            RingBuffer2D::new(&open, 0.5).execute().unwrap(),
            RingBuffer2D::new(&closed, 0.5).execute().unwrap()
        );
    }

    #[test]
    fn concave_ring_reflex_corner() {
        let r = ring(&[
            [10.0, 10.0],
            [10.0, 30.0],
            [20.0, 30.0],
            [20.0, 20.0],
            [30.0, 20.0],
            [30.0, 10.0],
        ]);
        let out = RingBuffer2D::new(&r, 2.0).execute().unwrap();
        let expected = [
            p(32.0, 8.0),
            p(8.0, 8.0),
            p(8.0, 32.0),
            p(22.0, 32.0),
            p(22.0, 22.0),
            p(32.0, 22.0),
            p(32.0, 8.0),
        ];
        assert_eq!(out.len(), expected.len());
        for (got, want) in out.iter().zip(expected.iter()) {
            assert_abs_diff_eq!(got.x, want.x, epsilon = 1e-9);
            assert_abs_diff_eq!(got.y, want.y, epsilon = 1e-9);
        }
        assert_all_outside(&r, &out);
    }

    #[test]
    fn parcel_in_state_plane_coordinates() {
        let r = ring(&[
            [1_229_623.0, 151_187.0],
            [1_229_590.0, 150_990.0],
            [1_229_452.0, 151_014.0],
            [1_229_485.0, 151_211.0],
            [1_229_623.0, 151_187.0],
        ]);
        let out = RingBuffer2D::new(&r, 100.0).execute().unwrap();
        assert_eq!(out.len(), 5);
        for v in &out {
            assert!((v.x - 1_229_500.0).abs() < 5_000.0, "x={}", v.x);
            assert!((v.y - 151_000.0).abs() < 5_000.0, "y={}", v.y);
        }
        assert_all_outside(&r, &out);
    }

    #[test]
    fn buffered_area_grows() {
        let r = ring(&[[1.0, 1.0], [1.0, 3.0], [3.0, 3.0], [3.0, 1.0]]);
        let out = Ring::new(RingBuffer2D::new(&r, 1.0).execute().unwrap()).unwrap();
        assert!(out.signed_area().abs() > r.signed_area().abs());
        assert_abs_diff_eq!(out.signed_area().abs(), 16.0, epsilon = 1e-9);
    }

    #[test]
    fn convex_rings_keep_count_and_land_outside() {
        let center = p(100.0, 100.0);
        for sides in 3..=8 {
            for radius in [1.0, 10.0, 50.0] {
                for distance in [0.5, 5.0, 25.0] {
                    for clockwise in [false, true] {
                        let r = regular(sides, center, radius, clockwise);
                        let out = RingBuffer2D::new(&r, distance).execute().unwrap();

                        assert_eq!(out.len(), sides + 1, "sides={sides} r={radius}");
                        assert_eq!(out.first(), out.last());
                        assert_all_outside(&r, &out);
                    }
                }
            }
        }
    }

    #[test]
    fn acute_corner_offsets_away_from_ring() {
        // Counter-clockwise, with a sharp corner at (10, 10).
        let r = ring(&[[10.0, 10.0], [50.0, 10.0], [12.0, 20.0]]);
        let out = RingBuffer2D::new(&r, 1.0).execute().unwrap();
        assert_eq!(out.len(), 4);
        assert_abs_diff_eq!(out[1].x, 9.019_419, epsilon = 1e-6);
        assert_abs_diff_eq!(out[1].y, 9.196_116, epsilon = 1e-6);
        assert_all_outside(&r, &out);

        // Clockwise, sharp corners at (10, 10) and (20, 40).
        let r = ring(&[[10.0, 10.0], [20.0, 40.0], [22.0, 10.0]]);
        let out = RingBuffer2D::new(&r, 1.0).execute().unwrap();
        assert_abs_diff_eq!(out[1].x, 9.051_317, epsilon = 1e-6);
        assert_abs_diff_eq!(out[1].y, 9.316_228, epsilon = 1e-6);
        assert_all_outside(&r, &out);
    }

    #[test]
    fn irregular_convex_parcels_land_outside() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            for _ in 0..40 {
                let sides = rng.gen_range(3..=8);
                let Some(r) = irregular_convex(&mut rng, sides) else {
                    continue;
                };
                for distance in [0.5, 5.0, 25.0, 100.0] {
                    let out = RingBuffer2D::new(&r, distance).execute().unwrap();
                    assert_eq!(out.len(), r.vertex_count() + 1, "seed={seed}");
                    assert_all_outside(&r, &out);
                }
            }
        }
    }

    #[test]
    fn rejects_non_positive_distance() {
        let r = ring(&[[0.0, 0.0], [0.0, 1.0], [1.0, 1.0], [1.0, 0.0]]);
        for distance in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = RingBuffer2D::new(&r, distance).execute().unwrap_err();
            assert!(
                matches!(err, PlangeoError::Operation(OperationError::InvalidInput(_))),
                "distance={distance}"
            );
        }
    }

    #[test]
    fn rejects_ring_around_origin() {
        let r = ring(&[[-5.0, -5.0], [5.0, -5.0], [5.0, 5.0], [-5.0, 5.0]]);
        let err = RingBuffer2D::new(&r, 1.0).execute().unwrap_err();
        assert!(matches!(
            err,
            PlangeoError::Geometry(GeometryError::InvalidRing(
                RingDefect::EnclosesRayOrigin { .. }
            ))
        ));
    }

    #[test]
    fn custom_ray_origin_allows_negative_quadrant() {
        let config = GeometryConfig::default().with_ray_origin(p(1000.0, 1000.0));
        let r = regular(6, p(-100.0, -100.0), 10.0, false);
        let out = RingBuffer2D::new(&r, 2.0)
            .with_config(config)
            .execute()
            .unwrap();
        assert_eq!(out.len(), 7);
        for v in &out {
            assert!(PointInRing::new(&r, *v)
                .with_config(config)
                .execute()
                .unwrap());
        }
    }
}
