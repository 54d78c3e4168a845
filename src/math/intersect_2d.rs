use super::Point2;

/// An infinite line in point-slope form.
///
/// Vertical lines have no finite slope or intercept and carry their `x`
/// instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Line {
    /// `y = slope * x + intercept`.
    Sloped { slope: f64, intercept: f64 },
    /// `x = x`.
    Vertical { x: f64 },
}

impl Line {
    /// The line through `a` and `b`.
    ///
    /// Falls back to [`Line::Vertical`] whenever the intercept is not finite,
    /// which covers `a.x == b.x` as well as slopes too steep to represent.
    #[must_use]
    pub fn through(a: &Point2, b: &Point2) -> Self {
        let slope = (b.y - a.y) / (b.x - a.x);
        let intercept = a.y - slope * a.x;
        if intercept.is_finite() {
            Self::Sloped { slope, intercept }
        } else {
            Self::Vertical { x: a.x }
        }
    }

    /// Evaluates `y` at `x`. Returns `None` for vertical lines.
    #[must_use]
    pub fn y_at(&self, x: f64) -> Option<f64> {
        match *self {
            Self::Sloped { slope, intercept } => Some(slope * x + intercept),
            Self::Vertical { .. } => None,
        }
    }
}

/// Intersection of the infinite line through `a`, `b` with the infinite line
/// through `c`, `d`.
///
/// ```text
///       c
///       |
///   a---X---b
///       |
///       d
/// ```
///
/// Returns `None` for parallel lines, including two vertical lines. The
/// result is not checked against either segment; see
/// [`within_segment_bounds`].
#[must_use]
#[allow(clippy::float_cmp, clippy::many_single_char_names)]
pub fn line_line_intersect_2d(a: &Point2, b: &Point2, c: &Point2, d: &Point2) -> Option<Point2> {
    let first = Line::through(a, b);
    let second = Line::through(c, d);
    match (first, second) {
        (Line::Vertical { .. }, Line::Vertical { .. }) => None,
        (Line::Vertical { x }, other) | (other, Line::Vertical { x }) => {
            other.y_at(x).map(|y| Point2::new(x, y))
        }
        (
            Line::Sloped {
                slope: m1,
                intercept: b1,
            },
            Line::Sloped {
                slope: m2,
                intercept: b2,
            },
        ) => {
            if m1 == m2 {
                return None;
            }
            let x = (b2 - b1) / (m1 - m2);
            Some(Point2::new(x, m1 * x + b1))
        }
    }
}

/// Whether every coordinate of `point` lies inside the closed bounding box of
/// `first` and, independently, of `second`.
///
/// This is the bounding-box half of a segment intersection test. For a point
/// already known to lie on both lines it is exact; collinear degenerate cases
/// can pass while being off the segments themselves.
#[must_use]
pub fn within_segment_bounds(
    point: &Point2,
    first: (&Point2, &Point2),
    second: (&Point2, &Point2),
) -> bool {
    within_box(point, first.0, first.1) && within_box(point, second.0, second.1)
}

fn within_box(point: &Point2, p: &Point2, q: &Point2) -> bool {
    (0..2).all(|i| {
        let lo = p[i].min(q[i]);
        let hi = p[i].max(q[i]);
        point[i] >= lo && point[i] <= hi
    })
}
