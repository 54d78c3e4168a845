use crate::math::Point2;

/// An axis-aligned bounding rectangle with inclusive bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Envelope {
    pub xmin: f64,
    pub ymin: f64,
    pub xmax: f64,
    pub ymax: f64,
}

impl Envelope {
    /// Creates an envelope from explicit bounds.
    #[must_use]
    pub fn new(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Self {
        Self {
            xmin,
            ymin,
            xmax,
            ymax,
        }
    }

    /// The smallest envelope containing every point, or `None` if `points` is empty.
    #[must_use]
    pub fn from_points(points: &[Point2]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        Some(Self::enclosing(first, rest))
    }

    /// The smallest envelope containing `first` and every point of `rest`.
    #[must_use]
    pub fn enclosing(first: &Point2, rest: &[Point2]) -> Self {
        let seed = Self::new(first.x, first.y, first.x, first.y);
        rest.iter().fold(seed, |env, p| Self {
            xmin: env.xmin.min(p.x),
            ymin: env.ymin.min(p.y),
            xmax: env.xmax.max(p.x),
            ymax: env.ymax.max(p.y),
        })
    }

    /// A `size × size` envelope whose lower-left corner is `corner`.
    #[must_use]
    pub fn from_corner(corner: &Point2, size: f64) -> Self {
        Self::new(corner.x, corner.y, corner.x + size, corner.y + size)
    }

    /// Lower-left corner.
    #[must_use]
    pub fn min(&self) -> Point2 {
        Point2::new(self.xmin, self.ymin)
    }

    /// Upper-right corner.
    #[must_use]
    pub fn max(&self) -> Point2 {
        Point2::new(self.xmax, self.ymax)
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.xmax - self.xmin
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.ymax - self.ymin
    }

    /// Whether `point` lies inside or on the envelope.
    #[must_use]
    pub fn contains(&self, point: &Point2) -> bool {
        point.x >= self.xmin && point.x <= self.xmax && point.y >= self.ymin && point.y <= self.ymax
    }
}
