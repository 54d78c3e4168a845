use thiserror::Error;

/// Top-level error type for plangeo.
#[derive(Debug, Error)]
pub enum PlangeoError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to geometric input.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("invalid ring: {0}")]
    InvalidRing(#[from] RingDefect),

    #[error("point ({x}, {y}) has a non-finite coordinate")]
    NonFinitePoint { x: f64, y: f64 },
}

/// The reason a ring was rejected before reaching the geometry routines.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RingDefect {
    #[error("expected at least 3 distinct vertices, got {0}")]
    TooFewVertices(usize),

    #[error("vertices {first} and {second} coincide")]
    CoincidentVertices { first: usize, second: usize },

    #[error("vertex {0} has a non-finite coordinate")]
    NonFiniteVertex(usize),

    #[error("ray origin ({x}, {y}) lies inside or on the ring")]
    EnclosesRayOrigin { x: f64, y: f64 },
}

/// Errors related to operation parameters.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience type alias for results using [`PlangeoError`].
pub type Result<T> = std::result::Result<T, PlangeoError>;

impl From<RingDefect> for PlangeoError {
    fn from(defect: RingDefect) -> Self {
        GeometryError::InvalidRing(defect).into()
    }
}
