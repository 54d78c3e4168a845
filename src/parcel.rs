//! Parcel summaries built from a parcel query result.

use tracing::debug;

use crate::error::{OperationError, Result};
use crate::geometry::{Envelope, Ring};
use crate::math::Point2;
use crate::operations::offset::RingBuffer2D;

/// Side length, in feet, of the envelope used to look up the parcel under a
/// geocoded address point.
pub const PARCEL_SEARCH_SIZE: f64 = 13.0;

/// Distance, in feet, a street centerline may plausibly sit from the parcel
/// boundary.
pub const STREET_SEARCH_BUFFER: f64 = 100.0;

/// The query envelope for finding the parcel at a geocoded `location`.
///
/// The envelope extends [`PARCEL_SEARCH_SIZE`] feet up and to the right of the
/// point.
#[must_use]
pub fn search_envelope(location: &Point2) -> Envelope {
    Envelope::from_corner(location, PARCEL_SEARCH_SIZE)
}

/// A parcel boundary with its derived location and bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct ParcelData {
    /// Vertex centroid of the boundary.
    pub location: Point2,
    pub ring: Ring,
    /// Calculated acreage reported for the parcel.
    pub acres: f64,
    pub envelope: Envelope,
}

impl ParcelData {
    /// Summarizes a validated parcel ring.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if `acres` is negative or not finite.
    pub fn new(ring: Ring, acres: f64) -> Result<Self> {
        if !acres.is_finite() || acres < 0.0 {
            return Err(
                OperationError::InvalidInput(format!("parcel acreage must be >= 0, got {acres}"))
                    .into(),
            );
        }
        let location = ring.centroid();
        let envelope = ring.envelope();
        debug!(
            ?location,
            acres,
            xmin = envelope.xmin,
            ymin = envelope.ymin,
            xmax = envelope.xmax,
            ymax = envelope.ymax,
            "parcel summary"
        );
        Ok(Self {
            location,
            ring,
            acres,
            envelope,
        })
    }

    /// Summarizes a parcel from raw `[x, y]` boundary coordinates.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidRing` for a malformed boundary, or the
    /// errors of [`ParcelData::new`].
    pub fn from_coords(coords: &[[f64; 2]], acres: f64) -> Result<Self> {
        Self::new(Ring::from_coords(coords)?, acres)
    }

    /// The parcel boundary buffered by [`STREET_SEARCH_BUFFER`], for querying
    /// the streets that front the parcel.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`RingBuffer2D::execute`].
    pub fn street_search_ring(&self) -> Result<Vec<Point2>> {
        RingBuffer2D::new(&self.ring, STREET_SEARCH_BUFFER).execute()
    }
}
