mod point_in_ring;

pub use point_in_ring::{is_outside, PointInRing};
