pub mod config;
pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod parcel;
pub mod street;

pub use config::GeometryConfig;
pub use error::{PlangeoError, Result};
pub use geometry::{Envelope, Ring};
