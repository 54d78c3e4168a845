pub mod envelope;
pub mod ring;

pub use envelope::Envelope;
pub use ring::Ring;
