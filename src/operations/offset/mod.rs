mod ring_buffer;

pub use ring_buffer::RingBuffer2D;
