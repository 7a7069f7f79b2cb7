//! Descriptor buffers backing every pool
//!
//! A buffer is a LIFO stack of descriptor slots for a single template. It
//! pre-warms, hands out and takes back instances, and grows when either side
//! runs out of room.

pub mod buffer;
pub mod descriptor;
pub mod stats;

// Re-export main types
pub use buffer::PoolBuffer;
pub use descriptor::Descriptor;
pub use stats::BufferStats;
