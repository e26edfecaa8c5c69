//! Float sample buffers
//!
//! This module describes the row-major, channel-interleaved sample buffers
//! that every tile operation reads from and writes into, together with the
//! finite range scan used to normalize them for display.

mod layout;
mod pixel_buffer;
mod range;

pub use layout::PixelLayout;
pub use pixel_buffer::PixelBuffer;
pub use range::{minmax, SampleRange};
