//! Image file I/O
//!
//! Decoding goes through the `image` crate; tiles are written as NumPy
//! arrays, CSV or display-normalized PNG.

pub mod image_loader;
pub mod tile_writer;
mod output_format;

pub use image_loader::{from_dynamic_image, load_image};
pub use output_format::OutputFormat;
pub use tile_writer::{write_samples, write_tile};
