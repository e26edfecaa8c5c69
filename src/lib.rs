pub mod errors;
pub mod buffer;
pub mod extractor;
pub mod config;
pub mod io;
pub mod ffi;
pub mod utils;
pub mod commands;

pub use errors::{TileError, TileResult};
pub use buffer::{minmax, PixelBuffer, PixelLayout, SampleRange};
pub use extractor::{copy_tile, fancy_get_tile, SampleAccessor, Tile, TileRegion, TiledImage, Tiler};
pub use config::TilerConfig;
pub use io::OutputFormat;
