//! Tile extraction from float sample sources
//!
//! Two copy operations live here. [`copy_tile`] reads from a raw sample
//! buffer and defines every destination sample, zero-filling anything that
//! falls outside the source. [`fancy_get_tile`] reads through a
//! [`SampleAccessor`] and only visits the part of the tile the source covers,
//! leaving the rest of the destination as the caller prepared it.
//!
//! The [`Tiler`] builds on `copy_tile` to cut a whole image into fixed-size
//! tiles for display.

mod region;
mod buffer_tile;
mod accessor;
mod accessor_tile;
mod tiler;
#[cfg(test)]
mod tests;

pub use region::TileRegion;
pub use buffer_tile::copy_tile;
pub use accessor::SampleAccessor;
pub use accessor_tile::fancy_get_tile;
pub use tiler::{Tile, TiledImage, Tiler};
