//! Splitting a full image into display tiles
//!
//! Large images are cut into square tiles of a configurable size (1024 by
//! default) so each can be uploaded as its own texture. Tiles on the right
//! and bottom edges are cropped to the image. Images with more channels than
//! the configured maximum keep only the leading ones.

use log::{debug, info, warn};

use crate::buffer::{minmax, PixelBuffer, PixelLayout, SampleRange};
use crate::config::TilerConfig;
use crate::errors::{TileError, TileResult};
use super::accessor::SampleAccessor;
use super::buffer_tile::copy_tile;
use super::region::TileRegion;

/// One tile cut from a larger image
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    /// Samples of the tile, row stride `width`
    pub data: Vec<f32>,
    /// Column of the tile's top-left pixel in the source image
    pub x: usize,
    /// Row of the tile's top-left pixel in the source image
    pub y: usize,
    pub width: usize,
    pub height: usize,
    pub channels: usize,
}

impl Tile {
    /// Layout of the tile's own sample buffer
    pub fn layout(&self) -> PixelLayout {
        PixelLayout::new(self.width, self.height, self.channels)
    }

    /// Whether global pixel `(x, y)` falls inside this tile
    pub fn contains(&self, x: usize, y: usize) -> bool {
        self.x <= x && self.y <= y && x < self.x + self.width && y < self.y + self.height
    }

    /// Samples of global pixel `(x, y)`, if inside this tile
    pub fn pixel_at(&self, x: usize, y: usize) -> Option<&[f32]> {
        if !self.contains(x, y) {
            return None;
        }

        let idx = self.layout().offset(x - self.x, y - self.y, 0);
        self.data.get(idx..idx + self.channels)
    }
}

/// An image stored as a grid of tiles
#[derive(Debug, Clone)]
pub struct TiledImage {
    /// Tiles in row-major grid order
    pub tiles: Vec<Tile>,
    pub width: usize,
    pub height: usize,
    /// Channels per pixel in every tile
    pub channels: usize,
    /// Edge length of a full tile
    pub tile_size: usize,
    /// Finite range of the source image, over all of its channels
    pub range: SampleRange,
}

impl TiledImage {
    /// Number of tile columns
    pub fn tiles_across(&self) -> usize {
        self.width.div_ceil(self.tile_size)
    }

    /// Number of tile rows
    pub fn tiles_down(&self) -> usize {
        self.height.div_ceil(self.tile_size)
    }

    /// The tile containing global pixel `(x, y)`
    pub fn tile_at(&self, x: usize, y: usize) -> Option<&Tile> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let index = (y / self.tile_size) * self.tiles_across() + x / self.tile_size;
        self.tiles.get(index)
    }

    /// Samples of global pixel `(x, y)`, or `None` outside the image
    pub fn pixel_at(&self, x: usize, y: usize) -> Option<&[f32]> {
        self.tile_at(x, y).and_then(|tile| tile.pixel_at(x, y))
    }
}

impl SampleAccessor for TiledImage {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn channel_count(&self) -> usize {
        self.channels
    }

    fn sample_at(&self, x: usize, y: usize, channel: usize) -> f32 {
        self.pixel_at(x, y)
            .and_then(|pixel| pixel.get(channel).copied())
            .unwrap_or(0.0)
    }
}

/// Cuts images into tiles according to a [`TilerConfig`]
pub struct Tiler {
    tile_size: usize,
    max_channels: usize,
}

impl Tiler {
    /// Create a tiler
    ///
    /// # Returns
    /// The tiler, or `InvalidConfig` when the tile size or channel cap is zero
    pub fn new(config: &TilerConfig) -> TileResult<Self> {
        if config.tile_size == 0 {
            return Err(TileError::InvalidConfig("tile_size must be positive".to_string()));
        }
        if config.max_channels == 0 {
            return Err(TileError::InvalidConfig("max_channels must be positive".to_string()));
        }

        Ok(Tiler {
            tile_size: config.tile_size,
            max_channels: config.max_channels,
        })
    }

    /// Split `image` into tiles and compute its finite range
    pub fn split(&self, image: &PixelBuffer) -> TiledImage {
        let layout = image.layout();
        let out_channels = layout.channels.min(self.max_channels);

        if out_channels != layout.channels {
            warn!("Input image has {} channels, only the first {} are kept",
                  layout.channels, out_channels);
        }

        let range = minmax(image.samples());
        info!("Splitting {}x{} image into {}px tiles (range {} .. {})",
              layout.width, layout.height, self.tile_size, range.min, range.max);

        let mut tiles = Vec::new();
        for y in (0..layout.height).step_by(self.tile_size) {
            for x in (0..layout.width).step_by(self.tile_size) {
                let width = (layout.width - x).min(self.tile_size);
                let height = (layout.height - y).min(self.tile_size);
                let region = TileRegion::new(x as i64, y as i64, width, height);

                let mut data = vec![0.0; region.sample_count(out_channels)];
                copy_tile(image.samples(), layout, &mut data, region, out_channels);

                debug!("Tile at ({}, {}): {}x{}", x, y, width, height);
                tiles.push(Tile {
                    data,
                    x,
                    y,
                    width,
                    height,
                    channels: out_channels,
                });
            }
        }

        info!("Produced {} tiles", tiles.len());

        TiledImage {
            tiles,
            width: layout.width,
            height: layout.height,
            channels: out_channels,
            tile_size: self.tile_size,
            range,
        }
    }
}
