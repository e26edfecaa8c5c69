//! Region structure for defining a tile request
//!
//! A tile is requested by its top-left corner in source pixel coordinates
//! and its size. The corner is signed: tiles may start left of or above the
//! source, or beyond its far edge, and the uncovered part reads as zero.

use lazy_static::lazy_static;
use regex::Regex;

use crate::errors::{TileError, TileResult};

lazy_static! {
    static ref TILE_SPEC: Regex =
        Regex::new(r"^\s*(-?\d+)\s*,\s*(-?\d+)\s*,\s*(\d+)\s*,\s*(\d+)\s*$").unwrap();
}

/// Tile request (in pixel coordinates)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileRegion {
    /// X-coordinate of the top-left corner, may be negative
    pub x: i64,

    /// Y-coordinate of the top-left corner, may be negative
    pub y: i64,

    /// Width of the tile in pixels
    pub width: usize,

    /// Height of the tile in pixels
    pub height: usize,
}

impl TileRegion {
    /// Create a new tile region
    ///
    /// # Arguments
    /// * `x` - X-coordinate of the top-left corner
    /// * `y` - Y-coordinate of the top-left corner
    /// * `width` - Width of the tile in pixels
    /// * `height` - Height of the tile in pixels
    pub fn new(x: i64, y: i64, width: usize, height: usize) -> Self {
        TileRegion { x, y, width, height }
    }

    /// Parse a region from an "x,y,width,height" string
    ///
    /// The origin may be negative; width and height may not.
    ///
    /// # Returns
    /// The parsed region or an `InvalidRegion` error
    pub fn parse(spec: &str) -> TileResult<Self> {
        let caps = TILE_SPEC.captures(spec).ok_or_else(|| {
            TileError::InvalidRegion(format!("expected 'x,y,width,height', got '{}'", spec))
        })?;

        let field = |i: usize| -> TileResult<i64> {
            caps[i].parse::<i64>()
                .map_err(|e| TileError::InvalidRegion(format!("'{}': {}", &caps[i], e)))
        };

        let region = TileRegion {
            x: field(1)?,
            y: field(2)?,
            width: field(3)? as usize,
            height: field(4)? as usize,
        };

        if region.checked_sample_count(1).is_none() {
            return Err(TileError::InvalidRegion(
                format!("{}x{} tile is too large", region.width, region.height)));
        }

        Ok(region)
    }

    /// Number of pixels in the tile
    pub fn area(&self) -> usize {
        self.width * self.height
    }

    /// Samples needed for a destination with `channels` channels
    pub fn sample_count(&self, channels: usize) -> usize {
        self.area() * channels
    }

    /// Sample count, or `None` if it does not fit in `usize`
    pub fn checked_sample_count(&self, channels: usize) -> Option<usize> {
        self.width.checked_mul(self.height)?.checked_mul(channels)
    }

    /// Get the rightmost X coordinate (exclusive), saturating at `i64::MAX`
    pub fn end_x(&self) -> i64 {
        self.x.saturating_add(i64::try_from(self.width).unwrap_or(i64::MAX))
    }

    /// Get the bottommost Y coordinate (exclusive), saturating at `i64::MAX`
    pub fn end_y(&self) -> i64 {
        self.y.saturating_add(i64::try_from(self.height).unwrap_or(i64::MAX))
    }
}
