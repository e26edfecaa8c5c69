//! Geometry of an interleaved sample buffer

/// Dimensions of a row-major, channel-interleaved sample buffer
///
/// The sample of pixel `(x, y)` channel `c` lives at
/// `channels * (x + y * width) + c`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelLayout {
    /// Number of pixel columns
    pub width: usize,
    /// Number of pixel rows
    pub height: usize,
    /// Interleaved samples per pixel
    pub channels: usize,
}

impl PixelLayout {
    /// Create a new layout
    ///
    /// # Arguments
    /// * `width` - Number of pixel columns
    /// * `height` - Number of pixel rows
    /// * `channels` - Samples per pixel
    pub fn new(width: usize, height: usize, channels: usize) -> Self {
        PixelLayout { width, height, channels }
    }

    /// Number of samples a buffer with this layout must hold
    pub fn len(&self) -> usize {
        self.width * self.height * self.channels
    }

    /// Whether the layout describes no samples at all
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Linear offset of a sample, without bounds checks
    pub fn offset(&self, x: usize, y: usize, channel: usize) -> usize {
        self.channels * (x + y * self.width) + channel
    }

    /// Offset of the first sample of a pixel given signed coordinates
    ///
    /// Returns `None` when the coordinates fall outside the grid.
    pub fn pixel_offset(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }

        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }

        Some(self.offset(x, y, 0))
    }
}
