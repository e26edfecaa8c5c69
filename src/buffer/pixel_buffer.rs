//! Owned float pixel buffer

use log::debug;

use crate::errors::{TileError, TileResult};
use super::layout::PixelLayout;
use super::range::{minmax, SampleRange};

/// An owned image held as interleaved `f32` samples
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    layout: PixelLayout,
    data: Vec<f32>,
}

impl PixelBuffer {
    /// Wrap existing samples
    ///
    /// # Arguments
    /// * `layout` - Dimensions of the image
    /// * `data` - Samples in row-major, channel-interleaved order
    ///
    /// # Returns
    /// The buffer, or `BufferTooSmall` if `data` cannot hold the layout.
    /// Samples past the end of the layout are dropped.
    pub fn new(layout: PixelLayout, mut data: Vec<f32>) -> TileResult<Self> {
        if data.len() < layout.len() {
            return Err(TileError::BufferTooSmall {
                expected: layout.len(),
                actual: data.len(),
            });
        }

        data.truncate(layout.len());
        Ok(PixelBuffer { layout, data })
    }

    /// Allocate a buffer with every sample set to zero
    pub fn zeroed(layout: PixelLayout) -> Self {
        PixelBuffer {
            layout,
            data: vec![0.0; layout.len()],
        }
    }

    /// Build a buffer by evaluating `f(x, y, channel)` for every sample
    pub fn from_fn<F>(layout: PixelLayout, mut f: F) -> Self
    where
        F: FnMut(usize, usize, usize) -> f32,
    {
        let mut data = Vec::with_capacity(layout.len());
        for y in 0..layout.height {
            for x in 0..layout.width {
                for c in 0..layout.channels {
                    data.push(f(x, y, c));
                }
            }
        }

        PixelBuffer { layout, data }
    }

    pub fn layout(&self) -> PixelLayout {
        self.layout
    }

    pub fn width(&self) -> usize {
        self.layout.width
    }

    pub fn height(&self) -> usize {
        self.layout.height
    }

    pub fn channels(&self) -> usize {
        self.layout.channels
    }

    /// All samples
    pub fn samples(&self) -> &[f32] {
        &self.data
    }

    /// All samples, mutably
    pub fn samples_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Read a single sample, or `None` outside the grid
    pub fn get(&self, x: usize, y: usize, channel: usize) -> Option<f32> {
        if x >= self.layout.width || y >= self.layout.height || channel >= self.layout.channels {
            return None;
        }

        self.data.get(self.layout.offset(x, y, channel)).copied()
    }

    /// Finite minimum and maximum of all samples
    pub fn range(&self) -> SampleRange {
        minmax(&self.data)
    }

    /// Give up the samples, e.g. to hand them across the C boundary
    pub fn into_samples(self) -> Vec<f32> {
        self.data
    }

    /// Release the buffer
    ///
    /// Dropping has the same effect; this exists so code ported from the
    /// allocate/free C interface has an explicit counterpart.
    pub fn release(self) {
        debug!("Releasing {}x{}x{} sample buffer",
               self.layout.width, self.layout.height, self.layout.channels);
        drop(self);
    }
}
