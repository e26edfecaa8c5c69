//! Per-sample image access
//!
//! [`SampleAccessor`] is the capability an image source needs to feed
//! [`fancy_get_tile`](super::fancy_get_tile): its dimensions and a way to
//! read one sample. The source decides how it stores pixels.

use image::{ImageBuffer, Pixel};

use crate::buffer::PixelBuffer;

/// An image that answers per-pixel, per-channel sample queries
pub trait SampleAccessor {
    /// Width in pixels
    fn width(&self) -> usize;

    /// Height in pixels
    fn height(&self) -> usize;

    /// Samples per pixel
    fn channel_count(&self) -> usize;

    /// Read the sample at `(x, y)` for `channel`
    ///
    /// Callers keep `x < width()`, `y < height()` and
    /// `channel < channel_count()`.
    fn sample_at(&self, x: usize, y: usize, channel: usize) -> f32;
}

impl SampleAccessor for PixelBuffer {
    fn width(&self) -> usize {
        PixelBuffer::width(self)
    }

    fn height(&self) -> usize {
        PixelBuffer::height(self)
    }

    fn channel_count(&self) -> usize {
        self.channels()
    }

    fn sample_at(&self, x: usize, y: usize, channel: usize) -> f32 {
        self.samples()[self.layout().offset(x, y, channel)]
    }
}

impl<P> SampleAccessor for ImageBuffer<P, Vec<f32>>
where
    P: Pixel<Subpixel = f32>,
{
    fn width(&self) -> usize {
        ImageBuffer::width(self) as usize
    }

    fn height(&self) -> usize {
        ImageBuffer::height(self) as usize
    }

    fn channel_count(&self) -> usize {
        P::CHANNEL_COUNT as usize
    }

    fn sample_at(&self, x: usize, y: usize, channel: usize) -> f32 {
        self.get_pixel(x as u32, y as u32).channels()[channel]
    }
}
