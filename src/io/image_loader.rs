//! Decoding image files into float pixel buffers

use image::{DynamicImage, GenericImageView};
use log::{debug, info};

use crate::buffer::{PixelBuffer, PixelLayout};
use crate::errors::TileResult;

/// Decode an image file into interleaved `f32` samples
///
/// The format is detected by the `image` crate. The native channel count is
/// kept: gray, gray+alpha, RGB and RGBA images load with 1, 2, 3 and 4
/// channels respectively.
///
/// # Arguments
/// * `path` - Path to the image file
///
/// # Returns
/// The decoded buffer or an I/O or decoding error
pub fn load_image(path: &str) -> TileResult<PixelBuffer> {
    info!("Loading image {}", path);
    let image = image::open(path)?;
    from_dynamic_image(&image)
}

/// Convert an already decoded image to a float pixel buffer
pub fn from_dynamic_image(image: &DynamicImage) -> TileResult<PixelBuffer> {
    let (width, height) = image.dimensions();
    let native_channels = image.color().channel_count();

    let (channels, data) = match native_channels {
        1 => (1, image.to_luma32f().into_raw()),
        2 => (2, image.to_luma_alpha32f().into_raw()),
        3 => (3, image.to_rgb32f().into_raw()),
        _ => (4, image.to_rgba32f().into_raw()),
    };

    debug!("Decoded {}x{} image with {} channels ({:?})",
           width, height, channels, image.color());

    PixelBuffer::new(PixelLayout::new(width as usize, height as usize, channels), data)
}
