//! Accessor-backed tile extraction

use log::trace;

use super::accessor::SampleAccessor;

/// Copy the part of a tile that an accessor covers
///
/// The destination is laid out with the accessor's own channel count and a
/// row stride of `width`. Only cells `(i, j)` with
/// `i < min(width, fw - x)` and `j < min(height, fh - y)` are visited, where
/// `fw`/`fh` are the accessor's dimensions; all other destination samples
/// keep whatever the caller put there. Unlike [`copy_tile`](super::copy_tile)
/// nothing is zero-filled.
///
/// An origin at or past the accessor's far edge visits nothing.
///
/// # Arguments
/// * `accessor` - Image source to read from
/// * `x` - X-coordinate of the tile origin
/// * `y` - Y-coordinate of the tile origin
/// * `width` - Tile width in pixels
/// * `height` - Tile height in pixels
/// * `dst` - Destination samples, at least `width * height * channel_count`
pub fn fancy_get_tile<A>(
    accessor: &A,
    x: usize,
    y: usize,
    width: usize,
    height: usize,
    dst: &mut [f32],
) where
    A: SampleAccessor + ?Sized,
{
    let depth = accessor.channel_count();
    debug_assert!(dst.len() >= width * height * depth,
                  "destination holds {} samples, tile needs {}", dst.len(), width * height * depth);

    let cols = width.min(accessor.width().saturating_sub(x));
    let rows = height.min(accessor.height().saturating_sub(y));

    trace!("fancy_get_tile: origin ({}, {}), visiting {}x{} of {}x{}",
           x, y, cols, rows, width, height);

    for j in 0..rows {
        for i in 0..cols {
            let base = depth * (i + j * width);
            for l in 0..depth {
                dst[base + l] = accessor.sample_at(x + i, y + j, l);
            }
        }
    }
}
