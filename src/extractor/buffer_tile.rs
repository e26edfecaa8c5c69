//! Buffer-to-buffer tile extraction

use log::trace;

use crate::buffer::PixelLayout;
use super::region::TileRegion;

/// Copy a tile out of a sample buffer, zero-filling whatever the source lacks
///
/// Every one of the `region.width * region.height * dst_channels` leading
/// destination samples is written. A destination sample takes the source
/// value when its pixel lies inside the source grid and its channel is below
/// `src_layout.channels`; otherwise it is set to zero. Extra source channels
/// are dropped and missing ones come out as zero.
///
/// # Arguments
/// * `src` - Source samples laid out as `src_layout`
/// * `src_layout` - Dimensions of the source buffer
/// * `dst` - Destination samples, row stride `region.width`
/// * `region` - Tile origin in source coordinates and tile size
/// * `dst_channels` - Channels per destination pixel
///
/// Callers must size both buffers for their declared dimensions; this is
/// asserted in debug builds only.
pub fn copy_tile(
    src: &[f32],
    src_layout: PixelLayout,
    dst: &mut [f32],
    region: TileRegion,
    dst_channels: usize,
) {
    debug_assert!(src.len() >= src_layout.len(),
                  "source holds {} samples, layout needs {}", src.len(), src_layout.len());
    debug_assert!(region.checked_sample_count(dst_channels).is_some_and(|n| dst.len() >= n),
                  "destination holds {} samples, tile is {}x{}x{}",
                  dst.len(), region.width, region.height, dst_channels);

    trace!("copy_tile: origin ({}, {}), {}x{}x{} from {}x{}x{}",
           region.x, region.y, region.width, region.height, dst_channels,
           src_layout.width, src_layout.height, src_layout.channels);

    let shared_channels = dst_channels.min(src_layout.channels);

    for j in 0..region.height {
        let jj = region.y.saturating_add(j as i64);

        for i in 0..region.width {
            let ii = region.x.saturating_add(i as i64);
            let base = dst_channels * (i + j * region.width);
            let pixel = &mut dst[base..base + dst_channels];

            match src_layout.pixel_offset(ii, jj) {
                Some(offset) => {
                    pixel[..shared_channels].copy_from_slice(&src[offset..offset + shared_channels]);
                    pixel[shared_channels..].fill(0.0);
                }
                None => pixel.fill(0.0),
            }
        }
    }
}
