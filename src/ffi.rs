//! C ABI for foreign callers
//!
//! These functions keep the allocate/scan/copy/free contract of a plain C
//! image library so bindings in other languages can drive the tile
//! extractor through raw pointers. Buffers handed out by
//! [`tilekit_load_image`] must come back through [`tilekit_free`] with the
//! same length.

use std::ffi::{c_char, c_float, c_int, CStr};
use std::ptr;
use std::slice;

use log::error;

use crate::buffer::{minmax, PixelLayout};
use crate::extractor::{copy_tile, TileRegion};
use crate::io::load_image;

fn dim(value: c_int) -> usize {
    value.max(0) as usize
}

/// Decode an image file into a newly allocated `f32` buffer
///
/// On success writes the dimensions through `w`, `h` and `nch` and returns a
/// buffer of `w * h * nch` samples. Returns null on failure.
///
/// # Safety
/// `path` must be a valid NUL-terminated string and `w`, `h`, `nch` valid
/// writable pointers.
#[no_mangle]
pub unsafe extern "C" fn tilekit_load_image(
    path: *const c_char,
    w: *mut c_int,
    h: *mut c_int,
    nch: *mut c_int,
) -> *mut c_float {
    if path.is_null() || w.is_null() || h.is_null() || nch.is_null() {
        return ptr::null_mut();
    }

    let path = match CStr::from_ptr(path).to_str() {
        Ok(p) => p,
        Err(e) => {
            error!("Image path is not valid UTF-8: {}", e);
            return ptr::null_mut();
        }
    };

    let buffer = match load_image(path) {
        Ok(b) => b,
        Err(e) => {
            error!("Failed to load {}: {}", path, e);
            return ptr::null_mut();
        }
    };

    *w = buffer.width() as c_int;
    *h = buffer.height() as c_int;
    *nch = buffer.channels() as c_int;

    let samples = buffer.into_samples().into_boxed_slice();
    Box::into_raw(samples) as *mut c_float
}

/// Release a buffer returned by [`tilekit_load_image`]
///
/// A null pointer is ignored.
///
/// # Safety
/// `ptr` must come from `tilekit_load_image` with `len == w * h * nch`, and
/// must not be released twice.
#[no_mangle]
pub unsafe extern "C" fn tilekit_free(ptr: *mut c_float, len: usize) {
    if ptr.is_null() {
        return;
    }

    drop(Box::from_raw(ptr::slice_from_raw_parts_mut(ptr, len)));
}

/// Finite minimum and maximum of `n` samples
///
/// With no finite sample the result is `+inf` / `-inf`.
///
/// # Safety
/// `p` must point to `n` readable floats; `vmin` and `vmax` must be writable.
#[no_mangle]
pub unsafe extern "C" fn tilekit_minmax(
    p: *const c_float,
    n: c_int,
    vmin: *mut c_float,
    vmax: *mut c_float,
) {
    let samples: &[f32] = if p.is_null() || n <= 0 {
        &[]
    } else {
        slice::from_raw_parts(p, dim(n))
    };

    let range = minmax(samples);
    *vmin = range.min;
    *vmax = range.max;
}

/// Copy a `ww x hh` tile at `(x0, y0)` out of a `w x h x nch` image
///
/// Samples outside the source read as zero.
///
/// # Safety
/// `src` must hold `w * h * nch` floats and `dst` `ww * hh * dst_nch`
/// floats; the two must not overlap.
#[no_mangle]
pub unsafe extern "C" fn tilekit_copy_tile(
    src: *const c_float,
    w: c_int,
    h: c_int,
    nch: c_int,
    dst: *mut c_float,
    x0: c_int,
    y0: c_int,
    ww: c_int,
    hh: c_int,
    dst_nch: c_int,
) {
    let layout = PixelLayout::new(dim(w), dim(h), dim(nch));
    let region = TileRegion::new(x0 as i64, y0 as i64, dim(ww), dim(hh));
    let dst_channels = dim(dst_nch);

    let dst_len = match region.checked_sample_count(dst_channels) {
        Some(n) if n > 0 && !dst.is_null() => n,
        _ => return,
    };
    let dst = slice::from_raw_parts_mut(dst, dst_len);

    let src: &[f32] = if src.is_null() || layout.is_empty() {
        &[]
    } else {
        slice::from_raw_parts(src, layout.len())
    };
    let layout = if src.is_empty() { PixelLayout::new(0, 0, 0) } else { layout };

    copy_tile(src, layout, dst, region, dst_channels);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minmax_through_c_abi() {
        let samples = [2.0f32, f32::NAN, -4.0, 9.5];
        let (mut vmin, mut vmax) = (0.0f32, 0.0f32);

        unsafe { tilekit_minmax(samples.as_ptr(), samples.len() as c_int, &mut vmin, &mut vmax) };

        assert_eq!(vmin, -4.0);
        assert_eq!(vmax, 9.5);
    }

    #[test]
    fn test_copy_tile_through_c_abi() {
        // 2x2 single channel image, tile shifted one pixel up-left
        let src = [1.0f32, 2.0, 3.0, 4.0];
        let mut dst = [7.0f32; 4];

        unsafe { tilekit_copy_tile(src.as_ptr(), 2, 2, 1, dst.as_mut_ptr(), -1, -1, 2, 2, 1) };

        assert_eq!(dst, [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_free_accepts_null_and_owned_buffers() {
        unsafe {
            tilekit_free(ptr::null_mut(), 0);

            let boxed = vec![1.0f32; 6].into_boxed_slice();
            let len = boxed.len();
            tilekit_free(Box::into_raw(boxed) as *mut c_float, len);
        }
    }

    #[test]
    fn test_load_image_rejects_missing_file() {
        let path = std::ffi::CString::new("/nonexistent/tilekit/missing.png").unwrap();
        let (mut w, mut h, mut nch) = (0, 0, 0);

        let result = unsafe { tilekit_load_image(path.as_ptr(), &mut w, &mut h, &mut nch) };
        assert!(result.is_null());
    }
}
