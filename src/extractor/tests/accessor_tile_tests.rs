//! Tests for accessor-backed tile extraction

use image::{ImageBuffer, Rgb};

use crate::buffer::PixelLayout;
use crate::extractor::{fancy_get_tile, SampleAccessor};
use super::test_utils::{coordinate_image, coordinate_value};

const SENTINEL: f32 = -12345.0;

#[test]
fn test_tile_inside_accessor_overwrites_everything() {
    let source = coordinate_image(6, 5, 2);
    let (w, h) = (4, 3);
    let mut dst = vec![SENTINEL; w * h * 2];

    fancy_get_tile(&source, 0, 0, w, h, &mut dst);

    let out = PixelLayout::new(w, h, 2);
    for j in 0..h {
        for i in 0..w {
            for c in 0..2 {
                assert_eq!(dst[out.offset(i, j, c)], coordinate_value(i, j, c));
            }
        }
    }
    assert!(dst.iter().all(|&v| v != SENTINEL));
}

#[test]
fn test_columns_past_accessor_keep_sentinel() {
    let source = coordinate_image(5, 4, 1);
    let (x, y, w, h) = (3, 1, 4, 2);
    let mut dst = vec![SENTINEL; w * h];

    fancy_get_tile(&source, x, y, w, h, &mut dst);

    let visible = 5 - x;
    for j in 0..h {
        for i in 0..w {
            let value = dst[i + j * w];
            if i < visible {
                assert_eq!(value, coordinate_value(x + i, y + j, 0));
            } else {
                assert_eq!(value, SENTINEL, "column {} row {}", i, j);
            }
        }
    }
}

#[test]
fn test_rows_past_accessor_keep_sentinel() {
    let source = coordinate_image(3, 3, 3);
    let (w, h) = (2, 4);
    let mut dst = vec![SENTINEL; w * h * 3];

    fancy_get_tile(&source, 1, 2, w, h, &mut dst);

    let row_len = w * 3;
    assert_eq!(&dst[..3], &[
        coordinate_value(1, 2, 0),
        coordinate_value(1, 2, 1),
        coordinate_value(1, 2, 2),
    ]);
    assert!(dst[row_len..].iter().all(|&v| v == SENTINEL));
}

#[test]
fn test_origin_past_accessor_visits_nothing() {
    let source = coordinate_image(3, 3, 1);
    let mut dst = vec![SENTINEL; 4];

    fancy_get_tile(&source, 3, 0, 2, 2, &mut dst);
    fancy_get_tile(&source, 0, 10, 2, 2, &mut dst);

    assert!(dst.iter().all(|&v| v == SENTINEL));
}

#[test]
fn test_float_image_buffer_accessor() {
    let image: ImageBuffer<Rgb<f32>, Vec<f32>> =
        ImageBuffer::from_fn(4, 3, |x, y| Rgb([x as f32, y as f32, (x * y) as f32]));

    assert_eq!(SampleAccessor::width(&image), 4);
    assert_eq!(SampleAccessor::height(&image), 3);
    assert_eq!(image.channel_count(), 3);

    let mut dst = vec![SENTINEL; 2 * 2 * 3];
    fancy_get_tile(&image, 2, 1, 2, 2, &mut dst);

    assert_eq!(dst, vec![
        2.0, 1.0, 2.0,   3.0, 1.0, 3.0,
        2.0, 2.0, 4.0,   3.0, 2.0, 6.0,
    ]);
}

#[test]
fn test_trait_object_accessor() {
    let source = coordinate_image(2, 2, 1);
    let accessor: &dyn SampleAccessor = &source;
    let mut dst = vec![0.0; 4];

    fancy_get_tile(accessor, 0, 0, 2, 2, &mut dst);

    assert_eq!(dst, source.samples());
}
