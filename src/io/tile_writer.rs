//! Writing tiles to disk

use std::fs::File;
use std::io::{BufWriter, Write};

use byteorder::{LittleEndian, WriteBytesExt};
use image::{GrayImage, ImageBuffer, ImageFormat, LumaA, RgbImage, RgbaImage};
use log::{debug, info};

use crate::buffer::{PixelLayout, SampleRange};
use crate::errors::{TileError, TileResult};
use crate::extractor::Tile;
use super::output_format::OutputFormat;

/// Write a tile produced by the tiler
///
/// # Arguments
/// * `tile` - Tile to write
/// * `path` - Output file path
/// * `format` - Output format
/// * `range` - Value range mapped to 0..=255 for PNG output
pub fn write_tile(tile: &Tile, path: &str, format: OutputFormat, range: SampleRange) -> TileResult<()> {
    write_samples(&tile.data, tile.layout(), path, format, range)
}

/// Write an interleaved sample buffer
///
/// # Arguments
/// * `samples` - Samples laid out as `layout`
/// * `layout` - Dimensions of the buffer
/// * `path` - Output file path
/// * `format` - Output format
/// * `range` - Value range mapped to 0..=255 for PNG output
pub fn write_samples(
    samples: &[f32],
    layout: PixelLayout,
    path: &str,
    format: OutputFormat,
    range: SampleRange,
) -> TileResult<()> {
    if samples.len() < layout.len() {
        return Err(TileError::BufferTooSmall {
            expected: layout.len(),
            actual: samples.len(),
        });
    }
    let samples = &samples[..layout.len()];

    debug!("Writing {}x{}x{} samples to {} as {}",
           layout.width, layout.height, layout.channels, path, format);

    match format {
        OutputFormat::Npy => save_as_npy(samples, layout, path),
        OutputFormat::Csv => save_as_csv(samples, layout, path),
        OutputFormat::Png => save_as_png(samples, layout, path, range),
    }
}

/// Save samples as a NumPy NPY v1.0 file of little-endian `f32`
fn save_as_npy(samples: &[f32], layout: PixelLayout, path: &str) -> TileResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);

    writer.write_all(b"\x93NUMPY")?;
    writer.write_all(&[0x01, 0x00])?;

    let header_str = format!(
        "{{'descr': '<f4', 'fortran_order': False, 'shape': ({}, {}, {}), }}",
        layout.height, layout.width, layout.channels
    );

    // magic (6) + version (2) + length (2) + header must be a multiple of 64
    let header_len = header_str.len() + 1;
    let padding_len = (64 - ((header_len + 10) % 64)) % 64;
    let padded_header = format!("{}{}\n", header_str, " ".repeat(padding_len));

    writer.write_u16::<LittleEndian>(padded_header.len() as u16)?;
    writer.write_all(padded_header.as_bytes())?;

    for &value in samples {
        writer.write_f32::<LittleEndian>(value)?;
    }
    writer.flush()?;

    Ok(())
}

/// Save samples as text: pixels separated by ',', channels by ';'
fn save_as_csv(samples: &[f32], layout: PixelLayout, path: &str) -> TileResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);

    if layout.channels > 0 && layout.width > 0 {
        for row in samples.chunks(layout.width * layout.channels).take(layout.height) {
            let line = row
                .chunks(layout.channels)
                .map(|pixel| {
                    pixel.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(";")
                })
                .collect::<Vec<_>>()
                .join(",");
            writeln!(writer, "{}", line)?;
        }
    }
    writer.flush()?;

    Ok(())
}

/// Map samples linearly from `range` onto 0..=255
///
/// Non-finite samples and degenerate ranges map to 0.
fn to_display_bytes(samples: &[f32], range: SampleRange) -> Vec<u8> {
    let span = range.span();

    samples
        .iter()
        .map(|&v| {
            if span > 0.0 && v.is_finite() {
                ((v - range.min) / span * 255.0).round().clamp(0.0, 255.0) as u8
            } else {
                0
            }
        })
        .collect()
}

fn save_as_png(samples: &[f32], layout: PixelLayout, path: &str, range: SampleRange) -> TileResult<()> {
    let bytes = to_display_bytes(samples, range);
    let (width, height) = (layout.width as u32, layout.height as u32);
    let size_error = || TileError::GenericError(format!("Cannot build {}x{} PNG buffer", width, height));

    match layout.channels {
        1 => GrayImage::from_raw(width, height, bytes).ok_or_else(size_error)?
            .save_with_format(path, ImageFormat::Png)?,
        2 => ImageBuffer::<LumaA<u8>, Vec<u8>>::from_raw(width, height, bytes).ok_or_else(size_error)?
            .save_with_format(path, ImageFormat::Png)?,
        3 => RgbImage::from_raw(width, height, bytes).ok_or_else(size_error)?
            .save_with_format(path, ImageFormat::Png)?,
        4 => RgbaImage::from_raw(width, height, bytes).ok_or_else(size_error)?
            .save_with_format(path, ImageFormat::Png)?,
        n => return Err(TileError::UnsupportedFormat(format!("PNG with {} channels", n))),
    }

    info!("Saved PNG tile {}", path);
    Ok(())
}
