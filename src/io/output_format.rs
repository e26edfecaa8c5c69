//! Supported tile output formats

use std::fmt;

use crate::errors::{TileError, TileResult};

/// File format for written tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// NumPy `.npy`, little-endian `f32`, shape `(height, width, channels)`
    Npy,
    /// Plain text, one line per pixel row
    Csv,
    /// 8-bit PNG scaled to the image's finite range
    Png,
}

impl OutputFormat {
    /// Look up a format by name, ignoring case
    pub fn from_name(name: &str) -> TileResult<Self> {
        match name.trim().to_lowercase().as_str() {
            "npy" | "numpy" => Ok(OutputFormat::Npy),
            "csv" => Ok(OutputFormat::Csv),
            "png" => Ok(OutputFormat::Png),
            _ => Err(TileError::UnsupportedFormat(name.to_string())),
        }
    }

    /// File extension without the dot
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Npy => "npy",
            OutputFormat::Csv => "csv",
            OutputFormat::Png => "png",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}
