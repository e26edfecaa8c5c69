//! Custom error types for tile processing

use std::fmt;
use std::io;

/// Tile processing error types
#[derive(Debug)]
pub enum TileError {
    /// I/O error
    IoError(io::Error),
    /// Error reported by the image decoder/encoder
    ImageError(image::ImageError),
    /// Sample buffer shorter than its declared dimensions
    BufferTooSmall { expected: usize, actual: usize },
    /// Malformed tile region
    InvalidRegion(String),
    /// Invalid configuration value
    InvalidConfig(String),
    /// Unsupported output format
    UnsupportedFormat(String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for TileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TileError::IoError(e) => write!(f, "I/O error: {}", e),
            TileError::ImageError(e) => write!(f, "Image error: {}", e),
            TileError::BufferTooSmall { expected, actual } => {
                write!(f, "Buffer too small: expected at least {} samples, got {}", expected, actual)
            }
            TileError::InvalidRegion(msg) => write!(f, "Invalid tile region: {}", msg),
            TileError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            TileError::UnsupportedFormat(name) => write!(f, "Unsupported output format: {}", name),
            TileError::GenericError(msg) => write!(f, "Tile error: {}", msg),
        }
    }
}

impl std::error::Error for TileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TileError::IoError(e) => Some(e),
            TileError::ImageError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for TileError {
    fn from(error: io::Error) -> Self {
        TileError::IoError(error)
    }
}

impl From<image::ImageError> for TileError {
    fn from(error: image::ImageError) -> Self {
        TileError::ImageError(error)
    }
}

impl From<String> for TileError {
    fn from(msg: String) -> Self {
        TileError::GenericError(msg)
    }
}

/// Result type for tile operations
pub type TileResult<T> = Result<T, TileError>;
