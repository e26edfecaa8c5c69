//! Tiling configuration
//!
//! Defaults are compiled in from `tilekit.toml` and can be overridden by a
//! TOML file of the same shape. Keys missing from an override file keep
//! their default value.

use std::fs;

use lazy_static::lazy_static;
use log::debug;

use crate::errors::{TileError, TileResult};
use crate::io::OutputFormat;

lazy_static! {
    // Parse the embedded defaults once
    static ref DEFAULT_CONFIG: TilerConfig = {
        let content = include_str!("../tilekit.toml");
        TilerConfig::parse(content, TilerConfig::FALLBACK).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to parse built-in tiling defaults: {}", e);
            TilerConfig::FALLBACK
        })
    };
}

/// Settings for splitting images and writing tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TilerConfig {
    /// Edge length of a full tile in pixels
    pub tile_size: usize,
    /// Channels kept per pixel
    pub max_channels: usize,
    /// Format used when writing tiles
    pub output_format: OutputFormat,
}

impl TilerConfig {
    // Used only if the embedded file itself is broken
    const FALLBACK: TilerConfig = TilerConfig {
        tile_size: 1024,
        max_channels: 4,
        output_format: OutputFormat::Npy,
    };

    /// Parse a configuration from TOML, filling gaps with the defaults
    pub fn from_str(content: &str) -> TileResult<Self> {
        Self::parse(content, *DEFAULT_CONFIG)
    }

    /// Load a configuration from a TOML file
    pub fn from_file(path: &str) -> TileResult<Self> {
        let content = fs::read_to_string(path)?;
        debug!("Loaded tiling configuration from {}", path);
        Self::from_str(&content)
    }

    fn parse(content: &str, base: TilerConfig) -> TileResult<Self> {
        let toml_value: toml::Table = content.parse()
            .map_err(|e| TileError::InvalidConfig(format!("Failed to parse TOML: {}", e)))?;

        let mut config = base;

        if let Some(tiling) = toml_value.get("tiling") {
            if let Some(size) = Self::read_positive(tiling, "tile_size")? {
                config.tile_size = size;
            }
            if let Some(channels) = Self::read_positive(tiling, "max_channels")? {
                config.max_channels = channels;
            }
        }

        if let Some(format) = toml_value.get("output").and_then(|v| v.get("format")) {
            let name = format.as_str().ok_or_else(|| {
                TileError::InvalidConfig("output.format must be a string".to_string())
            })?;
            config.output_format = OutputFormat::from_name(name)?;
        }

        Ok(config)
    }

    fn read_positive(table: &toml::Value, key: &str) -> TileResult<Option<usize>> {
        let value = match table.get(key) {
            Some(v) => v,
            None => return Ok(None),
        };

        match value.as_integer() {
            Some(n) if n > 0 => Ok(Some(n as usize)),
            _ => Err(TileError::InvalidConfig(format!("{} must be a positive integer, got {}", key, value))),
        }
    }
}

impl Default for TilerConfig {
    fn default() -> Self {
        *DEFAULT_CONFIG
    }
}
