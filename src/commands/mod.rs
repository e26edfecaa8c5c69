//! CLI command implementations
//!
//! This module contains implementations of the commands supported by the
//! CLI application using the Command pattern.

pub mod cli;
pub mod command_traits;
pub mod range_command;
pub mod extract_command;
pub mod split_command;

pub use cli::build_cli;
pub use command_traits::{Command, CommandFactory};
pub use range_command::RangeCommand;
pub use extract_command::ExtractCommand;
pub use split_command::SplitCommand;

use std::path::Path;

use clap::ArgMatches;
use crate::config::TilerConfig;
use crate::errors::{TileError, TileResult};
use crate::io::OutputFormat;
use crate::utils::logger::Logger;

/// Factory for creating command instances based on CLI arguments
pub struct TilekitCommandFactory;

impl TilekitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        TilekitCommandFactory
    }
}

impl Default for TilekitCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for TilekitCommandFactory {
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> TileResult<Box<dyn Command + 'a>> {
        if args.get_flag("extract") {
            Ok(Box::new(ExtractCommand::new(args, logger)?))
        } else if args.get_flag("split") {
            Ok(Box::new(SplitCommand::new(args, logger)?))
        } else {
            // Default to the range report
            Ok(Box::new(RangeCommand::new(args, logger)?))
        }
    }
}

/// Read the input path shared by every command
pub(crate) fn input_path(args: &ArgMatches) -> TileResult<String> {
    args.get_one::<String>("input")
        .cloned()
        .ok_or_else(|| TileError::GenericError("Missing input file".to_string()))
}

/// Load the tiling configuration, applying --config and --tile-size
pub(crate) fn load_config(args: &ArgMatches) -> TileResult<TilerConfig> {
    let mut config = match args.get_one::<String>("config") {
        Some(path) => TilerConfig::from_file(path)?,
        None => TilerConfig::default(),
    };

    if let Some(size) = args.get_one::<String>("tile-size") {
        config.tile_size = size.parse::<usize>()
            .ok()
            .filter(|&s| s > 0)
            .ok_or_else(|| TileError::InvalidConfig(format!("Invalid tile size: {}", size)))?;
    }

    Ok(config)
}

/// Pick the output format: --format, then the output file extension, then config
pub(crate) fn resolve_format(args: &ArgMatches, output: Option<&str>, config: &TilerConfig) -> TileResult<OutputFormat> {
    if let Some(name) = args.get_one::<String>("format") {
        return OutputFormat::from_name(name);
    }

    let from_extension = output
        .and_then(|p| Path::new(p).extension())
        .and_then(|ext| ext.to_str())
        .and_then(|ext| OutputFormat::from_name(ext).ok());

    Ok(from_extension.unwrap_or(config.output_format))
}
