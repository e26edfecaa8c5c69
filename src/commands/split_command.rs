//! Image splitting command
//!
//! Cuts an image into the configured tile grid and writes each tile as
//! `tile_<x>_<y>.<ext>` into the output directory.

use std::fs;
use std::path::Path;

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::config::TilerConfig;
use crate::errors::{TileError, TileResult};
use crate::extractor::Tiler;
use crate::io::{load_image, write_tile, OutputFormat};
use crate::utils::logger::Logger;
use crate::utils::progress::TileProgress;

/// Command for splitting an image into tiles
pub struct SplitCommand<'a> {
    /// Path to the input file
    input_file: String,
    /// Directory receiving the tiles
    output_dir: String,
    /// Tiling settings
    config: TilerConfig,
    /// Output format
    format: OutputFormat,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> SplitCommand<'a> {
    /// Create a new split command
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> TileResult<Self> {
        let input_file = super::input_path(args)?;

        let output_dir = args.get_one::<String>("output-dir")
            .ok_or_else(|| TileError::GenericError("Missing --output-dir for split".to_string()))?
            .clone();

        let config = super::load_config(args)?;
        let format = super::resolve_format(args, None, &config)?;

        Ok(SplitCommand {
            input_file,
            output_dir,
            config,
            format,
            logger,
        })
    }
}

impl<'a> Command for SplitCommand<'a> {
    fn execute(&self) -> TileResult<()> {
        let tiler = Tiler::new(&self.config)?;
        let buffer = load_image(&self.input_file)?;
        let tiled = tiler.split(&buffer);
        buffer.release();

        fs::create_dir_all(&self.output_dir)?;

        let progress = TileProgress::new(tiled.tiles.len());
        for tile in &tiled.tiles {
            let name = format!("tile_{}_{}.{}", tile.x, tile.y, self.format.extension());
            let path = Path::new(&self.output_dir).join(name);
            let path = path.to_str()
                .ok_or_else(|| TileError::GenericError(format!("Non UTF-8 output path: {:?}", path)))?;

            write_tile(tile, path, self.format, tiled.range)?;
            progress.tile_written(path);
        }
        progress.finish();

        info!("Wrote {} tiles ({}x{} grid) to {}",
              tiled.tiles.len(), tiled.tiles_across(), tiled.tiles_down(), self.output_dir);
        self.logger.log_image_summary(&self.input_file, (tiled.width, tiled.height, tiled.channels), tiled.range)?;
        self.logger.log(&format!("Split into {} tiles in {}", tiled.tiles.len(), self.output_dir))?;

        Ok(())
    }
}
