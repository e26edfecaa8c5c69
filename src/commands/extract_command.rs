//! Single tile extraction command
//!
//! Cuts one tile out of an image and writes it to a file. The default path
//! uses `copy_tile`, which accepts any origin and zero-fills what lies
//! outside the image. With `--clamped` the tile is read through the image's
//! sample accessor instead; cells past the image edge then keep the
//! `--fill` value.

use clap::ArgMatches;
use log::{info, warn};

use crate::buffer::PixelLayout;
use crate::commands::command_traits::Command;
use crate::errors::{TileError, TileResult};
use crate::extractor::{copy_tile, fancy_get_tile, SampleAccessor, TileRegion};
use crate::io::{load_image, write_samples, OutputFormat};
use crate::utils::logger::Logger;

/// Command for extracting a single tile
pub struct ExtractCommand<'a> {
    /// Path to the input file
    input_file: String,
    /// Path to the output file
    output_file: String,
    /// Requested tile
    region: TileRegion,
    /// Destination channel count, defaults to the image's
    channels: Option<usize>,
    /// Read through the accessor instead of the raw buffer
    clamped: bool,
    /// Initial destination value for clamped extraction
    fill: f32,
    /// Output format
    format: OutputFormat,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> ExtractCommand<'a> {
    /// Create a new extract command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new ExtractCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> TileResult<Self> {
        let input_file = super::input_path(args)?;

        let output_file = args.get_one::<String>("output")
            .ok_or_else(|| TileError::GenericError("Missing output file path for extraction".to_string()))?
            .clone();

        let region = args.get_one::<String>("tile")
            .ok_or_else(|| TileError::GenericError("Missing --tile x,y,width,height".to_string()))
            .and_then(|spec| TileRegion::parse(spec))?;

        let channels = match args.get_one::<String>("channels") {
            Some(s) => Some(s.parse::<usize>()
                .map_err(|_| TileError::GenericError(format!("Invalid channel count: {}", s)))?),
            None => None,
        };

        let fill = match args.get_one::<String>("fill") {
            Some(s) => s.parse::<f32>()
                .map_err(|_| TileError::GenericError(format!("Invalid fill value: {}", s)))?,
            None => 0.0,
        };

        let clamped = args.get_flag("clamped");
        if clamped && (region.x < 0 || region.y < 0) {
            return Err(TileError::InvalidRegion(
                "clamped extraction needs a non-negative origin".to_string()));
        }

        let config = super::load_config(args)?;
        let format = super::resolve_format(args, Some(&output_file), &config)?;

        Ok(ExtractCommand {
            input_file,
            output_file,
            region,
            channels,
            clamped,
            fill,
            format,
            logger,
        })
    }
}

/// Samples in the destination tile, rejecting sizes that overflow
fn tile_samples(region: TileRegion, channels: usize) -> TileResult<usize> {
    region.checked_sample_count(channels).ok_or_else(|| {
        TileError::InvalidRegion(format!("{}x{}x{} tile is too large",
                                         region.width, region.height, channels))
    })
}

impl<'a> Command for ExtractCommand<'a> {
    fn execute(&self) -> TileResult<()> {
        let buffer = load_image(&self.input_file)?;
        let range = buffer.range();
        let region = self.region;

        info!("Extracting tile ({}, {}) {}x{} from {}",
              region.x, region.y, region.width, region.height, self.input_file);

        let (data, channels) = if self.clamped {
            let depth = buffer.channel_count();
            if let Some(requested) = self.channels.filter(|&c| c != depth) {
                warn!("Clamped extraction keeps the image's {} channels, ignoring --channels {}",
                      depth, requested);
            }

            let mut data = vec![self.fill; tile_samples(region, depth)?];
            fancy_get_tile(&buffer, region.x as usize, region.y as usize,
                           region.width, region.height, &mut data);
            (data, depth)
        } else {
            let channels = self.channels.unwrap_or(buffer.channels());
            let mut data = vec![0.0; tile_samples(region, channels)?];
            copy_tile(buffer.samples(), buffer.layout(), &mut data, region, channels);
            (data, channels)
        };

        let layout = PixelLayout::new(region.width, region.height, channels);
        write_samples(&data, layout, &self.output_file, self.format, range)?;

        info!("Tile written to {}", self.output_file);
        self.logger.log(&format!("Extracted {}x{}x{} tile to {}",
                                 region.width, region.height, channels, self.output_file))?;

        buffer.release();
        Ok(())
    }
}
