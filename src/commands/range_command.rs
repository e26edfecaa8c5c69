//! Image range report command

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::errors::TileResult;
use crate::io::load_image;
use crate::utils::logger::Logger;

/// Command reporting an image's dimensions and finite sample range
pub struct RangeCommand<'a> {
    /// Path to the input file
    input_file: String,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> RangeCommand<'a> {
    /// Create a new range command
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> TileResult<Self> {
        Ok(RangeCommand {
            input_file: super::input_path(args)?,
            logger,
        })
    }
}

impl<'a> Command for RangeCommand<'a> {
    fn execute(&self) -> TileResult<()> {
        let buffer = load_image(&self.input_file)?;
        let range = buffer.range();

        info!("Dimensions: {}x{}", buffer.width(), buffer.height());
        info!("Channels: {}", buffer.channels());
        if range.is_empty() {
            info!("Range: no finite samples");
        } else {
            info!("Range: {} .. {}", range.min, range.max);
        }

        self.logger.log_image_summary(
            &self.input_file,
            (buffer.width(), buffer.height(), buffer.channels()),
            range,
        )?;

        buffer.release();
        Ok(())
    }
}
