//! Command-line definition
//!
//! Kept in the library so the binary and the tests parse the same flags.

use clap::{Arg, ArgAction, Command as ClapCommand};

/// Build the `tilekit` argument parser
pub fn build_cli() -> ClapCommand {
    ClapCommand::new("tilekit")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Float image tiling: range scan, tile extraction and splitting")
        .arg(
            Arg::new("input")
                .help("Input image file")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("range")
                .short('r')
                .long("range")
                .help("Report dimensions and finite sample range (default)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("extract")
                .short('e')
                .long("extract")
                .help("Extract a single tile")
                .action(ArgAction::SetTrue)
                .conflicts_with("split"),
        )
        .arg(
            Arg::new("split")
                .short('s')
                .long("split")
                .help("Split the image into tiles")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Output file for --extract")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("output-dir")
                .long("output-dir")
                .help("Output directory for --split")
                .value_name("DIR")
                .required(false),
        )
        .arg(
            Arg::new("tile")
                .long("tile")
                .help("Tile to extract as 'x,y,width,height'; the origin may be negative")
                .value_name("X,Y,W,H")
                .allow_hyphen_values(true)
                .required(false),
        )
        .arg(
            Arg::new("channels")
                .long("channels")
                .help("Channels in the extracted tile (default: same as the image)")
                .value_name("N")
                .required(false),
        )
        .arg(
            Arg::new("clamped")
                .long("clamped")
                .help("Read only the part of the tile inside the image, leaving the rest at --fill")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("fill")
                .long("fill")
                .help("Initial value of tile samples for --clamped")
                .value_name("VALUE")
                .allow_hyphen_values(true)
                .required(false),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help("Tile output format (npy, csv, png)")
                .value_name("FORMAT")
                .required(false),
        )
        .arg(
            Arg::new("tile-size")
                .long("tile-size")
                .help("Tile edge length for --split")
                .value_name("PIXELS")
                .required(false),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("TOML file overriding the tiling defaults")
                .value_name("FILE")
                .required(false),
        )
}
