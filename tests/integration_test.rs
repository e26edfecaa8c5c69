//! Integration tests: image files through loading, tiling, writing and the CLI commands

use std::fs;
use std::path::PathBuf;

use image::{GenericImageView, RgbImage, Rgb};

use tilekit::commands::{build_cli, CommandFactory, TilekitCommandFactory};
use tilekit::io::{load_image, write_tile};
use tilekit::utils::logger::Logger;
use tilekit::{OutputFormat, TileError, Tiler, TilerConfig};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Fresh scratch directory for one test
fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("tilekit_it_{}_{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

/// Writes a 5x3 RGB test image; channel values encode x, y and a constant
fn write_test_png(dir: &PathBuf) -> String {
    let image = RgbImage::from_fn(5, 3, |x, y| Rgb([(x * 50) as u8, (y * 100) as u8, 255]));
    let path = dir.join("source.png");
    image.save(&path).unwrap();
    path.to_str().unwrap().to_string()
}

#[test]
fn test_load_image_keeps_channels_and_values() {
    init_logging();
    let dir = scratch_dir("load");
    let source = write_test_png(&dir);

    let buffer = load_image(&source).unwrap();

    assert_eq!((buffer.width(), buffer.height(), buffer.channels()), (5, 3, 3));
    assert_eq!(buffer.get(0, 0, 0), Some(0.0));
    assert_eq!(buffer.get(0, 0, 2), Some(1.0));
    assert!((buffer.get(2, 1, 0).unwrap() - 100.0 / 255.0).abs() < 1e-6);
    assert!((buffer.get(4, 2, 1).unwrap() - 200.0 / 255.0).abs() < 1e-6);

    let range = buffer.range();
    assert_eq!(range.min, 0.0);
    assert_eq!(range.max, 1.0);
}

#[test]
fn test_split_and_write_npy_tiles() {
    init_logging();
    let dir = scratch_dir("npy");
    let source = write_test_png(&dir);

    let buffer = load_image(&source).unwrap();
    let config = TilerConfig { tile_size: 2, ..TilerConfig::default() };
    let tiled = Tiler::new(&config).unwrap().split(&buffer);
    assert_eq!(tiled.tiles.len(), 6);

    for tile in &tiled.tiles {
        let path = dir.join(format!("tile_{}_{}.npy", tile.x, tile.y));
        write_tile(tile, path.to_str().unwrap(), OutputFormat::Npy, tiled.range).unwrap();

        let bytes = fs::read(&path).unwrap();
        assert_eq!(&bytes[..8], b"\x93NUMPY\x01\x00");

        let header_len = u16::from_le_bytes([bytes[8], bytes[9]]) as usize;
        assert_eq!((10 + header_len) % 64, 0);

        let header = std::str::from_utf8(&bytes[10..10 + header_len]).unwrap();
        assert!(header.contains("'descr': '<f4'"));
        assert!(header.contains(&format!("'shape': ({}, {}, 3)", tile.height, tile.width)));
        assert!(header.ends_with('\n'));

        let payload = &bytes[10 + header_len..];
        assert_eq!(payload.len(), tile.data.len() * 4);
        let first = f32::from_le_bytes([payload[0], payload[1], payload[2], payload[3]]);
        assert_eq!(first, tile.data[0]);
    }
}

#[test]
fn test_write_csv_and_png_tiles() {
    init_logging();
    let dir = scratch_dir("csv_png");
    let source = write_test_png(&dir);

    let buffer = load_image(&source).unwrap();
    let config = TilerConfig { tile_size: 4, ..TilerConfig::default() };
    let tiled = Tiler::new(&config).unwrap().split(&buffer);
    let tile = &tiled.tiles[0];
    assert_eq!((tile.width, tile.height), (4, 3));

    let csv_path = dir.join("tile.csv");
    write_tile(tile, csv_path.to_str().unwrap(), OutputFormat::Csv, tiled.range).unwrap();
    let csv = fs::read_to_string(&csv_path).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0].split(',').count(), 4);
    assert_eq!(lines[0].split(',').next().unwrap(), "0;0;1");

    let png_path = dir.join("tile.png");
    write_tile(tile, png_path.to_str().unwrap(), OutputFormat::Png, tiled.range).unwrap();
    let reloaded = image::open(&png_path).unwrap();
    assert_eq!(reloaded.dimensions(), (4, 3));
    assert_eq!(reloaded.to_rgb8().get_pixel(2, 1), &Rgb([100, 100, 255]));
}

#[test]
fn test_extract_command_zero_fills_halo() {
    init_logging();
    let dir = scratch_dir("extract");
    let source = write_test_png(&dir);
    let output = dir.join("halo.npy");
    let log_path = dir.join("extract.log");

    let matches = build_cli().try_get_matches_from([
        "tilekit",
        source.as_str(),
        "--extract",
        "--tile=-1,-1,7,5",
        "--channels",
        "4",
        "-o",
        output.to_str().unwrap(),
    ]).unwrap();

    let logger = Logger::new(log_path.to_str().unwrap()).unwrap();
    let command = TilekitCommandFactory::new().create_command(&matches, &logger).unwrap();
    command.execute().unwrap();

    let bytes = fs::read(&output).unwrap();
    let header_len = u16::from_le_bytes([bytes[8], bytes[9]]) as usize;
    let header = std::str::from_utf8(&bytes[10..10 + header_len]).unwrap();
    assert!(header.contains("'shape': (5, 7, 4)"));

    let samples: Vec<f32> = bytes[10 + header_len..]
        .chunks(4)
        .map(|b| f32::from_le_bytes([b[0], b[1], b[2], b[3]]))
        .collect();
    assert_eq!(samples.len(), 7 * 5 * 4);

    // Corner is outside the image, (1, 1) is source pixel (0, 0)
    assert_eq!(&samples[0..4], &[0.0, 0.0, 0.0, 0.0]);
    let inside = 4 * (1 + 7);
    assert_eq!(&samples[inside..inside + 4], &[0.0, 0.0, 1.0, 0.0]);

    assert!(fs::read_to_string(&log_path).unwrap().contains("Extracted 7x5x4 tile"));
}

#[test]
fn test_clamped_extract_keeps_fill_value() {
    init_logging();
    let dir = scratch_dir("clamped");
    let source = write_test_png(&dir);
    let output = dir.join("clamped.csv");
    let log_path = dir.join("clamped.log");

    let matches = build_cli().try_get_matches_from([
        "tilekit",
        source.as_str(),
        "--extract",
        "--clamped",
        "--tile",
        "3,2,3,2",
        "--fill",
        "-7",
        "-o",
        output.to_str().unwrap(),
    ]).unwrap();

    let logger = Logger::new(log_path.to_str().unwrap()).unwrap();
    TilekitCommandFactory::new()
        .create_command(&matches, &logger)
        .unwrap()
        .execute()
        .unwrap();

    let csv = fs::read_to_string(&output).unwrap();
    let rows: Vec<Vec<&str>> = csv.lines().map(|l| l.split(',').collect()).collect();
    assert_eq!(rows.len(), 2);

    // Only columns 3 and 4 of row 2 exist in the 5x3 image
    assert_ne!(rows[0][0], "-7;-7;-7");
    assert_ne!(rows[0][1], "-7;-7;-7");
    assert_eq!(rows[0][2], "-7;-7;-7");
    assert!(rows[1].iter().all(|cell| *cell == "-7;-7;-7"));
}

#[test]
fn test_clamped_extract_rejects_negative_origin() {
    init_logging();
    let dir = scratch_dir("clamped_negative");
    let log_path = dir.join("neg.log");

    let matches = build_cli().try_get_matches_from([
        "tilekit", "unused.png", "--extract", "--clamped", "--tile=-1,0,2,2", "-o", "out.npy",
    ]).unwrap();

    let logger = Logger::new(log_path.to_str().unwrap()).unwrap();
    let result = TilekitCommandFactory::new().create_command(&matches, &logger);
    assert!(matches!(result, Err(TileError::InvalidRegion(_))));
}

#[test]
fn test_split_command_writes_tile_grid() {
    init_logging();
    let dir = scratch_dir("split");
    let source = write_test_png(&dir);
    let out_dir = dir.join("tiles");
    let log_path = dir.join("split.log");

    let matches = build_cli().try_get_matches_from([
        "tilekit",
        source.as_str(),
        "--split",
        "--output-dir",
        out_dir.to_str().unwrap(),
        "--tile-size",
        "2",
        "--format",
        "png",
    ]).unwrap();

    let logger = Logger::new(log_path.to_str().unwrap()).unwrap();
    TilekitCommandFactory::new()
        .create_command(&matches, &logger)
        .unwrap()
        .execute()
        .unwrap();

    let mut names: Vec<String> = fs::read_dir(&out_dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(names, vec![
        "tile_0_0.png", "tile_0_2.png", "tile_2_0.png",
        "tile_2_2.png", "tile_4_0.png", "tile_4_2.png",
    ]);

    let edge = image::open(out_dir.join("tile_4_2.png")).unwrap();
    assert_eq!(edge.dimensions(), (1, 1));
}

#[test]
fn test_range_command_logs_summary() {
    init_logging();
    let dir = scratch_dir("range");
    let source = write_test_png(&dir);
    let log_path = dir.join("range.log");

    let matches = build_cli().try_get_matches_from(["tilekit", source.as_str()]).unwrap();
    let logger = Logger::new(log_path.to_str().unwrap()).unwrap();
    TilekitCommandFactory::new()
        .create_command(&matches, &logger)
        .unwrap()
        .execute()
        .unwrap();

    let log = fs::read_to_string(&log_path).unwrap();
    assert!(log.contains("Dimensions: 5x3"));
    assert!(log.contains("Channels: 3"));
    assert!(log.contains("Range: 0 .. 1"));
}

#[test]
fn test_missing_input_is_an_error() {
    init_logging();
    assert!(load_image("/nonexistent/tilekit/none.png").is_err());
}
