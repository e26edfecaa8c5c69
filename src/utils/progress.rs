//! Progress reporting while tiles are written to disk

use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar counting written tiles
///
/// The message shows the file most recently written.
pub struct TileProgress {
    bar: ProgressBar,
}

impl TileProgress {
    /// Start a bar for `total_tiles` tiles
    pub fn new(total_tiles: usize) -> Self {
        let bar = ProgressBar::new(total_tiles as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("Writing tiles {bar:40.green/white} {pos}/{len} {msg}")
        {
            bar.set_style(style.progress_chars("=> "));
        }

        TileProgress { bar }
    }

    /// Count one tile as written to `path`
    pub fn tile_written(&self, path: &str) {
        self.bar.set_message(path.to_string());
        self.bar.inc(1);
    }

    /// Tiles written so far
    pub fn written(&self) -> usize {
        self.bar.position() as usize
    }

    /// Close the bar with the final tile count
    pub fn finish(&self) {
        let done = format!("{} tiles written", self.written());
        self.bar.finish_with_message(done);
    }
}
