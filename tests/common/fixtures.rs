//! Test fixtures: scratch directories with images and palettes.

use imagemanip::models::OutputConfig;
use imagemanip::services::image_io;
use pixel_transform::{Argb, PixelGrid, CRAYON_PALETTE_SIZE};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Colors used by the fixture images
pub mod colors {
    use pixel_transform::Argb;

    pub const RED: Argb = Argb::from_channels(255, 0, 0, 255);
    pub const GREEN: Argb = Argb::from_channels(0, 255, 0, 255);
    pub const BLUE: Argb = Argb::from_channels(0, 0, 255, 255);
    pub const GREY: Argb = Argb::from_channels(128, 128, 128, 255);
}

/// A temporary directory that removes itself when dropped
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn root(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Write `grid` as a PNG, keeping alpha.
    pub fn write_png(&self, name: &str, grid: &PixelGrid) -> PathBuf {
        let path = self.path(name);
        let options = OutputConfig {
            preserve_alpha: true,
            ..Default::default()
        };
        image_io::encode(grid, &path, &options).expect("write fixture png");
        path
    }

    pub fn write_text(&self, name: &str, text: &str) -> PathBuf {
        let path = self.path(name);
        fs::write(&path, text).expect("write fixture text");
        path
    }

    /// A valid palette file whose entry `i` is `(i, 255 - i, i / 2)`.
    pub fn write_palette(&self, name: &str) -> PathBuf {
        self.write_text(name, &numbered_palette(CRAYON_PALETTE_SIZE))
    }
}

/// `lines` palette lines, entry `i` is `(i, 255 - i, i / 2)`.
pub fn numbered_palette(lines: usize) -> String {
    (0..lines)
        .map(|i| format!("{},{},{}\n", i, 255 - i, i / 2))
        .collect()
}

/// 10x10 grid: red left half, blue right half, fully opaque.
pub fn split_image() -> PixelGrid {
    let mut grid = PixelGrid::filled(10, 10, colors::RED);
    for y in 0..10 {
        for x in 5..10 {
            grid.set(x, y, colors::BLUE);
        }
    }
    grid
}

/// `width`x`height` fully transparent grid with a green pixel at each corner.
pub fn corner_frame(width: usize, height: usize) -> PixelGrid {
    let mut grid = PixelGrid::filled(width, height, Argb::TRANSPARENT);
    for (x, y) in [
        (0, 0),
        (width - 1, 0),
        (0, height - 1),
        (width - 1, height - 1),
    ] {
        grid.set(x, y, colors::GREEN);
    }
    grid
}
