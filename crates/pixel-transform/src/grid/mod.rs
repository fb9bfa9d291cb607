//! The pixel grid every transform operates on.

mod pixel_grid;

pub use pixel_grid::{GridError, PixelGrid};
