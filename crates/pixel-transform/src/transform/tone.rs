//! Per-pixel tone transforms: grayscale and negative.

use rayon::prelude::*;

use crate::color::Argb;
use crate::grid::PixelGrid;

/// Replace every pixel's color channels with their integer mean.
///
/// Each of red, green and blue becomes `(r + g + b) / 3` (truncating
/// division). Alpha is kept. Applying it twice gives the same grid as
/// applying it once.
pub fn grayscale(grid: &mut PixelGrid) {
    grid.pixels_mut()
        .par_iter_mut()
        .for_each(|px| *px = gray_pixel(*px));
}

/// Invert every color channel (`c -> 255 - c`). Alpha is kept.
///
/// Its own inverse.
pub fn negative(grid: &mut PixelGrid) {
    grid.pixels_mut()
        .par_iter_mut()
        .for_each(|px| *px = negative_pixel(*px));
}

#[inline]
fn gray_pixel(px: Argb) -> Argb {
    let [r, g, b] = px.rgb();
    let mean = ((r as u32 + g as u32 + b as u32) / 3) as u8;
    Argb::from_channels(mean, mean, mean, px.alpha())
}

#[inline]
fn negative_pixel(px: Argb) -> Argb {
    let [r, g, b] = px.rgb();
    Argb::from_channels(255 - r, 255 - g, 255 - b, px.alpha())
}
