//! Palette clustering ("cartoonify").

use rayon::prelude::*;

use crate::grid::PixelGrid;
use crate::palette::Palette;

/// Replace every pixel with its nearest palette color.
///
/// Nearness is the HSV cone distance; ties go to the lower palette index
/// (see [`Palette::find_nearest`]). The replacement is the palette color
/// verbatim, so the written pixel carries the palette's alpha (0 for a
/// loaded crayon palette).
///
/// Runs in `O(width * height * palette.len())`. The result depends only on
/// the input pixels and the palette, never on thread scheduling.
pub fn cartoonify(grid: &mut PixelGrid, palette: &Palette) {
    grid.pixels_mut()
        .par_iter_mut()
        .for_each(|px| *px = palette.nearest_color(*px));
}
