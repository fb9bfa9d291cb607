//! Binary-alpha compositing: overlays, frames and stickers.
//!
//! An overlay pixel either replaces the base pixel (alpha != 0) or leaves it
//! alone (alpha == 0). There is no blending.

use thiserror::Error;

use crate::grid::PixelGrid;

/// The overlay is larger than the base in at least one dimension.
///
/// Returned before any pixel is written, so the base is unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("overlay is {overlay_width}x{overlay_height}, larger than {base_width}x{base_height} base")]
pub struct SizeMismatch {
    pub overlay_width: usize,
    pub overlay_height: usize,
    pub base_width: usize,
    pub base_height: usize,
}

impl SizeMismatch {
    fn between(base: &PixelGrid, overlay: &PixelGrid) -> Self {
        Self {
            overlay_width: overlay.width(),
            overlay_height: overlay.height(),
            base_width: base.width(),
            base_height: base.height(),
        }
    }
}

/// Check that `overlay` fits inside `base`.
///
/// # Errors
///
/// Returns [`SizeMismatch`] if the overlay is wider or taller than the base.
pub fn fits(base: &PixelGrid, overlay: &PixelGrid) -> Result<(), SizeMismatch> {
    if base.contains(overlay) {
        Ok(())
    } else {
        Err(SizeMismatch::between(base, overlay))
    }
}

/// Copy every non-transparent overlay pixel onto the base at the same
/// coordinates, starting at the base's top-left corner.
///
/// Callers are expected to check [`fits`] first. Any part of the overlay
/// that falls outside the base is skipped.
pub fn overlay(base: &mut PixelGrid, overlay: &PixelGrid) {
    let width = overlay.width().min(base.width());
    let height = overlay.height().min(base.height());

    for y in 0..height {
        for x in 0..width {
            let px = overlay.get(x, y);
            if !px.is_transparent() {
                base.set(x, y, px);
            }
        }
    }
}

/// Top-left corner of a `frame_width`x`frame_height` region centered in a
/// `base_width`x`base_height` grid. Odd margins round toward the top-left.
///
/// ```
/// use pixel_transform::transform::frame_offset;
///
/// assert_eq!(frame_offset((100, 100), (60, 40)), (20, 30));
/// assert_eq!(frame_offset((5, 5), (2, 2)), (1, 1));
/// ```
#[inline]
pub fn frame_offset(base: (usize, usize), frame: (usize, usize)) -> (usize, usize) {
    (
        base.0.saturating_sub(frame.0) / 2,
        base.1.saturating_sub(frame.1) / 2,
    )
}

/// Crop the base to the centered region the size of `frame`, then overlay
/// the frame onto it.
///
/// On success `base` is replaced by the cropped, framed grid and has the
/// frame's dimensions.
///
/// # Errors
///
/// Returns [`SizeMismatch`] if the frame is larger than the base. The base
/// is left untouched.
pub fn add_frame(base: &mut PixelGrid, frame: &PixelGrid) -> Result<(), SizeMismatch> {
    fits(base, frame)?;

    let (x, y) = frame_offset(base.dimensions(), frame.dimensions());
    let mut cropped = base
        .crop(x, y, frame.width(), frame.height())
        .map_err(|_| SizeMismatch::between(base, frame))?;
    overlay(&mut cropped, frame);
    *base = cropped;
    Ok(())
}

/// Overlay the sticker onto the base's top-left corner without cropping.
///
/// # Errors
///
/// Returns [`SizeMismatch`] if the sticker is larger than the base. The base
/// is left untouched.
pub fn add_sticker(base: &mut PixelGrid, sticker: &PixelGrid) -> Result<(), SizeMismatch> {
    fits(base, sticker)?;
    overlay(base, sticker);
    Ok(())
}
