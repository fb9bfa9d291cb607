// `palette::palette` mirrors the type it holds
#![allow(clippy::module_inception)]

//! pixel-transform: packed-color image transforms
//!
//! This library operates on [`PixelGrid`]s of packed 32-bit ARGB colors and
//! provides grayscale, negative, binary-alpha compositing and a palette
//! "cartoonify" that snaps every pixel to the nearest of a fixed set of
//! crayon colors.
//!
//! # Quick Start
//!
//! ```
//! use pixel_transform::{transform, Argb, Palette, PixelGrid};
//!
//! let palette = Palette::new(&[Argb::BLACK, Argb::WHITE]).unwrap();
//! let mut grid = PixelGrid::filled(4, 4, Argb::from_channels(200, 190, 180, 255));
//!
//! transform::negative(&mut grid);
//! transform::cartoonify(&mut grid, &palette);
//!
//! // The negative is dark, so every pixel lands on (transparent) black.
//! assert!(grid.pixels().iter().all(|&px| px == Argb::BLACK.with_alpha(0)));
//! ```
//!
//! # Transforms
//!
//! All transforms mutate the grid in place:
//!
//! - [`transform::grayscale`]: integer mean of red, green and blue
//! - [`transform::negative`]: `255 - c` per color channel
//! - [`transform::add_frame`]: center-crop to the frame, then overlay it
//! - [`transform::add_sticker`]: overlay at the top-left corner
//! - [`transform::cartoonify`]: nearest palette color per pixel
//!
//! The compositing transforms check sizes first and return
//! [`SizeMismatch`] without touching the base when the overlay is too big.
//!
//! # Color Distance
//!
//! Palette matching does not compare RGB triples directly. Each color is
//! converted to HSV and projected into a cone:
//!
//! ```text
//! x = sin(h) * s * v
//! y = cos(h) * s * v
//! z = v
//! ```
//!
//! and the distance is the Euclidean distance between the two points. The
//! cone narrows toward black, so dark colors of different hue sit close
//! together while bright saturated colors spread out. Greys all lie on the
//! axis and are separated by value alone. A distance around
//! [`JUST_NOTICEABLE_DISTANCE`] is conventionally the smallest difference a
//! viewer would notice.
//!
//! The hue fed into the projection is the one [`Hsv`] produces, including
//! its collapsed red sextant. See the [`color`] module for details.
//!
//! # Tie-breaking
//!
//! [`Palette::find_nearest`] scans in index order and only moves on a
//! strictly smaller distance. Two entries at the same distance resolve to
//! the lower index, so the same input and palette always produce the same
//! output, with or without parallelism.

pub mod api;
pub mod color;
pub mod grid;
pub mod palette;
pub mod transform;


pub use api::{parse_operations, Operation, ParseOperationError, TransformError};
pub use color::{
    color_distance, decode_channel, Argb, Channel, ConePoint, Hsv, InvalidChannel,
    JUST_NOTICEABLE_DISTANCE,
};
pub use grid::{GridError, PixelGrid};
pub use palette::{Palette, PaletteError, ParseColorError, CRAYON_PALETTE_SIZE};
pub use transform::SizeMismatch;
