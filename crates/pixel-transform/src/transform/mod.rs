//! In-place transforms over a [`PixelGrid`](crate::grid::PixelGrid).
//!
//! Every function here fully scans and mutates the grid before returning.
//! The per-pixel transforms (grayscale, negative, cartoonify) run over
//! disjoint pixel ranges in parallel; each pixel is written by exactly one
//! worker.

mod cluster;
mod composite;
mod tone;

pub use cluster::cartoonify;
pub use composite::{add_frame, add_sticker, fits, frame_offset, overlay, SizeMismatch};
pub use tone::{grayscale, negative};
