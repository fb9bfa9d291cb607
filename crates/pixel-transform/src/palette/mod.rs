//! Palette types and utilities
//!
//! This module provides the [`Palette`] type with its nearest-color search,
//! the `R,G,B` text parser, and the error types for both.

mod error;
mod palette;

pub use error::{PaletteError, ParseColorError};
pub use palette::{Palette, CRAYON_PALETTE_SIZE};
