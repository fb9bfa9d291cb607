//! Unified error type for the pixel-transform public API.

use thiserror::Error;

use super::operation::ParseOperationError;
use crate::color::InvalidChannel;
use crate::grid::GridError;
use crate::palette::{PaletteError, ParseColorError};
use crate::transform::SizeMismatch;

/// Every error the crate can produce, for `?` propagation in callers that
/// don't care which step failed.
///
/// # Example
///
/// ```
/// use pixel_transform::{Operation, Palette, TransformError};
///
/// fn setup(op: &str, palette: &str) -> Result<(Operation, Palette), TransformError> {
///     Ok((op.parse()?, Palette::parse_sized(palette, 1)?))
/// }
///
/// assert!(setup("cartoonify", "0,0,0").is_ok());
/// assert!(matches!(setup("blur", "0,0,0"), Err(TransformError::Operation(_))));
/// ```
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("palette error: {0}")]
    Palette(#[from] PaletteError),
    #[error("color parse error: {0}")]
    ParseColor(#[from] ParseColorError),
    #[error("grid error: {0}")]
    Grid(#[from] GridError),
    #[error(transparent)]
    SizeMismatch(#[from] SizeMismatch),
    #[error(transparent)]
    Channel(#[from] InvalidChannel),
    #[error(transparent)]
    Operation(#[from] ParseOperationError),
}

impl TransformError {
    /// True if the error means a resource was missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, TransformError::Palette(err) if err.is_not_found())
    }
}
