use pixel_transform::{Operation, PaletteError, SizeMismatch, TransformError};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Which kind of overlay image a compositing step uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayKind {
    Frame,
    Sticker,
}

impl OverlayKind {
    /// The overlay kind an operation needs, if any.
    pub fn for_operation(op: Operation) -> Option<Self> {
        match op {
            Operation::AddFrame => Some(OverlayKind::Frame),
            Operation::AddSticker => Some(OverlayKind::Sticker),
            _ => None,
        }
    }
}

impl fmt::Display for OverlayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverlayKind::Frame => f.write_str("Frame"),
            OverlayKind::Sticker => f.write_str("Sticker"),
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Image not found: {}", path.display())]
    ImageNotFound { path: PathBuf },

    #[error("Failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to encode {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Unsupported output format: {}", path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("{operation} needs a {} image", kind.to_string().to_lowercase())]
    MissingOverlay {
        operation: Operation,
        kind: OverlayKind,
    },

    #[error("{kind} is too big ({overlay_width}x{overlay_height}, image is {base_width}x{base_height})")]
    OverlayTooLarge {
        kind: OverlayKind,
        overlay_width: usize,
        overlay_height: usize,
        base_width: usize,
        base_height: usize,
    },

    #[error("Palette error: {0}")]
    Palette(#[from] PaletteError),

    #[error(transparent)]
    Transform(#[from] TransformError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    pub(crate) fn overlay_too_large(kind: OverlayKind, err: SizeMismatch) -> Self {
        AppError::OverlayTooLarge {
            kind,
            overlay_width: err.overlay_width,
            overlay_height: err.overlay_height,
            base_width: err.base_width,
            base_height: err.base_height,
        }
    }

    /// True if a file the command needed does not exist.
    pub fn is_not_found(&self) -> bool {
        match self {
            AppError::ImageNotFound { .. } => true,
            AppError::Palette(e) => e.is_not_found(),
            AppError::Transform(e) => e.is_not_found(),
            _ => false,
        }
    }
}
