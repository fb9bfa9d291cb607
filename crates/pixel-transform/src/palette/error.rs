//! Error types for palette operations
//!
//! [`ParseColorError`] describes a single bad `R,G,B` entry;
//! [`PaletteError`] covers loading and validating a whole palette.

use std::io;
use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

/// Error type for parsing one `R,G,B` palette entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    /// The entry did not split into exactly three comma-separated fields
    #[error("expected 3 comma-separated components, found {found}")]
    ComponentCount {
        /// Number of fields actually present
        found: usize,
    },
    /// A field is not a decimal integer in `0..=255`
    #[error("invalid {component} component {text:?}: {source}")]
    InvalidComponent {
        /// Which channel the field was meant for
        component: &'static str,
        /// The offending text, trimmed
        text: String,
        #[source]
        source: ParseIntError,
    },
}

/// Error type for palette loading and validation.
#[derive(Debug, Error)]
pub enum PaletteError {
    /// The palette resource does not exist
    #[error("palette not found: {}", path.display())]
    NotFound {
        /// Location that was tried
        path: PathBuf,
    },
    /// The palette resource exists but could not be read
    #[error("failed to read palette {}: {source}", path.display())]
    Io {
        /// Location that was tried
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// No colors provided
    #[error("palette cannot be empty")]
    Empty,
    /// The resource ended before the expected number of entries
    #[error("palette has {found} entries, expected {expected}")]
    TooFewEntries {
        /// Number of entries required
        expected: usize,
        /// Number of lines actually present
        found: usize,
    },
    /// An entry could not be parsed
    #[error("invalid palette entry on line {line}: {source}")]
    InvalidEntry {
        /// 1-based line number
        line: usize,
        #[source]
        source: ParseColorError,
    },
}

impl PaletteError {
    /// True for the "resource is missing" family.
    pub fn is_not_found(&self) -> bool {
        matches!(self, PaletteError::NotFound { .. })
    }

    /// True for the "resource is malformed" family.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            PaletteError::TooFewEntries { .. } | PaletteError::InvalidEntry { .. }
        )
    }
}
