//! The transform vocabulary.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// One named transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Grayscale,
    /// Crop to the frame's size and overlay it. Needs a frame image.
    AddFrame,
    /// Overlay at the top-left corner. Needs a sticker image.
    AddSticker,
    Cartoonify,
    Negative,
}

impl Operation {
    /// Every operation, in the order the usage line lists them.
    pub const ALL: [Operation; 5] = [
        Operation::Grayscale,
        Operation::AddFrame,
        Operation::AddSticker,
        Operation::Cartoonify,
        Operation::Negative,
    ];

    /// The command-line name.
    pub const fn name(self) -> &'static str {
        match self {
            Operation::Grayscale => "grayscale",
            Operation::AddFrame => "addframe",
            Operation::AddSticker => "addsticker",
            Operation::Cartoonify => "cartoonify",
            Operation::Negative => "negative",
        }
    }

    /// True for the operations that composite a second image.
    pub const fn requires_overlay(self) -> bool {
        matches!(self, Operation::AddFrame | Operation::AddSticker)
    }

    /// True if the operation needs the palette.
    pub const fn requires_palette(self) -> bool {
        matches!(self, Operation::Cartoonify)
    }

    /// `[ grayscale | addframe | addsticker | cartoonify | negative ]`
    pub fn usage() -> String {
        let names: Vec<&str> = Self::ALL.iter().map(|op| op.name()).collect();
        format!("[ {} ]", names.join(" | "))
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a name is not in the operation vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown operation '{0}', expected one of grayscale, addframe, addsticker, cartoonify, negative")]
pub struct ParseOperationError(pub String);

impl FromStr for Operation {
    type Err = ParseOperationError;

    /// Names are matched exactly; `Grayscale` is not `grayscale`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or_else(|| ParseOperationError(s.to_string()))
    }
}

/// Parse a whole list of names, failing on the first unknown one.
///
/// Nothing is applied until every name is known, so a typo late in the list
/// does not leave a half-processed image behind.
///
/// ```
/// use pixel_transform::{parse_operations, Operation};
///
/// let ops = parse_operations(["negative", "grayscale", "negative"]).unwrap();
/// assert_eq!(ops, vec![Operation::Negative, Operation::Grayscale, Operation::Negative]);
///
/// assert!(parse_operations(["grayscale", "sepia"]).is_err());
/// ```
pub fn parse_operations<I, S>(names: I) -> Result<Vec<Operation>, ParseOperationError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names.into_iter().map(|name| name.as_ref().parse()).collect()
}
