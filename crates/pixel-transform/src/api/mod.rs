//! Public API for the pixel-transform crate.
//!
//! This module provides the operation vocabulary ([`Operation`]) and the
//! [`TransformError`] unified error type.

mod error;
mod operation;

pub use error::TransformError;
pub use operation::{parse_operations, Operation, ParseOperationError};
