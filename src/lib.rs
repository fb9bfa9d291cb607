//! imagemanip - packed-color image transforms from the command line
//!
//! This library exposes modules for integration testing.

pub mod assets;
pub mod error;
pub mod models;
pub mod services;
