//! Types shared by every module of the crate.
//!
//! Currently this is the error taxonomy and the crate-wide `Result` alias.

/// Error types for validation, lookup, and loading failures.
pub mod error;

pub use error::{Error, Result};
