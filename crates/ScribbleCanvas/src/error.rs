//! # Errors
//!
//! The drawing model itself is total. These errors only come from the two
//! surfaces that take unchecked values from the host: configuration and
//! selection by palette index.

use thiserror::Error;

/// Errors returned by the fallible `scribble_canvas` operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CanvasError {
    /// A configuration value is outside its valid range.
    #[error("invalid config `{field}`: {reason}")]
    InvalidConfig {
        /// Name of the offending field.
        field: &'static str,
        /// Human readable explanation.
        reason: String,
    },
    /// A palette index does not name any palette entry.
    #[error("palette index {index} out of range (palette has {len} entries)")]
    PaletteIndexOutOfRange { index: usize, len: usize },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CanvasError>;
