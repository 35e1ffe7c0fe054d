//! Error types for OxiBlock operations.
//!
//! Malformed input is rejected outright rather than best-effort processed:
//! a bad block pointer or a truncated stream header would otherwise decode
//! to silently corrupt output.

use std::io;
use thiserror::Error;

/// The main error type for OxiBlock operations.
#[derive(Debug, Error)]
pub enum BlockError {
    /// I/O error from underlying reader/writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Stream shorter than its 4-byte pointer header.
    #[error("Truncated stream header: got {got} bytes, need 4")]
    TruncatedHeader {
        /// Number of header bytes actually present.
        got: usize,
    },

    /// Block pointer outside the valid range for the last column.
    #[error("Invalid block pointer: {pointer} not in 0..{len}")]
    InvalidPointer {
        /// The out-of-range pointer value.
        pointer: u32,
        /// Length of the last column.
        len: usize,
    },
}

/// Result type alias for OxiBlock operations.
pub type Result<T> = std::result::Result<T, BlockError>;

impl BlockError {
    /// Create a truncated header error.
    pub fn truncated_header(got: usize) -> Self {
        Self::TruncatedHeader { got }
    }

    /// Create an invalid pointer error.
    pub fn invalid_pointer(pointer: u32, len: usize) -> Self {
        Self::InvalidPointer { pointer, len }
    }
}
