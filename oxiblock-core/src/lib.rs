//! # OxiBlock Core
//!
//! Core components for the OxiBlock transform toolkit.
//!
//! This crate provides the pieces shared by the transform crates:
//!
//! - [`error`]: Error types
//! - [`stream`]: Byte-exact framing for the BWT wire format
//!
//! ## Example
//!
//! ```rust
//! use oxiblock_core::stream::{read_stream, write_stream};
//! use std::io::Cursor;
//!
//! let mut buf = Vec::new();
//! write_stream(&mut buf, 3, b"ARD!RCAAAABB").unwrap();
//!
//! let (pointer, column) = read_stream(&mut Cursor::new(buf)).unwrap();
//! assert_eq!(pointer, 3);
//! assert_eq!(column, b"ARD!RCAAAABB");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod error;
pub mod stream;

// Re-exports for convenience
pub use error::{BlockError, Result};
