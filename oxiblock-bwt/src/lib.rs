//! # OxiBlock-BWT: Pure Rust Burrows-Wheeler Transform
//!
//! The Burrows-Wheeler transform is a reversible permutation of a buffer's
//! bytes based on sorting all of its circular rotations. It tends to group
//! similar bytes together, which makes the output far more compressible for
//! downstream recency and entropy coders.
//!
//! The crate has three parts:
//!
//! - [`SuffixArray`]: the circular suffix sorter (rotations as plain
//!   offsets into the shared buffer; no per-suffix allocation)
//! - [`encode`]: forward transform producing a [`BwtEncoding`]
//! - [`decode`]: linear-time inverse, no re-sorting
//!
//! ## Example
//!
//! ```rust
//! use oxiblock_bwt::{decode, encode};
//!
//! let encoding = encode(b"ABRACADABRA!");
//! assert_eq!(encoding.pointer, 3);
//! assert_eq!(encoding.last_column, b"ARD!RCAAAABB");
//!
//! let original = decode(encoding.pointer, &encoding.last_column).unwrap();
//! assert_eq!(original, b"ABRACADABRA!");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod decode;
mod encode;
/// Circular suffix sorting.
pub mod suffix;

pub use decode::decode;
pub use encode::encode;
pub use suffix::SuffixArray;

use oxiblock_core::Result;
use oxiblock_core::stream;
use std::io::{Read, Write};

/// A Burrows-Wheeler encoding: the sorted position of the unrotated buffer
/// and the last column of the sorted rotation matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BwtEncoding {
    /// Index of the unrotated buffer among the sorted rotations.
    ///
    /// Always in `0..last_column.len()` for non-empty input; carries no
    /// information when the column is empty.
    pub pointer: u32,
    /// Last byte of each sorted rotation, in sorted-rotation order.
    pub last_column: Vec<u8>,
}

impl BwtEncoding {
    /// Reconstruct the original buffer.
    pub fn decode(&self) -> Result<Vec<u8>> {
        decode(self.pointer, &self.last_column)
    }

    /// Serialize as a BWT stream: 32-bit big-endian pointer, then the raw
    /// last column.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        stream::write_stream(writer, self.pointer, &self.last_column)
    }

    /// Deserialize a BWT stream, consuming the reader to its end.
    pub fn read_from<R: Read>(reader: &mut R) -> Result<Self> {
        let (pointer, last_column) = stream::read_stream(reader)?;
        Ok(Self {
            pointer,
            last_column,
        })
    }
}
