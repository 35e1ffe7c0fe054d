//! Byte-exact framing for the BWT wire format.
//!
//! A BWT stream is a 32-bit big-endian block pointer followed by the raw
//! last-column bytes. The column length is implicit: it is whatever remains
//! after the header. A stream with a header and no trailing bytes encodes
//! the empty buffer, and so does a fully empty stream; in both cases the
//! pointer carries no information and readers ignore it.

use crate::error::{BlockError, Result};
use std::io::{Read, Write};

/// Size of the block pointer header in bytes.
pub const HEADER_LEN: usize = 4;

/// Write a BWT stream: big-endian pointer header, then the last column.
///
/// The header is always emitted, even for an empty column.
pub fn write_stream<W: Write>(writer: &mut W, pointer: u32, last_column: &[u8]) -> Result<()> {
    writer.write_all(&pointer.to_be_bytes())?;
    writer.write_all(last_column)?;
    Ok(())
}

/// Read a BWT stream to its end, returning the pointer and the last column.
///
/// An empty stream decodes to the empty buffer with pointer 0. A stream of
/// 1 to 3 bytes cannot hold the pointer header and is rejected.
pub fn read_stream<R: Read>(reader: &mut R) -> Result<(u32, Vec<u8>)> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;

    if data.is_empty() {
        return Ok((0, Vec::new()));
    }
    if data.len() < HEADER_LEN {
        return Err(BlockError::truncated_header(data.len()));
    }

    let pointer = u32::from_be_bytes([data[0], data[1], data[2], data[3]]);
    data.drain(..HEADER_LEN);
    Ok((pointer, data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_roundtrip() {
        let mut buf = Vec::new();
        write_stream(&mut buf, 3, b"ARD!RCAAAABB").unwrap();
        assert_eq!(&buf[..HEADER_LEN], &[0, 0, 0, 3]);

        let (pointer, column) = read_stream(&mut Cursor::new(buf)).unwrap();
        assert_eq!(pointer, 3);
        assert_eq!(column, b"ARD!RCAAAABB");
    }

    #[test]
    fn test_header_is_big_endian() {
        let mut buf = Vec::new();
        write_stream(&mut buf, 0x0102_0304, b"x").unwrap();
        assert_eq!(buf, [1, 2, 3, 4, b'x']);
    }

    #[test]
    fn test_empty_stream_is_empty_buffer() {
        let (pointer, column) = read_stream(&mut Cursor::new(Vec::new())).unwrap();
        assert_eq!(pointer, 0);
        assert!(column.is_empty());
    }

    #[test]
    fn test_header_only_is_empty_buffer() {
        let mut buf = Vec::new();
        write_stream(&mut buf, 0, b"").unwrap();
        assert_eq!(buf.len(), HEADER_LEN);

        let (_, column) = read_stream(&mut Cursor::new(buf)).unwrap();
        assert!(column.is_empty());
    }

    #[test]
    fn test_truncated_header_rejected() {
        for len in 1..HEADER_LEN {
            let err = read_stream(&mut Cursor::new(vec![0u8; len])).unwrap_err();
            assert!(matches!(err, BlockError::TruncatedHeader { got } if got == len));
        }
    }
}
