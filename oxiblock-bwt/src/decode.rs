//! Inverse Burrows-Wheeler transform.
//!
//! Reconstructs the original buffer from a block pointer and last column in
//! linear time, without re-sorting any suffixes: the first column of the
//! sorted rotation matrix is just the last column's bytes in ascending
//! order, and the k-th occurrence of a byte in the first column corresponds
//! to its k-th occurrence in the last column (cyclic rotation preserves
//! relative order among equal bytes). Chasing that mapping from the pointer
//! replays the original buffer.

use crate::suffix::RADIX;
use oxiblock_core::{BlockError, Result};

/// Invert the Burrows-Wheeler transform.
///
/// Fails with [`BlockError::InvalidPointer`] when `pointer` is outside
/// `0..last_column.len()` for a non-empty column; a bad pointer would
/// otherwise decode to silently wrong output.
pub fn decode(pointer: u32, last_column: &[u8]) -> Result<Vec<u8>> {
    let n = last_column.len();
    if n == 0 {
        return Ok(Vec::new());
    }
    if pointer as usize >= n {
        return Err(BlockError::invalid_pointer(pointer, n));
    }

    // Per-byte occurrence counts.
    let mut counts = [0usize; RADIX];
    for &byte in last_column {
        counts[byte as usize] += 1;
    }

    // First column: byte values ascending, with bucket multiplicities.
    // `starts[b]` is the first column row where value b begins.
    let mut starts = [0usize; RADIX];
    let mut first_column = Vec::with_capacity(n);
    let mut total = 0;
    for (value, &count) in counts.iter().enumerate() {
        starts[value] = total;
        total += count;
        for _ in 0..count {
            first_column.push(value as u8);
        }
    }

    // Last-to-first mapping. Scanning the last column left to right hands
    // each byte's occurrences to its first-column bucket in order, which is
    // exactly the FIFO discipline the inversion invariant requires.
    let mut next = vec![0usize; n];
    for (i, &byte) in last_column.iter().enumerate() {
        let slot = &mut starts[byte as usize];
        next[*slot] = i;
        *slot += 1;
    }

    // Walk the cycle starting at the row holding the unrotated buffer.
    let mut output = Vec::with_capacity(n);
    let mut curr = pointer as usize;
    for _ in 0..n {
        output.push(first_column[curr]);
        curr = next[curr];
    }

    Ok(output)
}
