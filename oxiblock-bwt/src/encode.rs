//! Forward Burrows-Wheeler transform.

use crate::BwtEncoding;
use crate::suffix::SuffixArray;

/// Apply the Burrows-Wheeler transform.
///
/// The last column holds, for each sorted rotation, the byte that precedes
/// the rotation start in the original buffer: `data[(order[i] + n - 1) % n]`.
/// That groups bytes by the context that follows them, which is what makes
/// the output highly compressible after a move-to-front pass. The pointer is
/// the position of the unrotated buffer in sorted order.
///
/// Empty input yields an empty last column; the pointer is then meaningless
/// and readers ignore it.
pub fn encode(data: &[u8]) -> BwtEncoding {
    if data.is_empty() {
        return BwtEncoding {
            pointer: 0,
            last_column: Vec::new(),
        };
    }

    let n = data.len();
    let suffixes = SuffixArray::new(data);

    let mut pointer = 0u32;
    let mut last_column = Vec::with_capacity(n);
    for i in 0..n {
        let offset = suffixes.index(i);
        if offset == 0 {
            pointer = i as u32;
        }
        last_column.push(data[(offset + n - 1) % n]);
    }

    BwtEncoding {
        pointer,
        last_column,
    }
}
