//! Burrows-Wheeler round-trip and invariant tests.

use oxiblock_bwt::{BwtEncoding, SuffixArray, decode, encode};

#[test]
fn test_roundtrip_classics() {
    for data in [
        b"banana".as_slice(),
        b"mississippi",
        b"abracadabra",
        b"couscous",
        b"the quick brown fox jumps over the lazy dog",
    ] {
        let encoding = encode(data);
        let restored = decode(encoding.pointer, &encoding.last_column).unwrap();
        assert_eq!(restored, data, "round trip failed for {:?}", data);
    }
}

#[test]
fn test_roundtrip_empty() {
    let encoding = encode(b"");
    assert!(encoding.last_column.is_empty());
    assert!(encoding.decode().unwrap().is_empty());
}

#[test]
fn test_roundtrip_single_byte() {
    let encoding = encode(b"Z");
    assert_eq!(encoding.pointer, 0);
    assert_eq!(encoding.last_column, b"Z");
    assert_eq!(encoding.decode().unwrap(), b"Z");
}

#[test]
fn test_roundtrip_binary_data() {
    // Every byte value, scrambled enough to exercise all buckets.
    let mut data = Vec::with_capacity(1024);
    let mut seed = 7u32;
    for _ in 0..1024 {
        seed = seed.wrapping_mul(1103515245).wrapping_add(12345);
        data.push((seed >> 16) as u8);
    }

    let encoding = encode(&data);
    assert_eq!(encoding.decode().unwrap(), data);
}

#[test]
fn test_roundtrip_highly_repetitive() {
    let data = b"ABAB".repeat(64);
    let encoding = encode(&data);
    assert_eq!(encoding.decode().unwrap(), data);

    let data = vec![0u8; 200];
    let encoding = encode(&data);
    assert_eq!(encoding.decode().unwrap(), data);
}

#[test]
fn test_fixed_point_abracadabra() {
    // Reference vector: pointer 3, last column "ARD!RCAAAABB".
    let encoding = encode(b"ABRACADABRA!");
    assert_eq!(encoding.pointer, 3);
    assert_eq!(
        encoding.last_column,
        [0x41, 0x52, 0x44, 0x21, 0x52, 0x43, 0x41, 0x41, 0x41, 0x41, 0x42, 0x42]
    );
    assert_eq!(decode(3, b"ARD!RCAAAABB").unwrap(), b"ABRACADABRA!");
}

#[test]
fn test_suffix_array_permutation_invariant() {
    let data = b"she sells seashells by the seashore";
    let sa = SuffixArray::new(data);

    let mut offsets: Vec<usize> = (0..sa.len()).map(|i| sa.index(i)).collect();
    offsets.sort_unstable();
    let expected: Vec<usize> = (0..data.len()).collect();
    assert_eq!(offsets, expected);
}

#[test]
fn test_wire_format_roundtrip() {
    let data = b"compressible compressible compressible";
    let mut buf = Vec::new();
    encode(data).write_to(&mut buf).unwrap();

    let mut slice = buf.as_slice();
    let encoding = BwtEncoding::read_from(&mut slice).unwrap();
    assert_eq!(encoding.decode().unwrap(), data);
}

#[test]
fn test_malformed_stream_rejected() {
    let mut slice: &[u8] = &[0, 0];
    assert!(BwtEncoding::read_from(&mut slice).is_err());

    // Pointer beyond the column length.
    let mut buf = Vec::new();
    encode(b"banana").write_to(&mut buf).unwrap();
    buf[3] = 6;
    let mut slice = buf.as_slice();
    let encoding = BwtEncoding::read_from(&mut slice).unwrap();
    assert!(encoding.decode().is_err());
}
