// Integration tests for the LZ4 block decompressor (src/block/decompress.rs)
//
// The decoder must reject every malformed input with
// Err(DecompressError::MalformedInput) and never panic or write out of bounds.

use lz4s::block::{compress_block_to_vec, decompress_block, decompress_block_to_vec, DecompressError};

fn sample() -> Vec<u8> {
    "abracadabra, abracadabra, abracadabra! ".repeat(50).into_bytes()
}

#[test]
fn literal_only_block() {
    // token 0x50: five literals, no match.
    let block = [0x50, b'h', b'e', b'l', b'l', b'o'];
    let mut out = [0u8; 5];
    assert_eq!(decompress_block(&block, &mut out), Ok(5));
    assert_eq!(&out, b"hello");
}

#[test]
fn overlapping_match_replicates_pattern() {
    // "ab" then a match of length 8 at offset 2, then 5 trailing literals.
    let block = [0x24, b'a', b'b', 0x02, 0x00, 0x50, b'x', b'x', b'x', b'x', b'x'];
    let mut out = [0u8; 15];
    assert_eq!(decompress_block(&block, &mut out), Ok(15));
    assert_eq!(&out[..10], b"ababababab");
    assert_eq!(&out[10..], b"xxxxx");
}

#[test]
fn zero_offset_is_malformed() {
    let block = [0x10, b'a', 0x00, 0x00, 0x00];
    let mut out = [0u8; 64];
    assert_eq!(decompress_block(&block, &mut out), Err(DecompressError::MalformedInput));
}

#[test]
fn offset_before_start_is_malformed() {
    let block = [0x10, b'a', 0x05, 0x00, 0x00];
    let mut out = [0u8; 64];
    assert_eq!(decompress_block(&block, &mut out), Err(DecompressError::MalformedInput));
}

#[test]
fn output_too_small_is_malformed() {
    let packed = compress_block_to_vec(&sample());
    let mut out = vec![0u8; sample().len() - 1];
    assert_eq!(decompress_block(&packed, &mut out), Err(DecompressError::MalformedInput));
}

#[test]
fn every_truncation_is_rejected_without_panic() {
    let packed = compress_block_to_vec(&sample());
    let mut out = vec![0u8; sample().len()];
    for cut in 0..packed.len() {
        // A truncated block may still parse as a shorter valid block; it must
        // simply never panic or claim more output than it could produce.
        if let Ok(n) = decompress_block(&packed[..cut], &mut out) {
            assert!(n <= out.len());
        }
    }
}

#[test]
fn bit_flips_never_panic() {
    let packed = compress_block_to_vec(&sample());
    let mut out = vec![0u8; sample().len() * 2];
    for i in 0..packed.len() {
        for bit in 0..8 {
            let mut damaged = packed.clone();
            damaged[i] ^= 1 << bit;
            let _ = decompress_block(&damaged, &mut out);
        }
    }
}

#[test]
fn to_vec_helper_returns_empty_on_error() {
    assert!(decompress_block_to_vec(&[0x10, b'a', 0x00, 0x00, 0x00], 64).is_empty());
    assert_eq!(decompress_block_to_vec(&compress_block_to_vec(b"xyz"), 3), b"xyz");
}
