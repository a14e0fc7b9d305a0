// Integration tests for the LZ4 block compressor (src/block/compress.rs)
//
//   - compress_bound() worst-case sizing, including the max-input cutoff
//   - compress_block() output always decodes back to the input
//   - Error paths return Err(Lz4Error::OutputTooSmall) / Err(Lz4Error::InputTooLarge)
//   - Block format rules: trailing literals, offsets within the 64 KiB window

use lz4s::block::{
    compress_block, compress_block_to_vec, compress_bound, decompress_block, Lz4Error,
    LZ4_MAX_INPUT_SIZE,
};

fn xorshift_bytes(len: usize, mut seed: u32) -> Vec<u8> {
    (0..len)
        .map(|_| {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            seed as u8
        })
        .collect()
}

fn assert_round_trip(src: &[u8]) {
    let packed = compress_block_to_vec(src);
    let mut out = vec![0u8; src.len()];
    let n = decompress_block(&packed, &mut out).unwrap();
    assert_eq!(n, src.len());
    assert_eq!(out, src);
}

// ─────────────────────────────────────────────────────────────────────────────
// compress_bound
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn bound_grows_with_input() {
    assert!(compress_bound(1) < compress_bound(1000));
    assert_eq!(compress_bound(128 * 1024), 128 * 1024 + 514 + 16);
}

#[test]
fn bound_is_zero_past_max_input() {
    assert_eq!(compress_bound(LZ4_MAX_INPUT_SIZE), LZ4_MAX_INPUT_SIZE + LZ4_MAX_INPUT_SIZE / 255 + 16);
    assert_eq!(compress_bound(LZ4_MAX_INPUT_SIZE + 1), 0);
}

// ─────────────────────────────────────────────────────────────────────────────
// Round trips
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn round_trip_sizes_around_min_length() {
    let base = b"0123456789abcdef0123456789abcdef";
    for len in 0..base.len() {
        assert_round_trip(&base[..len]);
    }
}

#[test]
fn round_trip_text() {
    let text = "It was the best of times, it was the worst of times, ".repeat(300);
    assert_round_trip(text.as_bytes());
}

#[test]
fn round_trip_random() {
    assert_round_trip(&xorshift_bytes(70_000, 0xDEAD_BEEF));
}

#[test]
fn round_trip_long_runs() {
    let mut src = vec![0u8; 100_000];
    src.extend(std::iter::repeat(0xEEu8).take(3_000));
    src.extend(xorshift_bytes(300, 7));
    assert_round_trip(&src);
}

#[test]
fn round_trip_matches_beyond_window_are_not_used() {
    // Two copies of the same random chunk, separated by more than 64 KiB.
    let chunk = xorshift_bytes(1024, 99);
    let mut src = chunk.clone();
    src.extend(xorshift_bytes(70_000, 3));
    src.extend(&chunk);
    assert_round_trip(&src);
}

// ─────────────────────────────────────────────────────────────────────────────
// Format properties
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn last_five_bytes_are_literals() {
    let src = vec![b'a'; 1000];
    let packed = compress_block_to_vec(&src);
    // Final sequence: token with literal count only, then the literals.
    assert_eq!(&packed[packed.len() - 5..], b"aaaaa");
}

#[test]
fn compressed_never_exceeds_bound() {
    for seed in 1..20u32 {
        let src = xorshift_bytes(seed as usize * 997, seed);
        assert!(compress_block_to_vec(&src).len() <= compress_bound(src.len()));
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Errors
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn output_too_small_is_reported() {
    let src = xorshift_bytes(4096, 5);
    let mut dst = vec![0u8; 100];
    assert_eq!(compress_block(&src, &mut dst), Err(Lz4Error::OutputTooSmall));
}

#[test]
fn lz4_error_display() {
    assert!(!Lz4Error::OutputTooSmall.to_string().is_empty());
    assert_ne!(
        Lz4Error::OutputTooSmall.to_string(),
        Lz4Error::InputTooLarge.to_string()
    );
}
