// Integration tests for the LZ4s stream format (src/stream/)
//
// Layout: magic, length-prefixed blocks (bit 31 = stored), zero end mark,
// XXH32 content checksum.  Decoding must reject every damaged stream with an
// io::Error rather than producing wrong bytes.

use std::io;

use lz4s::config::{BLOCK_SIZE, SCRATCH_SIZE};
use lz4s::stream::{
    compress_stream, decompress_stream, StreamStats, END_MARK, LZ4S_MAGIC, STORED_FLAG,
};
use lz4s::xxhash::xxh32_oneshot;

fn encode(src: &[u8]) -> (Vec<u8>, StreamStats) {
    let mut scratch = vec![0u8; SCRATCH_SIZE];
    let mut out = Vec::new();
    let stats = compress_stream(&mut &src[..], &mut out, &mut scratch).unwrap();
    (out, stats)
}

fn decode(stream: &[u8]) -> io::Result<Vec<u8>> {
    let mut scratch = vec![0u8; SCRATCH_SIZE];
    let mut out = Vec::new();
    decompress_stream(&mut &stream[..], &mut out, &mut scratch)?;
    Ok(out)
}

fn mixed_content(len: usize) -> Vec<u8> {
    let mut x = 0x9E37_79B9u32;
    (0..len)
        .map(|i| {
            if (i / 4096) % 2 == 0 {
                b"lorem ipsum dolor sit amet "[i % 27]
            } else {
                x ^= x << 13;
                x ^= x >> 17;
                x ^= x << 5;
                x as u8
            }
        })
        .collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// Layout
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn stream_starts_with_magic_and_ends_with_checksum() {
    let src = mixed_content(10_000);
    let (out, _) = encode(&src);
    assert_eq!(u32::from_le_bytes(out[..4].try_into().unwrap()), LZ4S_MAGIC);
    let n = out.len();
    assert_eq!(u32::from_le_bytes(out[n - 8..n - 4].try_into().unwrap()), END_MARK);
    assert_eq!(
        u32::from_le_bytes(out[n - 4..].try_into().unwrap()),
        xxh32_oneshot(&src, 0)
    );
}

#[test]
fn blocks_hold_at_most_block_size() {
    let src = mixed_content(BLOCK_SIZE * 3 + 1);
    let (out, stats) = encode(&src);
    assert_eq!(stats.blocks, 4);

    // Walk the headers and check every stored block is within BLOCK_SIZE.
    let mut pos = 4;
    let mut blocks = 0;
    loop {
        let header = u32::from_le_bytes(out[pos..pos + 4].try_into().unwrap());
        pos += 4;
        if header == END_MARK {
            break;
        }
        let len = (header & !STORED_FLAG) as usize;
        if header & STORED_FLAG != 0 {
            assert!(len <= BLOCK_SIZE);
        }
        pos += len;
        blocks += 1;
    }
    assert_eq!(blocks, 4);
    assert_eq!(pos + 4, out.len());
}

#[test]
fn random_data_is_stored_not_expanded_much() {
    let mut x = 1u32;
    let src: Vec<u8> = (0..BLOCK_SIZE)
        .map(|_| {
            x = x.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            (x >> 16) as u8
        })
        .collect();
    let (out, _) = encode(&src);
    // magic + header + raw block + end mark + checksum
    assert_eq!(out.len(), 4 + 4 + BLOCK_SIZE + 4 + 4);
}

// ─────────────────────────────────────────────────────────────────────────────
// Round trips
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn round_trip_various_lengths() {
    for len in [0, 1, 12, 13, 4095, BLOCK_SIZE - 1, BLOCK_SIZE, BLOCK_SIZE + 1, 3 * BLOCK_SIZE + 7] {
        let src = mixed_content(len);
        let (out, stats) = encode(&src);
        assert_eq!(stats.bytes_read, len as u64);
        assert_eq!(decode(&out).unwrap(), src, "length {len}");
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Damage
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn every_truncation_is_an_error() {
    let (out, _) = encode(&mixed_content(20_000));
    for cut in [0, 3, 4, 7, 8, 100, out.len() / 2, out.len() - 5, out.len() - 1] {
        assert!(decode(&out[..cut]).is_err(), "cut at {cut}");
    }
}

#[test]
fn payload_corruption_is_an_error() {
    let (out, _) = encode(&mixed_content(20_000));
    for i in (8..out.len() - 8).step_by(97) {
        let mut damaged = out.clone();
        damaged[i] ^= 0x20;
        assert!(decode(&damaged).is_err(), "flip at {i}");
    }
}

#[test]
fn wrong_magic_is_invalid_data() {
    let err = decode(b"LZ4\x00\x00\x00\x00\x00\x05\x5D\xCC\x02").unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::InvalidData);
}

#[test]
fn small_scratch_is_rejected() {
    let (out, _) = encode(b"abc");
    let mut scratch = vec![0u8; 1024];
    let err = decompress_stream(&mut &out[..], &mut Vec::<u8>::new(), &mut scratch).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
}
