//! Thin wrapper around the `xxhash-rust` crate providing the XXH32 API used
//! for LZ4s content checksums.

pub use xxhash_rust::xxh32::Xxh32 as Xxh32State;

/// Seed used for every LZ4s content checksum.
pub const LZ4S_CHECKSUM_SEED: u32 = 0;

/// One-shot XXH32 hash.
///
/// * `xxh32_oneshot(b"", 0)` == `0x02CC5D05`
#[inline]
pub fn xxh32_oneshot(data: &[u8], seed: u32) -> u32 {
    xxhash_rust::xxh32::xxh32(data, seed)
}

/// Fresh streaming state seeded for LZ4s content checksums.
#[inline]
pub fn content_hasher() -> Xxh32State {
    Xxh32State::new(LZ4S_CHECKSUM_SEED)
}
