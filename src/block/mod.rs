//! LZ4 block format: one-shot compression and decompression of a single
//! independent block.
//!
//! The streaming layer ([`crate::stream`]) cuts files into blocks of at most
//! [`crate::config::BLOCK_SIZE`] bytes and hands each one to these functions.

pub mod types;
pub mod compress;
pub mod decompress;

pub use compress::{
    compress_block, compress_block_with_table, compress_bound, compress_bound_const, Lz4Error,
    LZ4_MAX_INPUT_SIZE,
};
pub use types::LZ4_HASH_TABLE_BYTES;
pub use decompress::{decompress_block, DecompressError};

/// Compress `src` into a freshly allocated, exactly sized `Vec`.
///
/// Returns an empty `Vec` if `src` exceeds [`LZ4_MAX_INPUT_SIZE`].
pub fn compress_block_to_vec(src: &[u8]) -> Vec<u8> {
    let mut dst = vec![0u8; compress_bound(src.len())];
    match compress_block(src, &mut dst) {
        Ok(n) => {
            dst.truncate(n);
            dst
        }
        Err(_) => Vec::new(),
    }
}

/// Decompress `src` into a `Vec` of at most `max_output` bytes.
///
/// Returns an empty `Vec` if the block is malformed.
pub fn decompress_block_to_vec(src: &[u8], max_output: usize) -> Vec<u8> {
    let mut dst = vec![0u8; max_output];
    match decompress_block(src, &mut dst) {
        Ok(n) => {
            dst.truncate(n);
            dst
        }
        Err(_) => Vec::new(),
    }
}
