// config.rs: Compile-time configuration constants.
//
// Runtime knobs (subfolder names, size unit) live in
// `crate::bench::config::HarnessConfig`; the values here are their defaults
// plus the fixed geometry of the LZ4s stream format.

use crate::block::{compress_bound_const, LZ4_HASH_TABLE_BYTES};

pub const KB: usize = 1 << 10;
pub const MB: usize = 1 << 20;

// Uncompressed bytes carried by one LZ4s block.
// A stream is a sequence of independent blocks of at most this size.
pub const BLOCK_SIZE: usize = 128 * KB;

// Capacity of the scratch buffer owned by a harness.
// Layout is `[raw block | compressed block | hash table]`: one raw block, the
// worst-case encoding of that block, and the compressor's match table.
pub const SCRATCH_SIZE: usize =
    BLOCK_SIZE + compress_bound_const(BLOCK_SIZE) + LZ4_HASH_TABLE_BYTES;

// Subfolder (under the source folder) receiving compressed artifacts.
pub const COMPRESSED_SUBFOLDER: &str = "LZ4s";

// Subfolder (under the source folder) receiving decompressed output.
pub const OUTPUT_SUBFOLDER: &str = "Out";

// Suffix appended to the source file name for compressed artifacts.
pub const LZ4S_EXTENSION: &str = "lz4s";

// Decompression passes per file in a batch folder run.
pub const BATCH_DECOMPRESS_ITERATIONS: u32 = 10;

// Decompression passes used by the single-file benchmark when none is given.
pub const DEFAULT_DECOMPRESS_ITERATIONS: u32 = 10;
