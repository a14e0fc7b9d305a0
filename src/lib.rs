// lz4s-bench: round-trip correctness and throughput harness for LZ4s

pub mod cli;
pub mod config;
pub mod timefn;
pub mod util;
pub mod xxhash;
pub mod block;
pub mod codec;
pub mod stream;
pub mod bench;

// ── Version ───────────────────────────────────────────────────────────────────
pub const LZ4S_VERSION_STRING: &str = env!("CARGO_PKG_VERSION");

/// Returns the runtime version string.
pub fn version_string() -> &'static str {
    LZ4S_VERSION_STRING
}

// ── Top-level re-exports ──────────────────────────────────────────────────────
pub use bench::harness::Harness;
pub use bench::report::RoundTripMeasurement;
pub use bench::runner::{batch_round_trip, repeated_decompress_benchmark, round_trip_folder};
pub use block::{compress_block, compress_bound, decompress_block, DecompressError, Lz4Error};
pub use codec::{Mismatch, StreamCodec, Verification};
pub use stream::Lz4sCodec;
