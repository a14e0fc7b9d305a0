//! Round-trip benchmarking for lz4s.
//!
//! - [`harness::Harness`]: staging folders, scratch buffer, and the
//!   per-file compress → decompress × N → verify cycle.
//! - [`report`]: [`RoundTripMeasurement`] and the tab-separated report
//!   lines.
//! - [`runner`]: the batch and repeated-decompress drivers.
//!
//! [`config::HarnessConfig`] controls staging-folder names and the size unit.

pub mod config;
pub mod report;
pub mod harness;
pub mod runner;

// Re-export public types so callers can use `bench::HarnessConfig` directly.
pub use config::{HarnessConfig, SizeUnit};
pub use harness::Harness;
pub use report::RoundTripMeasurement;
pub use runner::{
    batch_round_trip, batch_round_trip_with, repeated_decompress_benchmark,
    repeated_decompress_benchmark_with, round_trip_folder, round_trip_single, BatchSummary,
};
