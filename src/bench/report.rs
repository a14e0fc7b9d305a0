//! Per-file measurement and the tab-separated report format.
//!
//! ```text
//! Pass?  KB       KB/s  =>  KB       Ratio  =>  KB/s  Name
//! PASS   2048.00  4096  =>  1024.00  50%    =>  8192  dickens
//! FAIL 'mozilla: bytes differ at offset 100, expected 0x41 but found 0x42
//! ```
//!
//! Sizes are printed with two decimals and throughputs with none.  A rate
//! whose elapsed time rounds to zero, or a ratio over an empty source, prints
//! as `-`.

use std::time::Duration;

use super::config::SizeUnit;
use crate::codec::Mismatch;

/// Outcome and timings of one round trip.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundTripMeasurement {
    /// Display name (final path component of the source file).
    pub name: String,
    pub original_size: u64,
    /// Artifact size; only read on a passing round trip.
    pub compressed_size: Option<u64>,
    pub compress_elapsed: Duration,
    /// Cumulative time across all decompress iterations.
    pub decompress_elapsed: Duration,
    pub iterations: u32,
    pub mismatch: Option<Mismatch>,
}

impl RoundTripMeasurement {
    pub fn passed(&self) -> bool {
        self.mismatch.is_none()
    }

    /// `1 − compressed / original`, or `None` for an empty source or a
    /// failed round trip.
    pub fn ratio(&self) -> Option<f64> {
        let compressed = self.compressed_size?;
        if self.original_size == 0 {
            return None;
        }
        Some(1.0 - compressed as f64 / self.original_size as f64)
    }

    /// Compression throughput in `unit`s per second.
    pub fn compress_throughput(&self, unit: SizeUnit) -> Option<f64> {
        rate(self.original_size as f64 / unit.bytes(), self.compress_elapsed)
    }

    /// Decompression throughput in `unit`s per second, over all iterations.
    pub fn decompress_throughput(&self, unit: SizeUnit) -> Option<f64> {
        let total = self.iterations as f64 * self.original_size as f64 / unit.bytes();
        rate(total, self.decompress_elapsed)
    }
}

fn rate(amount: f64, elapsed: Duration) -> Option<f64> {
    let secs = elapsed.as_secs_f64();
    if secs > 0.0 {
        Some(amount / secs)
    } else {
        None
    }
}

fn or_dash(v: Option<f64>, precision: usize, suffix: &str) -> String {
    match v {
        Some(v) => format!("{v:.precision$}{suffix}"),
        None => "-".to_owned(),
    }
}

/// The column header line, without a trailing newline.
pub fn header_line(unit: SizeUnit) -> String {
    let u = unit.label();
    format!("Pass?\t{u}\t{u}/s\t=>\t{u}\tRatio\t=>\t{u}/s\tName")
}

/// The report line for `m`, without a trailing newline.
pub fn format_line(m: &RoundTripMeasurement, unit: SizeUnit) -> String {
    if let Some(mismatch) = &m.mismatch {
        return format!("FAIL '{}: {}", m.name, mismatch);
    }
    let bytes = unit.bytes();
    let compressed = m
        .compressed_size
        .map(|c| format!("{:.2}", c as f64 / bytes))
        .unwrap_or_else(|| "-".to_owned());
    format!(
        "PASS\t{:.2}\t{}\t=>\t{}\t{}\t=>\t{}\t{}",
        m.original_size as f64 / bytes,
        or_dash(m.compress_throughput(unit), 0, ""),
        compressed,
        or_dash(m.ratio().map(|r| r * 100.0), 0, "%"),
        or_dash(m.decompress_throughput(unit), 0, ""),
        m.name
    )
}
