//! Benchmark drivers: whole-folder round trips and repeated single-file
//! decompression.
//!
//! Both drivers build one [`Harness`] (one scratch buffer), write the report
//! header once, then hand files to [`Harness::round_trip_file`]:
//!
//! 1. **Batch** ([`batch_round_trip`]): every regular file directly inside a
//!    folder, in file-name order, with [`BATCH_DECOMPRESS_ITERATIONS`]
//!    decompress passes each.
//! 2. **Repeated decompress** ([`repeated_decompress_benchmark`]): one file,
//!    staged beside it, with a caller-chosen number of decompress passes.
//!
//! The `*_with` forms take a [`HarnessConfig`]; [`round_trip_folder`] and
//! [`round_trip_single`] take an already-built harness so any codec and any
//! report sink can be driven.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use super::config::HarnessConfig;
use super::harness::Harness;
use crate::codec::StreamCodec;
use crate::config::BATCH_DECOMPRESS_ITERATIONS;
use crate::displaylevel;
use crate::stream::Lz4sCodec;
use crate::util::list_regular_files;

/// Pass/fail tally for one driver run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub passed: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    fn record(&mut self, passed: bool) {
        if passed {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
    }
}

fn check_iterations(iterations: u32) -> io::Result<()> {
    if iterations == 0 {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "decompress iterations must be at least 1",
        ));
    }
    Ok(())
}

/// Raise scheduling priority to reduce OS-induced jitter in measurements.
///
/// Only active with the `realtime-priority` feature on unix; failure (usually
/// missing privileges) is reported at level 3 and otherwise ignored.
fn raise_priority() {
    #[cfg(all(unix, feature = "realtime-priority"))]
    {
        // SAFETY: setpriority(2) adjusts only the calling process's scheduling
        // priority; it has no memory-safety implications.
        let rc = unsafe { libc::setpriority(libc::PRIO_PROCESS, 0, -20) };
        if rc != 0 {
            displaylevel!(
                3,
                "could not raise priority: {}\n",
                io::Error::last_os_error()
            );
        }
    }
}

/// The folder a file is staged in: its parent, or `.` for a bare file name.
pub fn parent_folder(file: &Path) -> PathBuf {
    match file.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

// ── Harness-level drivers ─────────────────────────────────────────────────────

/// Write the header, then round-trip every regular file directly inside the
/// harness's source folder with `iterations` decompress passes each.
///
/// A FAIL does not stop the batch; an I/O or codec error does.
pub fn round_trip_folder<C: StreamCodec, W: Write>(
    harness: &mut Harness<C, W>,
    iterations: u32,
) -> io::Result<BatchSummary> {
    check_iterations(iterations)?;
    let files = list_regular_files(harness.source_folder())?;
    displaylevel!(3, "{} files in {}\n", files.len(), harness.source_folder().display());

    harness.write_header()?;
    let mut summary = BatchSummary::default();
    for file in &files {
        let m = harness.round_trip_file(file, iterations)?;
        summary.record(m.passed());
    }
    Ok(summary)
}

/// Write the header, then round-trip `file` with `iterations` decompress passes.
pub fn round_trip_single<C: StreamCodec, W: Write>(
    harness: &mut Harness<C, W>,
    file: &Path,
    iterations: u32,
) -> io::Result<BatchSummary> {
    check_iterations(iterations)?;
    harness.write_header()?;
    let mut summary = BatchSummary::default();
    summary.record(harness.round_trip_file(file, iterations)?.passed());
    Ok(summary)
}

// ── Entry points ──────────────────────────────────────────────────────────────

/// Round-trip every file in `folder` through LZ4s, reporting to stdout.
pub fn batch_round_trip(folder: &Path) -> io::Result<BatchSummary> {
    batch_round_trip_with(folder, HarnessConfig::default())
}

/// [`batch_round_trip`] with an explicit configuration.
pub fn batch_round_trip_with(folder: &Path, config: HarnessConfig) -> io::Result<BatchSummary> {
    raise_priority();
    let mut harness = Harness::with_parts(folder, config, Lz4sCodec::new(), io::stdout())?;
    round_trip_folder(&mut harness, BATCH_DECOMPRESS_ITERATIONS)
}

/// Round-trip `file` through LZ4s with `iterations` decompress passes,
/// staging artifacts beside it and reporting to stdout.
pub fn repeated_decompress_benchmark(file: &Path, iterations: u32) -> io::Result<BatchSummary> {
    repeated_decompress_benchmark_with(file, iterations, HarnessConfig::default())
}

/// [`repeated_decompress_benchmark`] with an explicit configuration.
pub fn repeated_decompress_benchmark_with(
    file: &Path,
    iterations: u32,
    config: HarnessConfig,
) -> io::Result<BatchSummary> {
    check_iterations(iterations)?;
    raise_priority();
    let mut harness =
        Harness::with_parts(parent_folder(file), config, Lz4sCodec::new(), io::stdout())?;
    round_trip_single(&mut harness, file, iterations)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
