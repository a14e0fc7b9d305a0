//! The round-trip harness: staging folders, one scratch buffer, and the
//! compress → decompress × N → verify → report cycle for a single file.

use std::ffi::OsString;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use super::config::HarnessConfig;
use super::report::{format_line, header_line, RoundTripMeasurement};
use crate::codec::StreamCodec;
use crate::config::SCRATCH_SIZE;
use crate::displaylevel;
use crate::stream::Lz4sCodec;
use crate::timefn::{clock_span, get_time, timed, wait_for_next_tick};
use crate::util::{display_name, file_len};

/// Drives a [`StreamCodec`] through round trips of files in one source folder.
///
/// Artifacts land in `<source>/<compressed_subfolder>/<name>.<ext>` and
/// `<source>/<output_subfolder>/<name>`; both folders are created on
/// construction. The scratch buffer is allocated once and lent to every codec
/// call.
pub struct Harness<C: StreamCodec = Lz4sCodec, W: Write = io::Stdout> {
    scratch: Box<[u8]>,
    source_folder: PathBuf,
    compressed_folder: PathBuf,
    output_folder: PathBuf,
    codec: C,
    config: HarnessConfig,
    report: W,
}

impl Harness {
    /// LZ4s harness over `source_folder`, reporting to stdout with the
    /// default configuration.
    pub fn new(source_folder: impl AsRef<Path>) -> io::Result<Self> {
        Harness::with_parts(
            source_folder,
            HarnessConfig::default(),
            Lz4sCodec::new(),
            io::stdout(),
        )
    }
}

impl<C: StreamCodec, W: Write> Harness<C, W> {
    /// Build a harness from explicit parts, creating the staging folders if
    /// they are absent.
    ///
    /// Fails with `InvalidInput`, before creating anything, when `config`
    /// does not pass [`HarnessConfig::validate`].
    pub fn with_parts(
        source_folder: impl AsRef<Path>,
        config: HarnessConfig,
        codec: C,
        report: W,
    ) -> io::Result<Self> {
        config.validate()?;
        let source_folder = source_folder.as_ref().to_path_buf();
        let compressed_folder = source_folder.join(&config.compressed_subfolder);
        let output_folder = source_folder.join(&config.output_subfolder);

        for dir in [&compressed_folder, &output_folder] {
            fs::create_dir_all(dir).map_err(|e| {
                io::Error::new(
                    e.kind(),
                    format!("cannot create {}: {}", dir.display(), e),
                )
            })?;
        }
        displaylevel!(
            3,
            "staging into {} and {}\n",
            compressed_folder.display(),
            output_folder.display()
        );

        Ok(Harness {
            scratch: vec![0u8; SCRATCH_SIZE].into_boxed_slice(),
            source_folder,
            compressed_folder,
            output_folder,
            codec,
            config,
            report,
        })
    }

    pub fn source_folder(&self) -> &Path {
        &self.source_folder
    }

    pub fn compressed_folder(&self) -> &Path {
        &self.compressed_folder
    }

    pub fn output_folder(&self) -> &Path {
        &self.output_folder
    }

    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    pub fn scratch_capacity(&self) -> usize {
        self.scratch.len()
    }

    pub fn report(&self) -> &W {
        &self.report
    }

    /// Consumes the harness, returning the report sink.
    pub fn into_report(self) -> W {
        self.report
    }

    /// Write the column header line to the report.
    pub fn write_header(&mut self) -> io::Result<()> {
        writeln!(self.report, "{}", header_line(self.config.size_unit))
    }

    /// Path of the compressed artifact for `file`.
    pub fn compressed_path_for(&self, file: &Path) -> io::Result<PathBuf> {
        let mut name = file_name_of(file)?;
        name.push(".");
        name.push(self.codec.extension());
        Ok(self.compressed_folder.join(name))
    }

    /// Path of the decompressed output for `file`.
    pub fn output_path_for(&self, file: &Path) -> io::Result<PathBuf> {
        Ok(self.output_folder.join(file_name_of(file)?))
    }

    /// Round-trip `file` once through the codec and report the result.
    ///
    /// Compresses once, decompresses `iterations` times (each pass replaces the
    /// previous output) and compares the output with `file`. A mismatch is
    /// reported as a `FAIL` line and returned in the measurement; codec and
    /// I/O failures are returned as errors without a report line.
    pub fn round_trip_file(
        &mut self,
        file: &Path,
        iterations: u32,
    ) -> io::Result<RoundTripMeasurement> {
        if iterations == 0 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "decompress iterations must be at least 1",
            ));
        }
        let compressed_path = self.compressed_path_for(file)?;
        let output_path = self.output_path_for(file)?;
        let name = display_name(file);
        let original_size = file_len(file)?;

        displaylevel!(4, "{}: {} bytes, {} iterations\n", name, original_size, iterations);

        wait_for_next_tick();
        let (compressed, compress_elapsed) =
            timed(|| self.codec.compress(file, &compressed_path, &mut self.scratch));
        compressed?;

        let start = get_time();
        for _ in 0..iterations {
            self.codec
                .decompress(&compressed_path, &output_path, &mut self.scratch)?;
        }
        let decompress_elapsed = clock_span(start);

        let mismatch = self
            .codec
            .verify_bytes_equal(file, &output_path)?
            .mismatch();
        let compressed_size = match mismatch {
            None => Some(file_len(&compressed_path)?),
            Some(_) => None,
        };

        let measurement = RoundTripMeasurement {
            name,
            original_size,
            compressed_size,
            compress_elapsed,
            decompress_elapsed,
            iterations,
            mismatch,
        };
        writeln!(
            self.report,
            "{}",
            format_line(&measurement, self.config.size_unit)
        )?;
        Ok(measurement)
    }
}

fn file_name_of(file: &Path) -> io::Result<OsString> {
    file.file_name().map(|n| n.to_os_string()).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{}: path has no file name", file.display()),
        )
    })
}
