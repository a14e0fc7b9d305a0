//! Harness configuration: runtime parameters for a round-trip session.
//!
//! [`HarnessConfig`] holds the staging-folder names and the size unit used in
//! the report. Its builder-style setters let callers adjust a configuration
//! before handing it to [`super::harness::Harness::with_parts`].
//!
//! The defaults mirror the compile-time constants in [`crate::config`].
//! Setters accept any string; [`HarnessConfig::validate`] is where folder
//! names are checked, and the harness runs it before touching the disk.

use std::io;
use std::path::{Component, Path};

use crate::config::{COMPRESSED_SUBFOLDER, KB, MB, OUTPUT_SUBFOLDER};

// ── SizeUnit ─────────────────────────────────────────────────────────────────

/// Unit in which sizes and throughputs are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SizeUnit {
    /// 1024 bytes, labelled `KB`.
    #[default]
    #[value(name = "kb")]
    Kilobyte,
    /// 1024 × 1024 bytes, labelled `MB`.
    #[value(name = "mb")]
    Megabyte,
}

impl SizeUnit {
    /// Column label used in the report header.
    pub fn label(self) -> &'static str {
        match self {
            SizeUnit::Kilobyte => "KB",
            SizeUnit::Megabyte => "MB",
        }
    }

    /// Number of bytes in one unit.
    pub fn bytes(self) -> f64 {
        match self {
            SizeUnit::Kilobyte => KB as f64,
            SizeUnit::Megabyte => MB as f64,
        }
    }
}

// ── HarnessConfig ────────────────────────────────────────────────────────────

/// Runtime parameters for one [`super::harness::Harness`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Folder (relative to the source folder) receiving compressed artifacts.
    pub compressed_subfolder: String,
    /// Folder (relative to the source folder) receiving decompressed output.
    pub output_subfolder: String,
    /// Unit for sizes and throughputs in the report.
    pub size_unit: SizeUnit,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        HarnessConfig {
            compressed_subfolder: COMPRESSED_SUBFOLDER.to_owned(),
            output_subfolder: OUTPUT_SUBFOLDER.to_owned(),
            size_unit: SizeUnit::default(),
        }
    }
}

impl HarnessConfig {
    // ── Setters ───────────────────────────────────────────────────────────────

    pub fn set_compressed_subfolder(&mut self, name: impl Into<String>) -> &mut Self {
        self.compressed_subfolder = name.into();
        self
    }

    pub fn set_output_subfolder(&mut self, name: impl Into<String>) -> &mut Self {
        self.output_subfolder = name.into();
        self
    }

    /// Set the unit used for sizes (`KB` by default) and throughputs (`KB/s`).
    pub fn set_size_unit(&mut self, unit: SizeUnit) -> &mut Self {
        self.size_unit = unit;
        self
    }

    // ── Validation ───────────────────────────────────────────────────────────

    /// Check that each subfolder is a single plain folder name and that the
    /// two differ, so staged files can never resolve to a source file or
    /// leave the source folder.
    pub fn validate(&self) -> io::Result<()> {
        check_subfolder("compressed", &self.compressed_subfolder)?;
        check_subfolder("output", &self.output_subfolder)?;
        if Path::new(&self.compressed_subfolder) == Path::new(&self.output_subfolder) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!(
                    "compressed and output subfolders must differ (both {:?})",
                    self.compressed_subfolder
                ),
            ));
        }
        Ok(())
    }
}

fn check_subfolder(role: &str, name: &str) -> io::Result<()> {
    let mut parts = Path::new(name).components();
    match (parts.next(), parts.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{role} subfolder {name:?} is not a single folder name"),
        )),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
