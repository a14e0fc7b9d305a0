//! Command-line arguments for the `lz4s-bench` binary.
//!
//! Two subcommands map onto the two benchmark drivers:
//!
//! - `folder <DIR>` → [`crate::bench::runner::batch_round_trip`]
//! - `decompress <FILE> [-n N]` → [`crate::bench::runner::repeated_decompress_benchmark`]
//!
//! Verbosity flags only affect stderr diagnostics; the report on stdout is
//! always printed.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::bench::config::SizeUnit;
use crate::config::DEFAULT_DECOMPRESS_ITERATIONS;

/// Round-trip every file through the LZ4s codec and report throughput and ratio.
#[derive(Debug, Parser)]
#[command(name = "lz4s-bench", version, about)]
pub struct CliArgs {
    /// Increase diagnostic verbosity (repeatable).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Decrease diagnostic verbosity (repeatable).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Size unit used for every size and throughput column.
    #[arg(long, value_enum, default_value_t = SizeUnit::Kilobyte, global = true)]
    pub unit: SizeUnit,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Round-trip every regular file directly inside DIR (10 decompression passes each).
    Folder {
        /// Folder holding the source files; `LZ4s/` and `Out/` are created inside it.
        dir: PathBuf,
    },
    /// Round-trip a single file, repeating the decompression step.
    Decompress {
        /// Source file; artifacts are staged next to it.
        file: PathBuf,

        /// Number of decompression passes (at least 1).
        #[arg(
            short = 'n',
            long,
            default_value_t = DEFAULT_DECOMPRESS_ITERATIONS,
            value_parser = clap::value_parser!(u32).range(1..)
        )]
        iterations: u32,
    },
}
