//! Binary entry point for `lz4s-bench`.
//!
//! 1. Parse arguments with clap ([`CliArgs`]).
//! 2. Apply `-v` / `-q` to the global display level.
//! 3. Dispatch to the batch or repeated-decompress driver.
//!
//! Exit status: 0 when every file passed, 3 when any FAIL line was printed,
//! 1 on an I/O or codec error. clap exits with 2 on a usage error.

use anyhow::Context;
use clap::Parser;

use lz4s::bench::{
    batch_round_trip_with, repeated_decompress_benchmark_with, BatchSummary, HarnessConfig,
};
use lz4s::cli::args::{CliArgs, Command};
use lz4s::cli::constants::{adjust_display_level, set_display_level, AUTHOR, PROGRAM_NAME};

const EXIT_FAILED_VERIFICATION: i32 = 3;

fn run(args: CliArgs) -> anyhow::Result<BatchSummary> {
    let mut config = HarnessConfig::default();
    config.set_size_unit(args.unit);

    match args.command {
        Command::Folder { dir } => batch_round_trip_with(&dir, config)
            .with_context(|| format!("round trip of folder {} failed", dir.display())),
        Command::Decompress { file, iterations } => {
            repeated_decompress_benchmark_with(&file, iterations, config)
                .with_context(|| format!("decompress benchmark of {} failed", file.display()))
        }
    }
}

fn main() {
    let args = CliArgs::parse();
    set_display_level(adjust_display_level(args.verbose, args.quiet));

    lz4s::displaylevel!(
        3,
        "*** {} v{} {}-bit, by {} ***\n",
        PROGRAM_NAME,
        lz4s::version_string(),
        usize::BITS,
        AUTHOR
    );

    match run(args) {
        Ok(summary) if summary.all_passed() => {
            lz4s::displaylevel!(3, "{} files passed\n", summary.passed);
        }
        Ok(summary) => {
            lz4s::displaylevel!(
                2,
                "{} of {} files failed verification\n",
                summary.failed,
                summary.passed + summary.failed
            );
            std::process::exit(EXIT_FAILED_VERIFICATION);
        }
        Err(e) => {
            lz4s::display!("{PROGRAM_NAME}: {e:#}\n");
            std::process::exit(1);
        }
    }
}
