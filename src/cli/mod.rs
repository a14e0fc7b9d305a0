//! Command-line interface for the `lz4s-bench` binary.
//!
//! | Submodule     | Responsibility |
//! |---------------|---------------|
//! | [`constants`] | Program identity strings and the shared `DISPLAY_LEVEL` atomic with its macros. |
//! | [`args`]      | `CliArgs`: clap-derived options and subcommands. |

pub mod constants;
pub mod args;
