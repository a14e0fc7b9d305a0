// cli/constants.rs: Program identity strings and the display-level global.

use std::sync::atomic::{AtomicU32, Ordering};

// ── String / identity constants ───────────────────────────────────────────────
pub const PROGRAM_NAME: &str = "lz4s-bench";
pub const AUTHOR: &str = "the LZ4s authors";

// ── Display level global ──────────────────────────────────────────────────────
//
// 0 = no diagnostics; 1 = errors only; 2 = normal (default);
// 3 = staging information; 4 = per-file and per-block tracing.
//
// The tabular report is never routed through this level: it is written to the
// harness's report sink unconditionally.
pub const DISPLAY_LEVEL_DEFAULT: u32 = 2;

pub static DISPLAY_LEVEL: AtomicU32 = AtomicU32::new(DISPLAY_LEVEL_DEFAULT);

/// Returns the current display level.
#[inline]
pub fn display_level() -> u32 {
    DISPLAY_LEVEL.load(Ordering::Relaxed)
}

/// Sets the display level.
#[inline]
pub fn set_display_level(level: u32) {
    DISPLAY_LEVEL.store(level, Ordering::Relaxed);
}

/// Applies `-v` / `-q` counts on top of the default level, saturating at 0.
pub fn adjust_display_level(verbose: u8, quiet: u8) -> u32 {
    let base = DISPLAY_LEVEL_DEFAULT + u32::from(verbose);
    base.saturating_sub(u32::from(quiet))
}

// ── Display helpers ───────────────────────────────────────────────────────────

/// Print to stderr unconditionally.
#[macro_export]
macro_rules! display {
    ($($arg:tt)*) => { eprint!($($arg)*) };
}

/// Conditionally print to stderr at or above `level`.
#[macro_export]
macro_rules! displaylevel {
    ($level:expr, $($arg:tt)*) => {
        if $crate::cli::constants::display_level() >= $level {
            eprint!($($arg)*);
        }
    };
}
