// Integration tests for display-level handling (src/cli/constants.rs)

use lz4s::cli::constants::{
    adjust_display_level, display_level, set_display_level, DISPLAY_LEVEL_DEFAULT, PROGRAM_NAME,
};

#[test]
fn default_level_is_two() {
    assert_eq!(DISPLAY_LEVEL_DEFAULT, 2);
}

#[test]
fn verbose_and_quiet_offset_each_other() {
    assert_eq!(adjust_display_level(2, 2), DISPLAY_LEVEL_DEFAULT);
    assert_eq!(adjust_display_level(2, 0), 4);
    assert_eq!(adjust_display_level(0, 9), 0);
}

#[test]
fn macros_respect_level() {
    let prev = display_level();
    set_display_level(0);
    // Must not print; only checks that the macro expands from outside the crate.
    lz4s::displaylevel!(1, "{} hidden\n", PROGRAM_NAME);
    set_display_level(prev);
}
