// timefn - high-resolution monotonic timer used by the round-trip harness
//
// std::time::Instant is monotonic on every supported platform, so elapsed
// times are immune to wall-clock adjustments during a run.

use std::time::{Duration, Instant};

/// Opaque timestamp container. The absolute value is not meaningful;
/// use it only to compute a duration between two measurements.
#[derive(Clone, Copy, Debug)]
pub struct TimeT {
    pub(crate) t: Instant,
}

/// Returns the current monotonic timestamp.
pub fn get_time() -> TimeT {
    TimeT { t: Instant::now() }
}

/// Returns the duration between `clock_start` and `clock_end`.
///
/// Saturates to zero if `clock_end` precedes `clock_start`.
fn span(clock_start: TimeT, clock_end: TimeT) -> Duration {
    clock_end.t.saturating_duration_since(clock_start.t)
}

/// Measures the time elapsed since `clock_start`.
pub fn clock_span(clock_start: TimeT) -> Duration {
    clock_start.t.elapsed()
}

/// Runs `f` once and returns its result together with the time it took.
pub fn timed<T, F>(f: F) -> (T, Duration)
where
    F: FnOnce() -> T,
{
    let start = get_time();
    let out = f();
    (out, clock_span(start))
}

/// Busy-waits until the clock advances.
/// Used before a measured section to synchronize with a clock tick.
pub fn wait_for_next_tick() {
    let clock_start = get_time();
    while span(clock_start, get_time()).is_zero() {}
}
