//! Duration conversions used when reporting execution times.
//!
//! Grids store [`Duration`]s; reports show milliseconds, matching the
//! annotation unit of the heatmaps.

use std::time::Duration;

/// Nanoseconds per millisecond.
pub const NANOS_PER_MILLI: f64 = 1_000_000.0;

/// Converts a duration to fractional milliseconds.
///
/// Divides the integer nanosecond count once, so whole-millisecond durations
/// convert exactly.
#[must_use]
#[inline]
pub fn duration_to_millis(duration: Duration) -> f64 {
    duration.as_nanos() as f64 / NANOS_PER_MILLI
}

/// Formats a duration as milliseconds with two decimals (`"12.34"`).
#[must_use]
pub fn format_millis(duration: Duration) -> String {
    format!("{:.2}", duration_to_millis(duration))
}

/// Ratio of `value` to `max` in `0.0..=1.0`.
///
/// Returns 0.0 when `max` is zero so an all-zero grid renders uniformly.
#[must_use]
pub fn fraction_of(value: Duration, max: Duration) -> f64 {
    if max.is_zero() {
        return 0.0;
    }
    (value.as_secs_f64() / max.as_secs_f64()).clamp(0.0, 1.0)
}
