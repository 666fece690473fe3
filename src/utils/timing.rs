//! Timing helpers for query measurements.
//!
//! Query times are reported in milliseconds with two decimal places.

use std::time::{Duration, Instant};

/// Rounds a millisecond value to two decimal places.
pub fn round_ms(ms: f64) -> f64 {
    (ms * 100.0).round() / 100.0
}

/// Converts a duration to milliseconds, rounded to two decimal places.
pub fn duration_to_ms(duration: Duration) -> f64 {
    round_ms(duration.as_secs_f64() * 1000.0)
}

/// Milliseconds elapsed since `start`, rounded to two decimal places.
pub fn elapsed_ms(start: Instant) -> f64 {
    duration_to_ms(start.elapsed())
}
