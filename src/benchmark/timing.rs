//! Adaptive repetition timing
//!
//! A single run is timed first. Fast runs are repeated back-to-back until
//! the timed window approaches the target duration, and the per-run average
//! is reported. Slow runs are reported as-is.

use std::time::{Duration, Instant};

/// Repetitions used when the single run was too fast to register
pub const ZERO_DURATION_REPS: usize = 100;
/// Lower bound on repetitions for a sub-target run
pub const MIN_REPS: usize = 5;
/// Upper bound on repetitions for a sub-target run
pub const MAX_REPS: usize = 1000;

/// Outcome of an adaptive timing measurement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timing {
    /// Average duration of one run, in milliseconds
    pub average_ms: f64,
    /// Number of runs the average was taken over
    pub repetitions: usize,
}

/// Repetition count for a single run of `single_ms` whole milliseconds
///
/// Returns 1 when the run already meets the target. Otherwise the count is
/// `target / single + 1` (or [`ZERO_DURATION_REPS`] for a 0 ms run),
/// clamped to `[MIN_REPS, MAX_REPS]`.
pub fn repetitions_for(single_ms: u128, target_ms: u64) -> usize {
    let target = u128::from(target_ms);
    if single_ms >= target {
        return 1;
    }

    let reps = if single_ms == 0 {
        ZERO_DURATION_REPS as u128
    } else {
        target / single_ms + 1
    };
    reps.clamp(MIN_REPS as u128, MAX_REPS as u128) as usize
}

/// Run `f` and measure its wall-clock duration
pub fn measure_time<F, T>(f: F) -> (T, Duration)
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let result = f();
    (result, start.elapsed())
}

/// Milliseconds as a fractional value
pub fn as_millis_f64(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_duration_uses_fixed_count() {
        assert_eq!(repetitions_for(0, 100), 100);
    }

    #[test]
    fn test_count_is_clamped() {
        assert_eq!(repetitions_for(99, 100), MIN_REPS);
        assert_eq!(repetitions_for(40, 100), MIN_REPS);
        assert_eq!(repetitions_for(10, 100), 11);
        assert_eq!(repetitions_for(1, 100), 101);
        assert_eq!(repetitions_for(1, 5000), MAX_REPS);
        assert_eq!(repetitions_for(0, 10), 100);
    }

    #[test]
    fn test_slow_run_is_not_repeated() {
        assert_eq!(repetitions_for(100, 100), 1);
        assert_eq!(repetitions_for(2500, 100), 1);
    }

    #[test]
    fn test_measure_time_returns_result() {
        let (value, elapsed) = measure_time(|| 6 * 7);
        assert_eq!(value, 42);
        assert!(elapsed < Duration::from_secs(5));
    }
}
