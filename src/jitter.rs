//! Additive jitter for backoff intervals.

use std::time::Duration;

use rand::Rng;

/// Adds a random amount of extra delay between zero (inclusive) and `jitter`
/// (exclusive) to `duration`.
///
/// Jitter is only ever added, never subtracted, so the result is always
/// `>= duration` and below `duration + jitter`. A zero `jitter` adds exactly
/// nothing and consumes no entropy.
pub fn add_jitter(duration: Duration, jitter: Duration) -> Duration {
    add_jitter_with_rng(duration, jitter, &mut rand::rng())
}

/// Same as [`add_jitter`], drawing from the provided random source instead of
/// the thread-local one, so tests can substitute a seeded generator.
pub fn add_jitter_with_rng<R: Rng + ?Sized>(
    duration: Duration,
    jitter: Duration,
    rng: &mut R,
) -> Duration {
    if jitter.is_zero() {
        return duration;
    }

    let bound = jitter.as_nanos().min(u64::MAX as u128) as u64;
    let extra = rng.random_range(0..bound);
    duration.saturating_add(Duration::from_nanos(extra))
}
