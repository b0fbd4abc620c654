//! Exponential backoff strategy for retry policies.

use std::time::Duration;

use rand::Rng;

use crate::jitter::add_jitter_with_rng;

/// The capability a retry loop needs from a backoff policy: produce the next
/// wait interval, and start the sequence over after a success.
///
/// Holding a `&mut dyn Backoff` (or `Box<dyn Backoff>`) lets callers swap the
/// growing policy for a fixed or zero one, e.g. in tests.
pub trait Backoff {
    /// Returns the next interval to wait and advances the sequence.
    fn duration(&mut self) -> Duration;

    /// Returns the sequence to its initial interval.
    fn reset(&mut self);
}

/// Stateful backoff generator: each call to [`Backoff::duration`] returns the
/// current interval with jitter added, then multiplies the interval by the
/// growth factor, capped at the ceiling.
#[derive(Clone, Debug)]
pub struct ExponentialBackoff {
    initial: Duration,
    current: Duration,
    ceiling: Duration,
    growth_factor: f64,
    jitter_fraction: f64,
}

impl ExponentialBackoff {
    /// Creates a backoff ranging from `initial` to `ceiling`, multiplying the
    /// interval by `growth_factor` after each draw.
    ///
    /// `jitter_fraction` controls how much random delay is added on top of
    /// each interval: 0.0 adds none, 0.15 adds up to 15% extra. Jitter is
    /// only ever added, so a single draw can exceed `ceiling` by up to
    /// `ceiling * jitter_fraction`.
    ///
    /// `initial <= ceiling` and `growth_factor >= 1.0` are expected but not
    /// validated: with `initial > ceiling` the first draw still returns
    /// `initial`, and a growth factor below 1.0 yields a shrinking sequence.
    /// A negative `jitter_fraction` behaves as 0.0.
    pub fn new(
        initial: Duration,
        ceiling: Duration,
        jitter_fraction: f64,
        growth_factor: f64,
    ) -> Self {
        Self {
            initial,
            current: initial,
            ceiling,
            growth_factor,
            jitter_fraction,
        }
    }

    /// Same as [`Backoff::duration`], drawing jitter from the provided random
    /// source instead of the thread-local one.
    pub fn duration_with_rng<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Duration {
        let base = self.current;

        // Advance first: `current` always holds the next un-jittered base.
        // The multiply runs in f64 on nanoseconds and truncates back.
        let grown = (self.current.as_nanos() as f64 * self.growth_factor)
            .min(self.ceiling.as_nanos() as f64);
        self.current = Duration::from_nanos(grown as u64);

        // Jitter scales with the value being returned, not the advanced one.
        // The f64 -> u64 cast maps a negative product to zero.
        let jitter = Duration::from_nanos((base.as_nanos() as f64 * self.jitter_fraction) as u64);

        let delay = add_jitter_with_rng(base, jitter, rng);
        tracing::trace!(delay_ms = delay.as_millis() as u64, "backoff interval drawn");
        delay
    }
}

impl Backoff for ExponentialBackoff {
    fn duration(&mut self) -> Duration {
        self.duration_with_rng(&mut rand::rng())
    }

    fn reset(&mut self) {
        self.current = self.initial;
    }
}

impl Default for ExponentialBackoff {
    fn default() -> Self {
        Self::new(Duration::from_millis(100), Duration::from_secs(30), 0.1, 2.0)
    }
}

/// Fixed-interval [`Backoff`]: every draw returns the same interval and
/// [`Backoff::reset`] is a no-op.
///
/// `ConstantBackoff::new(Duration::ZERO)` is the no-wait stand-in for tests.
#[derive(Clone, Copy, Debug)]
pub struct ConstantBackoff {
    interval: Duration,
}

impl ConstantBackoff {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }
}

impl Backoff for ConstantBackoff {
    fn duration(&mut self) -> Duration {
        self.interval
    }

    fn reset(&mut self) {}
}
