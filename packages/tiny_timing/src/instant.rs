use std::time::Duration;

use crate::Clock;

/// A sample of the monotonic clock.
///
/// Instants only make sense relative to other instants taken in the same process run. They are
/// deliberately a different type from wall-clock readings (see [`Clock::wall_clock_millis()`]),
/// which are suitable for display and for comparison with external time sources.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
///
/// use tiny_timing::Clock;
///
/// let clock = Clock::new();
/// let start = clock.now();
///
/// std::thread::sleep(Duration::from_millis(5));
///
/// assert!(start.elapsed(&clock) >= Duration::from_millis(5));
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Instant {
    inner: std::time::Instant,
}

impl Instant {
    /// Time that has passed since this instant, according to `clock`.
    #[must_use]
    pub fn elapsed(&self, clock: &Clock) -> Duration {
        clock.now().saturating_duration_since(*self)
    }

    /// Time between `earlier` and this instant, or zero if `earlier` is actually later.
    #[must_use]
    pub fn saturating_duration_since(&self, earlier: Self) -> Duration {
        self.inner.saturating_duration_since(earlier.inner)
    }

    /// Same as [`saturating_duration_since()`][Self::saturating_duration_since] but expressed in
    /// fractional seconds. Never negative.
    #[must_use]
    pub fn seconds_since(&self, earlier: Self) -> f64 {
        self.saturating_duration_since(earlier).as_secs_f64()
    }
}

impl From<std::time::Instant> for Instant {
    fn from(inner: std::time::Instant) -> Self {
        Self { inner }
    }
}

impl From<Instant> for std::time::Instant {
    fn from(instant: Instant) -> Self {
        instant.inner
    }
}
