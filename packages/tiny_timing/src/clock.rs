use std::time::{Duration, SystemTime};

use tracing::trace;

use crate::pal::{Platform, PlatformFacade};
use crate::{Error, Instant, Result, TimedResult};

/// Source of monotonic and wall-clock time, and the entry point for measuring and waiting.
///
/// Cloning is cheap. All operations are safe to call from any number of threads at once; the
/// blocking ones (`sleep()`, `delay()`) only block the calling thread.
///
/// # Examples
///
/// ```rust
/// use tiny_timing::Clock;
///
/// let clock = Clock::new();
///
/// let timed = clock.measure(|| (1..=10).sum::<u32>());
///
/// assert_eq!(*timed.value(), 55);
/// assert!(timed.elapsed_seconds() >= 0.0);
/// ```
#[derive(Clone, Debug)]
pub struct Clock {
    platform: PlatformFacade,
}

impl Clock {
    /// Creates a clock backed by the operating system.
    #[must_use]
    pub fn new() -> Self {
        Self::with_platform(PlatformFacade::real())
    }

    pub(crate) fn with_platform(platform: PlatformFacade) -> Self {
        Self { platform }
    }

    /// Samples the monotonic clock.
    ///
    /// Successive samples taken by the same thread never go backwards.
    #[must_use]
    pub fn now(&self) -> Instant {
        self.platform.now().into()
    }

    /// Samples the wall clock, as milliseconds since the Unix epoch.
    ///
    /// Accurate to within the resolution of the operating system clock. Wall-clock readings may
    /// jump when the system time is adjusted; use [`now()`][Self::now] to measure durations.
    #[must_use]
    pub fn wall_clock_millis(&self) -> u64 {
        self.platform
            .wall_clock()
            .duration_since(SystemTime::UNIX_EPOCH)
            .map_or(0, |since_epoch| {
                u64::try_from(since_epoch.as_millis()).unwrap_or(u64::MAX)
            })
    }

    /// Runs `action` and returns how many seconds it took.
    ///
    /// If `action` panics, the panic propagates and nothing is measured.
    pub fn duration_of(&self, action: impl FnOnce()) -> f64 {
        self.measure(action).elapsed_seconds()
    }

    /// Runs `action` and pairs its result with the number of seconds it took.
    pub fn measure<V>(&self, action: impl FnOnce() -> V) -> TimedResult<V> {
        let start = self.now();
        let value = action();
        let elapsed = self.now().saturating_duration_since(start);

        TimedResult::new(value, elapsed)
    }

    /// Waits until `seconds` have passed since `start`, then runs `action` and returns its result.
    ///
    /// If `start` is `None`, the wait is measured from the moment of the call. If the target time
    /// has already passed, `action` runs immediately.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDuration`] if `seconds` is negative, infinite or NaN. The action is
    /// not run in that case.
    pub fn delay<V>(
        &self,
        seconds: f64,
        start: Option<Instant>,
        action: impl FnOnce() -> V,
    ) -> Result<V> {
        self.sleep(seconds, start)?;
        Ok(action())
    }

    /// Blocks the calling thread until `seconds` have passed since `start`.
    ///
    /// If `start` is `None`, the wait is measured from the moment of the call. Only the remaining
    /// positive part of the wait is slept; a target that is already in the past returns at once.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDuration`] if `seconds` is negative, infinite or NaN.
    pub fn sleep(&self, seconds: f64, start: Option<Instant>) -> Result<()> {
        let target = to_duration(seconds)?;
        let start = start.unwrap_or_else(|| self.now());

        let remaining = target.saturating_sub(self.now().saturating_duration_since(start));

        if remaining.is_zero() {
            trace!(seconds, "sleep target already reached");
            return Ok(());
        }

        trace!(seconds, remaining = ?remaining, "sleeping");
        self.platform.sleep(remaining);

        Ok(())
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

fn to_duration(seconds: f64) -> Result<Duration> {
    Duration::try_from_secs_f64(seconds)
        .ok()
        .ok_or(Error::InvalidDuration { seconds })
}

/// Samples the monotonic clock of the operating system.
///
/// Shorthand for `Clock::new().now()`.
#[must_use]
pub fn monotonic_now() -> Instant {
    Clock::new().now()
}

/// Samples the wall clock of the operating system, as milliseconds since the Unix epoch.
#[must_use]
pub fn wall_clock_now() -> u64 {
    Clock::new().wall_clock_millis()
}

/// Runs `action` and returns how many seconds it took.
pub fn duration_of(action: impl FnOnce()) -> f64 {
    Clock::new().duration_of(action)
}

/// Runs `action` and pairs its result with the number of seconds it took.
///
/// ```rust
/// let timed = tiny_timing::measure(|| "X");
///
/// assert_eq!(*timed.value(), "X");
/// ```
pub fn measure<V>(action: impl FnOnce() -> V) -> TimedResult<V> {
    Clock::new().measure(action)
}

/// Waits until `seconds` have passed since `start` (or since now), then runs `action`.
///
/// # Errors
///
/// Returns [`Error::InvalidDuration`] if `seconds` is negative, infinite or NaN.
pub fn delay<V>(seconds: f64, start: Option<Instant>, action: impl FnOnce() -> V) -> Result<V> {
    Clock::new().delay(seconds, start, action)
}

/// Blocks the calling thread until `seconds` have passed since `start` (or since now).
///
/// # Errors
///
/// Returns [`Error::InvalidDuration`] if `seconds` is negative, infinite or NaN.
pub fn sleep(seconds: f64, start: Option<Instant>) -> Result<()> {
    Clock::new().sleep(seconds, start)
}
