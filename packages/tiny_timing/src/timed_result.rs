use std::fmt;
use std::time::Duration;

/// A value together with the time it took to compute it.
///
/// Produced by [`Clock::measure()`][crate::Clock::measure] and [`measure()`][crate::measure].
/// Immutable; use [`into_parts()`][Self::into_parts] to take the value out.
#[derive(Clone, Debug, PartialEq)]
pub struct TimedResult<V> {
    value: V,
    elapsed: Duration,
}

impl<V> TimedResult<V> {
    pub(crate) fn new(value: V, elapsed: Duration) -> Self {
        Self { value, elapsed }
    }

    /// The computed value.
    #[must_use]
    pub fn value(&self) -> &V {
        &self.value
    }

    /// How long the computation took, in seconds. Never negative.
    #[must_use]
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    /// How long the computation took.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Discards the timing and returns the value.
    #[must_use]
    pub fn into_value(self) -> V {
        self.value
    }

    /// Splits the pair into the value and the elapsed seconds.
    #[must_use]
    pub fn into_parts(self) -> (V, f64) {
        let seconds = self.elapsed_seconds();
        (self.value, seconds)
    }

    /// Transforms the value, keeping the measured time.
    #[must_use]
    pub fn map<U>(self, f: impl FnOnce(V) -> U) -> TimedResult<U> {
        TimedResult {
            value: f(self.value),
            elapsed: self.elapsed,
        }
    }
}

impl<V: fmt::Display> fmt::Display for TimedResult<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.value, self.elapsed_seconds())
    }
}
