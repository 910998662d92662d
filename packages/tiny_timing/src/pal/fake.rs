//! Fake platform implementation for testing.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant, SystemTime};

use crate::pal::Platform;

#[derive(Debug)]
struct FakePlatformState {
    monotonic_epoch: Instant,
    wall_clock_epoch: SystemTime,
    elapsed: Duration,
    sleeps: Vec<Duration>,
}

/// A platform whose clocks stand still until advanced.
///
/// Sleeping advances both clocks by the requested duration and records the request, so tests can
/// assert on exactly how long the facility decided to wait. Clones share state.
#[derive(Clone, Debug)]
pub(crate) struct FakePlatform {
    state: Arc<Mutex<FakePlatformState>>,
}

impl FakePlatform {
    pub(crate) fn new() -> Self {
        Self::with_wall_clock(SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000))
    }

    pub(crate) fn with_wall_clock(wall_clock_epoch: SystemTime) -> Self {
        Self {
            state: Arc::new(Mutex::new(FakePlatformState {
                monotonic_epoch: Instant::now(),
                wall_clock_epoch,
                elapsed: Duration::ZERO,
                sleeps: Vec::new(),
            })),
        }
    }

    /// Moves both clocks forward without recording a sleep.
    pub(crate) fn advance(&self, duration: Duration) {
        let mut state = self
            .state
            .lock()
            .expect("FakePlatform state lock should not be poisoned");
        state.elapsed += duration;
    }

    /// Every duration passed to `sleep()` so far, in call order.
    pub(crate) fn sleeps(&self) -> Vec<Duration> {
        self.state
            .lock()
            .expect("FakePlatform state lock should not be poisoned")
            .sleeps
            .clone()
    }
}

impl Platform for FakePlatform {
    fn now(&self) -> Instant {
        let state = self
            .state
            .lock()
            .expect("FakePlatform state lock should not be poisoned");
        state.monotonic_epoch + state.elapsed
    }

    fn wall_clock(&self) -> SystemTime {
        let state = self
            .state
            .lock()
            .expect("FakePlatform state lock should not be poisoned");
        state.wall_clock_epoch + state.elapsed
    }

    fn sleep(&self, duration: Duration) {
        let mut state = self
            .state
            .lock()
            .expect("FakePlatform state lock should not be poisoned");
        state.elapsed += duration;
        state.sleeps.push(duration);
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn clocks_stand_still_until_advanced() {
        let platform = FakePlatform::new();

        let first = platform.now();
        let second = platform.now();
        assert_eq!(first, second);

        platform.advance(Duration::from_millis(250));
        assert_eq!(platform.now().duration_since(first), Duration::from_millis(250));
        assert!(platform.sleeps().is_empty());
    }

    #[test]
    fn sleep_advances_and_records() {
        let platform = FakePlatform::new();
        let wall_before = platform.wall_clock();

        platform.sleep(Duration::from_secs(2));

        assert_eq!(platform.sleeps(), vec![Duration::from_secs(2)]);
        assert_eq!(
            platform.wall_clock().duration_since(wall_before).unwrap(),
            Duration::from_secs(2)
        );
    }

    #[test]
    fn shared_state_between_clones() {
        let platform1 = FakePlatform::new();
        let platform2 = platform1.clone();

        let start = platform2.now();
        platform1.sleep(Duration::from_millis(100));

        assert_eq!(platform2.now().duration_since(start), Duration::from_millis(100));
        assert_eq!(platform2.sleeps().len(), 1);
    }
}
