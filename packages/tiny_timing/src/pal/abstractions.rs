use std::fmt::Debug;
use std::time::{Duration, Instant, SystemTime};

/// Everything the timing facility needs from the operating system.
#[cfg_attr(test, mockall::automock)]
pub(crate) trait Platform: Debug + Send + Sync + 'static {
    /// Samples the monotonic clock.
    fn now(&self) -> Instant;

    /// Samples the wall clock.
    fn wall_clock(&self) -> SystemTime;

    /// Blocks the calling thread for at least `duration`.
    fn sleep(&self, duration: Duration);
}
