use std::thread;
use std::time::{Duration, Instant, SystemTime};

use crate::pal::Platform;

/// The platform the build is targeting, reached through the Rust standard library.
#[derive(Debug, Default)]
pub(crate) struct BuildTargetPlatform;

pub(crate) static BUILD_TARGET_PLATFORM: BuildTargetPlatform = BuildTargetPlatform;

impl Platform for BuildTargetPlatform {
    fn now(&self) -> Instant {
        Instant::now()
    }

    #[cfg_attr(test, mutants::skip)] // Real time is checked by the integration tests only.
    fn wall_clock(&self) -> SystemTime {
        SystemTime::now()
    }

    fn sleep(&self, duration: Duration) {
        thread::sleep(duration);
    }
}
