use std::fmt::{self, Debug};
#[cfg(test)]
use std::sync::Arc;
use std::time::{Duration, Instant, SystemTime};

#[cfg(test)]
use crate::pal::{FakePlatform, MockPlatform};
use crate::pal::{BUILD_TARGET_PLATFORM, BuildTargetPlatform, Platform};

#[derive(Clone)]
pub(crate) enum PlatformFacade {
    Real(&'static BuildTargetPlatform),

    #[cfg(test)]
    Fake(FakePlatform),

    #[cfg(test)]
    Mock(Arc<MockPlatform>),
}

impl PlatformFacade {
    pub(crate) fn real() -> Self {
        Self::Real(&BUILD_TARGET_PLATFORM)
    }
}

impl Platform for PlatformFacade {
    fn now(&self) -> Instant {
        match self {
            Self::Real(p) => p.now(),
            #[cfg(test)]
            Self::Fake(p) => p.now(),
            #[cfg(test)]
            Self::Mock(p) => p.now(),
        }
    }

    fn wall_clock(&self) -> SystemTime {
        match self {
            Self::Real(p) => p.wall_clock(),
            #[cfg(test)]
            Self::Fake(p) => p.wall_clock(),
            #[cfg(test)]
            Self::Mock(p) => p.wall_clock(),
        }
    }

    fn sleep(&self, duration: Duration) {
        match self {
            Self::Real(p) => p.sleep(duration),
            #[cfg(test)]
            Self::Fake(p) => p.sleep(duration),
            #[cfg(test)]
            Self::Mock(p) => p.sleep(duration),
        }
    }
}

#[cfg(test)]
impl From<FakePlatform> for PlatformFacade {
    fn from(p: FakePlatform) -> Self {
        Self::Fake(p)
    }
}

#[cfg(test)]
impl From<MockPlatform> for PlatformFacade {
    fn from(p: MockPlatform) -> Self {
        Self::Mock(Arc::new(p))
    }
}

impl Debug for PlatformFacade {
    #[cfg_attr(test, mutants::skip)] // No API contract to test.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Real(p) => p.fmt(f),
            #[cfg(test)]
            Self::Fake(p) => p.fmt(f),
            #[cfg(test)]
            Self::Mock(p) => p.fmt(f),
        }
    }
}
