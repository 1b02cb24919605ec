//! Platform facade for switching between real and test implementations.

#[cfg(test)]
use crate::pal::MockPlatform;
use crate::pal::abstractions::Platform;
#[cfg(test)]
use crate::pal::fake::FakePlatform;
use crate::pal::real::RealPlatform;

/// Facade that allows switching between real and test platform implementations.
///
/// This enum provides a unified interface to either the real platform
/// (the system clock) or a fake/mock platform (for testing).
#[derive(Debug)]
pub(crate) enum PlatformFacade {
    /// Real platform implementation reading the system clock.
    Real(RealPlatform),

    /// Fake platform implementation with a clock controlled by the test.
    #[cfg(test)]
    Fake(FakePlatform),

    /// Mock platform implementation with explicit expectations.
    #[cfg(test)]
    Mock(MockPlatform),
}

impl PlatformFacade {
    /// Creates a new platform facade using the real implementation.
    pub(crate) fn real() -> Self {
        Self::Real(RealPlatform)
    }

    /// Creates a new platform facade using the fake implementation.
    #[cfg(test)]
    pub(crate) fn fake(fake_platform: FakePlatform) -> Self {
        Self::Fake(fake_platform)
    }

    /// Creates a new platform facade using a mock implementation.
    #[cfg(test)]
    pub(crate) fn mock(mock_platform: MockPlatform) -> Self {
        Self::Mock(mock_platform)
    }
}

impl Platform for PlatformFacade {
    fn now_millis(&self) -> i64 {
        match self {
            Self::Real(platform) => platform.now_millis(),
            #[cfg(test)]
            Self::Fake(platform) => platform.now_millis(),
            #[cfg(test)]
            Self::Mock(platform) => platform.now_millis(),
        }
    }
}
