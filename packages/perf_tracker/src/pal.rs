//! Platform abstraction layer for the wall-clock time source.
//!
//! This module provides a platform abstraction that allows switching between
//! the real system clock (read via the `chrono` package) and fake or mock
//! implementations for testing purposes.

mod abstractions;
mod facade;
#[cfg(test)]
mod fake;
mod real;

#[cfg(test)]
pub(crate) use abstractions::MockPlatform;
pub(crate) use abstractions::Platform;
pub(crate) use facade::PlatformFacade;
#[cfg(test)]
pub(crate) use fake::FakePlatform;
