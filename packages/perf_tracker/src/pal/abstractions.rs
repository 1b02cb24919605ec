//! Platform abstraction trait definitions.

use std::fmt::Debug;

/// Provides the current wall-clock time.
///
/// This trait abstracts the underlying clock, allowing for both the real
/// implementation (the system clock) and fake implementations (for testing).
#[cfg_attr(test, mockall::automock)]
pub(crate) trait Platform: Debug + Send + Sync + 'static {
    /// Gets the current wall-clock time in milliseconds since the Unix epoch.
    ///
    /// Consecutive readings are not guaranteed to be monotonic.
    fn now_millis(&self) -> i64;
}
