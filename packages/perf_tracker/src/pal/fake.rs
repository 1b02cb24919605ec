//! Fake platform implementation for testing.

use std::sync::{Arc, Mutex};

use crate::pal::abstractions::Platform;

/// Fake implementation of the platform abstraction for testing.
///
/// Multiple clones of the same `FakePlatform` share the same underlying clock,
/// allowing tests to move time forward (or backward) after the platform has been
/// handed to a tracker set.
#[derive(Clone, Debug)]
pub(crate) struct FakePlatform {
    now_millis: Arc<Mutex<i64>>,
}

impl FakePlatform {
    /// Creates a new fake platform whose clock reads zero.
    pub(crate) fn new() -> Self {
        Self {
            now_millis: Arc::new(Mutex::new(0)),
        }
    }

    /// Sets the clock to the given number of milliseconds since the epoch.
    pub(crate) fn set_now(&self, millis: i64) {
        *self
            .now_millis
            .lock()
            .expect("FakePlatform state lock should not be poisoned") = millis;
    }

    /// Moves the clock by the given number of milliseconds. Negative values move it backward.
    pub(crate) fn advance(&self, millis: i64) {
        let mut now = self
            .now_millis
            .lock()
            .expect("FakePlatform state lock should not be poisoned");

        *now = now.saturating_add(millis);
    }
}

impl Platform for FakePlatform {
    fn now_millis(&self) -> i64 {
        *self
            .now_millis
            .lock()
            .expect("FakePlatform state lock should not be poisoned")
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn initializes_with_zero_time() {
        let platform = FakePlatform::new();
        assert_eq!(platform.now_millis(), 0);
    }

    #[test]
    fn sets_and_advances_time() {
        let platform = FakePlatform::new();
        platform.set_now(150);
        platform.advance(25);

        assert_eq!(platform.now_millis(), 175);

        platform.advance(-200);
        assert_eq!(platform.now_millis(), -25);
    }

    #[test]
    fn shared_state_between_clones() {
        let platform1 = FakePlatform::new();
        let platform2 = platform1.clone();

        platform1.set_now(100);
        assert_eq!(platform2.now_millis(), 100);
    }
}
