//! Real platform implementation using the system clock.

use chrono::Utc;

use crate::pal::abstractions::Platform;

/// Real implementation of the platform abstraction using the `chrono` crate.
#[derive(Debug, Clone)]
pub(crate) struct RealPlatform;

impl Platform for RealPlatform {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

#[cfg(test)]
#[cfg(not(miri))] // Miri cannot talk to the real platform.
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn now_is_approximately_now() {
        let before = Utc::now().timestamp_millis();
        let now = RealPlatform.now_millis();
        let after = Utc::now().timestamp_millis();

        assert!(now >= before.saturating_sub(100));
        assert!(now <= after.saturating_add(100));
    }
}
