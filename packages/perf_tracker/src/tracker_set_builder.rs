//! Builder for tracker sets.

use crate::TrackerSet;
use crate::pal::PlatformFacade;

/// Creates instances of [`TrackerSet`].
///
/// Use `TrackerSet::builder()` to create a new instance of this builder.
///
/// All parameters are optional:
/// * `namespace` defaults to an empty string.
/// * `actions` defaults to no actions.
/// * `auto_start` defaults to `true`, which starts the first action as part of `build()`.
///
/// # Examples
///
/// ```
/// use perf_tracker::TrackerSet;
///
/// let mut tracker_set = TrackerSet::builder()
///     .namespace("checkout")
///     .actions(["validate_cart", "charge_card"])
///     .action("send_receipt")
///     .auto_start(false)
///     .build();
///
/// assert!(tracker_set.trackers().iter().all(|slot| !slot.is_started()));
///
/// tracker_set.start();
/// assert!(tracker_set.tracker("validate_cart").unwrap().is_started());
/// ```
#[derive(Debug)]
pub struct TrackerSetBuilder {
    namespace: String,
    actions: Vec<String>,
    auto_start: bool,
    platform: PlatformFacade,
}

impl TrackerSetBuilder {
    pub(crate) fn new() -> Self {
        Self {
            namespace: String::new(),
            actions: Vec::new(),
            auto_start: true,
            platform: PlatformFacade::real(),
        }
    }

    /// Sets the label attached to every record the tracker set produces.
    #[must_use]
    pub fn namespace(self, namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            ..self
        }
    }

    /// Appends actions to measure, in the order they are expected to happen.
    ///
    /// Action names are not checked for uniqueness. Operations that address an action by
    /// name affect every slot with that name.
    #[must_use]
    pub fn actions<I, S>(mut self, actions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.actions.extend(actions.into_iter().map(Into::into));
        self
    }

    /// Appends a single action to measure.
    #[must_use]
    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.actions.push(action.into());
        self
    }

    /// Sets whether the first action is started when the tracker set is built.
    #[must_use]
    pub fn auto_start(self, auto_start: bool) -> Self {
        Self { auto_start, ..self }
    }

    /// Reads time from the given platform instead of the system clock.
    #[cfg(test)]
    #[must_use]
    pub(crate) fn platform(self, platform: PlatformFacade) -> Self {
        Self { platform, ..self }
    }

    /// Creates the tracker set.
    #[must_use]
    pub fn build(self) -> TrackerSet {
        let mut tracker_set = TrackerSet::from_parts(self.namespace, self.actions, self.platform);

        if self.auto_start {
            tracker_set.start();
        }

        tracker_set
    }
}
