use std::fmt;

use tracing::{debug, trace};

use crate::pal::{Platform, PlatformFacade};
use crate::{Record, TrackerSetBuilder, TrackingSlot, time_table};

/// The action name of the extra record appended by [`TrackerSet::to_records(true)`][1].
///
/// [1]: TrackerSet::to_records
pub const TOTAL_DURATION_ACTION: &str = "Total duration";

/// Measures wall-clock time for an ordered, fixed list of named actions.
///
/// Each action gets a [`TrackingSlot`]. Slots are started and stopped either by name or
/// positionally: the positional [`start()`](Self::start) picks the first slot that has not
/// been started and [`stop()`](Self::stop) picks the first slot that has not been stopped.
/// Combined as [`lap()`](Self::lap), this closes the current phase and opens the next one.
///
/// Nothing here fails. Operations that find nothing to act on do nothing.
///
/// # Examples
///
/// ```
/// use perf_tracker::TrackerSet;
///
/// // The first action is started right away.
/// let mut tracker_set = TrackerSet::new(["authenticate", "load_profile", "render"], "request");
///
/// // authenticate...
/// tracker_set.lap();
/// // load_profile...
/// tracker_set.lap();
/// // render...
/// tracker_set.stop();
///
/// assert!(tracker_set.is_all_stopped());
/// println!("{}", tracker_set.render(true));
/// ```
///
/// # Threading
///
/// A tracker set is meant to be owned and driven by one thread. It can be moved between
/// threads but offers no synchronization of its own.
#[derive(Debug)]
pub struct TrackerSet {
    namespace: String,
    slots: Vec<TrackingSlot>,
    platform: PlatformFacade,
}

impl TrackerSet {
    /// Creates a tracker set with one slot per action and starts the first one.
    ///
    /// Use [`builder()`](Self::builder) to create a tracker set that does not start
    /// immediately.
    #[must_use]
    pub fn new<I, S>(actions: I, namespace: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::builder().namespace(namespace).actions(actions).build()
    }

    /// Creates a builder for configuring a new tracker set.
    #[must_use]
    pub fn builder() -> TrackerSetBuilder {
        TrackerSetBuilder::new()
    }

    #[must_use]
    pub(crate) fn from_parts(
        namespace: String,
        actions: Vec<String>,
        platform: PlatformFacade,
    ) -> Self {
        Self {
            namespace,
            slots: actions.into_iter().map(TrackingSlot::new).collect(),
            platform,
        }
    }

    /// The label attached to every record this tracker set produces.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Starts the first slot that has not been started yet.
    ///
    /// Does nothing if every slot has been started.
    pub fn start(&mut self) {
        let Some(slot) = self.slots.iter_mut().find(|slot| !slot.is_started()) else {
            debug!(
                namespace = self.namespace.as_str(),
                "every action has already been started"
            );
            return;
        };

        let now = self.platform.now_millis();
        slot.start(now);

        trace!(
            namespace = self.namespace.as_str(),
            action = slot.action(),
            timestamp_ms = now,
            "action started"
        );
    }

    /// Starts every slot with the given action name, replacing any earlier start time.
    ///
    /// Slots that have already been stopped are restarted too. Does nothing if no slot
    /// has this name.
    pub fn start_action(&mut self, action: &str) {
        let mut matched = false;

        for slot in self.slots.iter_mut().filter(|slot| slot.action() == action) {
            let now = self.platform.now_millis();
            slot.start(now);
            matched = true;

            trace!(
                namespace = self.namespace.as_str(),
                action,
                timestamp_ms = now,
                "action started"
            );
        }

        if !matched {
            debug!(
                namespace = self.namespace.as_str(),
                action, "no action with this name to start"
            );
        }
    }

    /// Starts every slot that has not been started yet.
    ///
    /// Each slot reads the clock separately, so their start times may differ slightly.
    pub fn start_all(&mut self) {
        for slot in self.slots.iter_mut().filter(|slot| !slot.is_started()) {
            let now = self.platform.now_millis();
            slot.start(now);

            trace!(
                namespace = self.namespace.as_str(),
                action = slot.action(),
                timestamp_ms = now,
                "action started"
            );
        }
    }

    /// Stops the first slot that has not been stopped yet.
    ///
    /// Does nothing if every slot has been stopped.
    pub fn stop(&mut self) {
        let Some(slot) = self.slots.iter_mut().find(|slot| !slot.is_stopped()) else {
            debug!(
                namespace = self.namespace.as_str(),
                "every action has already been stopped"
            );
            return;
        };

        let now = self.platform.now_millis();
        slot.stop(now);

        trace!(
            namespace = self.namespace.as_str(),
            action = slot.action(),
            timestamp_ms = now,
            duration_ms = slot.duration(),
            "action stopped"
        );
    }

    /// Stops every slot with the given action name, replacing any earlier end time.
    ///
    /// A slot that was never started gets an end time but no duration. Does nothing if no
    /// slot has this name.
    pub fn stop_action(&mut self, action: &str) {
        let mut matched = false;

        for slot in self.slots.iter_mut().filter(|slot| slot.action() == action) {
            let now = self.platform.now_millis();
            slot.stop(now);
            matched = true;

            trace!(
                namespace = self.namespace.as_str(),
                action,
                timestamp_ms = now,
                duration_ms = slot.duration(),
                "action stopped"
            );
        }

        if !matched {
            debug!(
                namespace = self.namespace.as_str(),
                action, "no action with this name to stop"
            );
        }
    }

    /// Stops every slot that has not been stopped yet.
    ///
    /// Each slot reads the clock separately, so their end times may differ slightly.
    pub fn stop_all(&mut self) {
        for slot in self.slots.iter_mut().filter(|slot| !slot.is_stopped()) {
            let now = self.platform.now_millis();
            slot.stop(now);

            trace!(
                namespace = self.namespace.as_str(),
                action = slot.action(),
                timestamp_ms = now,
                duration_ms = slot.duration(),
                "action stopped"
            );
        }
    }

    /// Stops the current slot and starts the next one.
    ///
    /// Equivalent to [`stop()`](Self::stop) followed by [`start()`](Self::start).
    pub fn lap(&mut self) {
        self.stop();
        self.start();
    }

    /// Alias for [`lap()`](Self::lap).
    pub fn stop_and_start(&mut self) {
        self.lap();
    }

    /// All slots, in the order their actions were given.
    #[must_use]
    pub fn trackers(&self) -> &[TrackingSlot] {
        &self.slots
    }

    /// The first slot with the given action name, if any.
    #[must_use]
    pub fn tracker(&self, action: &str) -> Option<&TrackingSlot> {
        self.slots.iter().find(|slot| slot.action() == action)
    }

    /// Whether every slot has been stopped. True for a tracker set without actions.
    #[must_use]
    pub fn is_all_stopped(&self) -> bool {
        self.slots.iter().all(TrackingSlot::is_stopped)
    }

    /// The number of slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the tracker set has no slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Sum of the durations of all slots, in milliseconds.
    ///
    /// Slots without a duration count as zero.
    #[must_use]
    pub fn total_duration(&self) -> i64 {
        self.slots
            .iter()
            .filter_map(TrackingSlot::duration)
            .fold(0, i64::saturating_add)
    }

    /// One `{namespace, action, duration}` record per slot.
    ///
    /// Missing durations are [`CellValue::Absent`](crate::CellValue::Absent). With
    /// `include_total`, a final record with the action [`TOTAL_DURATION_ACTION`] carries
    /// the [`total_duration()`](Self::total_duration).
    #[must_use]
    pub fn to_records(&self, include_total: bool) -> Vec<Record> {
        let mut records = self
            .slots
            .iter()
            .map(|slot| self.record(slot.action(), slot.duration()))
            .collect::<Vec<_>>();

        if include_total {
            records.push(self.record(TOTAL_DURATION_ACTION, Some(self.total_duration())));
        }

        records
    }

    fn record(&self, action: &str, duration: Option<i64>) -> Record {
        Record::new()
            .with("namespace", self.namespace.as_str())
            .with("action", action)
            .with("duration", duration)
    }

    /// Renders [`to_records()`](Self::to_records) as a table with durations in milliseconds.
    ///
    /// The result has no leading or trailing whitespace. It is empty only for a tracker set
    /// without actions when `include_total` is false; with `include_total`, the total row is
    /// always rendered.
    #[must_use]
    pub fn render(&self, include_total: bool) -> String {
        time_table(&self.to_records(include_total)).trim().to_owned()
    }

    /// Prints the rendered table to stdout.
    ///
    /// Prints nothing, not even an empty line, if the tracker set has no actions. This applies
    /// even with `include_total`, since a lone zero total carries no information.
    #[cfg_attr(test, mutants::skip)] // Too difficult to test stdout output reliably - manually tested.
    pub fn print_to_stdout(&self, include_total: bool) {
        if self.is_empty() {
            return;
        }

        println!("{}", self.render(include_total));
    }
}

impl fmt::Display for TrackerSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(false))
    }
}
