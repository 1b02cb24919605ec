//! A single named timing interval.

use chrono::{DateTime, Utc};

use crate::Record;

/// One named interval inside a [`TrackerSet`](crate::TrackerSet).
///
/// Timestamps are wall-clock milliseconds since the Unix epoch. A timestamp is `None`
/// until the owning tracker set starts or stops the slot. The duration is present only
/// when both timestamps are, and is never adjusted: if the wall clock moved backward
/// between start and stop, the duration is negative.
///
/// Slots are only ever changed through their owning tracker set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackingSlot {
    action: String,
    start_timestamp: Option<i64>,
    end_timestamp: Option<i64>,
}

impl TrackingSlot {
    #[must_use]
    pub(crate) fn new(action: String) -> Self {
        Self {
            action,
            start_timestamp: None,
            end_timestamp: None,
        }
    }

    /// Records the start time, replacing any earlier one.
    pub(crate) fn start(&mut self, now_millis: i64) {
        self.start_timestamp = Some(now_millis);
    }

    /// Records the end time, replacing any earlier one.
    pub(crate) fn stop(&mut self, now_millis: i64) {
        self.end_timestamp = Some(now_millis);
    }

    /// The name of the action this slot measures.
    #[must_use]
    pub fn action(&self) -> &str {
        &self.action
    }

    /// When the slot was started, in milliseconds since the Unix epoch.
    #[must_use]
    pub fn start_timestamp(&self) -> Option<i64> {
        self.start_timestamp
    }

    /// When the slot was stopped, in milliseconds since the Unix epoch.
    #[must_use]
    pub fn end_timestamp(&self) -> Option<i64> {
        self.end_timestamp
    }

    /// Milliseconds between start and stop.
    ///
    /// `None` unless the slot has been both started and stopped.
    #[must_use]
    pub fn duration(&self) -> Option<i64> {
        match (self.start_timestamp, self.end_timestamp) {
            (Some(start), Some(end)) => end.checked_sub(start),
            _ => None,
        }
    }

    /// Whether a start time has been recorded.
    #[must_use]
    pub fn is_started(&self) -> bool {
        self.start_timestamp.is_some()
    }

    /// Whether an end time has been recorded.
    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.end_timestamp.is_some()
    }

    /// The start time as a date, if recorded.
    #[must_use]
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.start_timestamp.and_then(DateTime::<Utc>::from_timestamp_millis)
    }

    /// The end time as a date, if recorded.
    #[must_use]
    pub fn stopped_at(&self) -> Option<DateTime<Utc>> {
        self.end_timestamp.and_then(DateTime::<Utc>::from_timestamp_millis)
    }

    /// Describes the slot as a record suitable for [`table()`](crate::table).
    ///
    /// # Examples
    ///
    /// ```
    /// use perf_tracker::{TrackerSet, table};
    ///
    /// let tracker_set = TrackerSet::new(["fetch"], "http");
    /// let slot = tracker_set.tracker("fetch").unwrap();
    ///
    /// println!("{}", table(&slot.to_record()));
    /// ```
    #[must_use]
    pub fn to_record(&self) -> Record {
        Record::new()
            .with("action", self.action.as_str())
            .with("started_at", self.started_at())
            .with("stopped_at", self.stopped_at())
            .with("duration", self.duration())
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::CellValue;

    #[test]
    fn new_slot_is_unset() {
        let slot = TrackingSlot::new("parse".to_owned());

        assert_eq!(slot.action(), "parse");
        assert_eq!(slot.start_timestamp(), None);
        assert_eq!(slot.end_timestamp(), None);
        assert_eq!(slot.duration(), None);
        assert!(!slot.is_started());
        assert!(!slot.is_stopped());
    }

    #[test]
    fn duration_requires_both_timestamps() {
        let mut slot = TrackingSlot::new("parse".to_owned());

        slot.stop(50);
        assert_eq!(slot.duration(), None);

        slot.start(20);
        assert_eq!(slot.duration(), Some(30));
    }

    #[test]
    fn duration_may_be_negative() {
        let mut slot = TrackingSlot::new("parse".to_owned());

        slot.start(100);
        slot.stop(90);

        assert_eq!(slot.duration(), Some(-10));
    }

    #[test]
    fn restart_after_stop_recomputes_duration() {
        let mut slot = TrackingSlot::new("parse".to_owned());

        slot.start(0);
        slot.stop(10);
        slot.start(4);

        assert_eq!(slot.duration(), Some(6));
    }

    #[test]
    fn overflowing_duration_is_absent() {
        let mut slot = TrackingSlot::new("parse".to_owned());

        slot.start(i64::MIN);
        slot.stop(i64::MAX);

        assert_eq!(slot.duration(), None);
    }

    #[test]
    fn dates_follow_timestamps() {
        let mut slot = TrackingSlot::new("parse".to_owned());
        slot.start(1_700_000_000_000);

        assert_eq!(
            slot.started_at(),
            Some(Utc.with_ymd_and_hms(2023, 11, 14, 22, 13, 20).unwrap())
        );
        assert_eq!(slot.stopped_at(), None);
    }

    #[test]
    fn record_has_dates_and_duration() {
        let mut slot = TrackingSlot::new("parse".to_owned());
        slot.start(1_700_000_000_000);

        let record = slot.to_record();

        assert_eq!(
            record.keys().collect::<Vec<_>>(),
            ["action", "started_at", "stopped_at", "duration"]
        );
        assert_eq!(
            record.get("action"),
            Some(&CellValue::Text("parse".to_owned()))
        );
        assert!(matches!(record.get("started_at"), Some(CellValue::Date(_))));
        assert_eq!(record.get("stopped_at"), Some(&CellValue::Absent));
        assert_eq!(record.get("duration"), Some(&CellValue::Absent));
    }
}
