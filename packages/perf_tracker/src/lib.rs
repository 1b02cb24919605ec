#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Wall-clock timing of named phases within a unit of work.
//!
//! This package measures how long each of a fixed, ordered list of actions takes inside one
//! logical unit of work (a "namespace", such as a request or a job) and renders the results as
//! a human-readable table. It is intended for ad-hoc timing breakdowns during development,
//! without setting up a full tracing or metrics pipeline.
//!
//! The core functionality includes:
//! - [`TrackerSet`] - Owns one [`TrackingSlot`] per action and starts/stops them
//! - [`TrackerSetBuilder`] - Configures a tracker set before it starts measuring
//! - [`time_table()`] and [`table()`] - Render [`Record`]s as aligned text tables
//!
//! Times are read from the system wall clock with millisecond precision.
//!
//! # Simple Usage
//!
//! ```
//! use perf_tracker::TrackerSet;
//!
//! # fn main() {
//! // The first action starts immediately.
//! let mut tracker_set = TrackerSet::new(["parse", "validate", "store"], "import_job");
//!
//! // parse...
//! tracker_set.lap();
//! // validate...
//! tracker_set.lap();
//! // store...
//! tracker_set.stop();
//!
//! // Print the per-action durations, followed by their sum.
//! tracker_set.print_to_stdout(true);
//! # }
//! ```
//!
//! # Addressing actions by name
//!
//! Actions do not have to run in order. Any action can be started or stopped by name:
//!
//! ```
//! use perf_tracker::TrackerSet;
//!
//! # fn main() {
//! let mut tracker_set = TrackerSet::builder()
//!     .namespace("page_load")
//!     .actions(["fetch_html", "fetch_images"])
//!     .auto_start(false)
//!     .build();
//!
//! tracker_set.start_all();
//! tracker_set.stop_action("fetch_images");
//! tracker_set.stop_action("fetch_html");
//!
//! for slot in tracker_set.trackers() {
//!     println!("{}: {:?} ms", slot.action(), slot.duration());
//! }
//! # }
//! ```
//!
//! # Rendering arbitrary records
//!
//! The table renderers can be used on their own:
//!
//! ```
//! use perf_tracker::{Record, table};
//!
//! let record = Record::new()
//!     .with("user", "someone@example.com")
//!     .with("attempts", 3_i64);
//!
//! println!("{}", table(&record));
//! ```
//!
//! # Threading
//!
//! A [`TrackerSet`] is intended for use by a single owner on a single thread. It contains no
//! synchronization; share it across threads only through your own locking.
//!
//! # Logging
//!
//! Every recorded timestamp is emitted as a `tracing` event at the `TRACE` level. Operations
//! that find nothing to act on are reported at the `DEBUG` level.

mod pal;
mod record;
mod slot;
mod table;
mod tracker_set;
mod tracker_set_builder;

pub use record::{CellValue, Record};
pub use slot::TrackingSlot;
pub use table::{table, time_table};
pub use tracker_set::{TOTAL_DURATION_ACTION, TrackerSet};
pub use tracker_set_builder::TrackerSetBuilder;
