//! Times the phases of a simulated request with `perf_tracker`.
//!
//! This example shows the typical sequential pattern: the first phase starts when the
//! `TrackerSet` is created, each `lap()` moves on to the next phase and a final `stop()`
//! closes the last one.
//!
//! Run with: `cargo run --example perf_tracker_basic`.

use std::thread;
use std::time::Duration;

use perf_tracker::TrackerSet;

fn main() {
    println!("=== Request Phase Timing Example ===");
    println!();

    let mut tracker_set = TrackerSet::new(
        ["authenticate", "load_profile", "render_page"],
        "GET /profile",
    );

    // Simulated work for each phase.
    thread::sleep(Duration::from_millis(15));
    tracker_set.lap();

    thread::sleep(Duration::from_millis(40));
    tracker_set.lap();

    thread::sleep(Duration::from_millis(25));
    tracker_set.stop();

    tracker_set.print_to_stdout(true);
    println!();

    if let Some(slowest) = tracker_set
        .trackers()
        .iter()
        .max_by_key(|slot| slot.duration().unwrap_or_default())
    {
        println!("Slowest phase: {}", slowest.action());
    }
}
