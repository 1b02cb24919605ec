//! Renders records with the standalone `perf_tracker` table functions.
//!
//! `time_table()` formats durations in milliseconds, `table()` shortens long text and
//! displays dates in ISO-8601 form.
//!
//! Run with: `cargo run --example perf_tracker_tables`.

use perf_tracker::{CellValue, Record, TrackerSet, table, time_table};

fn main() {
    println!("=== Table Rendering Example ===");

    let timed = time_table(&[
        Record::new().with("query", "select_users").with("duration", 12_i64),
        Record::new().with("query", "select_orders").with("duration", 48_i64),
        Record::new()
            .with("query", "select_invoices")
            .with("duration", CellValue::Absent),
    ]);
    println!("{timed}");

    let regular = table(
        &Record::new()
            .with("statement", "UPDATE orders SET status = 'shipped' WHERE id = 42")
            .with("retried", false)
            .with("attempts", 1_i64),
    );
    println!("{regular}");

    // A slot describes itself with dates, which table() renders in ISO-8601 form.
    let mut tracker_set = TrackerSet::new(["flush"], "cache");
    tracker_set.stop();

    for slot in tracker_set.trackers() {
        println!("{}", table(&slot.to_record()));
    }
}
