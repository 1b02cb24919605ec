//! Rendering of records as aligned text tables.

use comfy_table::{Table, presets};

use crate::record::iso_8601;
use crate::{CellValue, Record};

/// Text values longer than this many characters are shortened by [`table()`].
const MAX_TEXT_CHARS: usize = 20;

/// Appended to text values that [`table()`] has shortened.
const ELLIPSIS: &str = "...";

/// The field that [`time_table()`] annotates with a unit.
const DURATION_FIELD: &str = "duration";

/// Renders records that carry a `duration` field in milliseconds.
///
/// Every numeric `duration` is displayed as `"<value> ms"`, including infinite floats.
/// Absent, NaN or otherwise non-numeric durations are displayed unchanged.
///
/// The result starts with a newline so it can be appended to a log line. If there
/// are no records, the result is an empty string.
///
/// # Examples
///
/// ```
/// use perf_tracker::{Record, time_table};
///
/// let rendered = time_table(&[Record::new().with("action", "load").with("duration", 42_i64)]);
///
/// assert!(rendered.starts_with('\n'));
/// assert!(rendered.contains("42 ms"));
///
/// assert_eq!(time_table(&[]), "");
/// ```
#[must_use]
pub fn time_table(records: &[Record]) -> String {
    let rows = records
        .iter()
        .map(|record| {
            record.map_values(|key, value| {
                if key == DURATION_FIELD && value.is_numeric() {
                    CellValue::Text(format!("{value} ms"))
                } else {
                    value.clone()
                }
            })
        })
        .collect::<Vec<_>>();

    render(&rows)
}

/// Renders a single record as a one-row table.
///
/// Dates are displayed in ISO-8601 form and text longer than 20 characters is cut to its
/// first 20 characters followed by `...`. Other values are displayed unchanged.
///
/// The result starts with a newline so it can be appended to a log line. A record without
/// fields renders as an empty string.
///
/// # Examples
///
/// ```
/// use perf_tracker::{Record, table};
///
/// let rendered = table(&Record::new().with("query", "SELECT * FROM accounts WHERE id = 7"));
///
/// assert!(rendered.contains("SELECT * FROM accoun..."));
/// ```
#[must_use]
pub fn table(record: &Record) -> String {
    let row = record.map_values(|_, value| match value {
        CellValue::Date(date) => CellValue::Text(iso_8601(date)),
        CellValue::Text(text) => CellValue::Text(shorten(text)),
        other => other.clone(),
    });

    render(&[row])
}

fn shorten(text: &str) -> String {
    if text.chars().nth(MAX_TEXT_CHARS).is_none() {
        return text.to_owned();
    }

    text.chars()
        .take(MAX_TEXT_CHARS)
        .chain(ELLIPSIS.chars())
        .collect()
}

/// Column names in order of first appearance across all rows.
fn columns(rows: &[Record]) -> Vec<&str> {
    let mut columns: Vec<&str> = Vec::new();

    for key in rows.iter().flat_map(Record::keys) {
        if !columns.contains(&key) {
            columns.push(key);
        }
    }

    columns
}

fn render(rows: &[Record]) -> String {
    let columns = columns(rows);

    if columns.is_empty() {
        return String::new();
    }

    let mut table = Table::new();
    table.load_preset(presets::ASCII_FULL).set_header(columns.clone());

    for row in rows {
        table.add_row(columns.iter().map(|column| {
            // A record that lacks a column gets a blank cell rather than an absent marker.
            row.get(column).map(ToString::to_string).unwrap_or_default()
        }));
    }

    format!("\n{table}")
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    #[test]
    fn time_table_without_records_is_empty() {
        assert_eq!(time_table(&[]), "");
    }

    #[test]
    fn time_table_adds_unit_to_numeric_durations() {
        let rendered = time_table(&[
            Record::new().with("action", "a").with("duration", 42_i64),
            Record::new().with("action", "b").with("duration", 1.5_f64),
        ]);

        assert!(rendered.starts_with('\n'));
        assert!(rendered.contains("42 ms"));
        assert!(rendered.contains("1.5 ms"));
    }

    #[test]
    fn time_table_treats_infinity_as_numeric_and_nan_as_not() {
        let rendered = time_table(&[
            Record::new().with("action", "a").with("duration", f64::INFINITY),
            Record::new().with("action", "b").with("duration", f64::NAN),
        ]);

        assert!(rendered.contains("inf ms"));
        assert!(rendered.contains("NaN"));
        assert!(!rendered.contains("NaN ms"));
    }

    #[test]
    fn time_table_leaves_absent_durations_unchanged() {
        let rendered = time_table(&[Record::new()
            .with("action", "never_stopped")
            .with("duration", CellValue::Absent)]);

        assert!(!rendered.contains("ms"));
        assert!(rendered.contains(" - "));
    }

    #[test]
    fn time_table_only_touches_duration_field() {
        let rendered = time_table(&[Record::new().with("count", 3_i64).with("duration", 4_i64)]);

        assert!(rendered.contains("4 ms"));
        assert!(!rendered.contains("3 ms"));
    }

    #[test]
    fn table_shortens_long_text() {
        let rendered = table(&Record::new().with(
            "name",
            "a_string_that_is_exactly_twenty_five_chars_long",
        ));

        assert!(rendered.contains("a_string_that_is_exa..."));
        assert!(!rendered.contains("a_string_that_is_exac"));
    }

    #[test]
    fn table_keeps_text_of_exactly_max_length() {
        let text = "abcdefghijklmnopqrst";
        assert_eq!(text.chars().count(), MAX_TEXT_CHARS);

        let rendered = table(&Record::new().with("name", text));

        assert!(rendered.contains(text));
        assert!(!rendered.contains(ELLIPSIS));
    }

    #[test]
    fn shorten_counts_characters_not_bytes() {
        let text = "ääääääääääääääääääääää";

        assert_eq!(shorten(text), "ääääääääääääääääääää...");
    }

    #[test]
    fn table_renders_dates_as_iso_8601() {
        let when = Utc.with_ymd_and_hms(2023, 11, 14, 22, 13, 20).unwrap();

        let rendered = table(&Record::new().with("when", when));

        assert!(rendered.contains("2023-11-14T22:13:20.000Z"));
    }

    #[test]
    fn table_passes_other_values_through() {
        let rendered = table(&Record::new()
            .with("flag", false)
            .with("count", 12_i64)
            .with("missing", CellValue::Absent));

        assert!(rendered.contains("false"));
        assert!(rendered.contains("12"));
        assert!(!rendered.contains("ms"));
    }

    #[test]
    fn table_of_empty_record_is_empty() {
        assert_eq!(table(&Record::new()), "");
    }

    #[test]
    fn columns_are_union_in_first_seen_order() {
        let rows = [
            Record::new().with("a", 1_i64).with("b", 2_i64),
            Record::new().with("c", 3_i64).with("a", 4_i64),
        ];

        assert_eq!(columns(&rows), ["a", "b", "c"]);
    }

    #[test]
    fn output_is_deterministic() {
        let rows = [Record::new().with("action", "x").with("duration", 5_i64)];

        assert_eq!(time_table(&rows), time_table(&rows));
    }

    #[test]
    fn header_precedes_values() {
        let rendered = time_table(&[Record::new().with("action", "first").with("duration", 1_i64)]);

        let header = rendered.find("action").unwrap();
        let value = rendered.find("first").unwrap();
        assert!(header < value);
    }
}
