//! Flat records that the table renderer consumes.

use std::{fmt, mem};

use chrono::{DateTime, SecondsFormat, Utc};

/// The value of a single cell in a [`Record`].
///
/// Each variant is rendered as plain text. The table entry points treat some variants
/// specially: [`time_table()`](crate::time_table) appends a unit to numeric durations and
/// [`table()`](crate::table) rewrites dates and shortens long text.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub enum CellValue {
    /// No value has been set. Rendered as `-`.
    #[default]
    Absent,

    /// A whole number.
    Integer(i64),

    /// A fractional number.
    Float(f64),

    /// A boolean flag.
    Bool(bool),

    /// Free text.
    Text(String),

    /// A point in time, rendered in ISO-8601 form.
    Date(DateTime<Utc>),
}

impl CellValue {
    /// Whether this value is a number. Infinities count as numbers, NaN does not.
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        match self {
            Self::Integer(_) => true,
            Self::Float(value) => !value.is_nan(),
            _ => false,
        }
    }

    /// Whether this value is [`CellValue::Absent`].
    #[must_use]
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

/// Formats a date the way the table entry points display it, e.g. `2024-01-02T03:04:05.678Z`.
#[must_use]
pub(crate) fn iso_8601(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => write!(f, "-"),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Text(value) => write!(f, "{value}"),
            Self::Date(value) => write!(f, "{}", iso_8601(value)),
        }
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<DateTime<Utc>> for CellValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Date(value)
    }
}

impl<T> From<Option<T>> for CellValue
where
    T: Into<Self>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

/// An ordered mapping of column name to [`CellValue`].
///
/// Keys are unique. Setting a key that already exists replaces its value
/// without moving it, so the column order is the order of first insertion.
///
/// # Examples
///
/// ```
/// use perf_tracker::{CellValue, Record};
///
/// let record = Record::new()
///     .with("action", "parse")
///     .with("duration", 42_i64);
///
/// assert_eq!(record.get("duration"), Some(&CellValue::Integer(42)));
/// assert_eq!(record.keys().collect::<Vec<_>>(), ["action", "duration"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Record {
    fields: Vec<(String, CellValue)>,
}

impl Record {
    /// Creates a record with no fields.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field and returns the record, for building records inline.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Sets a field, returning the previous value if the key was already present.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<CellValue>,
    ) -> Option<CellValue> {
        let key = key.into();
        let value = value.into();

        if let Some((_, existing)) = self.fields.iter_mut().find(|(k, _)| *k == key) {
            return Some(mem::replace(existing, value));
        }

        self.fields.push((key, value));
        None
    }

    /// Gets the value of a field, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&CellValue> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value)
    }

    /// Iterates over the fields in column order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CellValue)> {
        self.fields.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Iterates over the field names in column order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(key, _)| key.as_str())
    }

    /// The number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Produces a new record with every value passed through `f`, keeping keys and order.
    #[must_use]
    pub(crate) fn map_values(&self, mut f: impl FnMut(&str, &CellValue) -> CellValue) -> Self {
        Self {
            fields: self
                .fields
                .iter()
                .map(|(key, value)| (key.clone(), f(key, value)))
                .collect(),
        }
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<CellValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Self::new();

        for (key, value) in iter {
            record.insert(key, value);
        }

        record
    }
}
