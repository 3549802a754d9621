//! Date formatting helpers for UI rendering.
//!
//! Pure aside from reading the wall clock; every clock-dependent entry
//! point has a `_from` variant taking an explicit "now" so tests never
//! race midnight.

mod format;
mod range;
mod relative;

pub use format::{DEFAULT_FORMAT, INVALID_DATE, format_date, format_date_default};
pub use range::{RangeKind, date_range, date_range_from};
pub use relative::{relative_time, relative_time_from};

use chrono::{DateTime, Days, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// A date-like input: millisecond timestamp, parseable text, or a native
/// chrono value.
#[derive(Debug, Clone)]
pub enum DateValue {
    Millis(i64),
    Text(String),
    DateTime(DateTime<Local>),
}

impl From<i64> for DateValue {
    fn from(millis: i64) -> Self {
        DateValue::Millis(millis)
    }
}

impl From<&str> for DateValue {
    fn from(text: &str) -> Self {
        DateValue::Text(text.to_string())
    }
}

impl From<String> for DateValue {
    fn from(text: String) -> Self {
        DateValue::Text(text)
    }
}

impl From<DateTime<Local>> for DateValue {
    fn from(dt: DateTime<Local>) -> Self {
        DateValue::DateTime(dt)
    }
}

impl From<DateTime<Utc>> for DateValue {
    fn from(dt: DateTime<Utc>) -> Self {
        DateValue::DateTime(dt.with_timezone(&Local))
    }
}

impl DateValue {
    /// Resolves to a local datetime; `None` when unparseable, never a panic.
    pub fn resolve(&self) -> Option<DateTime<Local>> {
        match self {
            DateValue::Millis(millis) => Local.timestamp_millis_opt(*millis).single(),
            DateValue::DateTime(dt) => Some(*dt),
            DateValue::Text(text) => parse_text(text),
        }
    }
}

fn parse_text(text: &str) -> Option<DateTime<Local>> {
    let text = text.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Local));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S") {
        return Local.from_local_datetime(&naive).earliest();
    }
    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(date) = NaiveDate::parse_from_str(text, fmt) {
            return Local.from_local_datetime(&date.and_hms_opt(0, 0, 0)?).earliest();
        }
    }
    None
}

/// True when the value falls on today's calendar date (year, month and day
/// only).
pub fn is_today(value: impl Into<DateValue>) -> bool {
    matches_day(value.into(), Local::now().date_naive())
}

/// True when the value falls on yesterday's calendar date.
pub fn is_yesterday(value: impl Into<DateValue>) -> bool {
    match Local::now().date_naive().checked_sub_days(Days::new(1)) {
        Some(yesterday) => matches_day(value.into(), yesterday),
        None => false,
    }
}

fn matches_day(value: DateValue, day: NaiveDate) -> bool {
    value
        .resolve()
        .is_some_and(|dt| dt.date_naive() == day)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_resolve_millis_roundtrip() {
        let dt = Local.with_ymd_and_hms(2026, 2, 7, 12, 30, 0).unwrap();
        let value = DateValue::from(dt.timestamp_millis());
        assert_eq!(value.resolve(), Some(dt));
    }

    #[test]
    fn test_resolve_text_formats() {
        assert!(DateValue::from("2026-02-07").resolve().is_some());
        assert!(DateValue::from("2026/02/07").resolve().is_some());
        assert!(DateValue::from("2026-02-07 08:15:00").resolve().is_some());
        assert!(DateValue::from("2026-02-07T08:15:00Z").resolve().is_some());
    }

    #[test]
    fn test_resolve_garbage_is_none() {
        assert!(DateValue::from("not a date").resolve().is_none());
        assert!(DateValue::from("").resolve().is_none());
    }

    #[test]
    fn test_is_today_now() {
        assert!(is_today(Local::now()));
        assert!(!is_yesterday(Local::now()));
    }

    #[test]
    fn test_is_yesterday() {
        let yesterday = Local::now() - Duration::days(1);
        assert!(is_yesterday(yesterday));
        assert!(!is_today(yesterday));
    }

    #[test]
    fn test_predicates_reject_invalid_input() {
        assert!(!is_today("garbage"));
        assert!(!is_yesterday("garbage"));
    }
}
