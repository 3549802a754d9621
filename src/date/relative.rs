//! Relative-time rendering ("just now", "3 minutes ago", ...).

use chrono::{DateTime, Local};

use super::format::{INVALID_DATE, format_date};
use super::DateValue;

const MINUTE_MS: i64 = 60 * 1000;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;
// Thirty-day months and twelve-month years: deliberately not calendar-aware.
const MONTH_MS: i64 = 30 * DAY_MS;
const YEAR_MS: i64 = 12 * MONTH_MS;

/// Renders the elapsed time between a value and now.
///
/// Future dates come back as an absolute `YYYY-MM-DD HH:mm` string.
pub fn relative_time(value: impl Into<DateValue>) -> String {
    relative_time_from(value, Local::now())
}

/// [`relative_time`] against an explicit clock.
pub fn relative_time_from(value: impl Into<DateValue>, now: DateTime<Local>) -> String {
    let Some(dt) = value.into().resolve() else {
        return INVALID_DATE.to_string();
    };

    let diff = now.timestamp_millis() - dt.timestamp_millis();
    if diff < 0 {
        return format_date(dt, "YYYY-MM-DD HH:mm");
    }

    if diff < MINUTE_MS {
        "just now".to_string()
    } else if diff < HOUR_MS {
        format!("{} minutes ago", diff / MINUTE_MS)
    } else if diff < DAY_MS {
        format!("{} hours ago", diff / HOUR_MS)
    } else if diff < 2 * DAY_MS {
        "yesterday".to_string()
    } else if diff < 7 * DAY_MS {
        format!("{} days ago", diff / DAY_MS)
    } else if diff < MONTH_MS {
        format!("{} weeks ago", diff / (7 * DAY_MS))
    } else if diff < YEAR_MS {
        format!("{} months ago", diff / MONTH_MS)
    } else {
        format!("{} years ago", diff / YEAR_MS)
    }
}
