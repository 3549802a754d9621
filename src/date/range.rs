//! Named local-time ranges for list filters.

use chrono::{DateTime, Datelike, Days, Local, NaiveDate, NaiveTime, TimeZone};

/// Named range selector. `Week` starts Monday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeKind {
    Today,
    Yesterday,
    Week,
    Month,
    Year,
}

/// Start/end pair for the named range: start at 00:00:00.000, end at
/// 23:59:59.999 local time.
pub fn date_range(kind: RangeKind) -> (DateTime<Local>, DateTime<Local>) {
    date_range_from(kind, Local::now())
}

/// [`date_range`] against an explicit clock.
pub fn date_range_from(kind: RangeKind, now: DateTime<Local>) -> (DateTime<Local>, DateTime<Local>) {
    let today = now.date_naive();
    let (start_day, end_day) = match kind {
        RangeKind::Today => (today, today),
        RangeKind::Yesterday => {
            let yesterday = today.checked_sub_days(Days::new(1)).unwrap_or(today);
            (yesterday, yesterday)
        }
        RangeKind::Week => {
            let offset = u64::from(today.weekday().num_days_from_monday());
            let monday = today.checked_sub_days(Days::new(offset)).unwrap_or(today);
            (monday, today)
        }
        RangeKind::Month => (today.with_day(1).unwrap_or(today), today),
        RangeKind::Year => (
            today
                .with_month(1)
                .and_then(|d| d.with_day(1))
                .unwrap_or(today),
            today,
        ),
    };
    (day_start(start_day), day_end(end_day))
}

fn day_start(day: NaiveDate) -> DateTime<Local> {
    local_at(day, NaiveTime::MIN)
}

fn day_end(day: NaiveDate) -> DateTime<Local> {
    let end = NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or(NaiveTime::MIN);
    local_at(day, end)
}

fn local_at(day: NaiveDate, time: NaiveTime) -> DateTime<Local> {
    let naive = day.and_time(time);
    match Local.from_local_datetime(&naive).earliest() {
        Some(dt) => dt,
        // Nonexistent local time (DST gap): fall back to the UTC reading
        None => DateTime::from_naive_utc_and_offset(naive, *Local::now().offset()),
    }
}
