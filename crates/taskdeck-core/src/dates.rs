//! Calendar arithmetic shared by the classifier, filter pipeline, and scorer.
//!
//! All comparisons in the dashboard are calendar-day comparisons: a task due
//! "today" is due today regardless of the current hour, so every helper here
//! works on `NaiveDate` and callers strip time-of-day before reaching us.
//! Weeks run Sunday through Saturday.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime};

/// Parse a raw due-date string from the store.
///
/// Accepts plain ISO dates (`2024-06-10`), RFC 3339 timestamps, and
/// datetime-without-offset forms. Returns `None` for anything else; callers
/// degrade to an "Invalid date" classification rather than erroring.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.date());
    }
    None
}

/// Signed calendar-day difference `due - today`.
///
/// Negative means overdue, zero means due today.
pub fn day_diff(due: NaiveDate, today: NaiveDate) -> i64 {
    (due - today).num_days()
}

/// Inclusive Sunday-to-Saturday window containing `today`.
pub fn week_bounds(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = today - Duration::days(today.weekday().num_days_from_sunday() as i64);
    (start, start + Duration::days(6))
}

/// The 7-day window immediately after the current week.
pub fn next_week_bounds(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let (_, end) = week_bounds(today);
    (end + Duration::days(1), end + Duration::days(7))
}

/// Inclusive first-to-last day of the month containing `today`.
pub fn month_bounds(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = today.with_day(1).unwrap_or(today);
    let next_month = if start.month() == 12 {
        NaiveDate::from_ymd_opt(start.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(start.year(), start.month() + 1, 1)
    };
    let end = next_month
        .map(|d| d - Duration::days(1))
        .unwrap_or(start);
    (start, end)
}

/// Whether `date` falls inside an inclusive window.
pub fn in_window(date: NaiveDate, window: (NaiveDate, NaiveDate)) -> bool {
    date >= window.0 && date <= window.1
}
