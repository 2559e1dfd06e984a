//! Date and cursor parsing helpers shared across the query path.
//!
//! Filter values arrive as free-form query strings; everything here parses
//! leniently and returns `None` for malformed input so a bad filter degrades
//! to "no filter" instead of failing the request.

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime};

/// Wire format for pagination cursors: creation timestamp with microsecond
/// precision.
pub const CURSOR_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

pub fn format_cursor(timestamp: NaiveDateTime) -> String {
    timestamp.format(CURSOR_FORMAT).to_string()
}

pub fn parse_cursor(cursor: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(cursor, CURSOR_FORMAT).ok()
}

/// Parse a strict `YYYY-MM` month filter into a half-open date range
/// covering that month.
pub fn parse_month_range(month: &str) -> Option<(NaiveDate, NaiveDate)> {
    let (year_part, month_part) = month.split_once('-')?;
    if year_part.len() != 4 || month_part.len() != 2 {
        return None;
    }

    let year: i32 = year_part.parse().ok()?;
    let month: u32 = month_part.parse().ok()?;

    let start = NaiveDate::from_ymd_opt(year, month, 1)?;
    let end = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };

    Some((start, end))
}

/// Parse a strict `YYYY-MM-DD` calendar date.
pub fn parse_entry_date(date: &str) -> Option<NaiveDate> {
    if date.len() != 10 {
        return None;
    }
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}

/// Monday of the week containing `date`; the date itself when it already is
/// a Monday.
pub fn most_recent_monday(date: NaiveDate) -> NaiveDate {
    let offset = date.weekday().num_days_from_monday() as u64;
    date.checked_sub_days(Days::new(offset)).unwrap_or(date)
}
