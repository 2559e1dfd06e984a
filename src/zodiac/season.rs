use chrono::{Datelike, NaiveDate};

use super::ZodiacSign;

/// A concrete zodiac season anchored to real calendar years, both endpoints
/// inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasonRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub days_count: usize,
    pub dates: Vec<NaiveDate>,
}

/// Resolve the season of `sign` that the given date belongs to, assigning
/// years to the sign's `MM-DD` boundaries.
///
/// For wrapping signs the season starts in the year of the reference date
/// when the date is on or after the start boundary, otherwise in the year
/// before. Non-wrapping signs shift only the violated endpoint, so a date
/// outside the sign's own season produces the nearest enclosing range rather
/// than an error.
pub fn season_range(date: NaiveDate, sign: ZodiacSign) -> SeasonRange {
    let def = sign.def();
    let year = date.year();
    let (month, day) = (date.month(), date.day());

    let mut start_year = year;
    let mut end_year = year;

    let crosses_year = def.start_month > def.end_month
        || (def.start_month == def.end_month && def.start_day > def.end_day);

    if crosses_year {
        if month > def.start_month || (month == def.start_month && day >= def.start_day) {
            end_year = year + 1;
        } else {
            start_year = year - 1;
        }
    } else {
        if month < def.start_month || (month == def.start_month && day < def.start_day) {
            start_year -= 1;
        }
        if month > def.end_month || (month == def.end_month && day > def.end_day) {
            end_year += 1;
        }
    }

    let start = civil(start_year, def.start_month, def.start_day);
    let end = civil(end_year, def.end_month, def.end_day);

    let mut dates = Vec::new();
    let mut current = start;
    while current <= end {
        dates.push(current);
        match current.succ_opt() {
            Some(next) => current = next,
            None => break,
        }
    }

    SeasonRange {
        start,
        end,
        days_count: dates.len(),
        dates,
    }
}

// Sign boundaries are always valid month/day pairs, so the fallback is
// unreachable in practice.
fn civil(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}
