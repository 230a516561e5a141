//! Calendar arithmetic and display formatting.
//!
//! Months are 0-indexed throughout (January = 0), matching
//! [`chrono::Datelike::month0`]. Weeks start on Sunday.

use crate::clock::Clock;
use crate::error::CalendarError;
use crate::timezone::{timezone_abbreviation, timezone_abbreviation_on};
use chrono::{Datelike, Months, NaiveDate};

pub const DAYS_PER_WEEK: usize = 7;
/// Five rows of seven days.
pub const SHORT_GRID: usize = 35;
/// Six rows of seven days.
pub const LONG_GRID: usize = 42;

const MINUTES_PER_DAY: u32 = 24 * 60;

// --- Month arithmetic ---

/// First day of the month `month0` of `year`.
pub fn start_of_month(year: i32, month0: u32) -> Result<NaiveDate, CalendarError> {
    if month0 > 11 {
        return Err(CalendarError::InvalidMonth(month0));
    }
    NaiveDate::from_ymd_opt(year, month0 + 1, 1).ok_or(CalendarError::InvalidDate {
        year,
        month: month0,
    })
}

/// Number of days in the month (28-31).
pub fn days_in_month(year: i32, month0: u32) -> Result<u32, CalendarError> {
    let first = start_of_month(year, month0)?;
    let next = first
        .checked_add_months(Months::new(1))
        .ok_or(CalendarError::InvalidDate {
            year,
            month: month0,
        })?;
    Ok(next.signed_duration_since(first).num_days() as u32)
}

/// Last day of the month.
pub fn end_of_month(year: i32, month0: u32) -> Result<NaiveDate, CalendarError> {
    let days = days_in_month(year, month0)?;
    start_of_month(year, month0)?
        .with_day(days)
        .ok_or(CalendarError::InvalidDate {
            year,
            month: month0,
        })
}

/// The first day of the month containing `date`.
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Moves `delta` calendar months from the month containing `date`, always
/// landing on day 1. Out-of-range results leave the month unchanged.
pub fn add_months(date: NaiveDate, delta: i32) -> NaiveDate {
    let first = first_of_month(date);
    let months = Months::new(delta.unsigned_abs());
    let moved = if delta >= 0 {
        first.checked_add_months(months)
    } else {
        first.checked_sub_months(months)
    };
    moved.unwrap_or(first)
}

// --- Calendar grid ---

/// Cells needed for a month that starts `leading` days after Sunday and has
/// `days` days.
///
/// Six rows are needed exactly when the leading padding plus the month does
/// not fit in 35 cells, which happens only for a Friday start with 31 days
/// or a Saturday start with 30 or 31 days.
pub fn grid_size(leading: u32, days: u32) -> usize {
    if (leading + days) as usize > SHORT_GRID {
        LONG_GRID
    } else {
        SHORT_GRID
    }
}

/// Dates for a month view: the month itself plus padding days from the
/// previous and next months, 35 or 42 entries starting on a Sunday.
pub fn calendar_dates(year: i32, month0: u32) -> Result<Vec<NaiveDate>, CalendarError> {
    let first = start_of_month(year, month0)?;
    let days = days_in_month(year, month0)?;
    let leading = first.weekday().num_days_from_sunday();

    let grid_start = first
        .checked_sub_days(chrono::Days::new(u64::from(leading)))
        .ok_or(CalendarError::InvalidDate {
            year,
            month: month0,
        })?;

    Ok(grid_start
        .iter_days()
        .take(grid_size(leading, days))
        .collect())
}

/// Splits a grid into weeks of seven days.
pub fn calendar_rows(dates: &[NaiveDate]) -> Vec<Vec<NaiveDate>> {
    dates
        .chunks(DAYS_PER_WEEK)
        .map(|week| week.to_vec())
        .collect()
}

// --- Predicates ---

/// True when both values fall on the same calendar day. Time of day, if
/// any, is ignored.
pub fn is_same_day<A: Datelike, B: Datelike>(a: &A, b: &B) -> bool {
    a.year() == b.year() && a.month() == b.month() && a.day() == b.day()
}

/// True when the day of `date` is strictly before the clock's today.
pub fn is_past<D: Datelike>(date: &D, clock: &dyn Clock) -> bool {
    let today = clock.today();
    (date.year(), date.ordinal()) < (today.year(), today.ordinal())
}

pub fn is_in_month<D: Datelike>(date: &D, month0: u32, year: i32) -> bool {
    date.month0() == month0 && date.year() == year
}

// --- Formatting ---

/// "Friday, August 8, 2025"
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// "August 2025"
pub fn format_month_year(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

/// Minutes since midnight as "9:00am" / "12:30pm".
pub fn format_12h(minutes: u32) -> String {
    let minutes = minutes % MINUTES_PER_DAY;
    let hours = minutes / 60;
    let mins = minutes % 60;
    let period = if hours >= 12 { "pm" } else { "am" };
    let display_hours = match hours % 12 {
        0 => 12,
        h => h,
    };
    format!("{}:{:02}{}", display_hours, mins, period)
}

/// Minutes since midnight as "09:00".
pub fn format_24h(minutes: u32) -> String {
    let minutes = minutes % MINUTES_PER_DAY;
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Parses "h:mmam" / "h:mmpm" (case-insensitive) into minutes since midnight.
///
/// Hours must be 1-12 and minutes 0-59. Anything else is rejected, so
/// "13:00pm" is not wrapped to "1:00am" the way the upstream parser does.
pub fn parse_12h_time(time: &str) -> Option<u32> {
    let lowered = time.trim().to_ascii_lowercase();
    let (clock, is_pm) = if let Some(rest) = lowered.strip_suffix("am") {
        (rest, false)
    } else if let Some(rest) = lowered.strip_suffix("pm") {
        (rest, true)
    } else {
        return None;
    };

    let (hours, mins) = clock.trim().split_once(':')?;
    let hours: u32 = hours.parse().ok()?;
    let mins: u32 = mins.parse().ok()?;
    if !(1..=12).contains(&hours) || mins >= 60 {
        return None;
    }

    let hours = match (hours, is_pm) {
        (12, false) => 0,
        (12, true) => 12,
        (h, true) => h + 12,
        (h, false) => h,
    };
    Some(hours * 60 + mins)
}

/// Adds `minutes` to a 12-hour time string, wrapping past midnight.
/// Unparseable input comes back unchanged.
pub fn add_minutes_to_time(time: &str, minutes: u32) -> String {
    match parse_12h_time(time) {
        Some(start) => format_12h((start + minutes % MINUTES_PER_DAY) % MINUTES_PER_DAY),
        None => time.to_string(),
    }
}

/// "11:45am - 12:15pm (EST)"
pub fn format_time_range(start_time: &str, duration_minutes: u32, timezone: &str) -> String {
    format_time_range_with_abbreviation(
        start_time,
        duration_minutes,
        &timezone_abbreviation(timezone),
    )
}

/// Range formatting with an already resolved abbreviation.
pub fn format_time_range_with_abbreviation(
    start_time: &str,
    duration_minutes: u32,
    abbreviation: &str,
) -> String {
    format!(
        "{} - {} ({})",
        start_time,
        add_minutes_to_time(start_time, duration_minutes),
        abbreviation
    )
}

/// [`format_time_range`] for a known day, so IANA zone names can be resolved
/// to the abbreviation in force on `date`.
pub fn format_time_range_on(
    date: NaiveDate,
    start_time: &str,
    duration_minutes: u32,
    timezone: &str,
) -> String {
    format_time_range_with_abbreviation(
        start_time,
        duration_minutes,
        &timezone_abbreviation_on(timezone, date),
    )
}
