use crate::date_utils::{days_in_month, format_12h, format_24h, is_same_day, start_of_month};
use crate::error::CalendarError;
use booking_common::models::{DateAvailability, TimeRange};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Spacing between generated slots.
pub const SLOT_INTERVAL_MINUTES: u32 = 30;

// --- Data Structures ---

/// One bookable start time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Display time, e.g. "9:00am"
    pub time: String,
    /// 24-hour value, e.g. "09:00"
    pub value: String,
    pub available: bool,
}

impl TimeSlot {
    /// An available slot starting `minutes` after midnight.
    pub fn at_minutes(minutes: u32) -> Self {
        Self {
            time: format_12h(minutes),
            value: format_24h(minutes),
            available: true,
        }
    }

    /// Selection identity: two slots are the same choice when their display
    /// times match.
    pub fn same_time(&self, other: &TimeSlot) -> bool {
        self.time == other.time
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayAvailability {
    pub date: NaiveDate,
    /// True iff `time_slots` is non-empty.
    pub available: bool,
    pub time_slots: Vec<TimeSlot>,
}

/// A single month, one entry per calendar day in ascending order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityCalendar {
    /// 0-indexed month
    pub month: u32,
    pub year: i32,
    pub days: Vec<DayAvailability>,
}

impl AvailabilityCalendar {
    /// The entry for the day of `date`, if it belongs to this month.
    pub fn day<D: Datelike>(&self, date: &D) -> Option<&DayAvailability> {
        self.days.iter().find(|day| is_same_day(&day.date, date))
    }

    /// Dates that have at least one slot.
    pub fn available_dates(&self) -> Vec<NaiveDate> {
        self.days
            .iter()
            .filter(|day| day.available)
            .map(|day| day.date)
            .collect()
    }
}

// --- Mapping Logic ---

/// Parses "HH:MM" or "HH:MM:SS" into minutes since midnight. "24:00" is
/// accepted as an end-of-day bound.
pub fn parse_time_of_day(time: &str) -> Option<u32> {
    let mut parts = time.trim().split(':');
    let hours: u32 = parts.next()?.parse().ok()?;
    let minutes: u32 = parts.next()?.parse().ok()?;
    if minutes >= 60 || hours > 24 || (hours == 24 && minutes > 0) {
        return None;
    }
    Some(hours * 60 + minutes)
}

/// Slots every [`SLOT_INTERVAL_MINUTES`] from `start` (inclusive) to `end`
/// (exclusive). A range with a missing or unparseable bound yields nothing.
pub fn slots_for_range(range: &TimeRange) -> Vec<TimeSlot> {
    let (Some(start), Some(end)) = (range.start.as_deref(), range.end.as_deref()) else {
        debug!("Skipping time range with missing bound: {:?}", range);
        return Vec::new();
    };
    let (Some(start_minutes), Some(end_minutes)) = (parse_time_of_day(start), parse_time_of_day(end))
    else {
        warn!("Skipping unparseable time range {} - {}", start, end);
        return Vec::new();
    };

    (start_minutes..end_minutes)
        .step_by(SLOT_INTERVAL_MINUTES as usize)
        .map(TimeSlot::at_minutes)
        .collect()
}

/// Expands sparse per-date ranges into a dense calendar for one month.
///
/// The result has exactly one entry per day of the month. Entries for other
/// months are ignored; when a date appears twice the later entry wins.
///
/// A day is available only when it yields at least one slot, so an entry
/// whose ranges are all missing a bound is unavailable. Upstream marks such
/// an entry available because its `times` list is non-empty.
pub fn map_to_calendar(
    availabilities: &[DateAvailability],
    month: u32,
    year: i32,
) -> Result<AvailabilityCalendar, CalendarError> {
    let first = start_of_month(year, month)?;
    let day_count = days_in_month(year, month)?;

    let mut by_date: HashMap<NaiveDate, &DateAvailability> = HashMap::new();
    for availability in availabilities {
        match NaiveDate::parse_from_str(&availability.date, "%Y-%m-%d") {
            Ok(date) => {
                by_date.insert(date, availability);
            }
            Err(e) => warn!("Ignoring availability with bad date '{}': {}", availability.date, e),
        }
    }

    let days: Vec<DayAvailability> = first
        .iter_days()
        .take(day_count as usize)
        .map(|date| {
            let time_slots: Vec<TimeSlot> = by_date
                .get(&date)
                .and_then(|entry| entry.times.as_ref())
                .map(|ranges| ranges.iter().flat_map(slots_for_range).collect())
                .unwrap_or_default();
            DayAvailability {
                date,
                available: !time_slots.is_empty(),
                time_slots,
            }
        })
        .collect();

    debug!(
        "Mapped {} availability entries onto {}-{:02}: {} bookable days",
        availabilities.len(),
        year,
        month + 1,
        days.iter().filter(|d| d.available).count()
    );

    Ok(AvailabilityCalendar { month, year, days })
}
