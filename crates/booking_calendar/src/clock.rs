//! Injectable source of "now".
//!
//! Anything that depends on today's date (past-day checks, the initial
//! month shown) takes a [`Clock`] instead of reading the system time, so
//! demos and tests can pin or shift the date without global state.

use crate::error::CalendarError;
use booking_config::BookingConfig;
use chrono::{Local, Months, NaiveDate, NaiveDateTime, NaiveTime};
use std::fmt::Debug;
use std::sync::Arc;
use tracing::info;

pub trait Clock: Send + Sync + Debug {
    /// Current local wall-clock time.
    fn now(&self) -> NaiveDateTime;

    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// The machine's local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl FixedClock {
    /// A clock frozen at midnight of `date`.
    pub fn on(date: NaiveDate) -> Self {
        Self(date.and_time(NaiveTime::default()))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Reports the inner clock's time moved back by a number of calendar months.
///
/// Day-of-month is clamped when the target month is shorter (May 31 shifted
/// by three months gives Feb 28/29).
#[derive(Debug, Clone)]
pub struct ShiftedClock<C> {
    inner: C,
    months_back: u32,
}

impl<C: Clock> ShiftedClock<C> {
    pub fn new(inner: C, months_back: u32) -> Self {
        Self { inner, months_back }
    }
}

impl<C: Clock> Clock for ShiftedClock<C> {
    fn now(&self) -> NaiveDateTime {
        let now = self.inner.now();
        now.checked_sub_months(Months::new(self.months_back))
            .unwrap_or(now)
    }
}

/// Builds the clock described by the booking config: pinned to
/// `fixed_today` when set, the system clock otherwise, then shifted back by
/// `clock_month_offset` months.
pub fn clock_from_config(config: &BookingConfig) -> Result<Arc<dyn Clock>, CalendarError> {
    let base: Arc<dyn Clock> = match &config.fixed_today {
        Some(day) => {
            let date = NaiveDate::parse_from_str(day, "%Y-%m-%d").map_err(|e| {
                CalendarError::InvalidConfig(format!("fixed_today '{}': {}", day, e))
            })?;
            info!("Clock pinned to {}", date);
            Arc::new(FixedClock::on(date))
        }
        None => Arc::new(SystemClock),
    };

    if config.clock_month_offset == 0 {
        return Ok(base);
    }
    info!("Clock shifted back by {} months", config.clock_month_offset);
    Ok(Arc::new(ShiftedClock::new(base, config.clock_month_offset)))
}

impl Clock for Arc<dyn Clock> {
    fn now(&self) -> NaiveDateTime {
        self.as_ref().now()
    }
}
