//! Booking selection state and the views derived from it.
//!
//! [`BookingState`] is plain owned data. Every derived value is a method that
//! recomputes from the current fields, so there is nothing to invalidate.

use crate::availability::{AvailabilityCalendar, TimeSlot};
use crate::clock::{Clock, SystemClock};
use crate::date_utils::{
    add_months, calendar_dates, first_of_month, format_long_date, format_month_year,
    format_time_range_with_abbreviation, is_in_month, is_past, is_same_day,
};
use crate::error::CalendarError;
use crate::timezone::TimezoneTable;
use booking_common::models::{BookingRequest, BookingResponse, SessionDetails};
use booking_common::validation_error;
use chrono::{Datelike, NaiveDate};
use std::sync::Arc;
use tracing::debug;

pub const DEFAULT_TIMEZONE: &str = "UTC";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadingState {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// Where the user is in the booking flow, as implied by the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStep {
    Idle,
    DateSelected,
    TimeSelected,
    /// Confirmation submitted, response pending.
    Confirmed,
    Success,
}

#[derive(Debug, Clone)]
pub struct BookingState {
    clock: Arc<dyn Clock>,
    timezones: TimezoneTable,
    default_timezone: String,

    session_data: Option<SessionDetails>,
    selected_date: Option<NaiveDate>,
    selected_time: Option<TimeSlot>,
    availabilities: Option<AvailabilityCalendar>,
    current_month: NaiveDate,
    loading_state: LoadingState,
    error: Option<String>,
    submitting: bool,
    confirmation: Option<BookingResponse>,
}

impl Default for BookingState {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock))
    }
}

impl BookingState {
    /// Empty state showing the clock's current month.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        let current_month = first_of_month(clock.today());
        Self {
            clock,
            timezones: TimezoneTable::default(),
            default_timezone: DEFAULT_TIMEZONE.to_string(),
            session_data: None,
            selected_date: None,
            selected_time: None,
            availabilities: None,
            current_month,
            loading_state: LoadingState::Idle,
            error: None,
            submitting: false,
            confirmation: None,
        }
    }

    pub fn with_default_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.default_timezone = timezone.into();
        self
    }

    pub fn with_timezones(mut self, timezones: TimezoneTable) -> Self {
        self.timezones = timezones;
        self
    }

    // --- Raw fields ---

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    pub fn session_data(&self) -> Option<&SessionDetails> {
        self.session_data.as_ref()
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected_date
    }

    pub fn selected_time(&self) -> Option<&TimeSlot> {
        self.selected_time.as_ref()
    }

    pub fn availabilities(&self) -> Option<&AvailabilityCalendar> {
        self.availabilities.as_ref()
    }

    /// First day of the month being shown.
    pub fn current_month(&self) -> NaiveDate {
        self.current_month
    }

    pub fn loading_state(&self) -> LoadingState {
        self.loading_state
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn confirmation(&self) -> Option<&BookingResponse> {
        self.confirmation.as_ref()
    }

    // --- Derived views ---

    /// The session user's timezone, or the default when no session (or an
    /// empty timezone) is loaded.
    pub fn timezone(&self) -> &str {
        self.session_data
            .as_ref()
            .map(|session| session.user.time_zone.as_str())
            .filter(|tz| !tz.is_empty())
            .unwrap_or(self.default_timezone.as_str())
    }

    /// "Friday, August 8, 2025", or empty without a selected date.
    pub fn formatted_selected_date(&self) -> String {
        self.selected_date
            .map(format_long_date)
            .unwrap_or_default()
    }

    /// "9:00am - 9:30am (EET)" for the selected slot and session duration, or
    /// empty when either is missing.
    pub fn formatted_time_range(&self) -> String {
        let (Some(time), Some(session)) = (&self.selected_time, &self.session_data) else {
            return String::new();
        };
        let timezone = self.timezone();
        let abbreviation = match self.selected_date {
            Some(date) => self.timezones.abbreviate_on(timezone, date),
            None => self.timezones.abbreviate(timezone),
        };
        format_time_range_with_abbreviation(&time.time, session.duration, &abbreviation)
    }

    pub fn formatted_current_month(&self) -> String {
        format_month_year(self.current_month)
    }

    /// Dates with at least one slot, ascending.
    pub fn available_dates(&self) -> Vec<NaiveDate> {
        self.availabilities
            .as_ref()
            .map(AvailabilityCalendar::available_dates)
            .unwrap_or_default()
    }

    pub fn time_slots_for_selected_date(&self) -> Vec<TimeSlot> {
        match (self.selected_date, &self.availabilities) {
            (Some(date), Some(calendar)) => calendar
                .day(&date)
                .map(|day| day.time_slots.clone())
                .unwrap_or_default(),
            _ => Vec::new(),
        }
    }

    pub fn is_date_available<D: Datelike>(&self, date: &D) -> bool {
        self.availabilities
            .as_ref()
            .and_then(|calendar| calendar.day(date))
            .map(|day| day.available)
            .unwrap_or(false)
    }

    /// A date can be picked when it is not past, lies in the month being
    /// shown and has slots.
    pub fn is_date_selectable<D: Datelike>(&self, date: &D) -> bool {
        !is_past(date, self.clock.as_ref())
            && is_in_month(date, self.current_month.month0(), self.current_month.year())
            && self.available_dates().iter().any(|d| is_same_day(d, date))
    }

    pub fn is_date_selected<D: Datelike>(&self, date: &D) -> bool {
        self.selected_date
            .map(|selected| is_same_day(&selected, date))
            .unwrap_or(false)
    }

    pub fn is_time_selected(&self, slot: &TimeSlot) -> bool {
        self.selected_time
            .as_ref()
            .map(|selected| selected.same_time(slot))
            .unwrap_or(false)
    }

    /// Grid for the month being shown.
    pub fn calendar_dates(&self) -> Result<Vec<NaiveDate>, CalendarError> {
        calendar_dates(self.current_month.year(), self.current_month.month0())
    }

    pub fn can_proceed_to_time_selection(&self) -> bool {
        self.selected_date.is_some() && self.session_data.is_some()
    }

    pub fn can_proceed_to_confirmation(&self) -> bool {
        self.selected_date.is_some() && self.selected_time.is_some() && self.session_data.is_some()
    }

    pub fn step(&self) -> BookingStep {
        if self.confirmation.is_some() {
            BookingStep::Success
        } else if self.selected_time.is_some() && self.submitting {
            BookingStep::Confirmed
        } else if self.selected_time.is_some() {
            BookingStep::TimeSelected
        } else if self.selected_date.is_some() {
            BookingStep::DateSelected
        } else {
            BookingStep::Idle
        }
    }

    /// The confirmation request for the current selection.
    pub fn booking_request(&self) -> Result<BookingRequest, CalendarError> {
        let (Some(date), Some(time), Some(session)) =
            (self.selected_date, &self.selected_time, &self.session_data)
        else {
            return Err(validation_error("date, time and session are required to confirm").into());
        };

        Ok(BookingRequest {
            session_id: session.id.clone(),
            host_id: session.host.id.clone(),
            date: date.format("%Y-%m-%d").to_string(),
            time: time.time.clone(),
            timezone: self.timezone().to_string(),
            user_name: session.user.display_name(),
            user_email: session.user.email.clone(),
        })
    }

    // --- Mutators ---

    pub fn set_session_data(&mut self, data: SessionDetails) {
        self.session_data = Some(data);
    }

    /// Selecting a date always drops the previously selected time.
    pub fn set_selected_date(&mut self, date: Option<NaiveDate>) {
        self.selected_date = date;
        if date.is_some() {
            self.selected_time = None;
            self.submitting = false;
            self.confirmation = None;
        }
        debug!("Selected date: {:?}", date);
    }

    /// Picking a different time drops any confirmation of the previous one.
    pub fn set_selected_time(&mut self, time: Option<TimeSlot>) {
        debug!("Selected time: {:?}", time.as_ref().map(|t| &t.time));
        let unchanged = match (&self.selected_time, &time) {
            (Some(current), Some(next)) => current.same_time(next),
            (None, None) => true,
            _ => false,
        };
        if !unchanged {
            self.submitting = false;
            self.confirmation = None;
        }
        self.selected_time = time;
    }

    /// Clears time first, then date.
    pub fn clear_selection(&mut self) {
        self.set_selected_time(None);
        self.set_selected_date(None);
    }

    pub fn set_availabilities(&mut self, calendar: AvailabilityCalendar) {
        self.availabilities = Some(calendar);
    }

    /// Shows the month containing `date`.
    pub fn set_current_month(&mut self, date: NaiveDate) {
        self.current_month = first_of_month(date);
    }

    pub fn go_to_next_month(&mut self) {
        self.set_current_month(add_months(self.current_month, 1));
    }

    pub fn go_to_previous_month(&mut self) {
        self.set_current_month(add_months(self.current_month, -1));
    }

    pub fn set_loading_state(&mut self, state: LoadingState) {
        self.loading_state = state;
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }

    /// Marks the current selection as submitted.
    pub fn mark_confirmed(&mut self) {
        self.submitting = true;
    }

    /// Clears the in-flight marker after a failed submission.
    pub fn clear_submitting(&mut self) {
        self.submitting = false;
    }

    pub fn set_confirmation(&mut self, response: BookingResponse) {
        self.submitting = false;
        self.confirmation = Some(response);
    }

    /// Back to the empty state. Configuration (clock, timezones) is kept.
    pub fn reset_all(&mut self) {
        self.session_data = None;
        self.selected_date = None;
        self.selected_time = None;
        self.availabilities = None;
        self.current_month = first_of_month(self.clock.today());
        self.loading_state = LoadingState::Idle;
        self.error = None;
        self.submitting = false;
        self.confirmation = None;
    }
}
