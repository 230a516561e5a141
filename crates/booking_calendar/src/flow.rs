//! Drives a [`BookingState`] from a [`BookingApi`].
//!
//! API failures never escape as panics: they are logged, stored in the state
//! as a single user-facing message, and returned to the caller.

use crate::availability::{map_to_calendar, TimeSlot};
use crate::clock::clock_from_config;
use crate::error::CalendarError;
use crate::state::{BookingState, BookingStep, LoadingState};
use crate::timezone::TimezoneTable;
use booking_common::models::BookingResponse;
use booking_common::{log_error, validation_error, BookingApi};
use booking_config::AppConfig;
use chrono::{Datelike, NaiveDate};
use tracing::{debug, info, warn};

pub const SESSION_LOAD_FAILED: &str = "Failed to load session details";
pub const AVAILABILITY_LOAD_FAILED: &str = "Failed to load available dates";
pub const BOOKING_FAILED: &str = "Failed to confirm booking";

pub struct BookingFlow<A: BookingApi> {
    api: A,
    state: BookingState,
    user_id: String,
}

impl<A: BookingApi> BookingFlow<A> {
    /// `user_id` identifies the host whose availability is fetched.
    pub fn new(api: A, state: BookingState, user_id: impl Into<String>) -> Self {
        Self {
            api,
            state,
            user_id: user_id.into(),
        }
    }

    /// Builds the flow from loaded configuration (clock, default timezone,
    /// extra timezone abbreviations, host id).
    pub fn from_config(api: A, config: &AppConfig) -> Result<Self, CalendarError> {
        let clock = clock_from_config(&config.booking)?;
        let state = BookingState::new(clock)
            .with_default_timezone(config.booking.default_timezone.clone())
            .with_timezones(TimezoneTable::new(config.timezones.clone()));
        Ok(Self::new(api, state, config.booking.user_id.clone()))
    }

    pub fn state(&self) -> &BookingState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut BookingState {
        &mut self.state
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub async fn load_session(&mut self) -> Result<(), CalendarError> {
        match self.api.get_session_details().await {
            Ok(session) => {
                info!("Loaded session '{}' ({} min)", session.session_title, session.duration);
                self.state.set_session_data(session);
                Ok(())
            }
            Err(e) => {
                log_error(&e, "Error loading session data");
                self.state.set_error(Some(SESSION_LOAD_FAILED.to_string()));
                Err(e.into())
            }
        }
    }

    /// Fetches and maps availability for the month currently shown.
    pub async fn load_availabilities(&mut self) -> Result<(), CalendarError> {
        let month = self.state.current_month();
        self.state.set_loading_state(LoadingState::Loading);

        let fetched = self.api.get_available_date_times(&self.user_id).await;
        let mapped = match fetched {
            Ok(entries) => map_to_calendar(&entries, month.month0(), month.year()),
            Err(e) => Err(e.into()),
        };

        match mapped {
            Ok(calendar) => {
                info!(
                    "Loaded availability for {}: {} bookable days",
                    self.state.formatted_current_month(),
                    calendar.available_dates().len()
                );
                self.state.set_availabilities(calendar);
                self.state.set_loading_state(LoadingState::Success);
                self.state.set_error(None);
                Ok(())
            }
            Err(e) => {
                log_error(&e, "Error loading availabilities");
                self.state.set_loading_state(LoadingState::Error);
                self.state.set_error(Some(AVAILABILITY_LOAD_FAILED.to_string()));
                Err(e)
            }
        }
    }

    /// Shows the month containing `date` and re-fetches its availability.
    pub async fn change_month(&mut self, date: NaiveDate) -> Result<(), CalendarError> {
        self.state.set_current_month(date);
        self.load_availabilities().await
    }

    pub async fn next_month(&mut self) -> Result<(), CalendarError> {
        self.state.go_to_next_month();
        self.load_availabilities().await
    }

    pub async fn previous_month(&mut self) -> Result<(), CalendarError> {
        self.state.go_to_previous_month();
        self.load_availabilities().await
    }

    /// Selects `date` if it can be booked. Returns whether it was accepted.
    pub fn select_date(&mut self, date: NaiveDate) -> bool {
        if !self.state.is_date_selectable(&date) {
            debug!("Ignoring selection of unavailable date {}", date);
            return false;
        }
        self.state.set_selected_date(Some(date));
        true
    }

    /// Selects `slot` if it is an available slot of the selected date.
    pub fn select_time(&mut self, slot: &TimeSlot) -> bool {
        let offered = slot.available
            && self
                .state
                .time_slots_for_selected_date()
                .iter()
                .any(|candidate| candidate.available && candidate.same_time(slot));
        if !offered {
            debug!("Ignoring selection of slot {} not offered on the selected date", slot.time);
            return false;
        }
        self.state.set_selected_time(Some(slot.clone()));
        true
    }

    /// Submits the current selection. A selection that is already submitted
    /// or booked is not sent again.
    pub async fn confirm(&mut self) -> Result<BookingResponse, CalendarError> {
        match self.state.step() {
            BookingStep::Confirmed | BookingStep::Success => {
                warn!("Booking for the current selection already submitted");
                return Err(validation_error("booking already submitted for this selection").into());
            }
            _ => {}
        }

        let request = match self.state.booking_request() {
            Ok(request) => request,
            Err(e) => {
                warn!("Cannot confirm booking: {}", e);
                return Err(e);
            }
        };

        self.state.mark_confirmed();
        info!("Submitting booking for {} at {}", request.date, request.time);

        match self.api.submit_booking(request).await {
            Ok(response) => {
                info!("Booking {} is {:?}", response.id, response.status);
                self.state.set_error(None);
                self.state.set_confirmation(response.clone());
                Ok(response)
            }
            Err(e) => {
                log_error(&e, "Error confirming booking");
                self.state.clear_submitting();
                self.state.set_error(Some(BOOKING_FAILED.to_string()));
                Err(e.into())
            }
        }
    }

    /// Leaves the flow: every field back to its initial value.
    pub fn restart(&mut self) {
        self.state.reset_all();
    }
}
