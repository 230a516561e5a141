//! In-memory booking back end.
//!
//! Serves a fixed session and availability list and confirms every booking.
//! Used by the demo binary and by tests that want real (not mocked) API
//! behaviour.

use booking_common::models::{
    BookingRequest, BookingResponse, BookingStatus, DateAvailability, SessionDetails,
};
use booking_common::{
    config_error, internal_error, not_found, BookingApi, BookingError, BoxFuture, Context,
};
use booking_config::AppConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Mutex;
use tracing::{debug, info};
use uuid::Uuid;

pub const DEFAULT_MEETING_LINK: &str = "https://meet.google.com/abc-defg-hij";
pub const DEFAULT_FIXTURE_PATH: &str = "fixtures/session.json";

/// Everything the in-memory API serves, as stored in a JSON fixture file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingFixture {
    pub session: SessionDetails,
    #[serde(default)]
    pub availability: Vec<DateAvailability>,
}

pub struct InMemoryBookingApi {
    fixture: BookingFixture,
    meeting_link: String,
    bookings: Mutex<Vec<BookingResponse>>,
}

impl InMemoryBookingApi {
    pub fn new(fixture: BookingFixture) -> Self {
        Self {
            fixture,
            meeting_link: DEFAULT_MEETING_LINK.to_string(),
            bookings: Mutex::new(Vec::new()),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, BookingError> {
        let fixture: BookingFixture = serde_json::from_str(json)?;
        Ok(Self::new(fixture))
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, BookingError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading fixture {}", path.display()))?;
        info!("Loaded booking fixture from {}", path.display());
        Self::from_json(&json)
    }

    /// Loads the configured fixture and checks that it serves the session
    /// named by `booking.session_id`.
    pub fn from_config(config: &AppConfig) -> Result<Self, BookingError> {
        let path = config
            .fixture_path
            .as_deref()
            .unwrap_or(DEFAULT_FIXTURE_PATH);
        Self::from_file(path)?.for_session(&config.booking.session_id)
    }

    /// Fails unless the fixture's session is `session_id`.
    pub fn for_session(self, session_id: &str) -> Result<Self, BookingError> {
        if self.fixture.session.id != session_id {
            return Err(config_error(format!(
                "fixture serves session {}, configured session is {}",
                self.fixture.session.id, session_id
            )));
        }
        Ok(self)
    }

    pub fn with_meeting_link(mut self, link: impl Into<String>) -> Self {
        self.meeting_link = link.into();
        self
    }

    /// Bookings confirmed so far, oldest first.
    pub fn bookings(&self) -> Result<Vec<BookingResponse>, BookingError> {
        self.bookings
            .lock()
            .map(|bookings| bookings.clone())
            .map_err(|e| internal_error(format!("booking store poisoned: {}", e)))
    }
}

impl BookingApi for InMemoryBookingApi {
    fn get_session_details(&self) -> BoxFuture<'_, SessionDetails, BookingError> {
        Box::pin(async move { Ok(self.fixture.session.clone()) })
    }

    fn get_available_date_times(
        &self,
        user_id: &str,
    ) -> BoxFuture<'_, Vec<DateAvailability>, BookingError> {
        debug!("Serving {} availability entries for {}", self.fixture.availability.len(), user_id);
        Box::pin(async move { Ok(self.fixture.availability.clone()) })
    }

    fn submit_booking(
        &self,
        request: BookingRequest,
    ) -> BoxFuture<'_, BookingResponse, BookingError> {
        Box::pin(async move {
            if request.session_id != self.fixture.session.id {
                return Err(not_found(format!("session {}", request.session_id)));
            }

            let response = BookingResponse {
                id: Uuid::new_v4().to_string(),
                session_id: request.session_id,
                host_id: request.host_id,
                date: request.date,
                time: request.time,
                timezone: request.timezone,
                status: BookingStatus::Confirmed,
                meeting_link: Some(self.meeting_link.clone()),
            };

            self.bookings
                .lock()
                .map_err(|e| internal_error(format!("booking store poisoned: {}", e)))?
                .push(response.clone());

            Ok(response)
        })
    }
}
