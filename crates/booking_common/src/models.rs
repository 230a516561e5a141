// --- File: crates/booking_common/src/models.rs ---

// Wire models exchanged with the booking API layer. Field names follow the
// camelCase JSON of the upstream GraphQL schema.

use serde::{Deserialize, Serialize};

/// The host offering the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionHost {
    pub id: String,
    pub name: String,
    pub title: String,
    pub avatar: String,
}

/// The user booking the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// IANA name or a display name such as "Eastern European Time". May be empty.
    #[serde(default)]
    pub time_zone: String,
}

impl SessionUser {
    /// "First Last", trimmed so a missing half does not leave a stray space.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// Host, user and session metadata for one bookable session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionDetails {
    pub id: String,
    pub host: SessionHost,
    pub user: SessionUser,
    pub session_type: String,
    pub session_title: String,
    /// Duration in minutes
    pub duration: u32,
    pub meeting_platform: String,
    #[serde(default)]
    pub meeting_platform_icon: Option<String>,
}

/// One bookable interval as delivered upstream, "HH:MM:SS" bounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TimeRange {
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
}

impl TimeRange {
    pub fn new(start: &str, end: &str) -> Self {
        Self {
            start: Some(start.to_string()),
            end: Some(end.to_string()),
        }
    }
}

/// Sparse availability entry for a single date ("YYYY-MM-DD").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateAvailability {
    pub date: String,
    #[serde(default)]
    pub times: Option<Vec<TimeRange>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub session_id: String,
    pub host_id: String,
    /// ISO 8601 date string of the selected day
    pub date: String,
    /// Display time of the selected slot, e.g. "9:30am"
    pub time: String,
    pub timezone: String,
    pub user_name: String,
    pub user_email: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Confirmed,
    Pending,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub id: String,
    pub session_id: String,
    pub host_id: String,
    pub date: String,
    pub time: String,
    pub timezone: String,
    pub status: BookingStatus,
    #[serde(default)]
    pub meeting_link: Option<String>,
}
