// --- File: crates/booking_config/src/models.rs ---

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// --- Booking Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct BookingConfig {
    pub session_id: String, // Loaded via BOOKING__BOOKING__SESSION_ID
    pub user_id: String,    // Host whose availability is queried
    #[serde(default = "default_timezone")]
    pub default_timezone: String, // Used when the session has no user timezone
    /// Shifts "now" back by this many months. Zero means the real clock.
    #[serde(default)]
    pub clock_month_offset: u32,
    /// Pins "today" to a "YYYY-MM-DD" date, for demos and reproducible runs.
    #[serde(default)]
    pub fixed_today: Option<String>,
}

fn default_timezone() -> String {
    "UTC".to_string()
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            session_id: String::new(),
            user_id: String::new(),
            default_timezone: default_timezone(),
            clock_month_offset: 0,
            fixed_today: None,
        }
    }
}

// --- Logging Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String, // trace | debug | info | warn | error
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

// --- Unified App Configuration ---
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    // Booking config is mandatory
    pub booking: BookingConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    /// Extra timezone abbreviations, merged over the built-in table.
    #[serde(default)]
    pub timezones: HashMap<String, String>,

    /// Optional JSON file with session and availability fixtures.
    #[serde(default)]
    pub fixture_path: Option<String>,
}
