//! Timezone abbreviations for display ("9:00am - 9:30am (EET)").

use chrono::{NaiveDate, TimeZone};
use chrono_tz::Tz;
use std::collections::HashMap;

/// The built-in abbreviation table. Unknown names return `None`.
pub fn builtin_abbreviation(timezone: &str) -> Option<&'static str> {
    match timezone {
        "Eastern European Time" => Some("EET"),
        "Central European Time" => Some("CET"),
        "Pacific Standard Time" => Some("PST"),
        "Eastern Standard Time" => Some("EST"),
        "America/New_York" => Some("EST"),
        _ => None,
    }
}

/// Abbreviation from the built-in table, or the name itself when unknown.
pub fn timezone_abbreviation(timezone: &str) -> String {
    builtin_abbreviation(timezone)
        .map(str::to_string)
        .unwrap_or_else(|| timezone.to_string())
}

/// Resolves an IANA zone name to the abbreviation in force at noon of `date`
/// ("Europe/Zurich" gives "CET" in winter and "CEST" in summer).
pub fn resolve_iana_abbreviation(timezone: &str, date: NaiveDate) -> Option<String> {
    let tz: Tz = timezone.parse().ok()?;
    let noon = date.and_hms_opt(12, 0, 0)?;
    let local = tz.from_local_datetime(&noon).earliest()?;
    Some(local.format("%Z").to_string())
}

/// Like [`timezone_abbreviation`], but IANA names missing from the table are
/// resolved for the given date before falling back to the name itself.
pub fn timezone_abbreviation_on(timezone: &str, date: NaiveDate) -> String {
    TimezoneTable::default().abbreviate_on(timezone, date)
}

/// Built-in abbreviations extended with configured entries.
///
/// Lookup order: configured entries, built-in table, IANA resolution (dated
/// lookups only), then the name unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimezoneTable {
    extra: HashMap<String, String>,
}

impl TimezoneTable {
    pub fn new(extra: HashMap<String, String>) -> Self {
        Self { extra }
    }

    fn lookup(&self, timezone: &str) -> Option<String> {
        self.extra
            .get(timezone)
            .cloned()
            .or_else(|| builtin_abbreviation(timezone).map(str::to_string))
    }

    pub fn abbreviate(&self, timezone: &str) -> String {
        self.lookup(timezone)
            .unwrap_or_else(|| timezone.to_string())
    }

    pub fn abbreviate_on(&self, timezone: &str, date: NaiveDate) -> String {
        self.lookup(timezone)
            .or_else(|| resolve_iana_abbreviation(timezone, date))
            .unwrap_or_else(|| timezone.to_string())
    }
}
