use booking_common::BookingError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalendarError {
    #[error("Invalid month index: {0} (expected 0-11)")]
    InvalidMonth(u32),
    #[error("Date out of range: year {year}, month index {month}")]
    InvalidDate { year: i32, month: u32 },
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Booking API error: {0}")]
    Api(#[from] BookingError),
}
