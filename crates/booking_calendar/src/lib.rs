// --- File: crates/booking_calendar/src/lib.rs ---
pub mod availability;
pub mod clock;
pub mod date_utils;
#[cfg(test)]
mod date_utils_proptest;
#[cfg(test)]
mod date_utils_test;
pub mod error;
pub mod flow;
pub mod service;
pub mod state;
pub mod timezone;

pub use availability::{map_to_calendar, AvailabilityCalendar, DayAvailability, TimeSlot};
pub use clock::{Clock, FixedClock, ShiftedClock, SystemClock};
pub use error::CalendarError;
pub use flow::BookingFlow;
pub use service::{BookingFixture, InMemoryBookingApi};
pub use state::{BookingState, BookingStep, LoadingState};
pub use timezone::TimezoneTable;
