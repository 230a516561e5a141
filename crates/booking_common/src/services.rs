//! Service abstractions for the booking back end.
//!
//! The booking flow talks to its data source only through [`BookingApi`].
//! This keeps the transport (GraphQL, REST, fixtures) swappable and lets
//! tests inject doubles.

use crate::error::BookingError;
use crate::models::{BookingRequest, BookingResponse, DateAvailability, SessionDetails};
use std::future::Future;
use std::pin::Pin;

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// Operations the booking flow needs from the back end.
pub trait BookingApi: Send + Sync {
    /// Session, host and user metadata for the session being booked.
    fn get_session_details(&self) -> BoxFuture<'_, SessionDetails, BookingError>;

    /// Sparse per-date availability of a host. May cover any span of dates;
    /// callers pick out the month they need.
    fn get_available_date_times(
        &self,
        user_id: &str,
    ) -> BoxFuture<'_, Vec<DateAvailability>, BookingError>;

    /// Submit a booking. The response is passed through unvalidated.
    fn submit_booking(
        &self,
        request: BookingRequest,
    ) -> BoxFuture<'_, BookingResponse, BookingError>;
}
