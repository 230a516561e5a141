// --- File: crates/booking_common/src/lib.rs ---

// Declare modules within this crate
pub mod error;     // Error handling
pub mod logging;   // Logging utilities
pub mod models;    // Wire models shared with the API layer
pub mod services;  // Service abstractions

// Re-export error types and utilities for easier access
pub use error::{
    BookingError,
    Context,
    config_error,
    validation_error,
    not_found,
    external_service_error,
    internal_error,
};

// Re-export logging utilities for easier access
pub use logging::{
    init,
    init_with_level,
    init_from_str,
    log_error,
    log_result,
};

pub use services::{BookingApi, BoxFuture};
