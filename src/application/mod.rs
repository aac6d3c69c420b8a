//! Application layer - use cases over the domain

pub mod booking;

// Re-export key types for convenience
pub use booking::{BookingOutcome, BookingService};
