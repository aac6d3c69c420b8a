//! # Parking-Spot Booking Engine
//!
//! Conflict-resolution engine and availability classifier for a shared
//! parking-spot reservation system: cars claim a time slot exclusively,
//! motorcycles share a spot up to a configurable cap, and each owner may
//! hold one reservation per day.
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles:
//!
//! - **domain**: Core entities, the pure conflict engine and the
//!   availability classifier
//! - **application**: Booking use cases over a reservation store
//! - **infrastructure**: Storage backends and parse-at-boundary records
//! - **shared**: Cross-cutting concerns (telemetry)
//!
//! The engine and classifier are pure functions over caller-supplied
//! snapshots; persistence and transport belong to the embedding
//! application, which talks to the [`domain::ReservationRepository`] seam.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod shared;

pub use config::{default_config_path, AppConfig, BookingPolicy, LoggingConfig};

// Re-export the core surface for easy access
pub use application::{BookingOutcome, BookingService};
pub use domain::{
    classify, evaluate, overlaps, ConflictReason, Decision, DomainError, DomainResult,
    Reservation, ReservationCandidate, ReservationRepository, ReservationStatus, SpotId,
    SpotStatus, TimeSlot, VehicleClass,
};
pub use infrastructure::{InMemoryReservationStore, ReservationRecord};
pub use shared::telemetry::init_tracing;
