//! Domain layer - core entities, decision logic and repository seams

pub mod booking;
pub mod error;
pub mod reservation;

// Re-export commonly used types
pub use booking::{classify, evaluate, overlaps, ConflictReason, Decision, SpotStatus};
pub use booking::{TimeSlot, VehicleClass};
pub use error::{DomainError, DomainResult};
pub use reservation::{
    Reservation, ReservationCandidate, ReservationRepository, ReservationStatus, SpotId,
};
