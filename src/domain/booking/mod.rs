//! Booking decision logic
//!
//! The conflict engine and the availability classifier, plus the slot
//! vocabulary they share. Everything here is pure: read-only snapshots in,
//! values out.

pub mod availability;
pub mod engine;
pub mod slot;

pub use availability::{classify, SpotStatus};
pub use engine::{evaluate, ConflictReason, Decision};
pub use slot::{overlaps, TimeSlot, VehicleClass};
