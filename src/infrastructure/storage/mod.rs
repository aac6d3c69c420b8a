//! Storage implementations and boundary records

mod memory;
mod record;

pub use memory::InMemoryReservationStore;
pub use record::ReservationRecord;
