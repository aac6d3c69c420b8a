//! Reservation repository interface

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use super::model::{Reservation, SpotId};
use crate::domain::DomainResult;

/// Storage seam for reservations. The engine never touches this; it only
/// sees the snapshots a caller fetched here.
///
/// TODO(atomicity): between a snapshot read and `save` there is a
/// check-then-act gap: two concurrent bookings can both pass evaluation
/// and both persist. A backend that needs correctness under concurrent
/// bookings must turn `save` into an atomic insert-if-not-conflicting
/// (e.g. a uniqueness constraint over spot/date/slot-class). The engine
/// defines what a conflict is; the store is responsible for enforcing it
/// atomically.
#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// Persist a newly admitted reservation
    async fn save(&self, reservation: Reservation) -> DomainResult<()>;

    /// Find a reservation by ID
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Reservation>>;

    /// All active reservations for one spot on one date
    async fn find_active_for_spot_date(
        &self,
        spot: SpotId,
        date: NaiveDate,
    ) -> DomainResult<Vec<Reservation>>;

    /// All active reservations one owner holds on one date, across spots
    async fn find_active_for_owner_date(
        &self,
        owner: &str,
        date: NaiveDate,
    ) -> DomainResult<Vec<Reservation>>;

    /// Mark a reservation cancelled
    async fn cancel(&self, id: Uuid) -> DomainResult<()>;
}
