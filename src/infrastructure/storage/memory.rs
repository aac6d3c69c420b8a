//! In-memory storage implementation

use async_trait::async_trait;
use chrono::NaiveDate;
use dashmap::DashMap;
use uuid::Uuid;

use crate::domain::reservation::{Reservation, ReservationRepository, SpotId};
use crate::domain::{DomainError, DomainResult};

/// In-memory reservation store for development and testing. Also serves as
/// the reference implementation of the repository contract.
///
/// Shares the repository-level caveat: `save` is a plain insert, so the
/// check-then-act gap between snapshot and save is not closed here. Good
/// enough for tests and single-writer embedding; see the TODO on
/// `ReservationRepository`.
#[derive(Debug, Default)]
pub struct InMemoryReservationStore {
    reservations: DashMap<Uuid, Reservation>,
}

impl InMemoryReservationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of reservations held, any status. Test helper.
    pub fn len(&self) -> usize {
        self.reservations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reservations.is_empty()
    }
}

#[async_trait]
impl ReservationRepository for InMemoryReservationStore {
    async fn save(&self, reservation: Reservation) -> DomainResult<()> {
        if self.reservations.contains_key(&reservation.id) {
            return Err(DomainError::Storage(format!(
                "duplicate reservation id {}",
                reservation.id
            )));
        }
        self.reservations.insert(reservation.id, reservation);
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Reservation>> {
        Ok(self.reservations.get(&id).map(|r| r.clone()))
    }

    async fn find_active_for_spot_date(
        &self,
        spot: SpotId,
        date: NaiveDate,
    ) -> DomainResult<Vec<Reservation>> {
        Ok(self
            .reservations
            .iter()
            .filter(|r| r.is_active() && r.spot == spot && r.date == date)
            .map(|r| r.clone())
            .collect())
    }

    async fn find_active_for_owner_date(
        &self,
        owner: &str,
        date: NaiveDate,
    ) -> DomainResult<Vec<Reservation>> {
        Ok(self
            .reservations
            .iter()
            .filter(|r| r.is_active() && r.date == date && r.is_owned_by(owner))
            .map(|r| r.clone())
            .collect())
    }

    async fn cancel(&self, id: Uuid) -> DomainResult<()> {
        match self.reservations.get_mut(&id) {
            Some(mut r) => {
                r.cancel();
                Ok(())
            }
            None => Err(DomainError::NotFound {
                entity: "Reservation",
                field: "id",
                value: id.to_string(),
            }),
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────
