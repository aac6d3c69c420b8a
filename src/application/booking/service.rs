//! Booking business logic service

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::BookingPolicy;
use crate::domain::booking::{classify, evaluate, ConflictReason, Decision, SpotStatus};
use crate::domain::reservation::{Reservation, ReservationCandidate, ReservationRepository, SpotId};
use crate::domain::{DomainError, DomainResult};

/// Outcome of a booking attempt. A refusal is a normal result, carried with
/// the reason the caller shows to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingOutcome {
    Confirmed(Reservation),
    Refused(ConflictReason),
}

impl BookingOutcome {
    pub fn is_confirmed(&self) -> bool {
        matches!(self, Self::Confirmed(_))
    }
}

/// Service for booking operations: fetches the snapshots the engine needs,
/// lets it decide, and persists admitted reservations.
///
/// The engine is the sole authority on conflicts; this service never adds
/// admission rules of its own, and it never consults the display classifier
/// to gate a booking.
pub struct BookingService {
    store: Arc<dyn ReservationRepository>,
    policy: BookingPolicy,
}

impl BookingService {
    pub fn new(store: Arc<dyn ReservationRepository>, policy: BookingPolicy) -> Self {
        Self { store, policy }
    }

    pub fn policy(&self) -> &BookingPolicy {
        &self.policy
    }

    /// Current date as seen by this service. Admission compares candidate
    /// dates against this; the engine itself never reads the clock.
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }

    /// Attempt to book `candidate`. On acceptance the reservation is minted
    /// and persisted; on refusal nothing is written.
    pub async fn book(&self, candidate: ReservationCandidate) -> DomainResult<BookingOutcome> {
        let same_spot_day = self
            .store
            .find_active_for_spot_date(candidate.spot, candidate.date)
            .await?;
        let owner_day = self
            .store
            .find_active_for_owner_date(&candidate.owner, candidate.date)
            .await?;

        match evaluate(
            &candidate,
            &same_spot_day,
            &owner_day,
            self.today(),
            &self.policy,
        ) {
            Decision::Accepted => {
                let reservation = Reservation::admit(candidate);
                self.store.save(reservation.clone()).await?;
                info!(
                    reservation_id = %reservation.id,
                    spot = %reservation.spot,
                    date = %reservation.date,
                    slot = %reservation.slot,
                    vehicle = %reservation.vehicle,
                    "Reservation confirmed"
                );
                Ok(BookingOutcome::Confirmed(reservation))
            }
            Decision::Rejected(reason) => {
                info!(
                    spot = %candidate.spot,
                    date = %candidate.date,
                    slot = %candidate.slot,
                    %reason,
                    "Booking refused"
                );
                Ok(BookingOutcome::Refused(reason))
            }
        }
    }

    /// Cancel a reservation. Only its owner may cancel; no other validation
    /// applies (modification is cancel + rebook).
    pub async fn cancel(&self, id: Uuid, requesting_owner: &str) -> DomainResult<()> {
        let reservation =
            self.store
                .find_by_id(id)
                .await?
                .ok_or_else(|| DomainError::NotFound {
                    entity: "Reservation",
                    field: "id",
                    value: id.to_string(),
                })?;

        if !reservation.is_owned_by(requesting_owner) {
            warn!(
                reservation_id = %id,
                owner = requesting_owner,
                "Cancel refused: not the holder"
            );
            return Err(DomainError::NotOwner {
                reservation: id,
                owner: requesting_owner.to_string(),
            });
        }

        self.store.cancel(id).await?;
        info!(reservation_id = %id, "Reservation cancelled");
        Ok(())
    }

    /// Display status of one spot for one day.
    pub async fn spot_status(&self, spot: SpotId, date: NaiveDate) -> DomainResult<SpotStatus> {
        let same_spot_day = self.store.find_active_for_spot_date(spot, date).await?;
        Ok(classify(&same_spot_day))
    }

    /// Display status of every configured spot for one day, in spot order.
    pub async fn day_overview(&self, date: NaiveDate) -> DomainResult<Vec<(SpotId, SpotStatus)>> {
        let mut spots = self.policy.valid_spots.clone();
        spots.sort_unstable();

        let mut overview = Vec::with_capacity(spots.len());
        for spot in spots {
            overview.push((spot, self.spot_status(spot, date).await?));
        }
        Ok(overview)
    }
}

// ── Tests ──────────────────────────────────────────────────────
