//! Reservation domain entity

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::booking::{TimeSlot, VehicleClass};

/// Identifier of a bookable parking spot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpotId(pub u32);

impl std::fmt::Display for SpotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for SpotId {
    fn from(n: u32) -> Self {
        Self(n)
    }
}

/// Reservation status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReservationStatus {
    /// Reservation holds its slot
    Active,
    /// Reservation released by its owner
    Cancelled,
}

impl ReservationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Cancelled => "Cancelled",
        }
    }
}

impl std::fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ReservationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "cancelled" | "canceled" => Ok(Self::Cancelled),
            _ => Err(format!("unknown reservation status: {}", s)),
        }
    }
}

/// A proposed reservation, not yet admitted or persisted.
///
/// Carries everything the conflict engine needs; an id is only minted once
/// the candidate is accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationCandidate {
    pub spot: SpotId,
    pub date: NaiveDate,
    pub slot: TimeSlot,
    pub vehicle: VehicleClass,
    pub owner: String,
}

impl ReservationCandidate {
    pub fn new(
        spot: impl Into<SpotId>,
        date: NaiveDate,
        slot: TimeSlot,
        vehicle: VehicleClass,
        owner: impl Into<String>,
    ) -> Self {
        Self {
            spot: spot.into(),
            date,
            slot,
            vehicle,
            owner: owner.into(),
        }
    }
}

/// Parking spot reservation. Immutable once created; the only state change
/// is cancellation. Modification is cancel + rebook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    /// Unique reservation ID, assigned at admission
    pub id: Uuid,
    /// Spot this reservation holds
    pub spot: SpotId,
    /// Calendar day (the slot carries the time-of-day part)
    pub date: NaiveDate,
    /// Time window within the day
    pub slot: TimeSlot,
    /// Vehicle class the spot is claimed for
    pub vehicle: VehicleClass,
    /// Holder of the reservation; not required to be unique
    pub owner: String,
    /// Current status
    pub status: ReservationStatus,
    /// When the reservation was created. Informational only (lead-time
    /// display); never consulted by conflict logic.
    pub created_at: DateTime<Utc>,
}

impl Reservation {
    /// Admit a candidate: mint an id and stamp the creation time.
    pub fn admit(candidate: ReservationCandidate) -> Self {
        Self {
            id: Uuid::new_v4(),
            spot: candidate.spot,
            date: candidate.date,
            slot: candidate.slot,
            vehicle: candidate.vehicle,
            owner: candidate.owner,
            status: ReservationStatus::Active,
            created_at: Utc::now(),
        }
    }

    /// Release this reservation.
    pub fn cancel(&mut self) {
        self.status = ReservationStatus::Cancelled;
    }

    pub fn is_active(&self) -> bool {
        self.status == ReservationStatus::Active
    }

    /// Whether `owner` holds this reservation. Owner names compare exactly;
    /// identity normalization happens upstream.
    pub fn is_owned_by(&self, owner: &str) -> bool {
        self.owner == owner
    }
}

// ── Tests ──────────────────────────────────────────────────────
