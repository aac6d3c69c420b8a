//! Daily availability classification
//!
//! Derives the tri-state status shown next to each spot in listings. This
//! is a coarse per-day summary for display and for gating the "book"
//! affordance. It is intentionally less precise than the conflict engine
//! and must never be used to admit or reject an actual booking attempt.
//! A spot shown as `Partial` can still refuse a specific slot; both sides
//! are implemented to exactly this divergence so UI and engine agree.

use crate::domain::booking::TimeSlot;
use crate::domain::reservation::Reservation;
use crate::domain::VehicleClass;

/// Display status of a spot for one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpotStatus {
    /// No active reservations
    Available,
    /// Something is booked but capacity may remain
    Partial,
    /// Cars have fully claimed the day
    Full,
}

impl SpotStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Partial => "Partial",
            Self::Full => "Full",
        }
    }
}

impl std::fmt::Display for SpotStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classify one spot's day from its reservations (spot/date-scoped set,
/// caller-filtered). Never fails; an empty day is `Available`.
///
/// Saturation of the motorcycle area alone never reaches `Full`: that is
/// counted per day at this aggregate level, and a car window may remain,
/// so the day stays `Partial`. The engine stays the authority on specific
/// candidates.
pub fn classify(same_spot_day: &[Reservation]) -> SpotStatus {
    let active: Vec<&Reservation> = same_spot_day.iter().filter(|r| r.is_active()).collect();
    if active.is_empty() {
        return SpotStatus::Available;
    }

    let cars_full = active
        .iter()
        .filter(|r| r.vehicle == VehicleClass::Car)
        .any(|r| r.slot == TimeSlot::FullDay)
        || (active
            .iter()
            .any(|r| r.vehicle == VehicleClass::Car && r.slot == TimeSlot::Morning)
            && active
                .iter()
                .any(|r| r.vehicle == VehicleClass::Car && r.slot == TimeSlot::Afternoon));

    if cars_full {
        // Cars fully claim the spot regardless of motorcycle state.
        return SpotStatus::Full;
    }

    SpotStatus::Partial
}

// ── Tests ──────────────────────────────────────────────────────
