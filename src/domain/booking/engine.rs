//! Booking conflict-resolution engine
//!
//! Pure decision logic: given a candidate and read-only snapshots of the
//! existing reservations, decide whether the candidate may be admitted and,
//! if not, exactly why. No I/O, no clock reads, no mutation: `today` and
//! the policy come in as parameters, so identical inputs always produce
//! identical outputs.

use chrono::NaiveDate;

use crate::config::BookingPolicy;
use crate::domain::booking::slot::overlaps;
use crate::domain::reservation::{Reservation, ReservationCandidate};
use crate::domain::VehicleClass;

/// Why a candidate was refused. These are expected, user-facing outcomes,
/// not errors; callers surface the `Display` text directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictReason {
    /// Spot is not in the configured bookable set
    InvalidSpot,
    /// Requested date is before today
    PastDate,
    /// Owner already holds a reservation that day, on any spot
    DuplicateOwnerForDate,
    /// Car request overlaps an existing reservation of any class
    CarSlotConflict,
    /// Motorcycle request overlaps an existing car reservation
    CarPresentConflict,
    /// Motorcycle count in the overlapping window is at the cap
    MotorcycleCapacityExceeded,
}

impl std::fmt::Display for ConflictReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidSpot => write!(f, "spot is not a bookable parking spot"),
            Self::PastDate => write!(f, "date is in the past"),
            Self::DuplicateOwnerForDate => {
                write!(f, "you already hold a reservation for this day")
            }
            Self::CarSlotConflict => write!(f, "the spot is already taken for this time slot"),
            Self::CarPresentConflict => {
                write!(f, "a car already occupies the spot for this time slot")
            }
            Self::MotorcycleCapacityExceeded => {
                write!(f, "the motorcycle area is full for this time slot")
            }
        }
    }
}

/// Outcome of evaluating a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Accepted,
    Rejected(ConflictReason),
}

impl Decision {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// Decide whether `candidate` may be admitted.
///
/// * `same_spot_day`: every reservation on record for the candidate's spot
///   and date. The caller filters; the engine only sees the relevant set.
/// * `owner_day`: every reservation the candidate's owner holds on that
///   date, across ALL spots. A distinct input: the one-reservation-per-
///   owner-per-day rule cannot be answered from the spot-scoped set.
/// * `today`: the caller's current date; candidates before it are refused.
///
/// Cancelled reservations never block anything; both snapshots are reduced
/// to their active entries before any rule runs.
///
/// The car/motorcycle asymmetry is deliberate policy carried over from the
/// booking rules: a car claims its window exclusively and is blocked by any
/// overlapping reservation, motorcycles included, while a motorcycle is
/// blocked only by overlapping cars and by the motorcycle cap. Flagged for
/// product-owner confirmation; do not "fix" it here.
pub fn evaluate(
    candidate: &ReservationCandidate,
    same_spot_day: &[Reservation],
    owner_day: &[Reservation],
    today: NaiveDate,
    policy: &BookingPolicy,
) -> Decision {
    use ConflictReason::*;

    if !policy.is_valid_spot(candidate.spot) {
        return Decision::Rejected(InvalidSpot);
    }
    if candidate.date < today {
        return Decision::Rejected(PastDate);
    }

    // Fail fast on duplicate owner before any slot logic.
    if owner_day.iter().any(|r| r.is_active()) {
        return Decision::Rejected(DuplicateOwnerForDate);
    }

    let active = || same_spot_day.iter().filter(|r| r.is_active());
    let blocking = |r: &&Reservation| overlaps(r.slot, candidate.slot);

    match candidate.vehicle {
        VehicleClass::Car => {
            // A car claims the slot exclusively against everything.
            if active().any(|r| blocking(&r)) {
                return Decision::Rejected(CarSlotConflict);
            }
        }
        VehicleClass::Motorcycle => {
            if active()
                .filter(|r| r.vehicle == VehicleClass::Car)
                .any(|r| blocking(&r))
            {
                return Decision::Rejected(CarPresentConflict);
            }
            let overlapping_motos = active()
                .filter(|r| r.vehicle == VehicleClass::Motorcycle)
                .filter(blocking)
                .count();
            if overlapping_motos >= policy.max_motorcycles {
                return Decision::Rejected(MotorcycleCapacityExceeded);
            }
        }
    }

    Decision::Accepted
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::reservation::SpotId;
    use crate::domain::TimeSlot;
    use TimeSlot::*;
    use VehicleClass::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 9, 14).unwrap()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 9, 1).unwrap()
    }

    fn policy() -> BookingPolicy {
        BookingPolicy::default()
    }

    fn existing(spot: u32, slot: TimeSlot, vehicle: VehicleClass, owner: &str) -> Reservation {
        Reservation::admit(ReservationCandidate::new(spot, day(), slot, vehicle, owner))
    }

    fn candidate(spot: u32, slot: TimeSlot, vehicle: VehicleClass, owner: &str) -> ReservationCandidate {
        ReservationCandidate::new(spot, day(), slot, vehicle, owner)
    }

    fn eval(c: &ReservationCandidate, spot_day: &[Reservation]) -> Decision {
        evaluate(c, spot_day, &[], today(), &policy())
    }

    #[test]
    fn empty_spot_accepts_any_valid_candidate() {
        for slot in [Morning, Afternoon, FullDay] {
            for vehicle in [Car, Motorcycle] {
                let c = candidate(84, slot, vehicle, "alice");
                assert_eq!(eval(&c, &[]), Decision::Accepted, "{} {}", slot, vehicle);
            }
        }
    }

    #[test]
    fn unknown_spot_is_rejected_regardless_of_other_fields() {
        let c = candidate(99, Morning, Car, "alice");
        assert_eq!(
            eval(&c, &[]),
            Decision::Rejected(ConflictReason::InvalidSpot)
        );
    }

    #[test]
    fn past_date_is_rejected_even_on_empty_spot() {
        let c = ReservationCandidate::new(84u32, today().pred_opt().unwrap(), Morning, Car, "alice");
        assert_eq!(
            evaluate(&c, &[], &[], today(), &policy()),
            Decision::Rejected(ConflictReason::PastDate)
        );
    }

    #[test]
    fn booking_for_today_is_allowed() {
        let c = ReservationCandidate::new(84u32, today(), Morning, Car, "alice");
        assert_eq!(evaluate(&c, &[], &[], today(), &policy()), Decision::Accepted);
    }

    #[test]
    fn car_blocked_by_full_day_car() {
        let taken = [existing(84, FullDay, Car, "bob")];
        let c = candidate(84, Morning, Car, "alice");
        assert_eq!(
            eval(&c, &taken),
            Decision::Rejected(ConflictReason::CarSlotConflict)
        );
    }

    #[test]
    fn car_fits_next_to_disjoint_car() {
        let taken = [existing(84, Morning, Car, "bob")];
        let c = candidate(84, Afternoon, Car, "alice");
        assert_eq!(eval(&c, &taken), Decision::Accepted);
    }

    // The asymmetric half of the policy: one motorcycle is enough to block
    // a car in its window, while motorcycles stack up to the cap.
    #[test]
    fn car_blocked_by_single_overlapping_motorcycle() {
        let taken = [existing(84, Afternoon, Motorcycle, "bob")];
        let c = candidate(84, Afternoon, Car, "alice");
        assert_eq!(
            eval(&c, &taken),
            Decision::Rejected(ConflictReason::CarSlotConflict)
        );
    }

    #[test]
    fn motorcycle_blocked_by_overlapping_car() {
        let taken = [existing(84, Afternoon, Car, "bob")];
        let c = candidate(84, Afternoon, Motorcycle, "alice");
        assert_eq!(
            eval(&c, &taken),
            Decision::Rejected(ConflictReason::CarPresentConflict)
        );
    }

    #[test]
    fn motorcycle_fits_around_disjoint_car() {
        let taken = [existing(84, Afternoon, Car, "bob")];
        let c = candidate(84, Morning, Motorcycle, "alice");
        assert_eq!(eval(&c, &taken), Decision::Accepted);
    }

    #[test]
    fn motorcycle_cap_applies_to_overlapping_window() {
        let taken: Vec<_> = ["b1", "b2", "b3", "b4"]
            .iter()
            .map(|o| existing(84, FullDay, Motorcycle, o))
            .collect();
        let c = candidate(84, FullDay, Motorcycle, "alice");
        assert_eq!(
            eval(&c, &taken),
            Decision::Rejected(ConflictReason::MotorcycleCapacityExceeded)
        );
    }

    #[test]
    fn third_motorcycle_under_cap_is_accepted() {
        let taken: Vec<_> = ["b1", "b2"]
            .iter()
            .map(|o| existing(84, FullDay, Motorcycle, o))
            .collect();
        let c = candidate(84, FullDay, Motorcycle, "alice");
        assert_eq!(eval(&c, &taken), Decision::Accepted);
    }

    #[test]
    fn motorcycle_cap_counts_per_window_not_per_day() {
        // Four motorcycles in the morning leave the afternoon free.
        let taken: Vec<_> = ["b1", "b2", "b3", "b4"]
            .iter()
            .map(|o| existing(84, Morning, Motorcycle, o))
            .collect();
        let c = candidate(84, Afternoon, Motorcycle, "alice");
        assert_eq!(eval(&c, &taken), Decision::Accepted);
    }

    #[test]
    fn duplicate_owner_rejected_across_spots() {
        let elsewhere = [existing(85, Morning, Car, "alice")];
        let c = candidate(84, Afternoon, Motorcycle, "alice");
        assert_eq!(
            evaluate(&c, &[], &elsewhere, today(), &policy()),
            Decision::Rejected(ConflictReason::DuplicateOwnerForDate)
        );
    }

    #[test]
    fn duplicate_owner_checked_before_slot_rules() {
        // Same-day holding wins over what would otherwise be a slot conflict.
        let taken = [existing(84, FullDay, Car, "bob")];
        let elsewhere = [existing(85, Morning, Car, "alice")];
        let c = candidate(84, Morning, Car, "alice");
        assert_eq!(
            evaluate(&c, &taken, &elsewhere, today(), &policy()),
            Decision::Rejected(ConflictReason::DuplicateOwnerForDate)
        );
    }

    #[test]
    fn cancelled_reservations_do_not_block() {
        let mut gone = existing(84, FullDay, Car, "bob");
        gone.cancel();
        let c = candidate(84, Morning, Car, "alice");
        assert_eq!(eval(&c, &[gone.clone()]), Decision::Accepted);

        let mut mine = existing(85, Morning, Car, "alice");
        mine.cancel();
        assert_eq!(
            evaluate(&c, &[gone], &[mine], today(), &policy()),
            Decision::Accepted
        );
    }

    #[test]
    fn cap_is_configurable() {
        let policy = BookingPolicy {
            max_motorcycles: 2,
            ..BookingPolicy::default()
        };
        let taken: Vec<_> = ["b1", "b2"]
            .iter()
            .map(|o| existing(84, FullDay, Motorcycle, o))
            .collect();
        let c = candidate(84, FullDay, Motorcycle, "alice");
        assert_eq!(
            evaluate(&c, &taken, &[], today(), &policy),
            Decision::Rejected(ConflictReason::MotorcycleCapacityExceeded)
        );
    }

    #[test]
    fn spot_set_is_configurable() {
        let policy = BookingPolicy {
            valid_spots: vec![SpotId(1), SpotId(2), SpotId(3)],
            ..BookingPolicy::default()
        };
        let c = candidate(3, Morning, Car, "alice");
        assert_eq!(evaluate(&c, &[], &[], today(), &policy), Decision::Accepted);
        let c = candidate(84, Morning, Car, "alice");
        assert_eq!(
            evaluate(&c, &[], &[], today(), &policy),
            Decision::Rejected(ConflictReason::InvalidSpot)
        );
    }
}
