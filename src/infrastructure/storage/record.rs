//! Parse-at-boundary reservation records
//!
//! Raw records coming out of a storage backend (or handed over by the
//! embedding application) are stringly typed. They are parsed and validated
//! here, once, into the strongly typed [`Reservation`]; the decision logic
//! never sees unparsed data and carries no defensive checks of its own.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::reservation::{Reservation, ReservationStatus, SpotId};
use crate::domain::{DomainError, TimeSlot, VehicleClass};

/// Wire/storage shape of a reservation.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ReservationRecord {
    pub id: String,
    pub spot: u32,
    /// Calendar date, `YYYY-MM-DD`
    pub date: String,
    /// Time slot name (`Morning` / `Afternoon` / `FullDay`)
    pub slot: String,
    /// Vehicle class name (`Car` / `Motorcycle`)
    pub vehicle: String,
    #[validate(length(min = 1, message = "owner must not be empty"))]
    pub owner: String,
    /// Status name; absent means `Active`
    #[serde(default = "default_status")]
    pub status: String,
    /// RFC 3339 creation timestamp
    pub created_at: String,
}

fn default_status() -> String {
    ReservationStatus::Active.as_str().to_string()
}

impl From<&Reservation> for ReservationRecord {
    fn from(r: &Reservation) -> Self {
        Self {
            id: r.id.to_string(),
            spot: r.spot.0,
            date: r.date.to_string(),
            slot: r.slot.as_str().to_string(),
            vehicle: r.vehicle.as_str().to_string(),
            owner: r.owner.clone(),
            status: r.status.as_str().to_string(),
            created_at: r.created_at.to_rfc3339(),
        }
    }
}

impl TryFrom<ReservationRecord> for Reservation {
    type Error = DomainError;

    fn try_from(rec: ReservationRecord) -> Result<Self, Self::Error> {
        rec.validate()
            .map_err(|e| DomainError::Validation(e.to_string()))?;

        let id = Uuid::parse_str(&rec.id)
            .map_err(|_| DomainError::Validation(format!("invalid reservation id: {}", rec.id)))?;
        let date = rec
            .date
            .parse::<NaiveDate>()
            .map_err(|_| DomainError::InvalidDate(rec.date.clone()))?;
        let slot = rec
            .slot
            .parse::<TimeSlot>()
            .map_err(DomainError::Validation)?;
        let vehicle = rec
            .vehicle
            .parse::<VehicleClass>()
            .map_err(DomainError::Validation)?;
        let status = rec
            .status
            .parse::<ReservationStatus>()
            .map_err(DomainError::Validation)?;
        let created_at = DateTime::parse_from_rfc3339(&rec.created_at)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|_| {
                DomainError::Validation(format!("invalid created_at: {}", rec.created_at))
            })?;

        Ok(Reservation {
            id,
            spot: SpotId(rec.spot),
            date,
            slot,
            vehicle,
            owner: rec.owner,
            status,
            created_at,
        })
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> ReservationRecord {
        ReservationRecord {
            id: Uuid::new_v4().to_string(),
            spot: 84,
            date: "2026-09-14".to_string(),
            slot: "Morning".to_string(),
            vehicle: "Car".to_string(),
            owner: "alice".to_string(),
            status: "Active".to_string(),
            created_at: "2026-09-01T09:30:00+00:00".to_string(),
        }
    }

    #[test]
    fn valid_record_parses() {
        let r = Reservation::try_from(sample_record()).unwrap();
        assert_eq!(r.spot, SpotId(84));
        assert_eq!(r.slot, TimeSlot::Morning);
        assert_eq!(r.vehicle, VehicleClass::Car);
        assert!(r.is_active());
    }

    #[test]
    fn non_date_string_is_invalid_date() {
        let mut rec = sample_record();
        rec.date = "next tuesday".to_string();
        let err = Reservation::try_from(rec).unwrap_err();
        assert_eq!(err, DomainError::InvalidDate("next tuesday".to_string()));
    }

    #[test]
    fn empty_owner_fails_validation() {
        let mut rec = sample_record();
        rec.owner = String::new();
        let err = Reservation::try_from(rec).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn unknown_slot_name_fails() {
        let mut rec = sample_record();
        rec.slot = "Evening".to_string();
        assert!(matches!(
            Reservation::try_from(rec).unwrap_err(),
            DomainError::Validation(_)
        ));
    }

    #[test]
    fn status_defaults_to_active_in_json() {
        let json = r#"{
            "id": "6a2f64a0-8a5d-4b6e-9a2e-2f1a7d9d2c11",
            "spot": 85,
            "date": "2026-09-14",
            "slot": "FullDay",
            "vehicle": "Motorcycle",
            "owner": "bob",
            "created_at": "2026-09-01T09:30:00Z"
        }"#;
        let rec: ReservationRecord = serde_json::from_str(json).unwrap();
        let r = Reservation::try_from(rec).unwrap();
        assert_eq!(r.status, ReservationStatus::Active);
    }

    #[test]
    fn record_roundtrips_through_domain() {
        let r = Reservation::try_from(sample_record()).unwrap();
        let rec = ReservationRecord::from(&r);
        let back = Reservation::try_from(rec).unwrap();
        assert_eq!(back, r);
    }
}
