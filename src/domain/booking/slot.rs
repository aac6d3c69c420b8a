//! Time slots, vehicle classes and the shared overlap predicate

use serde::{Deserialize, Serialize};

/// Time window a reservation occupies within a single calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeSlot {
    Morning,
    Afternoon,
    FullDay,
}

impl TimeSlot {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Morning => "Morning",
            Self::Afternoon => "Afternoon",
            Self::FullDay => "FullDay",
        }
    }
}

impl std::fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TimeSlot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "morning" => Ok(Self::Morning),
            "afternoon" => Ok(Self::Afternoon),
            "fullday" | "full_day" | "full-day" => Ok(Self::FullDay),
            _ => Err(format!("unknown time slot: {}", s)),
        }
    }
}

/// Vehicle class; selects which capacity rule applies to a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleClass {
    Car,
    Motorcycle,
}

impl VehicleClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Car => "Car",
            Self::Motorcycle => "Motorcycle",
        }
    }
}

impl std::fmt::Display for VehicleClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for VehicleClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "car" => Ok(Self::Car),
            "motorcycle" => Ok(Self::Motorcycle),
            _ => Err(format!("unknown vehicle class: {}", s)),
        }
    }
}

/// Whether two slots claim overlapping time on the same spot and day.
///
/// `FullDay` overlaps everything; `Morning` and `Afternoon` only overlap
/// themselves. Symmetric. This is the only overlap implementation in the
/// crate; every admission path and the availability classifier go through
/// it, so the rule cannot drift between call sites.
pub fn overlaps(a: TimeSlot, b: TimeSlot) -> bool {
    a == TimeSlot::FullDay || b == TimeSlot::FullDay || a == b
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use TimeSlot::*;

    const ALL: [TimeSlot; 3] = [Morning, Afternoon, FullDay];

    #[test]
    fn overlap_is_symmetric() {
        for a in ALL {
            for b in ALL {
                assert_eq!(overlaps(a, b), overlaps(b, a), "{} vs {}", a, b);
            }
        }
    }

    #[test]
    fn full_day_overlaps_everything() {
        for s in ALL {
            assert!(overlaps(FullDay, s));
            assert!(overlaps(s, FullDay));
        }
    }

    #[test]
    fn half_days_are_disjoint() {
        assert!(!overlaps(Morning, Afternoon));
        assert!(!overlaps(Afternoon, Morning));
    }

    #[test]
    fn same_slot_overlaps_itself() {
        assert!(overlaps(Morning, Morning));
        assert!(overlaps(Afternoon, Afternoon));
        assert!(overlaps(FullDay, FullDay));
    }

    #[test]
    fn slot_string_roundtrip() {
        for s in ALL {
            let parsed: TimeSlot = s.as_str().parse().unwrap();
            assert_eq!(parsed, s);
        }
        assert!("teatime".parse::<TimeSlot>().is_err());
    }

    #[test]
    fn vehicle_class_string_roundtrip() {
        for v in [VehicleClass::Car, VehicleClass::Motorcycle] {
            let parsed: VehicleClass = v.as_str().parse().unwrap();
            assert_eq!(parsed, v);
        }
        assert!("bicycle".parse::<VehicleClass>().is_err());
    }
}
