use crate::models::Coordinates;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Live status reported by a charging station.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum StationStatus {
    Available,
    Occupied,
    Maintenance,
    Offline,
}

impl fmt::Display for StationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StationStatus::Available => "Available",
            StationStatus::Occupied => "Occupied",
            StationStatus::Maintenance => "Maintenance",
            StationStatus::Offline => "Offline",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for StationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Only the canonical spellings; anything else is not a known status
        match s {
            "Available" => Ok(StationStatus::Available),
            "Occupied" => Ok(StationStatus::Occupied),
            "Maintenance" => Ok(StationStatus::Maintenance),
            "Offline" => Ok(StationStatus::Offline),
            _ => Err(format!("Invalid station status: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Station {
    pub id: Uuid,
    pub name: String,
    pub coordinates: Coordinates,
    /// False when the operator has taken the site out of service
    pub operational: bool,
    pub status: StationStatus,
    /// Number of chargers usable simultaneously
    pub charger_count: u32,
    /// Rated power per charger, in kW
    pub power_kw: f64,
}

impl Station {
    pub fn new(
        name: String,
        coordinates: Coordinates,
        status: StationStatus,
        charger_count: u32,
        power_kw: f64,
    ) -> Self {
        Station {
            id: Uuid::new_v4(),
            name,
            coordinates,
            operational: true,
            status,
            charger_count,
            power_kw: power_kw.max(0.0),
        }
    }

    /// Whether the station may be offered as a charging stop
    pub fn is_eligible(&self) -> bool {
        self.operational && self.status == StationStatus::Available
    }
}
