use crate::models::{Coordinates, Station};
use serde::{Deserialize, Serialize};

// Request/Response types for API endpoints

/// Trip to plan. Values arrive typed but not range-checked.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanRequest {
    pub start_lat: f64,
    pub start_lng: f64,
    pub dest_lat: f64,
    pub dest_lng: f64,
    /// Usable battery capacity, kWh
    pub battery_capacity_kwh: f64,
    /// Vehicle efficiency ("autonomy"), km per kWh
    pub efficiency_km_per_kwh: f64,
}

impl PlanRequest {
    pub fn validate(&self) -> Result<(), String> {
        self.start()?;
        self.destination()?;
        if self.battery_capacity_kwh <= 0.0 || !self.battery_capacity_kwh.is_finite() {
            return Err("battery_capacity_kwh must be positive".to_string());
        }
        if self.efficiency_km_per_kwh <= 0.0 || !self.efficiency_km_per_kwh.is_finite() {
            return Err("efficiency_km_per_kwh must be positive".to_string());
        }
        Ok(())
    }

    pub fn start(&self) -> Result<Coordinates, String> {
        Coordinates::new(self.start_lat, self.start_lng).map_err(|e| format!("start: {}", e))
    }

    pub fn destination(&self) -> Result<Coordinates, String> {
        Coordinates::new(self.dest_lat, self.dest_lng).map_err(|e| format!("destination: {}", e))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanResult {
    /// Charging stops in ranked order; empty when the direct trip is feasible
    pub stations: Vec<Station>,
    /// Great-circle distance from start to destination, km
    pub distance_km: f64,
    /// Energy needed for the direct leg, kWh
    pub battery_usage_kwh: f64,
}

impl PlanResult {
    pub fn direct(distance_km: f64, battery_usage_kwh: f64) -> Self {
        PlanResult {
            stations: Vec::new(),
            distance_km,
            battery_usage_kwh,
        }
    }

    pub fn needs_charging(&self) -> bool {
        !self.stations.is_empty()
    }
}

#[derive(Debug, Serialize)]
pub struct StationListResponse {
    pub stations: Vec<Station>,
}
