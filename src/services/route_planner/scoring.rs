use crate::config::RoutePlannerConfig;
use crate::models::{Coordinates, Station};

/// Per-request facts shared by every candidate score.
#[derive(Debug, Clone, Copy)]
pub struct TripContext {
    pub start: Coordinates,
    pub destination: Coordinates,
    /// Great-circle start -> destination distance, km
    pub direct_distance_km: f64,
    pub battery_capacity_kwh: f64,
    pub efficiency_km_per_kwh: f64,
}

impl TripContext {
    pub fn new(
        start: Coordinates,
        destination: Coordinates,
        battery_capacity_kwh: f64,
        efficiency_km_per_kwh: f64,
    ) -> Self {
        TripContext {
            start,
            destination,
            direct_distance_km: start.distance_to(&destination),
            battery_capacity_kwh,
            efficiency_km_per_kwh,
        }
    }

    /// Energy needed for the direct leg, kWh
    pub fn direct_battery_usage_kwh(&self) -> f64 {
        self.direct_distance_km / self.efficiency_km_per_kwh
    }

    /// Share of the battery the direct leg consumes
    pub fn direct_battery_fraction(&self) -> f64 {
        self.direct_battery_usage_kwh() / self.battery_capacity_kwh
    }

    pub fn detour_km(&self, station: &Station) -> f64 {
        self.start
            .detour_via(&station.coordinates, &self.destination)
    }

    /// Charge left on arrival at `station` when leaving with a full battery
    pub fn battery_at_station_kwh(&self, station: &Station) -> f64 {
        let leg_km = self.start.distance_to(&station.coordinates);
        self.battery_capacity_kwh - leg_km / self.efficiency_km_per_kwh
    }
}

/// Score a candidate stop. Lower is better.
pub fn score_station(station: &Station, trip: &TripContext, config: &RoutePlannerConfig) -> f64 {
    let weights = &config.scoring;
    let mut score = 0.0;

    // 1. Path length through the station relative to the direct leg
    let via_km = trip.start.distance_to(&station.coordinates)
        + station.coordinates.distance_to(&trip.destination);
    score += weights.detour_ratio_weight * (via_km / trip.direct_distance_km);

    // 2. Charging speed
    score -= weights.power_weight * station.power_kw;

    // 3. Arrival state of charge against the safe band
    let battery_at_station = trip.battery_at_station_kwh(station);
    if battery_at_station < config.min_battery_percentage * trip.battery_capacity_kwh {
        score += weights.low_battery_penalty;
    }
    if battery_at_station > config.max_battery_percentage * trip.battery_capacity_kwh {
        score += weights.early_stop_penalty;
    }

    // 4. Charger availability
    score -= weights.charger_count_weight * station.charger_count as f64;

    score
}
