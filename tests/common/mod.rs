use chargeroute::config::RoutePlannerConfig;
use chargeroute::db::InMemoryStationCatalogue;
use chargeroute::models::{Coordinates, PlanRequest, Station, StationStatus};
use chargeroute::services::rate_limiter::RateLimiter;
use chargeroute::services::route_planner::RoutePlanner;
use chargeroute::AppState;
use std::sync::Arc;

/// Limiter that always grants a permit
#[allow(dead_code)]
pub struct AlwaysAllow;

impl RateLimiter for AlwaysAllow {
    fn try_acquire(&self) -> bool {
        true
    }
}

/// Limiter that never grants a permit
#[allow(dead_code)]
pub struct AlwaysDeny;

impl RateLimiter for AlwaysDeny {
    fn try_acquire(&self) -> bool {
        false
    }
}

/// Create an available station with 2 chargers at 50 kW
#[allow(dead_code)]
pub fn create_test_station(name: &str, lat: f64, lng: f64) -> Station {
    Station::new(
        name.to_string(),
        Coordinates::new(lat, lng).unwrap(),
        StationStatus::Available,
        2,
        50.0,
    )
}

#[allow(dead_code)]
pub fn create_planner(
    stations: Vec<Station>,
    limiter: Arc<dyn RateLimiter>,
    config: RoutePlannerConfig,
) -> RoutePlanner {
    RoutePlanner::new(
        Arc::new(InMemoryStationCatalogue::new(stations)),
        limiter,
        config,
    )
}

#[allow(dead_code)]
pub fn create_app_state(stations: Vec<Station>, limiter: Arc<dyn RateLimiter>) -> Arc<AppState> {
    let station_catalogue = Arc::new(InMemoryStationCatalogue::new(stations));
    let route_planner = RoutePlanner::new(
        station_catalogue.clone(),
        limiter,
        RoutePlannerConfig::default(),
    );

    Arc::new(AppState {
        station_catalogue,
        route_planner,
    })
}

/// Porto city centre to ~1.4 km south-east
#[allow(dead_code)]
pub fn porto_short_trip() -> PlanRequest {
    PlanRequest {
        start_lat: 41.1579,
        start_lng: -8.6291,
        dest_lat: 41.1479,
        dest_lng: -8.6191,
        battery_capacity_kwh: 50.0,
        efficiency_km_per_kwh: 5.0,
    }
}

/// Porto to Lisbon (~274 km) on a 5 kWh battery at 1 km/kWh
#[allow(dead_code)]
pub fn porto_lisbon_tiny_battery() -> PlanRequest {
    PlanRequest {
        start_lat: 41.1579,
        start_lng: -8.6291,
        dest_lat: 38.7223,
        dest_lng: -9.1393,
        battery_capacity_kwh: 5.0,
        efficiency_km_per_kwh: 1.0,
    }
}

/// ~222 km due east along the equator; 10 kWh at 5 km/kWh covers only 50 km
#[allow(dead_code)]
pub fn equator_trip() -> PlanRequest {
    PlanRequest {
        start_lat: 0.0,
        start_lng: 0.0,
        dest_lat: 0.0,
        dest_lng: 2.0,
        battery_capacity_kwh: 10.0,
        efficiency_km_per_kwh: 5.0,
    }
}
