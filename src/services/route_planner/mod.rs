pub mod scoring;

use crate::config::RoutePlannerConfig;
use crate::constants::MAX_CHARGING_STOPS;
use crate::db::StationCatalogue;
use crate::error::{AppError, Result};
use crate::models::{PlanRequest, PlanResult, Station};
use crate::services::rate_limiter::RateLimiter;
use std::sync::Arc;

pub use scoring::{score_station, TripContext};

/// Decides whether a trip needs charging and, if so, which stations to stop at.
/// Holds no per-request state; safe to share across tasks.
pub struct RoutePlanner {
    catalogue: Arc<dyn StationCatalogue>,
    rate_limiter: Arc<dyn RateLimiter>,
    config: RoutePlannerConfig,
}

impl RoutePlanner {
    pub fn new(
        catalogue: Arc<dyn StationCatalogue>,
        rate_limiter: Arc<dyn RateLimiter>,
        config: RoutePlannerConfig,
    ) -> Self {
        RoutePlanner {
            catalogue,
            rate_limiter,
            config,
        }
    }

    pub fn config(&self) -> &RoutePlannerConfig {
        &self.config
    }

    pub async fn plan_route(&self, request: &PlanRequest) -> Result<PlanResult> {
        if !self.rate_limiter.try_acquire() {
            return Err(AppError::RateLimited);
        }

        request.validate().map_err(AppError::InvalidRequest)?;
        let start = request.start().map_err(AppError::InvalidRequest)?;
        let destination = request.destination().map_err(AppError::InvalidRequest)?;

        let candidates: Vec<Station> = self
            .catalogue
            .all_stations()
            .await?
            .into_iter()
            .filter(Station::is_eligible)
            .collect();

        if candidates.is_empty() {
            return Err(AppError::NoStationsAvailable);
        }

        let trip = TripContext::new(
            start,
            destination,
            request.battery_capacity_kwh,
            request.efficiency_km_per_kwh,
        );
        let battery_usage_kwh = trip.direct_battery_usage_kwh();

        // Only the upper bound gates the stop-free case; the lower bound is
        // applied to charging stops alone.
        if trip.direct_battery_fraction() <= self.config.max_battery_percentage {
            tracing::info!(
                distance_km = trip.direct_distance_km,
                battery_usage_kwh,
                "Direct route feasible: {:.1}km uses {:.1}% of battery",
                trip.direct_distance_km,
                trip.direct_battery_fraction() * 100.0
            );
            return Ok(PlanResult::direct(trip.direct_distance_km, battery_usage_kwh));
        }

        let stations = self.select_stations(candidates, &trip)?;

        tracing::info!(
            distance_km = trip.direct_distance_km,
            battery_usage_kwh,
            stops = stations.len(),
            "Planned {} charging stop(s) for {:.1}km trip",
            stations.len(),
            trip.direct_distance_km
        );

        Ok(PlanResult {
            stations,
            distance_km: trip.direct_distance_km,
            battery_usage_kwh,
        })
    }

    /// Drop stations beyond the detour bound, then keep the best-scoring few.
    fn select_stations(&self, candidates: Vec<Station>, trip: &TripContext) -> Result<Vec<Station>> {
        let candidate_count = candidates.len();
        let within_detour: Vec<Station> = candidates
            .into_iter()
            .filter(|station| {
                let detour_km = trip.detour_km(station);
                let keep = detour_km <= self.config.max_detour_distance_km;
                if !keep {
                    tracing::debug!(
                        "Station '{}' rejected: detour {:.1}km exceeds {:.1}km",
                        station.name,
                        detour_km,
                        self.config.max_detour_distance_km
                    );
                }
                keep
            })
            .collect();

        if within_detour.is_empty() {
            return Err(AppError::NoSuitableStation(format!(
                "none of {} available stations is within {:.1}km of the direct route",
                candidate_count, self.config.max_detour_distance_km
            )));
        }

        let mut scored: Vec<(f64, Station)> = within_detour
            .into_iter()
            .map(|station| (score_station(&station, trip, &self.config), station))
            .collect();

        // Stable: equal scores keep catalogue order
        scored.sort_by(|a, b| a.0.total_cmp(&b.0));

        Ok(scored
            .into_iter()
            .take(MAX_CHARGING_STOPS)
            .map(|(score, station)| {
                tracing::debug!("Selected station '{}' (score {:.2})", station.name, score);
                station
            })
            .collect())
    }
}
