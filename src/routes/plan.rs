use crate::error::Result;
use crate::models::{PlanRequest, PlanResult};
use crate::AppState;
use axum::{extract::State, Json};
use std::sync::Arc;

/// POST /routes/plan
/// Decide whether a trip needs charging and pick up to three stops
pub async fn plan_route(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PlanRequest>,
) -> Result<Json<PlanResult>> {
    tracing::info!(
        start_lat = request.start_lat,
        start_lng = request.start_lng,
        dest_lat = request.dest_lat,
        dest_lng = request.dest_lng,
        capacity_kwh = request.battery_capacity_kwh,
        efficiency = request.efficiency_km_per_kwh,
        "Plan request: ({:.4}, {:.4}) -> ({:.4}, {:.4}), {:.1}kWh at {:.2}km/kWh",
        request.start_lat, request.start_lng, request.dest_lat, request.dest_lng,
        request.battery_capacity_kwh, request.efficiency_km_per_kwh
    );

    let result = state.route_planner.plan_route(&request).await?;

    if result.needs_charging() {
        tracing::info!(
            "Plan needs {} charging stop(s) over {:.1}km",
            result.stations.len(),
            result.distance_km
        );
    } else {
        tracing::info!("Plan is a direct trip of {:.1}km", result.distance_km);
    }

    Ok(Json(result))
}
