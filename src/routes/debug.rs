use crate::AppState;
use axum::{extract::State, Json};
use serde_json::{json, Value};
use std::sync::Arc;

/// GET /debug/health - Check if services are working
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<Value> {
    let mut status = json!({
        "status": "ok",
        "checks": {}
    });

    match state.station_catalogue.count().await {
        Ok(count) => {
            status["checks"]["catalogue"] = json!("ok");
            status["checks"]["station_count"] = json!(count);
        }
        Err(e) => {
            status["checks"]["catalogue"] = json!({"error": e.to_string()});
            status["status"] = json!("error");
        }
    }

    let config = state.route_planner.config();
    status["planner"] = json!({
        "min_battery_percentage": config.min_battery_percentage,
        "max_battery_percentage": config.max_battery_percentage,
        "max_detour_distance_km": config.max_detour_distance_km,
        "requests_per_second": config.requests_per_second,
    });

    Json(status)
}
