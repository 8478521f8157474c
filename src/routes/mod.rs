pub mod debug;
pub mod plan;
pub mod stations;

use axum::{routing::{get, post}, Router};
use std::sync::Arc;

use crate::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/routes/plan", post(plan::plan_route))
        .route("/stations", get(stations::list_stations))
        .route("/debug/health", get(debug::health_check))
        .with_state(state)
}
