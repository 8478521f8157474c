use crate::error::Result;
use crate::models::StationListResponse;
use crate::AppState;
use axum::{extract::State, Json};
use std::sync::Arc;

/// GET /stations - Every station in the catalogue, eligible or not
pub async fn list_stations(State(state): State<Arc<AppState>>) -> Result<Json<StationListResponse>> {
    let stations = state.station_catalogue.all_stations().await?;
    tracing::debug!("Listing {} stations", stations.len());

    Ok(Json(StationListResponse { stations }))
}
