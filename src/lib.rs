// Library exports for testing and reusability

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use error::{AppError, Result};

// App state for sharing across the application
use db::StationCatalogue;
use services::route_planner::RoutePlanner;
use std::sync::Arc;

pub struct AppState {
    pub station_catalogue: Arc<dyn StationCatalogue>,
    pub route_planner: RoutePlanner,
}
