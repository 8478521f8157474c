use crate::constants::{DB_ACQUIRE_TIMEOUT_SECONDS, DB_MAX_CONNECTIONS};
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

pub mod queries;
pub mod station_catalogue;

pub use station_catalogue::{InMemoryStationCatalogue, PgStationCatalogue, StationCatalogue};

pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(DB_MAX_CONNECTIONS)
        .acquire_timeout(Duration::from_secs(DB_ACQUIRE_TIMEOUT_SECONDS))
        .connect(database_url)
        .await
}
