use axum::Router;
use chargeroute::config::Config;
use chargeroute::db::{PgStationCatalogue, StationCatalogue};
use chargeroute::services::rate_limiter::{RateLimiter, TokenBucketLimiter};
use chargeroute::services::route_planner::RoutePlanner;
use chargeroute::AppState;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chargeroute=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().map_err(|e| format!("Failed to load configuration: {}", e))?;

    tracing::info!("Starting charging route planner");
    tracing::info!(
        "Planner: battery band {:.0}%-{:.0}%, max detour {:.1}km",
        config.planner.min_battery_percentage * 100.0,
        config.planner.max_battery_percentage * 100.0,
        config.planner.max_detour_distance_km
    );

    // Create database connection pool
    tracing::info!("Connecting to database...");
    let db_pool = chargeroute::db::create_pool(&config.database_url).await?;
    tracing::info!("Database connection established");

    // Run migrations
    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(&db_pool).await?;
    tracing::info!("Database migrations completed");

    // Initialize services
    let station_catalogue: Arc<dyn StationCatalogue> =
        Arc::new(PgStationCatalogue::new(db_pool));
    let limiter = TokenBucketLimiter::new(config.planner.requests_per_second);
    tracing::info!(
        "Planning throughput limited to {} requests/s",
        limiter.rate_per_second()
    );
    let rate_limiter: Arc<dyn RateLimiter> = Arc::new(limiter);
    let route_planner = RoutePlanner::new(
        station_catalogue.clone(),
        rate_limiter,
        config.planner.clone(),
    );

    // Create application state
    let state = Arc::new(AppState {
        station_catalogue,
        route_planner,
    });

    // Build router with CORS and tracing
    let app = Router::new()
        .nest("/api/v1", chargeroute::routes::create_router(state))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = config.server_address();
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
