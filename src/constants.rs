//! Stable application-wide constants.
//!
//! Values here are structural invariants, scoring coefficients, and default
//! fallbacks for env-var-based configuration. They should rarely change.
//! For tuning knobs that benefit from runtime experimentation, see
//! [`RoutePlannerConfig`](crate::config::RoutePlannerConfig) instead.

// --- Server defaults (used when HOST / PORT env vars are absent) ---

/// Default bind address for the HTTP server.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default port for the HTTP server.
pub const DEFAULT_PORT: &str = "3000";

// --- Geometry ---

/// Mean Earth radius used by the Haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Slack allowed when comparing great-circle sums against the direct leg.
pub const DISTANCE_EPSILON_KM: f64 = 1e-9;

// --- Planner defaults (used when PLANNER_* env vars are absent) ---

/// Lower bound of the safe state-of-charge band, as a fraction of capacity.
pub const DEFAULT_MIN_BATTERY_PERCENTAGE: f64 = 0.2;
/// Upper bound of the safe state-of-charge band, as a fraction of capacity.
/// Also the largest share of the battery a stop-free trip may consume.
pub const DEFAULT_MAX_BATTERY_PERCENTAGE: f64 = 0.8;
/// Extra kilometres a candidate station may add before it is disqualified.
pub const DEFAULT_MAX_DETOUR_DISTANCE_KM: f64 = 20.0;
/// Sustained planning throughput (token bucket refill rate).
pub const DEFAULT_REQUESTS_PER_SECOND: f64 = 10.0;

/// Hard upper bound on charging stops returned in a plan.
pub const MAX_CHARGING_STOPS: usize = 3;

// --- Station scoring coefficients ---
// Lower scores rank first. The terms are deliberately incommensurate; each
// weight can be overridden through `ScoringWeights` without touching the
// ranking control flow.

/// Multiplier on (start->station + station->dest) / direct distance.
pub const SCORE_DETOUR_RATIO_WEIGHT: f64 = 100.0;
/// Subtracted per kW of station power.
pub const SCORE_POWER_WEIGHT: f64 = 0.1;
/// Subtracted per charger at the station.
pub const SCORE_CHARGER_COUNT_WEIGHT: f64 = 10.0;
/// Added when the car would arrive below the minimum state of charge.
/// Large enough to push the station behind any in-band candidate.
pub const SCORE_LOW_BATTERY_PENALTY: f64 = 1000.0;
/// Added when the car would arrive above the maximum state of charge,
/// i.e. the stop is earlier than it needs to be.
pub const SCORE_EARLY_STOP_PENALTY: f64 = 500.0;

// --- Database ---

/// Maximum pooled Postgres connections.
pub const DB_MAX_CONNECTIONS: u32 = 10;
/// Seconds to wait for a pooled connection before failing.
pub const DB_ACQUIRE_TIMEOUT_SECONDS: u64 = 5;
