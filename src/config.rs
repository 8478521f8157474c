use crate::constants::*;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub planner: RoutePlannerConfig,
}

/// Weights of the station scoring heuristic. Lower total score ranks first.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringWeights {
    /// Multiplier for the via-station path length relative to the direct leg
    pub detour_ratio_weight: f64,

    /// Bonus per kW of charging power
    pub power_weight: f64,

    /// Bonus per charger at the station
    pub charger_count_weight: f64,

    /// Penalty when the car would reach the station below the safe band
    pub low_battery_penalty: f64,

    /// Penalty when the car would reach the station above the safe band
    pub early_stop_penalty: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            detour_ratio_weight: SCORE_DETOUR_RATIO_WEIGHT,
            power_weight: SCORE_POWER_WEIGHT,
            charger_count_weight: SCORE_CHARGER_COUNT_WEIGHT,
            low_battery_penalty: SCORE_LOW_BATTERY_PENALTY,
            early_stop_penalty: SCORE_EARLY_STOP_PENALTY,
        }
    }
}

impl ScoringWeights {
    pub fn from_env() -> Result<Self, String> {
        let defaults = Self::default();

        Ok(Self {
            detour_ratio_weight: env_or("PLANNER_SCORE_WEIGHT_DETOUR", defaults.detour_ratio_weight)?,
            power_weight: env_or("PLANNER_SCORE_WEIGHT_POWER", defaults.power_weight)?,
            charger_count_weight: env_or(
                "PLANNER_SCORE_WEIGHT_CHARGERS",
                defaults.charger_count_weight,
            )?,
            low_battery_penalty: env_or("PLANNER_LOW_BATTERY_PENALTY", defaults.low_battery_penalty)?,
            early_stop_penalty: env_or("PLANNER_EARLY_STOP_PENALTY", defaults.early_stop_penalty)?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct RoutePlannerConfig {
    /// Lower bound of the safe state-of-charge band (fraction of capacity)
    pub min_battery_percentage: f64,

    /// Upper bound of the safe state-of-charge band (fraction of capacity).
    /// A trip consuming at most this share of the battery needs no stop.
    pub max_battery_percentage: f64,

    /// Maximum extra km a charging stop may add to the direct trip
    pub max_detour_distance_km: f64,

    /// Sustained planning throughput, in requests per second
    pub requests_per_second: f64,

    pub scoring: ScoringWeights,
}

impl Default for RoutePlannerConfig {
    fn default() -> Self {
        Self {
            min_battery_percentage: DEFAULT_MIN_BATTERY_PERCENTAGE,
            max_battery_percentage: DEFAULT_MAX_BATTERY_PERCENTAGE,
            max_detour_distance_km: DEFAULT_MAX_DETOUR_DISTANCE_KM,
            requests_per_second: DEFAULT_REQUESTS_PER_SECOND,
            scoring: ScoringWeights::default(),
        }
    }
}

impl RoutePlannerConfig {
    pub fn from_env() -> Result<Self, String> {
        let defaults = Self::default();

        let config = Self {
            min_battery_percentage: env_or(
                "PLANNER_MIN_BATTERY_PERCENTAGE",
                defaults.min_battery_percentage,
            )?,
            max_battery_percentage: env_or(
                "PLANNER_MAX_BATTERY_PERCENTAGE",
                defaults.max_battery_percentage,
            )?,
            max_detour_distance_km: env_or(
                "PLANNER_MAX_DETOUR_DISTANCE_KM",
                defaults.max_detour_distance_km,
            )?,
            requests_per_second: env_or(
                "PLANNER_REQUESTS_PER_SECOND",
                defaults.requests_per_second,
            )?,
            scoring: ScoringWeights::from_env()?,
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.min_battery_percentage) {
            return Err("PLANNER_MIN_BATTERY_PERCENTAGE must be between 0 and 1".to_string());
        }
        if !(0.0..=1.0).contains(&self.max_battery_percentage) {
            return Err("PLANNER_MAX_BATTERY_PERCENTAGE must be between 0 and 1".to_string());
        }
        if self.min_battery_percentage > self.max_battery_percentage {
            return Err(format!(
                "Minimum battery percentage ({}) exceeds maximum ({})",
                self.min_battery_percentage, self.max_battery_percentage
            ));
        }
        if self.max_detour_distance_km < 0.0 || !self.max_detour_distance_km.is_finite() {
            return Err("PLANNER_MAX_DETOUR_DISTANCE_KM must be a non-negative number".to_string());
        }
        if self.requests_per_second <= 0.0 || !self.requests_per_second.is_finite() {
            return Err("PLANNER_REQUESTS_PER_SECOND must be positive".to_string());
        }
        Ok(())
    }
}

fn env_or(key: &str, default: f64) -> Result<f64, String> {
    env::var(key)
        .unwrap_or_else(|_| default.to_string())
        .parse()
        .map_err(|_| format!("Invalid {}", key))
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        dotenv::dotenv().ok();

        Ok(Config {
            host: env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .map_err(|_| "Invalid PORT")?,
            database_url: env::var("DATABASE_URL").map_err(|_| "DATABASE_URL must be set")?,
            planner: RoutePlannerConfig::from_env()?,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
