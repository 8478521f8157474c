pub mod rate_limiter;
pub mod route_planner;
