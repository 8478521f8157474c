pub mod coordinates;
pub mod plan;
pub mod station;

pub use coordinates::Coordinates;
pub use plan::{PlanRequest, PlanResult, StationListResponse};
pub use station::{Station, StationStatus};
