use crate::error::Result;
use crate::models::{Coordinates, Station, StationStatus};
use async_trait::async_trait;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Row-to-Station conversion
// ---------------------------------------------------------------------------

/// Station fields as stored in `charging_stations`, before validation.
#[derive(sqlx::FromRow)]
pub(super) struct RawStationRow {
    pub id: Uuid,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub operational: bool,
    pub status: String,
    pub charger_count: i32,
    pub power_kw: f64,
}

impl RawStationRow {
    pub fn into_station(self) -> Station {
        // An unknown status must never make a station eligible
        let status = self.status.parse().unwrap_or_else(|_| {
            tracing::warn!(
                "Invalid status '{}' for station '{}' (id: {}), treating as Offline",
                self.status,
                self.name,
                self.id
            );
            StationStatus::Offline
        });

        // A station whose position is unknown cannot be offered as a stop
        let mut operational = self.operational;
        let coordinates = Coordinates::new(self.lat, self.lng).unwrap_or_else(|e| {
            tracing::error!(
                "Invalid coordinates for station '{}' (id: {}): {}. Marking not operational.",
                self.name,
                self.id,
                e
            );
            operational = false;
            Coordinates { lat: 0.0, lng: 0.0 }
        });

        let charger_count = u32::try_from(self.charger_count).unwrap_or_else(|_| {
            tracing::warn!(
                "Negative charger count {} for station '{}', using 0",
                self.charger_count,
                self.name
            );
            0
        });

        Station {
            id: self.id,
            name: self.name,
            coordinates,
            operational,
            status,
            charger_count,
            power_kw: self.power_kw.max(0.0),
        }
    }
}

/// Source of every known charging station. No filtering is performed here;
/// callers decide which stations are eligible.
#[async_trait]
pub trait StationCatalogue: Send + Sync {
    async fn all_stations(&self) -> Result<Vec<Station>>;

    async fn count(&self) -> Result<i64>;
}

pub struct PgStationCatalogue {
    pool: sqlx::PgPool,
}

impl PgStationCatalogue {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StationCatalogue for PgStationCatalogue {
    async fn all_stations(&self) -> Result<Vec<Station>> {
        Ok(super::queries::find_all_stations(&self.pool).await?)
    }

    async fn count(&self) -> Result<i64> {
        Ok(super::queries::count_stations(&self.pool).await?)
    }
}

/// Fixed snapshot of stations, kept in catalogue order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStationCatalogue {
    stations: Vec<Station>,
}

impl InMemoryStationCatalogue {
    pub fn new(stations: Vec<Station>) -> Self {
        Self { stations }
    }
}

#[async_trait]
impl StationCatalogue for InMemoryStationCatalogue {
    async fn all_stations(&self) -> Result<Vec<Station>> {
        Ok(self.stations.clone())
    }

    async fn count(&self) -> Result<i64> {
        Ok(self.stations.len() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(status: &str, lat: f64, charger_count: i32) -> RawStationRow {
        RawStationRow {
            id: Uuid::new_v4(),
            name: "Coimbra Sul".to_string(),
            lat,
            lng: -8.4103,
            operational: true,
            status: status.to_string(),
            charger_count,
            power_kw: 150.0,
        }
    }

    #[test]
    fn test_row_conversion() {
        let station = raw("Available", 40.2033, 6).into_station();
        assert_eq!(station.status, StationStatus::Available);
        assert_eq!(station.charger_count, 6);
        assert_eq!(station.coordinates.lat, 40.2033);
        assert!(station.is_eligible());
    }

    #[test]
    fn test_unknown_status_is_never_eligible() {
        let station = raw("Reserved", 40.2033, 2).into_station();
        assert_eq!(station.status, StationStatus::Offline);
        assert!(!station.is_eligible());
    }

    #[test]
    fn test_status_must_match_canonical_spelling() {
        for status in ["available", "AVAILABLE", "aVaIlAbLe", "in_use", "unavailable"] {
            let station = raw(status, 40.2033, 2).into_station();
            assert_eq!(station.status, StationStatus::Offline, "status {:?}", status);
            assert!(!station.is_eligible(), "status {:?} became eligible", status);
        }
    }

    #[test]
    fn test_bad_row_values_are_clamped() {
        let station = raw("Available", 40.2033, -4).into_station();
        assert_eq!(station.charger_count, 0);
        assert!(station.is_eligible());
    }

    #[test]
    fn test_invalid_coordinates_are_never_eligible() {
        let station = raw("Available", 123.0, 4).into_station();
        assert_eq!(station.coordinates, Coordinates { lat: 0.0, lng: 0.0 });
        assert!(!station.operational);
        assert!(!station.is_eligible());
    }

    #[tokio::test]
    async fn test_in_memory_catalogue_preserves_order() {
        let stations: Vec<Station> = ["A", "B", "C"]
            .iter()
            .map(|name| {
                Station::new(
                    name.to_string(),
                    Coordinates::new(41.0, -8.0).unwrap(),
                    StationStatus::Available,
                    1,
                    22.0,
                )
            })
            .collect();
        let catalogue = InMemoryStationCatalogue::new(stations.clone());

        assert_eq!(catalogue.all_stations().await.unwrap(), stations);
        assert_eq!(catalogue.count().await.unwrap(), 3);
    }
}
