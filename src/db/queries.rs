use crate::models::Station;
use sqlx::PgPool;
use uuid::Uuid;

use super::station_catalogue::RawStationRow;

/// Every station in catalogue order (insertion order, then id).
pub async fn find_all_stations(pool: &PgPool) -> Result<Vec<Station>, sqlx::Error> {
    let rows = sqlx::query_as::<_, RawStationRow>(
        "SELECT id, name, lat, lng, operational, status, charger_count, power_kw
         FROM charging_stations
         ORDER BY created_at, id",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(RawStationRow::into_station)
        .collect())
}

pub async fn count_stations(pool: &PgPool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM charging_stations")
        .fetch_one(pool)
        .await
}

pub async fn insert_station(pool: &PgPool, station: &Station) -> Result<Uuid, sqlx::Error> {
    let result: (Uuid,) = sqlx::query_as(
        r#"
        INSERT INTO charging_stations (id, name, lat, lng, operational, status, charger_count, power_kw)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING id
        "#,
    )
    .bind(station.id)
    .bind(&station.name)
    .bind(station.coordinates.lat)
    .bind(station.coordinates.lng)
    .bind(station.operational)
    .bind(station.status.to_string())
    .bind(i32::try_from(station.charger_count).unwrap_or(i32::MAX))
    .bind(station.power_kw)
    .fetch_one(pool)
    .await?;

    Ok(result.0)
}
