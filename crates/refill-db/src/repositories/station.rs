//! PostgreSQL implementation of StationRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use refill_core::entities::{NewRefillStation, RefillStation, StationMarker};
use refill_core::error::DomainError;
use refill_core::traits::{RepoResult, StationRepository};
use refill_core::value_objects::{Id, StationType};

use crate::mappers::StationInsert;
use crate::models::{StationMarkerModel, StationModel};

use super::error::{map_db_error, map_reference_error};

const STATION_COLUMNS: &str = "id, name, description, latitude, longitude, address, water_source, \
     opening_times, active, type, offered_water_types, image";

/// PostgreSQL implementation of StationRepository
#[derive(Clone)]
pub struct PgStationRepository {
    pool: PgPool,
}

impl PgStationRepository {
    /// Create a new PgStationRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StationRepository for PgStationRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<RefillStation>> {
        let rows = sqlx::query_as::<_, StationModel>(&format!(
            "SELECT {STATION_COLUMNS} FROM refill_stations ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(RefillStation::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<RefillStation>> {
        let result = sqlx::query_as::<_, StationModel>(&format!(
            "SELECT {STATION_COLUMNS} FROM refill_stations WHERE id = $1"
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(RefillStation::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_markers(&self) -> RepoResult<Vec<StationMarker>> {
        let rows = sqlx::query_as::<_, StationMarkerModel>(
            r"
            SELECT id, latitude, longitude, active
            FROM refill_stations
            ORDER BY id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(StationMarker::from).collect())
    }

    #[instrument(skip(self, station), fields(name = %station.name))]
    async fn create(&self, station: &NewRefillStation) -> RepoResult<Id> {
        let insert = StationInsert::from(station);

        let id = sqlx::query_scalar::<_, i64>(
            r"
            INSERT INTO refill_stations (name, description, latitude, longitude, address,
                water_source, opening_times, active, type, offered_water_types, image)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING id
            ",
        )
        .bind(insert.name)
        .bind(insert.description)
        .bind(insert.latitude)
        .bind(insert.longitude)
        .bind(insert.address)
        .bind(insert.water_source)
        .bind(insert.opening_times)
        .bind(insert.active)
        .bind(insert.station_type)
        .bind(insert.offered_water_types)
        .bind(insert.image)
        .fetch_one(&self.pool)
        .await
        .map_err(map_reference_error)?;

        Ok(Id::new(id))
    }

    #[instrument(skip(self, station), fields(station_id = %station.id))]
    async fn update(&self, station: &RefillStation) -> RepoResult<()> {
        let insert = StationInsert::from(station);

        let result = sqlx::query(
            r"
            UPDATE refill_stations
            SET name = $2, description = $3, latitude = $4, longitude = $5, address = $6,
                water_source = $7, opening_times = $8, active = $9, type = $10,
                offered_water_types = $11, image = $12
            WHERE id = $1
            ",
        )
        .bind(station.id.into_inner())
        .bind(insert.name)
        .bind(insert.description)
        .bind(insert.latitude)
        .bind(insert.longitude)
        .bind(insert.address)
        .bind(insert.water_source)
        .bind(insert.opening_times)
        .bind(insert.active)
        .bind(insert.station_type)
        .bind(insert.offered_water_types)
        .bind(insert.image)
        .execute(&self.pool)
        .await
        .map_err(map_reference_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::StationNotFound(station.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Id) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM refill_stations WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::StationNotFound(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn count_by_type(&self, station_type: StationType) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM refill_stations WHERE LOWER(type) = $1",
        )
        .bind(station_type.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }
}
