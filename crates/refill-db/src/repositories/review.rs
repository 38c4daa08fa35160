//! PostgreSQL implementation of ReviewRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use refill_core::entities::{NewRefillStationReview, RefillStationReview};
use refill_core::error::DomainError;
use refill_core::traits::{RepoResult, ReviewRepository, Upserted};
use refill_core::value_objects::Id;

use crate::mappers::ReviewInsert;
use crate::models::ReviewModel;

use super::error::{map_db_error, map_write_error};

const REVIEW_COLUMNS: &str =
    "id, station_id, user_id, cleanness, accessibility, water_quality, recorded_at";

/// PostgreSQL implementation of ReviewRepository
#[derive(Clone)]
pub struct PgReviewRepository {
    pool: PgPool,
}

impl PgReviewRepository {
    /// Create a new PgReviewRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn into_reviews(rows: Vec<ReviewModel>) -> RepoResult<Vec<RefillStationReview>> {
    rows.into_iter().map(RefillStationReview::try_from).collect()
}

#[async_trait]
impl ReviewRepository for PgReviewRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<RefillStationReview>> {
        let rows = sqlx::query_as::<_, ReviewModel>(&format!(
            "SELECT {REVIEW_COLUMNS} FROM refill_station_reviews ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        into_reviews(rows)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<RefillStationReview>> {
        let result = sqlx::query_as::<_, ReviewModel>(&format!(
            "SELECT {REVIEW_COLUMNS} FROM refill_station_reviews WHERE id = $1"
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(RefillStationReview::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_station(&self, station_id: Id) -> RepoResult<Vec<RefillStationReview>> {
        let rows = sqlx::query_as::<_, ReviewModel>(&format!(
            "SELECT {REVIEW_COLUMNS} FROM refill_station_reviews WHERE station_id = $1 ORDER BY id"
        ))
        .bind(station_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        into_reviews(rows)
    }

    #[instrument(skip(self))]
    async fn find_by_user_and_station(
        &self,
        user_id: Id,
        station_id: Id,
    ) -> RepoResult<Option<RefillStationReview>> {
        let result = sqlx::query_as::<_, ReviewModel>(&format!(
            "SELECT {REVIEW_COLUMNS} FROM refill_station_reviews \
             WHERE user_id = $1 AND station_id = $2"
        ))
        .bind(user_id.into_inner())
        .bind(station_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(RefillStationReview::try_from).transpose()
    }

    #[instrument(skip(self, review), fields(station_id = %review.station_id, user_id = %review.user_id))]
    async fn upsert(&self, review: &NewRefillStationReview) -> RepoResult<Upserted> {
        let insert = ReviewInsert::from(review);

        // xmax is 0 only for a freshly inserted row version
        let (id, created) = sqlx::query_as::<_, (i64, bool)>(
            r"
            INSERT INTO refill_station_reviews (station_id, user_id, cleanness, accessibility, water_quality)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (station_id, user_id) DO UPDATE
            SET cleanness = EXCLUDED.cleanness,
                accessibility = EXCLUDED.accessibility,
                water_quality = EXCLUDED.water_quality,
                recorded_at = NOW()
            RETURNING id, (xmax = 0) AS created
            ",
        )
        .bind(insert.station_id)
        .bind(insert.user_id)
        .bind(insert.cleanness)
        .bind(insert.accessibility)
        .bind(insert.water_quality)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_write_error(e, || DomainError::ReviewAlreadyExists {
                station_id: review.station_id,
                user_id: review.user_id,
            })
        })?;

        Ok(Upserted {
            id: Id::new(id),
            created,
        })
    }

    #[instrument(skip(self, review), fields(review_id = %review.id))]
    async fn update(&self, review: &RefillStationReview) -> RepoResult<()> {
        let insert = ReviewInsert::from(review);

        let result = sqlx::query(
            r"
            UPDATE refill_station_reviews
            SET station_id = $2, user_id = $3, cleanness = $4, accessibility = $5,
                water_quality = $6, recorded_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(review.id.into_inner())
        .bind(insert.station_id)
        .bind(insert.user_id)
        .bind(insert.cleanness)
        .bind(insert.accessibility)
        .bind(insert.water_quality)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_write_error(e, || DomainError::ReviewAlreadyExists {
                station_id: review.station_id,
                user_id: review.user_id,
            })
        })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::ReviewNotFound(review.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Id) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM refill_station_reviews WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::ReviewNotFound(id));
        }

        Ok(())
    }
}
