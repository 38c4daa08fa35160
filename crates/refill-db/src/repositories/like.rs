//! PostgreSQL implementation of LikeRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use refill_core::entities::{Like, NewLike};
use refill_core::error::DomainError;
use refill_core::traits::{LikeRepository, RepoResult};
use refill_core::value_objects::Id;

use crate::models::LikeModel;

use super::error::{map_db_error, map_write_error};

/// PostgreSQL implementation of LikeRepository
#[derive(Clone)]
pub struct PgLikeRepository {
    pool: PgPool,
}

impl PgLikeRepository {
    /// Create a new PgLikeRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LikeRepository for PgLikeRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Like>> {
        let rows = sqlx::query_as::<_, LikeModel>(
            "SELECT id, station_id, user_id FROM likes ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Like::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Like>> {
        let result = sqlx::query_as::<_, LikeModel>(
            "SELECT id, station_id, user_id FROM likes WHERE id = $1",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Like::from))
    }

    #[instrument(skip(self))]
    async fn find_by_pair(&self, station_id: Id, user_id: Id) -> RepoResult<Option<Like>> {
        let result = sqlx::query_as::<_, LikeModel>(
            r"
            SELECT id, station_id, user_id
            FROM likes
            WHERE station_id = $1 AND user_id = $2
            ",
        )
        .bind(station_id.into_inner())
        .bind(user_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Like::from))
    }

    #[instrument(skip(self))]
    async fn create(&self, like: &NewLike) -> RepoResult<Id> {
        let id = sqlx::query_scalar::<_, i64>(
            r"
            INSERT INTO likes (station_id, user_id)
            VALUES ($1, $2)
            RETURNING id
            ",
        )
        .bind(like.station_id.into_inner())
        .bind(like.user_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_write_error(e, || DomainError::LikeAlreadyExists {
                station_id: like.station_id,
                user_id: like.user_id,
            })
        })?;

        Ok(Id::new(id))
    }

    #[instrument(skip(self))]
    async fn update(&self, like: &Like) -> RepoResult<()> {
        let result = sqlx::query("UPDATE likes SET station_id = $2, user_id = $3 WHERE id = $1")
            .bind(like.id.into_inner())
            .bind(like.station_id.into_inner())
            .bind(like.user_id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                map_write_error(e, || DomainError::LikeAlreadyExists {
                    station_id: like.station_id,
                    user_id: like.user_id,
                })
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::LikeNotFound(like.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Id) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM likes WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::LikeNotFound(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn count_by_station(&self, station_id: Id) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM likes WHERE station_id = $1")
            .bind(station_id.into_inner())
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }
}
