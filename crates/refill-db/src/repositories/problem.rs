//! PostgreSQL implementation of ProblemRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use refill_core::entities::{NewRefillStationProblem, RefillStationProblem};
use refill_core::error::DomainError;
use refill_core::traits::{ProblemRepository, RepoResult};
use refill_core::value_objects::Id;

use crate::mappers::ProblemInsert;
use crate::models::ProblemModel;

use super::error::{map_db_error, map_reference_error};

const PROBLEM_COLUMNS: &str = "id, station_id, title, description, status, image, recorded_at";

/// PostgreSQL implementation of ProblemRepository
#[derive(Clone)]
pub struct PgProblemRepository {
    pool: PgPool,
}

impl PgProblemRepository {
    /// Create a new PgProblemRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProblemRepository for PgProblemRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<RefillStationProblem>> {
        let rows = sqlx::query_as::<_, ProblemModel>(&format!(
            "SELECT {PROBLEM_COLUMNS} FROM refill_station_problems ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(RefillStationProblem::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<RefillStationProblem>> {
        let result = sqlx::query_as::<_, ProblemModel>(&format!(
            "SELECT {PROBLEM_COLUMNS} FROM refill_station_problems WHERE id = $1"
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(RefillStationProblem::try_from).transpose()
    }

    #[instrument(skip(self, problem), fields(station_id = %problem.station_id))]
    async fn create(&self, problem: &NewRefillStationProblem) -> RepoResult<Id> {
        let insert = ProblemInsert::from(problem);

        let id = sqlx::query_scalar::<_, i64>(
            r"
            INSERT INTO refill_station_problems (station_id, title, description, status, image)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            ",
        )
        .bind(insert.station_id)
        .bind(insert.title)
        .bind(insert.description)
        .bind(insert.status)
        .bind(insert.image)
        .fetch_one(&self.pool)
        .await
        .map_err(map_reference_error)?;

        Ok(Id::new(id))
    }

    #[instrument(skip(self, problem), fields(problem_id = %problem.id))]
    async fn update(&self, problem: &RefillStationProblem) -> RepoResult<()> {
        let insert = ProblemInsert::from(problem);

        let result = sqlx::query(
            r"
            UPDATE refill_station_problems
            SET station_id = $2, title = $3, description = $4, status = $5, image = $6,
                recorded_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(problem.id.into_inner())
        .bind(insert.station_id)
        .bind(insert.title)
        .bind(insert.description)
        .bind(insert.status)
        .bind(insert.image)
        .execute(&self.pool)
        .await
        .map_err(map_reference_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::ProblemNotFound(problem.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Id) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM refill_station_problems WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::ProblemNotFound(id));
        }

        Ok(())
    }
}
