//! PostgreSQL implementation of BottleRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use refill_core::entities::{Bottle, NewBottle};
use refill_core::error::DomainError;
use refill_core::traits::{BottleRepository, RepoResult};
use refill_core::value_objects::Id;

use crate::mappers::BottleInsert;
use crate::models::BottleModel;

use super::error::{map_db_error, map_write_error};

const BOTTLE_COLUMNS: &str =
    "id, user_id, nfc_id, fill_volume, water_type, title, bottle_image, active";

/// PostgreSQL implementation of BottleRepository
#[derive(Clone)]
pub struct PgBottleRepository {
    pool: PgPool,
}

impl PgBottleRepository {
    /// Create a new PgBottleRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn into_bottles(rows: Vec<BottleModel>) -> RepoResult<Vec<Bottle>> {
    rows.into_iter().map(Bottle::try_from).collect()
}

#[async_trait]
impl BottleRepository for PgBottleRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Bottle>> {
        let rows = sqlx::query_as::<_, BottleModel>(&format!(
            "SELECT {BOTTLE_COLUMNS} FROM bottles ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        into_bottles(rows)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Bottle>> {
        let result = sqlx::query_as::<_, BottleModel>(&format!(
            "SELECT {BOTTLE_COLUMNS} FROM bottles WHERE id = $1"
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Bottle::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: Id) -> RepoResult<Vec<Bottle>> {
        let rows = sqlx::query_as::<_, BottleModel>(&format!(
            "SELECT {BOTTLE_COLUMNS} FROM bottles WHERE user_id = $1 ORDER BY id"
        ))
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        into_bottles(rows)
    }

    #[instrument(skip(self))]
    async fn find_by_nfc_id(&self, nfc_id: &str) -> RepoResult<Option<Bottle>> {
        let result = sqlx::query_as::<_, BottleModel>(&format!(
            "SELECT {BOTTLE_COLUMNS} FROM bottles WHERE nfc_id = $1 AND nfc_id <> '' LIMIT 1"
        ))
        .bind(nfc_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Bottle::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn nfc_id_exists(&self, nfc_id: &str, exclude: Option<Id>) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(
                SELECT 1 FROM bottles
                WHERE nfc_id = $1 AND nfc_id <> '' AND ($2::BIGINT IS NULL OR id <> $2)
            )
            ",
        )
        .bind(nfc_id)
        .bind(exclude.map(Id::into_inner))
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self, bottle), fields(user_id = %bottle.user_id))]
    async fn create(&self, bottle: &NewBottle) -> RepoResult<Id> {
        let insert = BottleInsert::from(bottle);

        let id = sqlx::query_scalar::<_, i64>(
            r"
            INSERT INTO bottles (user_id, nfc_id, fill_volume, water_type, title, bottle_image, active)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id
            ",
        )
        .bind(insert.user_id)
        .bind(insert.nfc_id)
        .bind(insert.fill_volume)
        .bind(insert.water_type)
        .bind(insert.title)
        .bind(insert.bottle_image)
        .bind(insert.active)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, || DomainError::NfcIdAlreadyExists(bottle.nfc_id.clone())))?;

        Ok(Id::new(id))
    }

    #[instrument(skip(self, bottle), fields(bottle_id = %bottle.id))]
    async fn update(&self, bottle: &Bottle) -> RepoResult<()> {
        let insert = BottleInsert::from(bottle);

        let result = sqlx::query(
            r"
            UPDATE bottles
            SET user_id = $2, nfc_id = $3, fill_volume = $4, water_type = $5,
                title = $6, bottle_image = $7, active = $8
            WHERE id = $1
            ",
        )
        .bind(bottle.id.into_inner())
        .bind(insert.user_id)
        .bind(insert.nfc_id)
        .bind(insert.fill_volume)
        .bind(insert.water_type)
        .bind(insert.title)
        .bind(insert.bottle_image)
        .bind(insert.active)
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error(e, || DomainError::NfcIdAlreadyExists(bottle.nfc_id.clone())))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::BottleNotFound(bottle.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Id) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM bottles WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::BottleNotFound(id));
        }

        Ok(())
    }
}
