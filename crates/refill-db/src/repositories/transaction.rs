//! PostgreSQL implementation of TransactionRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use refill_core::entities::{NewWaterTransaction, WaterTransaction};
use refill_core::error::DomainError;
use refill_core::stats::TransactionTotals;
use refill_core::traits::{RepoResult, TransactionFilter, TransactionRepository};
use refill_core::value_objects::Id;

use crate::mappers::TransactionInsert;
use crate::models::{TransactionModel, TransactionTotalsModel};

use super::error::{map_db_error, map_reference_error};

const TRANSACTION_COLUMNS: &str =
    "id, station_id, bottle_id, user_id, volume, water_type, guest, recorded_at";

/// PostgreSQL implementation of TransactionRepository
#[derive(Clone)]
pub struct PgTransactionRepository {
    pool: PgPool,
}

impl PgTransactionRepository {
    /// Create a new PgTransactionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TransactionRepository for PgTransactionRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<WaterTransaction>> {
        let rows = sqlx::query_as::<_, TransactionModel>(&format!(
            "SELECT {TRANSACTION_COLUMNS} FROM water_transactions ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(WaterTransaction::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<WaterTransaction>> {
        let result = sqlx::query_as::<_, TransactionModel>(&format!(
            "SELECT {TRANSACTION_COLUMNS} FROM water_transactions WHERE id = $1"
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(WaterTransaction::try_from).transpose()
    }

    #[instrument(skip(self, transaction), fields(station_id = %transaction.station_id))]
    async fn create(&self, transaction: &NewWaterTransaction) -> RepoResult<Id> {
        let insert = TransactionInsert::from(transaction);

        let id = sqlx::query_scalar::<_, i64>(
            r"
            INSERT INTO water_transactions (station_id, bottle_id, user_id, volume, water_type, guest)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            ",
        )
        .bind(insert.station_id)
        .bind(insert.bottle_id)
        .bind(insert.user_id)
        .bind(insert.volume)
        .bind(insert.water_type)
        .bind(insert.guest)
        .fetch_one(&self.pool)
        .await
        .map_err(map_reference_error)?;

        Ok(Id::new(id))
    }

    #[instrument(skip(self, transaction), fields(transaction_id = %transaction.id))]
    async fn update(&self, transaction: &WaterTransaction) -> RepoResult<()> {
        let insert = TransactionInsert::from(transaction);

        let result = sqlx::query(
            r"
            UPDATE water_transactions
            SET station_id = $2, bottle_id = $3, user_id = $4, volume = $5, water_type = $6,
                guest = $7, recorded_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(transaction.id.into_inner())
        .bind(insert.station_id)
        .bind(insert.bottle_id)
        .bind(insert.user_id)
        .bind(insert.volume)
        .bind(insert.water_type)
        .bind(insert.guest)
        .execute(&self.pool)
        .await
        .map_err(map_reference_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::TransactionNotFound(transaction.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Id) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM water_transactions WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::TransactionNotFound(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn totals(&self, filter: TransactionFilter) -> RepoResult<TransactionTotals> {
        let row = sqlx::query_as::<_, TransactionTotalsModel>(
            r"
            SELECT COUNT(*) AS count, COALESCE(SUM(volume), 0)::BIGINT AS volume_ml
            FROM water_transactions
            WHERE ($1::BIGINT IS NULL OR user_id = $1)
            ",
        )
        .bind(filter.user_id.map(Id::into_inner))
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(TransactionTotals::from(row))
    }
}
