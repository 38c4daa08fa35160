//! Water transaction service

use refill_core::{EntityValidator, Id, WaterTransaction, WaterTransactionDraft};
use tracing::{info, instrument};

use crate::dto::{TransactionResponse, UpdateTransactionRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Water transaction service
pub struct TransactionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> TransactionService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<TransactionResponse>> {
        let transactions = self.ctx.transaction_repo().find_all().await?;
        Ok(transactions
            .into_iter()
            .map(TransactionResponse::from)
            .collect())
    }

    #[instrument(skip(self))]
    pub async fn get(&self, transaction_id: Id) -> ServiceResult<TransactionResponse> {
        self.get_entity(transaction_id)
            .await
            .map(TransactionResponse::from)
    }

    async fn get_entity(&self, transaction_id: Id) -> ServiceResult<WaterTransaction> {
        self.ctx
            .transaction_repo()
            .find_by_id(transaction_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("WaterTransaction", transaction_id.to_string()))
    }

    /// Record one dispensing event
    #[instrument(skip(self, draft))]
    pub async fn create(&self, draft: WaterTransactionDraft) -> ServiceResult<TransactionResponse> {
        let new_transaction = EntityValidator::validate(draft)?;
        let transaction_id = self
            .ctx
            .transaction_repo()
            .create(&new_transaction)
            .await?;

        info!(
            transaction_id = %transaction_id,
            station_id = %new_transaction.station_id,
            volume = new_transaction.volume,
            "Water transaction recorded"
        );

        self.get(transaction_id).await
    }

    #[instrument(skip(self, request), fields(transaction_id = %request.id))]
    pub async fn update(
        &self,
        request: UpdateTransactionRequest,
    ) -> ServiceResult<TransactionResponse> {
        let current = self.get_entity(request.id).await?;

        let transaction =
            EntityValidator::validate(request.draft)?.with_id(current.id, current.timestamp);
        self.ctx.transaction_repo().update(&transaction).await?;

        info!(transaction_id = %transaction.id, "Water transaction updated");

        self.get(transaction.id).await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, transaction_id: Id) -> ServiceResult<()> {
        self.ctx.transaction_repo().delete(transaction_id).await?;

        info!(transaction_id = %transaction_id, "Water transaction deleted");

        Ok(())
    }
}
