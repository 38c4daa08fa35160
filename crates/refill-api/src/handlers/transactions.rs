//! Water transaction handlers
//!
//! Transactions are written by the stations when they dispense water.

use axum::{extract::State, Json};
use refill_core::WaterTransactionDraft;
use refill_service::{
    dto::{IdQuery, TransactionResponse, UpdateTransactionRequest},
    TransactionService,
};

use crate::extractors::{JsonBody, QueryParams};
use crate::response::{ApiResult, Created, NoContent, OneOrMany};
use crate::state::AppState;

/// GET /water_transactions[?id=]
pub async fn get_transactions(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<IdQuery>,
) -> ApiResult<Json<OneOrMany<TransactionResponse>>> {
    let service = TransactionService::new(state.service_context());
    let response = match query.id()? {
        Some(transaction_id) => OneOrMany::One(service.get(transaction_id).await?),
        None => OneOrMany::Many(service.list().await?),
    };
    Ok(Json(response))
}

/// POST /water_transactions
pub async fn create_transaction(
    State(state): State<AppState>,
    JsonBody(draft): JsonBody<WaterTransactionDraft>,
) -> ApiResult<Created<Json<TransactionResponse>>> {
    let service = TransactionService::new(state.service_context());
    let response = service.create(draft).await?;
    Ok(Created(Json(response)))
}

/// PUT /water_transactions
pub async fn update_transaction(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<UpdateTransactionRequest>,
) -> ApiResult<Json<TransactionResponse>> {
    let service = TransactionService::new(state.service_context());
    let response = service.update(request).await?;
    Ok(Json(response))
}

/// DELETE /water_transactions?id=
pub async fn delete_transaction(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<IdQuery>,
) -> ApiResult<NoContent> {
    let service = TransactionService::new(state.service_context());
    service.delete(query.require_id()?).await?;
    Ok(NoContent)
}
