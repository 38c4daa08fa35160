//! Bottle handlers

use axum::{
    extract::{Path, State},
    Json,
};
use refill_core::BottleDraft;
use refill_service::{
    dto::{BottleResponse, IdQuery, UpdateBottleRequest},
    BottleService,
};

use crate::extractors::{JsonBody, QueryParams};
use crate::response::{ApiResult, Created, NoContent, OneOrMany};
use crate::state::AppState;

/// Get one bottle, or all of them
///
/// GET /bottles[?id=]
pub async fn get_bottles(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<IdQuery>,
) -> ApiResult<Json<OneOrMany<BottleResponse>>> {
    let service = BottleService::new(state.service_context());
    let response = match query.id()? {
        Some(bottle_id) => OneOrMany::One(service.get(bottle_id).await?),
        None => OneOrMany::Many(service.list().await?),
    };
    Ok(Json(response))
}

/// Register a bottle
///
/// POST /bottles
pub async fn create_bottle(
    State(state): State<AppState>,
    JsonBody(draft): JsonBody<BottleDraft>,
) -> ApiResult<Created<Json<BottleResponse>>> {
    let service = BottleService::new(state.service_context());
    let response = service.create(draft).await?;
    Ok(Created(Json(response)))
}

/// Update a bottle
///
/// PUT /bottles
pub async fn update_bottle(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<UpdateBottleRequest>,
) -> ApiResult<Json<BottleResponse>> {
    let service = BottleService::new(state.service_context());
    let response = service.update(request).await?;
    Ok(Json(response))
}

/// Delete a bottle
///
/// DELETE /bottles?id=
pub async fn delete_bottle(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<IdQuery>,
) -> ApiResult<NoContent> {
    let service = BottleService::new(state.service_context());
    service.delete(query.require_id()?).await?;
    Ok(NoContent)
}

/// Fill preferences of the bottle carrying an NFC tag
///
/// GET /bottles/preferences/{nfc_id}
pub async fn get_bottle_preferences(
    State(state): State<AppState>,
    Path(nfc_id): Path<String>,
) -> ApiResult<Json<BottleResponse>> {
    let service = BottleService::new(state.service_context());
    let response = service.preferences(&nfc_id).await?;
    Ok(Json(response))
}
