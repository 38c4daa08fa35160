//! Like handlers
//!
//! Endpoints for liking stations, counting likes and checking whether a
//! user likes a station.

use axum::{extract::State, Json};
use refill_core::LikeDraft;
use refill_service::{
    dto::{IsLikedResponse, LikeCountResponse, LikeResponse, UpdateLikeRequest},
    LikeService,
};

use crate::extractors::{IdPairPath, IdPath, JsonBody};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// List all likes
///
/// GET /likes
pub async fn get_likes(State(state): State<AppState>) -> ApiResult<Json<Vec<LikeResponse>>> {
    let service = LikeService::new(state.service_context());
    let likes = service.list().await?;
    Ok(Json(likes))
}

/// Like a station
///
/// POST /likes
pub async fn create_like(
    State(state): State<AppState>,
    JsonBody(draft): JsonBody<LikeDraft>,
) -> ApiResult<Created<Json<LikeResponse>>> {
    let service = LikeService::new(state.service_context());
    let response = service.create(draft).await?;
    Ok(Created(Json(response)))
}

/// PUT /likes
pub async fn update_like(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<UpdateLikeRequest>,
) -> ApiResult<Json<LikeResponse>> {
    let service = LikeService::new(state.service_context());
    let response = service.update(request).await?;
    Ok(Json(response))
}

/// Remove a like
///
/// DELETE /likes/{id}
pub async fn delete_like(
    State(state): State<AppState>,
    IdPath(like_id): IdPath,
) -> ApiResult<NoContent> {
    let service = LikeService::new(state.service_context());
    service.delete(like_id).await?;
    Ok(NoContent)
}

/// Number of likes of a station
///
/// GET /likes/{station_id}/count
pub async fn get_like_count(
    State(state): State<AppState>,
    IdPath(station_id): IdPath,
) -> ApiResult<Json<LikeCountResponse>> {
    let service = LikeService::new(state.service_context());
    let response = service.count_for_station(station_id).await?;
    Ok(Json(response))
}

/// Whether a user likes a station
///
/// GET /likes/{station_id}/users/{user_id}
pub async fn get_is_liked(
    State(state): State<AppState>,
    IdPairPath(station_id, user_id): IdPairPath,
) -> ApiResult<Json<IsLikedResponse>> {
    let service = LikeService::new(state.service_context());
    let response = service.is_liked(station_id, user_id).await?;
    Ok(Json(response))
}
