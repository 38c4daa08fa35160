//! Station review handlers

use axum::{extract::State, http::StatusCode, Json};
use refill_core::RefillStationReviewDraft;
use refill_service::{
    dto::{IdQuery, ReviewResponse, UpdateReviewRequest},
    ReviewService,
};

use crate::extractors::{IdPairPath, JsonBody, QueryParams};
use crate::response::{ApiResult, NoContent, OneOrMany};
use crate::state::AppState;

/// Get one review, or all of them
///
/// GET /refill_station_reviews[?id=]
pub async fn get_reviews(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<IdQuery>,
) -> ApiResult<Json<OneOrMany<ReviewResponse>>> {
    let service = ReviewService::new(state.service_context());
    let response = match query.id()? {
        Some(review_id) => OneOrMany::One(service.get(review_id).await?),
        None => OneOrMany::Many(service.list().await?),
    };
    Ok(Json(response))
}

/// The review a user left for a station
///
/// GET /refill_station_reviews/{user_id}/{station_id}
pub async fn get_user_station_review(
    State(state): State<AppState>,
    IdPairPath(user_id, station_id): IdPairPath,
) -> ApiResult<Json<ReviewResponse>> {
    let service = ReviewService::new(state.service_context());
    let response = service.get_for_user_and_station(user_id, station_id).await?;
    Ok(Json(response))
}

/// Submit a review. 201 for a new review, 200 when an earlier one was replaced.
///
/// POST /refill_station_reviews
pub async fn submit_review(
    State(state): State<AppState>,
    JsonBody(draft): JsonBody<RefillStationReviewDraft>,
) -> ApiResult<(StatusCode, Json<ReviewResponse>)> {
    let service = ReviewService::new(state.service_context());
    let outcome = service.upsert(draft).await?;
    let status = if outcome.created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(outcome.review)))
}

/// Update a review
///
/// PUT /refill_station_reviews
pub async fn update_review(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<UpdateReviewRequest>,
) -> ApiResult<Json<ReviewResponse>> {
    let service = ReviewService::new(state.service_context());
    let response = service.update(request).await?;
    Ok(Json(response))
}

/// Delete a review
///
/// DELETE /refill_station_reviews?id=
pub async fn delete_review(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<IdQuery>,
) -> ApiResult<NoContent> {
    let service = ReviewService::new(state.service_context());
    service.delete(query.require_id()?).await?;
    Ok(NoContent)
}
