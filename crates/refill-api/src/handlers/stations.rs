//! Refill station handlers
//!
//! Station CRUD, map markers and the aggregated station rating.

use axum::{extract::State, Json};
use refill_core::RefillStationDraft;
use refill_service::{
    dto::{IdQuery, MarkerResponse, StationRatingResponse, StationResponse, UpdateStationRequest},
    ReviewService, StationService,
};

use crate::extractors::{IdPath, JsonBody, QueryParams};
use crate::response::{ApiResult, Created, NoContent, OneOrMany};
use crate::state::AppState;

/// Get one station, or all of them
///
/// GET /refill_stations[?id=]
pub async fn get_stations(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<IdQuery>,
) -> ApiResult<Json<OneOrMany<StationResponse>>> {
    let service = StationService::new(state.service_context());
    let response = match query.id()? {
        Some(station_id) => OneOrMany::One(service.get(station_id).await?),
        None => OneOrMany::Many(service.list().await?),
    };
    Ok(Json(response))
}

/// Get station by ID
///
/// GET /refill_stations/{id}
pub async fn get_station(
    State(state): State<AppState>,
    IdPath(station_id): IdPath,
) -> ApiResult<Json<StationResponse>> {
    let service = StationService::new(state.service_context());
    let response = service.get(station_id).await?;
    Ok(Json(response))
}

/// Map markers
///
/// GET /refill_stations/markers
pub async fn get_markers(State(state): State<AppState>) -> ApiResult<Json<Vec<MarkerResponse>>> {
    let service = StationService::new(state.service_context());
    let markers = service.markers().await?;
    Ok(Json(markers))
}

/// Aggregated rating of a station
///
/// GET /refill_stations/{id}/reviews
pub async fn get_station_rating(
    State(state): State<AppState>,
    IdPath(station_id): IdPath,
) -> ApiResult<Json<StationRatingResponse>> {
    let service = ReviewService::new(state.service_context());
    let rating = service.station_rating(station_id).await?;
    Ok(Json(rating))
}

/// Register a station
///
/// POST /refill_stations
pub async fn create_station(
    State(state): State<AppState>,
    JsonBody(draft): JsonBody<RefillStationDraft>,
) -> ApiResult<Created<Json<StationResponse>>> {
    let service = StationService::new(state.service_context());
    let response = service.create(draft).await?;
    Ok(Created(Json(response)))
}

/// Update a station
///
/// PUT /refill_stations
pub async fn update_station(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<UpdateStationRequest>,
) -> ApiResult<Json<StationResponse>> {
    let service = StationService::new(state.service_context());
    let response = service.update(request).await?;
    Ok(Json(response))
}

/// Delete a station
///
/// DELETE /refill_stations?id=
pub async fn delete_station(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<IdQuery>,
) -> ApiResult<NoContent> {
    let service = StationService::new(state.service_context());
    service.delete(query.require_id()?).await?;
    Ok(NoContent)
}
