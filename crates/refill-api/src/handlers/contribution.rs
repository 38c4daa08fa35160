//! Contribution report handlers

use axum::{extract::State, Json};
use refill_service::{
    dto::{
        CommunityContributionResponse, StationTypeCountsResponse, UserContributionQuery,
        UserContributionResponse,
    },
    ContributionService,
};

use crate::extractors::QueryParams;
use crate::response::ApiResult;
use crate::state::AppState;

/// Water refilled by one user and what it saved
///
/// GET /contribution/user?userId=
pub async fn get_user_contribution(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<UserContributionQuery>,
) -> ApiResult<Json<UserContributionResponse>> {
    let service = ContributionService::new(state.service_context());
    let response = service.for_user(query.user_id()?).await?;
    Ok(Json(response))
}

/// Water refilled by everyone
///
/// GET /contribution/community
pub async fn get_community_contribution(
    State(state): State<AppState>,
) -> ApiResult<Json<CommunityContributionResponse>> {
    let service = ContributionService::new(state.service_context());
    let response = service.community().await?;
    Ok(Json(response))
}

/// Station count per station type
///
/// GET /contribution/kl
pub async fn get_station_type_counts(
    State(state): State<AppState>,
) -> ApiResult<Json<StationTypeCountsResponse>> {
    let service = ContributionService::new(state.service_context());
    let response = service.station_types().await?;
    Ok(Json(response))
}
