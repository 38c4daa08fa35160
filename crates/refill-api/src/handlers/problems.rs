//! Station problem report handlers

use axum::{extract::State, Json};
use refill_core::RefillStationProblemDraft;
use refill_service::{
    dto::{IdQuery, ProblemResponse, UpdateProblemRequest},
    ProblemService,
};

use crate::extractors::{JsonBody, QueryParams};
use crate::response::{ApiResult, Created, NoContent, OneOrMany};
use crate::state::AppState;

/// GET /refill_station_problems[?id=]
pub async fn get_problems(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<IdQuery>,
) -> ApiResult<Json<OneOrMany<ProblemResponse>>> {
    let service = ProblemService::new(state.service_context());
    let response = match query.id()? {
        Some(problem_id) => OneOrMany::One(service.get(problem_id).await?),
        None => OneOrMany::Many(service.list().await?),
    };
    Ok(Json(response))
}

/// POST /refill_station_problems
pub async fn create_problem(
    State(state): State<AppState>,
    JsonBody(draft): JsonBody<RefillStationProblemDraft>,
) -> ApiResult<Created<Json<ProblemResponse>>> {
    let service = ProblemService::new(state.service_context());
    let response = service.create(draft).await?;
    Ok(Created(Json(response)))
}

/// PUT /refill_station_problems
pub async fn update_problem(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<UpdateProblemRequest>,
) -> ApiResult<Json<ProblemResponse>> {
    let service = ProblemService::new(state.service_context());
    let response = service.update(request).await?;
    Ok(Json(response))
}

/// DELETE /refill_station_problems?id=
pub async fn delete_problem(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<IdQuery>,
) -> ApiResult<NoContent> {
    let service = ProblemService::new(state.service_context());
    service.delete(query.require_id()?).await?;
    Ok(NoContent)
}
