//! User handlers
//!
//! Endpoints for user accounts and the bottles registered to them.

use axum::{extract::State, Json};
use refill_core::UserDraft;
use refill_service::{
    dto::{BottleResponse, IdQuery, UpdateUserRequest, UserResponse},
    BottleService, UserService,
};

use crate::extractors::{IdPath, JsonBody, QueryParams};
use crate::response::{ApiResult, Created, NoContent, OneOrMany};
use crate::state::AppState;

/// Get one user, or all of them
///
/// GET /users[?id=]
pub async fn get_users(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<IdQuery>,
) -> ApiResult<Json<OneOrMany<UserResponse>>> {
    let service = UserService::new(state.service_context());
    let response = match query.id()? {
        Some(user_id) => OneOrMany::One(service.get(user_id).await?),
        None => OneOrMany::Many(service.list().await?),
    };
    Ok(Json(response))
}

/// Create user
///
/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(draft): JsonBody<UserDraft>,
) -> ApiResult<Created<Json<UserResponse>>> {
    let service = UserService::new(state.service_context());
    let response = service.create(draft).await?;
    Ok(Created(Json(response)))
}

/// Update user
///
/// PUT /users
pub async fn update_user(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<UpdateUserRequest>,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.update(request).await?;
    Ok(Json(response))
}

/// Delete user together with their bottles, reviews and likes
///
/// DELETE /users?id=
pub async fn delete_user(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<IdQuery>,
) -> ApiResult<NoContent> {
    let service = UserService::new(state.service_context());
    service.delete(query.require_id()?).await?;
    Ok(NoContent)
}

/// Bottles registered to a user
///
/// GET /users/{id}/bottles
pub async fn get_user_bottles(
    State(state): State<AppState>,
    IdPath(user_id): IdPath,
) -> ApiResult<Json<Vec<BottleResponse>>> {
    let service = BottleService::new(state.service_context());
    let bottles = service.list_for_user(user_id).await?;
    Ok(Json(bottles))
}
