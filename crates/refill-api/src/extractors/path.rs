//! Path parameter extractors
//!
//! Type-safe extraction of row ids from path segments. Ids must be
//! positive integers; anything else is a 400 naming the segment.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use refill_core::Id;

use crate::response::ApiError;

/// A route with a single id segment, e.g. `/refill_stations/:id`
#[derive(Debug, Clone, Copy)]
pub struct IdPath(pub Id);

/// A route with two id segments, e.g. `/likes/:id/users/:user_id`
#[derive(Debug, Clone, Copy)]
pub struct IdPairPath(pub Id, pub Id);

async fn raw_params<S>(parts: &mut Parts, state: &S) -> Result<Vec<(String, String)>, ApiError>
where
    S: Send + Sync,
{
    let Path(params) = Path::<Vec<(String, String)>>::from_request_parts(parts, state)
        .await
        .map_err(|e| ApiError::invalid_path(e.body_text()))?;
    Ok(params)
}

fn parse_param((name, raw): &(String, String)) -> Result<Id, ApiError> {
    Id::parse(raw).map_err(|_| ApiError::invalid_path(format!("Invalid {name} format: '{raw}'")))
}

#[async_trait]
impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match raw_params(parts, state).await?.as_slice() {
            [param] => Ok(IdPath(parse_param(param)?)),
            params => Err(ApiError::internal(anyhow::anyhow!(
                "expected one path parameter, route has {}",
                params.len()
            ))),
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for IdPairPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match raw_params(parts, state).await?.as_slice() {
            [first, second] => Ok(IdPairPath(parse_param(first)?, parse_param(second)?)),
            params => Err(ApiError::internal(anyhow::anyhow!(
                "expected two path parameters, route has {}",
                params.len()
            ))),
        }
    }
}
