//! Like service
//!
//! Likes are unique per (station, user). Counts are always read fresh
//! from storage.

use refill_core::{EntityValidator, Id, LikeDraft};
use tracing::{info, instrument};

use crate::dto::{IsLikedResponse, LikeCountResponse, LikeResponse, UpdateLikeRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::station::StationService;
use super::uniqueness::UniquenessGuard;
use super::user::UserService;

/// Like service
pub struct LikeService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> LikeService<'a> {
    /// Create a new LikeService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List all likes
    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<LikeResponse>> {
        let likes = self.ctx.like_repo().find_all().await?;
        Ok(likes.into_iter().map(LikeResponse::from).collect())
    }

    /// Like a station
    #[instrument(skip(self))]
    pub async fn create(&self, draft: LikeDraft) -> ServiceResult<LikeResponse> {
        let new_like = EntityValidator::validate(draft)?;
        UniquenessGuard::new(self.ctx)
            .check_like(&new_like, None)
            .await?;

        let like_id = self.ctx.like_repo().create(&new_like).await?;

        info!(
            like_id = %like_id,
            station_id = %new_like.station_id,
            user_id = %new_like.user_id,
            "Like created"
        );

        Ok(LikeResponse::from(new_like.with_id(like_id)))
    }

    /// Move a like to another (station, user) pair
    #[instrument(skip(self, request), fields(like_id = %request.id))]
    pub async fn update(&self, request: UpdateLikeRequest) -> ServiceResult<LikeResponse> {
        self.ctx
            .like_repo()
            .find_by_id(request.id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Like", request.id.to_string()))?;

        let new_like = EntityValidator::validate(request.draft)?;
        UniquenessGuard::new(self.ctx)
            .check_like(&new_like, Some(request.id))
            .await?;

        let like = new_like.with_id(request.id);
        self.ctx.like_repo().update(&like).await?;

        info!(like_id = %like.id, "Like updated");

        Ok(LikeResponse::from(like))
    }

    /// Remove a like
    #[instrument(skip(self))]
    pub async fn delete(&self, like_id: Id) -> ServiceResult<()> {
        self.ctx.like_repo().delete(like_id).await?;

        info!(like_id = %like_id, "Like deleted");

        Ok(())
    }

    /// Number of likes of a station; unknown stations have none
    #[instrument(skip(self))]
    pub async fn count_for_station(&self, station_id: Id) -> ServiceResult<LikeCountResponse> {
        let count = self.ctx.like_repo().count_by_station(station_id).await?;
        Ok(LikeCountResponse { station_id, count })
    }

    /// Whether a user likes a station. Both must exist.
    #[instrument(skip(self))]
    pub async fn is_liked(&self, station_id: Id, user_id: Id) -> ServiceResult<IsLikedResponse> {
        StationService::new(self.ctx).get_entity(station_id).await?;
        UserService::new(self.ctx).get_entity(user_id).await?;

        let like = self
            .ctx
            .like_repo()
            .find_by_pair(station_id, user_id)
            .await?;

        Ok(IsLikedResponse {
            is_liked: like.is_some(),
        })
    }
}
