//! Review service
//!
//! Stores station reviews (one per user and station) and aggregates them
//! into station ratings.

use refill_core::{
    EntityValidator, Id, RatingOutcome, RefillStationReview, RefillStationReviewDraft, Upserted,
};
use tracing::{info, instrument};

use crate::dto::{ReviewResponse, StationRatingResponse, UpdateReviewRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::station::StationService;

/// Result of submitting a review
#[derive(Debug, Clone)]
pub struct ReviewUpsert {
    pub review: ReviewResponse,
    /// `false` when an earlier review of the same user was replaced
    pub created: bool,
}

/// Review service
pub struct ReviewService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReviewService<'a> {
    /// Create a new ReviewService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List all reviews
    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<ReviewResponse>> {
        let reviews = self.ctx.review_repo().find_all().await?;
        Ok(reviews.into_iter().map(ReviewResponse::from).collect())
    }

    /// Get review by ID
    #[instrument(skip(self))]
    pub async fn get(&self, review_id: Id) -> ServiceResult<ReviewResponse> {
        self.get_entity(review_id).await.map(ReviewResponse::from)
    }

    async fn get_entity(&self, review_id: Id) -> ServiceResult<RefillStationReview> {
        self.ctx
            .review_repo()
            .find_by_id(review_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("RefillStationReview", review_id.to_string()))
    }

    /// The review a user left for a station
    #[instrument(skip(self))]
    pub async fn get_for_user_and_station(
        &self,
        user_id: Id,
        station_id: Id,
    ) -> ServiceResult<ReviewResponse> {
        self.ctx
            .review_repo()
            .find_by_user_and_station(user_id, station_id)
            .await?
            .map(ReviewResponse::from)
            .ok_or_else(|| {
                ServiceError::not_found(
                    "RefillStationReview",
                    format!("user {user_id}, station {station_id}"),
                )
            })
    }

    /// Aggregate the reviews of a station
    #[instrument(skip(self))]
    pub async fn station_rating(&self, station_id: Id) -> ServiceResult<StationRatingResponse> {
        StationService::new(self.ctx).get_entity(station_id).await?;

        let reviews = self.ctx.review_repo().find_by_station(station_id).await?;
        let outcome = RatingOutcome::from_reviews(&reviews);

        Ok(StationRatingResponse::new(station_id, &outcome))
    }

    /// Submit a review; a user's earlier review of the same station is replaced
    #[instrument(skip(self, draft))]
    pub async fn upsert(&self, draft: RefillStationReviewDraft) -> ServiceResult<ReviewUpsert> {
        let new_review = EntityValidator::validate(draft)?;

        let Upserted { id, created } = self.ctx.review_repo().upsert(&new_review).await?;

        if created {
            info!(review_id = %id, station_id = %new_review.station_id, "Review created");
        } else {
            info!(review_id = %id, station_id = %new_review.station_id, "Review replaced");
        }

        Ok(ReviewUpsert {
            review: self.get(id).await?,
            created,
        })
    }

    /// Replace a review by ID
    #[instrument(skip(self, request), fields(review_id = %request.id))]
    pub async fn update(&self, request: UpdateReviewRequest) -> ServiceResult<ReviewResponse> {
        let current = self.get_entity(request.id).await?;

        let review =
            EntityValidator::validate(request.draft)?.with_id(current.id, current.timestamp);
        self.ctx.review_repo().update(&review).await?;

        info!(review_id = %review.id, "Review updated");

        self.get(review.id).await
    }

    /// Delete a review
    #[instrument(skip(self))]
    pub async fn delete(&self, review_id: Id) -> ServiceResult<()> {
        self.ctx.review_repo().delete(review_id).await?;

        info!(review_id = %review_id, "Review deleted");

        Ok(())
    }
}
