//! Review entity <-> model mapper

use refill_core::entities::{NewRefillStationReview, RefillStationReview};
use refill_core::value_objects::{Id, Rating};
use refill_core::DomainError;

use crate::models::ReviewModel;

use super::corrupt_row;

/// Convert ReviewModel to RefillStationReview entity
impl TryFrom<ReviewModel> for RefillStationReview {
    type Error = DomainError;

    fn try_from(model: ReviewModel) -> Result<Self, Self::Error> {
        let rating = |field, value| {
            Rating::new(field, value).map_err(|e| corrupt_row("refill_station_reviews", model.id, e))
        };

        Ok(RefillStationReview {
            id: Id::new(model.id),
            station_id: Id::new(model.station_id),
            user_id: Id::new(model.user_id),
            cleanness: rating("cleanness", model.cleanness)?,
            accessibility: rating("accessibility", model.accessibility)?,
            water_quality: rating("water_quality", model.water_quality)?,
            timestamp: model.recorded_at,
        })
    }
}

/// Review column values for insert and update
pub struct ReviewInsert {
    pub station_id: i64,
    pub user_id: i64,
    pub cleanness: i32,
    pub accessibility: i32,
    pub water_quality: i32,
}

impl From<&NewRefillStationReview> for ReviewInsert {
    fn from(review: &NewRefillStationReview) -> Self {
        Self {
            station_id: review.station_id.into_inner(),
            user_id: review.user_id.into_inner(),
            cleanness: review.cleanness.value(),
            accessibility: review.accessibility.value(),
            water_quality: review.water_quality.value(),
        }
    }
}

impl From<&RefillStationReview> for ReviewInsert {
    fn from(review: &RefillStationReview) -> Self {
        Self {
            station_id: review.station_id.into_inner(),
            user_id: review.user_id.into_inner(),
            cleanness: review.cleanness.value(),
            accessibility: review.accessibility.value(),
            water_quality: review.water_quality.value(),
        }
    }
}
