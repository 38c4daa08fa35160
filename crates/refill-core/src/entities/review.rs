//! Refill station review - a user's 1-5 star ratings of one station

use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

use crate::validation::{Candidate, ValidationResult};
use crate::value_objects::{Id, Rating};

/// Review of a station by a user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefillStationReview {
    pub id: Id,
    pub station_id: Id,
    pub user_id: Id,
    pub cleanness: Rating,
    pub accessibility: Rating,
    pub water_quality: Rating,
    pub timestamp: DateTime<Utc>,
}

/// Validated review, ready to be inserted or applied as an update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRefillStationReview {
    pub station_id: Id,
    pub user_id: Id,
    pub cleanness: Rating,
    pub accessibility: Rating,
    pub water_quality: Rating,
}

impl NewRefillStationReview {
    /// Attach a database id and timestamp
    pub fn with_id(self, id: Id, timestamp: DateTime<Utc>) -> RefillStationReview {
        RefillStationReview {
            id,
            station_id: self.station_id,
            user_id: self.user_id,
            cleanness: self.cleanness,
            accessibility: self.accessibility,
            water_quality: self.water_quality,
            timestamp,
        }
    }
}

/// Review as submitted by a client
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RefillStationReviewDraft {
    pub station_id: Id,
    pub user_id: Id,
    pub cleanness: i32,
    pub accessibility: i32,
    pub water_quality: i32,
}

impl Candidate for RefillStationReviewDraft {
    type Valid = NewRefillStationReview;

    fn check(self) -> ValidationResult<NewRefillStationReview> {
        Ok(NewRefillStationReview {
            station_id: self.station_id,
            user_id: self.user_id,
            cleanness: Rating::new("cleanness", self.cleanness)?,
            accessibility: Rating::new("accessibility", self.accessibility)?,
            water_quality: Rating::new("water_quality", self.water_quality)?,
        })
    }
}
