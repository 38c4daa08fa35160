//! Refill station problem - an issue reported against a station

use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

use crate::validation::{non_blank, Candidate, ValidationResult};
use crate::value_objects::{Id, ProblemStatus};

/// Reported problem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefillStationProblem {
    pub id: Id,
    pub station_id: Id,
    pub title: String,
    pub description: String,
    pub status: ProblemStatus,
    pub image: Option<String>,
    /// Set when the problem is reported and on every update
    pub timestamp: DateTime<Utc>,
}

/// Validated problem report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRefillStationProblem {
    pub station_id: Id,
    pub title: String,
    pub description: String,
    pub status: ProblemStatus,
    pub image: Option<String>,
}

impl NewRefillStationProblem {
    /// Attach a database id and timestamp
    pub fn with_id(self, id: Id, timestamp: DateTime<Utc>) -> RefillStationProblem {
        RefillStationProblem {
            id,
            station_id: self.station_id,
            title: self.title,
            description: self.description,
            status: self.status,
            image: self.image,
            timestamp,
        }
    }
}

/// Problem report as submitted by a client
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RefillStationProblemDraft {
    pub station_id: Id,

    #[validate(length(min = 1, max = 100, message = "must be 1-100 characters"))]
    pub title: String,

    #[serde(default)]
    #[validate(length(max = 255, message = "must be at most 255 characters"))]
    pub description: String,

    pub status: String,

    #[serde(default, alias = "image")]
    pub refill_station_problem_image: Option<String>,
}

impl Candidate for RefillStationProblemDraft {
    type Valid = NewRefillStationProblem;

    fn check(self) -> ValidationResult<NewRefillStationProblem> {
        Ok(NewRefillStationProblem {
            station_id: self.station_id,
            status: ProblemStatus::parse("status", &self.status)?,
            title: self.title,
            description: self.description,
            image: non_blank(self.refill_station_problem_image),
        })
    }
}
