//! Problem entity <-> model mapper

use refill_core::entities::{NewRefillStationProblem, RefillStationProblem};
use refill_core::value_objects::{Id, ProblemStatus};
use refill_core::DomainError;

use crate::models::ProblemModel;

use super::corrupt_row;

/// Convert ProblemModel to RefillStationProblem entity
impl TryFrom<ProblemModel> for RefillStationProblem {
    type Error = DomainError;

    fn try_from(model: ProblemModel) -> Result<Self, Self::Error> {
        let status = ProblemStatus::parse("status", &model.status)
            .map_err(|e| corrupt_row("refill_station_problems", model.id, e))?;

        Ok(RefillStationProblem {
            id: Id::new(model.id),
            station_id: Id::new(model.station_id),
            title: model.title,
            description: model.description,
            status,
            image: model.image,
            timestamp: model.recorded_at,
        })
    }
}

/// Problem column values for insert and update
pub struct ProblemInsert<'a> {
    pub station_id: i64,
    pub title: &'a str,
    pub description: &'a str,
    pub status: &'static str,
    pub image: Option<&'a str>,
}

impl<'a> From<&'a NewRefillStationProblem> for ProblemInsert<'a> {
    fn from(problem: &'a NewRefillStationProblem) -> Self {
        Self {
            station_id: problem.station_id.into_inner(),
            title: &problem.title,
            description: &problem.description,
            status: problem.status.as_str(),
            image: problem.image.as_deref(),
        }
    }
}

impl<'a> From<&'a RefillStationProblem> for ProblemInsert<'a> {
    fn from(problem: &'a RefillStationProblem) -> Self {
        Self {
            station_id: problem.station_id.into_inner(),
            title: &problem.title,
            description: &problem.description,
            status: problem.status.as_str(),
            image: problem.image.as_deref(),
        }
    }
}
