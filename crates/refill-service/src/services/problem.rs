//! Station problem service
//!
//! Problem reports have no enforced status order; any allow-listed status
//! may follow any other.

use refill_core::{EntityValidator, Id, RefillStationProblem, RefillStationProblemDraft};
use tracing::{info, instrument};

use crate::dto::{ProblemResponse, UpdateProblemRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Station problem service
pub struct ProblemService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ProblemService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<ProblemResponse>> {
        let problems = self.ctx.problem_repo().find_all().await?;
        Ok(problems.into_iter().map(ProblemResponse::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn get(&self, problem_id: Id) -> ServiceResult<ProblemResponse> {
        self.get_entity(problem_id).await.map(ProblemResponse::from)
    }

    async fn get_entity(&self, problem_id: Id) -> ServiceResult<RefillStationProblem> {
        self.ctx
            .problem_repo()
            .find_by_id(problem_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("RefillStationProblem", problem_id.to_string()))
    }

    /// Report a problem at a station
    #[instrument(skip(self, draft))]
    pub async fn create(&self, draft: RefillStationProblemDraft) -> ServiceResult<ProblemResponse> {
        let new_problem = EntityValidator::validate(draft)?;
        let problem_id = self.ctx.problem_repo().create(&new_problem).await?;

        info!(
            problem_id = %problem_id,
            station_id = %new_problem.station_id,
            status = %new_problem.status,
            "Problem reported"
        );

        self.get(problem_id).await
    }

    #[instrument(skip(self, request), fields(problem_id = %request.id))]
    pub async fn update(&self, request: UpdateProblemRequest) -> ServiceResult<ProblemResponse> {
        let current = self.get_entity(request.id).await?;

        let problem =
            EntityValidator::validate(request.draft)?.with_id(current.id, current.timestamp);
        self.ctx.problem_repo().update(&problem).await?;

        info!(problem_id = %problem.id, status = %problem.status, "Problem updated");

        self.get(problem.id).await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, problem_id: Id) -> ServiceResult<()> {
        self.ctx.problem_repo().delete(problem_id).await?;

        info!(problem_id = %problem_id, "Problem deleted");

        Ok(())
    }
}
