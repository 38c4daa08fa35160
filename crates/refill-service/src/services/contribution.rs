//! Contribution service
//!
//! Read-side reports: refilled water and what it saved, per user and for
//! the whole community, plus the station count per station type.

use refill_core::{
    CommunityContribution, Id, StationType, StationTypeCounts, TransactionFilter,
    UserContribution,
};
use tracing::{debug, instrument};

use crate::dto::{
    CommunityContributionResponse, StationTypeCountsResponse, UserContributionResponse,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Contribution service
pub struct ContributionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ContributionService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Contribution of one user. A user without transactions reports zeros.
    #[instrument(skip(self))]
    pub async fn for_user(&self, user_id: Id) -> ServiceResult<UserContributionResponse> {
        let totals = self
            .ctx
            .transaction_repo()
            .totals(TransactionFilter::for_user(user_id))
            .await?;

        debug!(count = totals.count, volume_ml = totals.volume_ml, "User totals");

        Ok(UserContributionResponse::from(UserContribution::from(totals)))
    }

    /// Contribution of the whole community
    #[instrument(skip(self))]
    pub async fn community(&self) -> ServiceResult<CommunityContributionResponse> {
        let totals = self
            .ctx
            .transaction_repo()
            .totals(TransactionFilter::all())
            .await?;
        let amount_user = self.ctx.user_repo().count().await?;

        Ok(CommunityContributionResponse::from(
            CommunityContribution::new(totals, amount_user),
        ))
    }

    /// Number of smart and manual stations
    #[instrument(skip(self))]
    pub async fn station_types(&self) -> ServiceResult<StationTypeCountsResponse> {
        let stations = self.ctx.station_repo();
        let counts = StationTypeCounts {
            smart: stations.count_by_type(StationType::Smart).await?,
            manual: stations.count_by_type(StationType::Manual).await?,
        };

        Ok(StationTypeCountsResponse::from(counts))
    }
}
