//! Bottle service
//!
//! Handles bottle registration and the NFC tag lookup used by smart stations.

use refill_core::{Bottle, BottleDraft, EntityValidator, Id};
use tracing::{info, instrument};

use crate::dto::{BottleResponse, UpdateBottleRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::uniqueness::UniquenessGuard;
use super::user::UserService;

/// Bottle service
pub struct BottleService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> BottleService<'a> {
    /// Create a new BottleService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List all bottles
    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<BottleResponse>> {
        let bottles = self.ctx.bottle_repo().find_all().await?;
        Ok(bottles.into_iter().map(BottleResponse::from).collect())
    }

    /// Get bottle by ID
    #[instrument(skip(self))]
    pub async fn get(&self, bottle_id: Id) -> ServiceResult<BottleResponse> {
        self.get_entity(bottle_id).await.map(BottleResponse::from)
    }

    async fn get_entity(&self, bottle_id: Id) -> ServiceResult<Bottle> {
        self.ctx
            .bottle_repo()
            .find_by_id(bottle_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Bottle", bottle_id.to_string()))
    }

    /// List the bottles of one user
    #[instrument(skip(self))]
    pub async fn list_for_user(&self, user_id: Id) -> ServiceResult<Vec<BottleResponse>> {
        UserService::new(self.ctx).get_entity(user_id).await?;

        let bottles = self.ctx.bottle_repo().find_by_user(user_id).await?;
        Ok(bottles.into_iter().map(BottleResponse::from).collect())
    }

    /// Filling preferences of the bottle carrying an NFC tag
    #[instrument(skip(self))]
    pub async fn preferences(&self, nfc_id: &str) -> ServiceResult<BottleResponse> {
        let nfc_id = nfc_id.trim();
        if nfc_id.is_empty() {
            return Err(ServiceError::not_found("Bottle", "empty NFC id"));
        }

        self.ctx
            .bottle_repo()
            .find_by_nfc_id(nfc_id)
            .await?
            .map(BottleResponse::from)
            .ok_or_else(|| ServiceError::not_found("Bottle", format!("NFC id {nfc_id}")))
    }

    /// Register a new bottle
    #[instrument(skip(self, draft))]
    pub async fn create(&self, draft: BottleDraft) -> ServiceResult<BottleResponse> {
        let new_bottle = EntityValidator::validate(draft)?;
        UniquenessGuard::new(self.ctx)
            .check_bottle(&new_bottle, None)
            .await?;

        let bottle_id = self.ctx.bottle_repo().create(&new_bottle).await?;

        info!(bottle_id = %bottle_id, user_id = %new_bottle.user_id, "Bottle created");

        Ok(BottleResponse::from(new_bottle.with_id(bottle_id)))
    }

    /// Replace a bottle
    #[instrument(skip(self, request), fields(bottle_id = %request.id))]
    pub async fn update(&self, request: UpdateBottleRequest) -> ServiceResult<BottleResponse> {
        self.get_entity(request.id).await?;

        let new_bottle = EntityValidator::validate(request.draft)?;
        UniquenessGuard::new(self.ctx)
            .check_bottle(&new_bottle, Some(request.id))
            .await?;

        let bottle = new_bottle.with_id(request.id);
        self.ctx.bottle_repo().update(&bottle).await?;

        info!(bottle_id = %bottle.id, "Bottle updated");

        Ok(BottleResponse::from(bottle))
    }

    /// Delete a bottle
    #[instrument(skip(self))]
    pub async fn delete(&self, bottle_id: Id) -> ServiceResult<()> {
        self.ctx.bottle_repo().delete(bottle_id).await?;

        info!(bottle_id = %bottle_id, "Bottle deleted");

        Ok(())
    }
}
