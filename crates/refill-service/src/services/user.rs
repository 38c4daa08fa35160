//! User service
//!
//! Handles user registration, profile updates, and lookups.

use refill_core::{EntityValidator, Id, User, UserDraft};
use tracing::{info, instrument};

use crate::dto::{UpdateUserRequest, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List all users
    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<UserResponse>> {
        let users = self.ctx.user_repo().find_all().await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    /// Get user by ID
    #[instrument(skip(self))]
    pub async fn get(&self, user_id: Id) -> ServiceResult<UserResponse> {
        self.get_entity(user_id).await.map(UserResponse::from)
    }

    /// Get user entity by ID
    #[instrument(skip(self))]
    pub async fn get_entity(&self, user_id: Id) -> ServiceResult<User> {
        self.ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))
    }

    /// Register a new user
    #[instrument(skip(self, draft))]
    pub async fn create(&self, draft: UserDraft) -> ServiceResult<UserResponse> {
        let new_user = EntityValidator::validate(draft)?;
        let user_id = self.ctx.user_repo().create(&new_user).await?;

        info!(user_id = %user_id, "User created");

        Ok(UserResponse::from(new_user.with_id(user_id)))
    }

    /// Replace a user's profile
    #[instrument(skip(self, request), fields(user_id = %request.id))]
    pub async fn update(&self, request: UpdateUserRequest) -> ServiceResult<UserResponse> {
        self.get_entity(request.id).await?;

        let user = EntityValidator::validate(request.draft)?.with_id(request.id);
        self.ctx.user_repo().update(&user).await?;

        info!(user_id = %user.id, "User updated");

        Ok(UserResponse::from(user))
    }

    /// Delete a user together with their bottles, reviews and likes
    #[instrument(skip(self))]
    pub async fn delete(&self, user_id: Id) -> ServiceResult<()> {
        self.ctx.user_repo().delete(user_id).await?;

        info!(user_id = %user_id, "User deleted");

        Ok(())
    }
}
