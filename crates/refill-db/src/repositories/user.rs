//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use refill_core::entities::{NewUser, User};
use refill_core::error::DomainError;
use refill_core::traits::{RepoResult, UserRepository};
use refill_core::value_objects::Id;

use crate::models::UserModel;

use super::error::{map_db_error, map_write_error};

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, first_name, last_name, email
            FROM users
            ORDER BY id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, first_name, last_name, email
            FROM users
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn create(&self, user: &NewUser) -> RepoResult<Id> {
        let id = sqlx::query_scalar::<_, i64>(
            r"
            INSERT INTO users (first_name, last_name, email)
            VALUES ($1, $2, $3)
            RETURNING id
            ",
        )
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.email)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, || DomainError::EmailAlreadyExists))?;

        Ok(Id::new(id))
    }

    #[instrument(skip(self))]
    async fn update(&self, user: &User) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE users
            SET first_name = $2, last_name = $3, email = $4
            WHERE id = $1
            ",
        )
        .bind(user.id.into_inner())
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.email)
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error(e, || DomainError::EmailAlreadyExists))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::UserNotFound(user.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Id) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::UserNotFound(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgUserRepository>();
    }
}
