//! Service context - dependency container for services
//!
//! Holds the repository ports every service works through.

use std::sync::Arc;

use refill_core::traits::{
    BottleRepository, ConsumerTestAnswerRepository, ConsumerTestQuestionRepository,
    ConsumerTestRepository, LikeRepository, ProblemRepository, ReviewRepository,
    StationRepository, TransactionRepository, UserRepository,
};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Built once at startup and shared (cheaply cloned) by every request.
/// Services borrow it and reach storage only through the repository traits,
/// so tests can swap in in-memory implementations.
#[derive(Clone)]
pub struct ServiceContext {
    user_repo: Arc<dyn UserRepository>,
    bottle_repo: Arc<dyn BottleRepository>,
    station_repo: Arc<dyn StationRepository>,
    review_repo: Arc<dyn ReviewRepository>,
    problem_repo: Arc<dyn ProblemRepository>,
    transaction_repo: Arc<dyn TransactionRepository>,
    like_repo: Arc<dyn LikeRepository>,
    consumer_test_repo: Arc<dyn ConsumerTestRepository>,
    question_repo: Arc<dyn ConsumerTestQuestionRepository>,
    answer_repo: Arc<dyn ConsumerTestAnswerRepository>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        bottle_repo: Arc<dyn BottleRepository>,
        station_repo: Arc<dyn StationRepository>,
        review_repo: Arc<dyn ReviewRepository>,
        problem_repo: Arc<dyn ProblemRepository>,
        transaction_repo: Arc<dyn TransactionRepository>,
        like_repo: Arc<dyn LikeRepository>,
        consumer_test_repo: Arc<dyn ConsumerTestRepository>,
        question_repo: Arc<dyn ConsumerTestQuestionRepository>,
        answer_repo: Arc<dyn ConsumerTestAnswerRepository>,
    ) -> Self {
        Self {
            user_repo,
            bottle_repo,
            station_repo,
            review_repo,
            problem_repo,
            transaction_repo,
            like_repo,
            consumer_test_repo,
            question_repo,
            answer_repo,
        }
    }

    // ========================================================================
    // Repository accessors
    // ========================================================================

    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    pub fn bottle_repo(&self) -> &dyn BottleRepository {
        self.bottle_repo.as_ref()
    }

    pub fn station_repo(&self) -> &dyn StationRepository {
        self.station_repo.as_ref()
    }

    pub fn review_repo(&self) -> &dyn ReviewRepository {
        self.review_repo.as_ref()
    }

    pub fn problem_repo(&self) -> &dyn ProblemRepository {
        self.problem_repo.as_ref()
    }

    pub fn transaction_repo(&self) -> &dyn TransactionRepository {
        self.transaction_repo.as_ref()
    }

    pub fn like_repo(&self) -> &dyn LikeRepository {
        self.like_repo.as_ref()
    }

    pub fn consumer_test_repo(&self) -> &dyn ConsumerTestRepository {
        self.consumer_test_repo.as_ref()
    }

    pub fn question_repo(&self) -> &dyn ConsumerTestQuestionRepository {
        self.question_repo.as_ref()
    }

    pub fn answer_repo(&self) -> &dyn ConsumerTestAnswerRepository {
        self.answer_repo.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    user_repo: Option<Arc<dyn UserRepository>>,
    bottle_repo: Option<Arc<dyn BottleRepository>>,
    station_repo: Option<Arc<dyn StationRepository>>,
    review_repo: Option<Arc<dyn ReviewRepository>>,
    problem_repo: Option<Arc<dyn ProblemRepository>>,
    transaction_repo: Option<Arc<dyn TransactionRepository>>,
    like_repo: Option<Arc<dyn LikeRepository>>,
    consumer_test_repo: Option<Arc<dyn ConsumerTestRepository>>,
    question_repo: Option<Arc<dyn ConsumerTestQuestionRepository>>,
    answer_repo: Option<Arc<dyn ConsumerTestAnswerRepository>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn bottle_repo(mut self, repo: Arc<dyn BottleRepository>) -> Self {
        self.bottle_repo = Some(repo);
        self
    }

    pub fn station_repo(mut self, repo: Arc<dyn StationRepository>) -> Self {
        self.station_repo = Some(repo);
        self
    }

    pub fn review_repo(mut self, repo: Arc<dyn ReviewRepository>) -> Self {
        self.review_repo = Some(repo);
        self
    }

    pub fn problem_repo(mut self, repo: Arc<dyn ProblemRepository>) -> Self {
        self.problem_repo = Some(repo);
        self
    }

    pub fn transaction_repo(mut self, repo: Arc<dyn TransactionRepository>) -> Self {
        self.transaction_repo = Some(repo);
        self
    }

    pub fn like_repo(mut self, repo: Arc<dyn LikeRepository>) -> Self {
        self.like_repo = Some(repo);
        self
    }

    pub fn consumer_test_repo(mut self, repo: Arc<dyn ConsumerTestRepository>) -> Self {
        self.consumer_test_repo = Some(repo);
        self
    }

    pub fn question_repo(mut self, repo: Arc<dyn ConsumerTestQuestionRepository>) -> Self {
        self.question_repo = Some(repo);
        self
    }

    pub fn answer_repo(mut self, repo: Arc<dyn ConsumerTestAnswerRepository>) -> Self {
        self.answer_repo = Some(repo);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Internal` if any repository is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.user_repo.ok_or_else(|| missing("user_repo"))?,
            self.bottle_repo.ok_or_else(|| missing("bottle_repo"))?,
            self.station_repo.ok_or_else(|| missing("station_repo"))?,
            self.review_repo.ok_or_else(|| missing("review_repo"))?,
            self.problem_repo.ok_or_else(|| missing("problem_repo"))?,
            self.transaction_repo.ok_or_else(|| missing("transaction_repo"))?,
            self.like_repo.ok_or_else(|| missing("like_repo"))?,
            self.consumer_test_repo.ok_or_else(|| missing("consumer_test_repo"))?,
            self.question_repo.ok_or_else(|| missing("question_repo"))?,
            self.answer_repo.ok_or_else(|| missing("answer_repo"))?,
        ))
    }
}

fn missing(name: &str) -> ServiceError {
    ServiceError::internal(format!("{name} is required"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::InMemoryStore;

    #[test]
    fn test_builder_requires_every_repository() {
        let store = Arc::new(InMemoryStore::default());
        let err = ServiceContextBuilder::new()
            .user_repo(store.clone())
            .bottle_repo(store)
            .build()
            .unwrap_err();

        assert_eq!(err.status_code(), 500);
        assert!(err.to_string().contains("station_repo is required"));
    }

    #[test]
    fn test_builder_with_all_repositories() {
        let ctx = InMemoryStore::context();
        assert!(format!("{ctx:?}").contains("ServiceContext"));
    }
}
