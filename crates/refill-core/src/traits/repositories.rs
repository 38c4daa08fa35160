//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. `create` returns the database-assigned id;
//! `update` and `delete` fail with the entity's not-found error when no row
//! matched.

use async_trait::async_trait;

use crate::entities::{
    Bottle, ConsumerTest, ConsumerTestAnswer, ConsumerTestQuestion, Like, NewBottle,
    NewConsumerTest, NewConsumerTestAnswer, NewConsumerTestQuestion, NewLike, NewRefillStation,
    NewRefillStationProblem, NewRefillStationReview, NewUser, NewWaterTransaction, RefillStation,
    RefillStationProblem, RefillStationReview, StationMarker, User, WaterTransaction,
};
use crate::error::DomainError;
use crate::stats::TransactionTotals;
use crate::value_objects::{Id, StationType};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// List all users
    async fn find_all(&self) -> RepoResult<Vec<User>>;

    /// Find user by ID
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<User>>;

    /// Create a new user
    async fn create(&self, user: &NewUser) -> RepoResult<Id>;

    /// Update an existing user
    async fn update(&self, user: &User) -> RepoResult<()>;

    /// Delete a user (and, by cascade, their bottles, reviews and likes)
    async fn delete(&self, id: Id) -> RepoResult<()>;

    /// Number of registered users
    async fn count(&self) -> RepoResult<i64>;
}

// ============================================================================
// Bottle Repository
// ============================================================================

#[async_trait]
pub trait BottleRepository: Send + Sync {
    /// List all bottles
    async fn find_all(&self) -> RepoResult<Vec<Bottle>>;

    /// Find bottle by ID
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Bottle>>;

    /// List the bottles of a user
    async fn find_by_user(&self, user_id: Id) -> RepoResult<Vec<Bottle>>;

    /// Find the bottle carrying an NFC tag
    async fn find_by_nfc_id(&self, nfc_id: &str) -> RepoResult<Option<Bottle>>;

    /// Check if a non-empty NFC id is used by any bottle other than `exclude`
    async fn nfc_id_exists(&self, nfc_id: &str, exclude: Option<Id>) -> RepoResult<bool>;

    /// Create a new bottle
    async fn create(&self, bottle: &NewBottle) -> RepoResult<Id>;

    /// Update an existing bottle
    async fn update(&self, bottle: &Bottle) -> RepoResult<()>;

    /// Delete a bottle
    async fn delete(&self, id: Id) -> RepoResult<()>;
}

// ============================================================================
// Refill Station Repository
// ============================================================================

#[async_trait]
pub trait StationRepository: Send + Sync {
    /// List all stations
    async fn find_all(&self) -> RepoResult<Vec<RefillStation>>;

    /// Find station by ID
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<RefillStation>>;

    /// Map markers of all stations
    async fn find_markers(&self) -> RepoResult<Vec<StationMarker>>;

    /// Create a new station
    async fn create(&self, station: &NewRefillStation) -> RepoResult<Id>;

    /// Update an existing station
    async fn update(&self, station: &RefillStation) -> RepoResult<()>;

    /// Delete a station (and, by cascade, everything attached to it)
    async fn delete(&self, id: Id) -> RepoResult<()>;

    /// Number of stations of a type
    async fn count_by_type(&self, station_type: StationType) -> RepoResult<i64>;
}

// ============================================================================
// Review Repository
// ============================================================================

/// Outcome of an insert-or-replace write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Upserted {
    pub id: Id,
    /// `false` when an existing row was replaced
    pub created: bool,
}

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// List all reviews
    async fn find_all(&self) -> RepoResult<Vec<RefillStationReview>>;

    /// Find review by ID
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<RefillStationReview>>;

    /// List the reviews of a station
    async fn find_by_station(&self, station_id: Id) -> RepoResult<Vec<RefillStationReview>>;

    /// Find the review a user wrote for a station
    async fn find_by_user_and_station(
        &self,
        user_id: Id,
        station_id: Id,
    ) -> RepoResult<Option<RefillStationReview>>;

    /// Insert the review, or replace the one the same user wrote for the
    /// same station. Runs as a single write.
    async fn upsert(&self, review: &NewRefillStationReview) -> RepoResult<Upserted>;

    /// Update an existing review, refreshing its timestamp
    async fn update(&self, review: &RefillStationReview) -> RepoResult<()>;

    /// Delete a review
    async fn delete(&self, id: Id) -> RepoResult<()>;
}

// ============================================================================
// Problem Repository
// ============================================================================

#[async_trait]
pub trait ProblemRepository: Send + Sync {
    /// List all problems
    async fn find_all(&self) -> RepoResult<Vec<RefillStationProblem>>;

    /// Find problem by ID
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<RefillStationProblem>>;

    /// Report a new problem
    async fn create(&self, problem: &NewRefillStationProblem) -> RepoResult<Id>;

    /// Update an existing problem, refreshing its timestamp
    async fn update(&self, problem: &RefillStationProblem) -> RepoResult<()>;

    /// Delete a problem
    async fn delete(&self, id: Id) -> RepoResult<()>;
}

// ============================================================================
// Water Transaction Repository
// ============================================================================

/// Filter for transaction aggregates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransactionFilter {
    /// Only transactions of this user
    pub user_id: Option<Id>,
}

impl TransactionFilter {
    /// Every transaction
    pub fn all() -> Self {
        Self::default()
    }

    /// Transactions of one user
    pub fn for_user(user_id: Id) -> Self {
        Self {
            user_id: Some(user_id),
        }
    }

    /// Check if a transaction passes the filter
    pub fn matches(&self, transaction: &WaterTransaction) -> bool {
        self.user_id
            .is_none_or(|user_id| transaction.user_id == Some(user_id))
    }
}

#[async_trait]
pub trait TransactionRepository: Send + Sync {
    /// List all transactions
    async fn find_all(&self) -> RepoResult<Vec<WaterTransaction>>;

    /// Find transaction by ID
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<WaterTransaction>>;

    /// Record a new transaction
    async fn create(&self, transaction: &NewWaterTransaction) -> RepoResult<Id>;

    /// Update an existing transaction, refreshing its timestamp
    async fn update(&self, transaction: &WaterTransaction) -> RepoResult<()>;

    /// Delete a transaction
    async fn delete(&self, id: Id) -> RepoResult<()>;

    /// Count and summed volume of the matching transactions, in one read
    async fn totals(&self, filter: TransactionFilter) -> RepoResult<TransactionTotals>;
}

// ============================================================================
// Like Repository
// ============================================================================

#[async_trait]
pub trait LikeRepository: Send + Sync {
    /// List all likes
    async fn find_all(&self) -> RepoResult<Vec<Like>>;

    /// Find like by ID
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Like>>;

    /// Find the like of a (station, user) pair
    async fn find_by_pair(&self, station_id: Id, user_id: Id) -> RepoResult<Option<Like>>;

    /// Create a new like
    async fn create(&self, like: &NewLike) -> RepoResult<Id>;

    /// Update an existing like
    async fn update(&self, like: &Like) -> RepoResult<()>;

    /// Delete a like
    async fn delete(&self, id: Id) -> RepoResult<()>;

    /// Number of likes of a station
    async fn count_by_station(&self, station_id: Id) -> RepoResult<i64>;
}

// ============================================================================
// Consumer Test Repositories
// ============================================================================

#[async_trait]
pub trait ConsumerTestRepository: Send + Sync {
    /// List all consumer tests
    async fn find_all(&self) -> RepoResult<Vec<ConsumerTest>>;

    /// Find consumer test by ID
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<ConsumerTest>>;

    /// Create a new consumer test
    async fn create(&self, test: &NewConsumerTest) -> RepoResult<Id>;

    /// Update an existing consumer test
    async fn update(&self, test: &ConsumerTest) -> RepoResult<()>;

    /// Delete a consumer test (and, by cascade, its questions and their answers)
    async fn delete(&self, id: Id) -> RepoResult<()>;
}

#[async_trait]
pub trait ConsumerTestQuestionRepository: Send + Sync {
    /// List all questions
    async fn find_all(&self) -> RepoResult<Vec<ConsumerTestQuestion>>;

    /// Find question by ID
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<ConsumerTestQuestion>>;

    /// Create a new question
    async fn create(&self, question: &NewConsumerTestQuestion) -> RepoResult<Id>;

    /// Update an existing question
    async fn update(&self, question: &ConsumerTestQuestion) -> RepoResult<()>;

    /// Delete a question (and, by cascade, its answers)
    async fn delete(&self, id: Id) -> RepoResult<()>;
}

#[async_trait]
pub trait ConsumerTestAnswerRepository: Send + Sync {
    /// List all answers
    async fn find_all(&self) -> RepoResult<Vec<ConsumerTestAnswer>>;

    /// Find answer by ID
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<ConsumerTestAnswer>>;

    /// Record a new answer
    async fn create(&self, answer: &NewConsumerTestAnswer) -> RepoResult<Id>;

    /// Update an existing answer, refreshing its timestamp
    async fn update(&self, answer: &ConsumerTestAnswer) -> RepoResult<()>;

    /// Delete an answer
    async fn delete(&self, id: Id) -> RepoResult<()>;
}
