//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::validation::ValidationError;
use crate::value_objects::Id;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(Id),

    #[error("Bottle not found: {0}")]
    BottleNotFound(Id),

    #[error("Refill station not found: {0}")]
    StationNotFound(Id),

    #[error("Review not found: {0}")]
    ReviewNotFound(Id),

    #[error("Problem not found: {0}")]
    ProblemNotFound(Id),

    #[error("Water transaction not found: {0}")]
    TransactionNotFound(Id),

    #[error("Like not found: {0}")]
    LikeNotFound(Id),

    #[error("Consumer test not found: {0}")]
    ConsumerTestNotFound(Id),

    #[error("Consumer test question not found: {0}")]
    ConsumerTestQuestionNotFound(Id),

    #[error("Consumer test answer not found: {0}")]
    ConsumerTestAnswerNotFound(Id),

    /// A referenced row (station, user, bottle, ...) does not exist
    #[error("Referenced entity not found: {0}")]
    ReferenceNotFound(String),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error(transparent)]
    Validation(#[from] ValidationError),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("NFC id already registered: {0}")]
    NfcIdAlreadyExists(String),

    #[error("Station {station_id} is already liked by user {user_id}")]
    LikeAlreadyExists { station_id: Id, user_id: Id },

    #[error("User {user_id} has already reviewed station {station_id}")]
    ReviewAlreadyExists { station_id: Id, user_id: Id },

    #[error("Email already in use")]
    EmailAlreadyExists,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::BottleNotFound(_) => "UNKNOWN_BOTTLE",
            Self::StationNotFound(_) => "UNKNOWN_REFILL_STATION",
            Self::ReviewNotFound(_) => "UNKNOWN_REVIEW",
            Self::ProblemNotFound(_) => "UNKNOWN_PROBLEM",
            Self::TransactionNotFound(_) => "UNKNOWN_WATER_TRANSACTION",
            Self::LikeNotFound(_) => "UNKNOWN_LIKE",
            Self::ConsumerTestNotFound(_) => "UNKNOWN_CONSUMER_TEST",
            Self::ConsumerTestQuestionNotFound(_) => "UNKNOWN_CONSUMER_TEST_QUESTION",
            Self::ConsumerTestAnswerNotFound(_) => "UNKNOWN_CONSUMER_TEST_ANSWER",
            Self::ReferenceNotFound(_) => "UNKNOWN_REFERENCE",

            // Validation
            Self::Validation(_) => "VALIDATION_ERROR",

            // Conflict
            Self::NfcIdAlreadyExists(_) => "NFC_ID_ALREADY_EXISTS",
            Self::LikeAlreadyExists { .. } => "LIKE_ALREADY_EXISTS",
            Self::ReviewAlreadyExists { .. } => "REVIEW_ALREADY_EXISTS",
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::BottleNotFound(_)
                | Self::StationNotFound(_)
                | Self::ReviewNotFound(_)
                | Self::ProblemNotFound(_)
                | Self::TransactionNotFound(_)
                | Self::LikeNotFound(_)
                | Self::ConsumerTestNotFound(_)
                | Self::ConsumerTestQuestionNotFound(_)
                | Self::ConsumerTestAnswerNotFound(_)
                | Self::ReferenceNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::NfcIdAlreadyExists(_)
                | Self::LikeAlreadyExists { .. }
                | Self::ReviewAlreadyExists { .. }
                | Self::EmailAlreadyExists
        )
    }
}
