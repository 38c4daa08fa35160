//! # refill-core
//!
//! Domain layer containing entities, value objects, validation, statistics and
//! repository traits. This crate has zero dependencies on infrastructure
//! (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod stats;
pub mod traits;
pub mod validation;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Bottle, BottleDraft, ConsumerTest, ConsumerTestAnswer, ConsumerTestAnswerDraft,
    ConsumerTestDraft, ConsumerTestQuestion, ConsumerTestQuestionDraft, Like, LikeDraft,
    NewBottle, NewConsumerTest, NewConsumerTestAnswer, NewConsumerTestQuestion, NewLike,
    NewRefillStation, NewRefillStationProblem, NewRefillStationReview, NewUser,
    NewWaterTransaction, RefillStation, RefillStationDraft, RefillStationProblem,
    RefillStationProblemDraft, RefillStationReview, RefillStationReviewDraft, StationMarker,
    User, UserDraft, WaterTransaction, WaterTransactionDraft,
};
pub use error::DomainError;
pub use stats::{
    CommunityContribution, RatingOutcome, RatingSummary, Savings, StationTypeCounts,
    TransactionTotals, UserContribution,
};
pub use traits::{
    BottleRepository, ConsumerTestAnswerRepository, ConsumerTestQuestionRepository,
    ConsumerTestRepository, LikeRepository, ProblemRepository, RepoResult, ReviewRepository,
    StationRepository, TransactionFilter, TransactionRepository, Upserted, UserRepository,
};
pub use validation::{Candidate, EntityValidator, ValidationError, ValidationResult};
pub use value_objects::{
    Id, IdParseError, OfferedWaterTypes, ProblemStatus, Rating, StationType, WaterType,
};
