//! Business logic services
//!
//! Every write goes through the same pipeline: the entity validator,
//! then the uniqueness guard where an invariant spans rows, then the
//! repository. Read-side services feed repository rows into the
//! statistics of `refill_core::stats`.

pub mod bottle;
pub mod context;
pub mod contribution;
pub mod error;
pub mod like;
pub mod problem;
pub mod review;
pub mod station;
pub mod transaction;
pub mod uniqueness;
pub mod user;

// Re-export all services for convenience
pub use bottle::BottleService;
pub use consumer_test::{
    ConsumerTestAnswerService, ConsumerTestQuestionService, ConsumerTestService,
};
pub use context::{ServiceContext, ServiceContextBuilder};
pub use contribution::ContributionService;
pub use error::{ServiceError, ServiceResult};
pub use like::LikeService;
pub use problem::ProblemService;
pub use review::{ReviewService, ReviewUpsert};
pub use station::StationService;
pub use transaction::TransactionService;
pub use uniqueness::UniquenessGuard;
pub use user::UserService;
