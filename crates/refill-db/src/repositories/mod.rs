//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in refill-core.
//! Each repository handles database operations for a specific domain entity.

mod bottle;
mod error;
mod like;
mod problem;
mod review;
mod station;
mod transaction;
mod user;

pub use bottle::PgBottleRepository;
pub use consumer_test::{
    PgConsumerTestAnswerRepository, PgConsumerTestQuestionRepository, PgConsumerTestRepository,
};
pub use like::PgLikeRepository;
pub use problem::PgProblemRepository;
pub use review::PgReviewRepository;
pub use station::PgStationRepository;
pub use transaction::PgTransactionRepository;
pub use user::PgUserRepository;
