//! Ports implemented by the infrastructure layer

mod repositories;

pub use repositories::{
    BottleRepository, ConsumerTestAnswerRepository, ConsumerTestQuestionRepository,
    ConsumerTestRepository, LikeRepository, ProblemRepository, RepoResult, ReviewRepository,
    StationRepository, TransactionFilter, TransactionRepository, Upserted, UserRepository,
};
