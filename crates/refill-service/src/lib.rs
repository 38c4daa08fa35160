//! # refill-service
//!
//! Application layer containing the validate → check-uniqueness → persist
//! pipeline, the read-side reports and the DTOs exposed over HTTP.

pub mod dto;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use services::{
    BottleService, ConsumerTestAnswerService, ConsumerTestQuestionService, ConsumerTestService,
    ContributionService, LikeService, ProblemService, ReviewService, ReviewUpsert,
    ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult, StationService,
    TransactionService, UniquenessGuard, UserService,
};
