//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs: update envelopes and query parameters (create bodies are
//!   the draft types of `refill_core`)
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities and reports to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

// Re-export commonly used request types
pub use requests::{
    parse_id, IdQuery, UpdateBottleRequest, UpdateConsumerTestAnswerRequest,
    UpdateConsumerTestQuestionRequest, UpdateConsumerTestRequest, UpdateLikeRequest,
    UpdateProblemRequest, UpdateRequest, UpdateReviewRequest, UpdateStationRequest,
    UpdateTransactionRequest, UpdateUserRequest, UserContributionQuery,
};

// Re-export commonly used response types
pub use responses::{
    BottleResponse, CommunityContributionResponse, ConsumerTestAnswerResponse,
    ConsumerTestQuestionResponse, ConsumerTestResponse, HealthChecks, HealthResponse,
    IsLikedResponse, LikeCountResponse, LikeResponse, MarkerResponse, ProblemResponse,
    ReadinessResponse, ReviewResponse, StationRatingResponse, StationResponse,
    StationTypeCountsResponse, TransactionResponse, UserContributionResponse, UserResponse,
};
