//! Request DTOs for API endpoints
//!
//! Create bodies decode straight into the draft types of `refill_core`.
//! Update bodies carry the id of the row next to the same fields.

use refill_core::{
    BottleDraft, ConsumerTestAnswerDraft, ConsumerTestDraft, ConsumerTestQuestionDraft, Id,
    LikeDraft, RefillStationDraft, RefillStationProblemDraft, RefillStationReviewDraft,
    UserDraft, ValidationError, ValidationResult, WaterTransactionDraft,
};
use serde::Deserialize;

// ============================================================================
// Update Requests
// ============================================================================

/// Update body: the id of the row plus the full draft
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateRequest<D> {
    pub id: Id,

    #[serde(flatten)]
    pub draft: D,
}

pub type UpdateUserRequest = UpdateRequest<UserDraft>;
pub type UpdateBottleRequest = UpdateRequest<BottleDraft>;
pub type UpdateStationRequest = UpdateRequest<RefillStationDraft>;
pub type UpdateReviewRequest = UpdateRequest<RefillStationReviewDraft>;
pub type UpdateProblemRequest = UpdateRequest<RefillStationProblemDraft>;
pub type UpdateTransactionRequest = UpdateRequest<WaterTransactionDraft>;
pub type UpdateLikeRequest = UpdateRequest<LikeDraft>;
pub type UpdateConsumerTestRequest = UpdateRequest<ConsumerTestDraft>;
pub type UpdateConsumerTestQuestionRequest = UpdateRequest<ConsumerTestQuestionDraft>;
pub type UpdateConsumerTestAnswerRequest = UpdateRequest<ConsumerTestAnswerDraft>;

// ============================================================================
// Query Parameters
// ============================================================================

/// `?id=` selector shared by the collection endpoints
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IdQuery {
    pub id: Option<String>,
}

impl IdQuery {
    /// The selected id, if any. A present but malformed id is rejected.
    pub fn id(&self) -> ValidationResult<Option<Id>> {
        self.id.as_deref().map(|raw| parse_id("id", raw)).transpose()
    }

    /// The selected id, which must be present
    pub fn require_id(&self) -> ValidationResult<Id> {
        self.id()?
            .ok_or_else(|| ValidationError::invalid("id", "id is required"))
    }
}

/// `?userId=` selector of the per-user contribution report
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserContributionQuery {
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
}

impl UserContributionQuery {
    pub fn user_id(&self) -> ValidationResult<Id> {
        let raw = self
            .user_id
            .as_deref()
            .ok_or_else(|| ValidationError::invalid("userId", "userId is required"))?;
        parse_id("userId", raw)
    }
}

/// Parse an id taken from a path segment or query parameter
pub fn parse_id(field: &'static str, raw: &str) -> ValidationResult<Id> {
    Id::parse(raw).map_err(|_| ValidationError::invalid(field, format!("invalid id '{raw}'")))
}
