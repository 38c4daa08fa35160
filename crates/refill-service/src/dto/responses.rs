//! Response DTOs for API endpoints
//!
//! Entity responses keep the snake_case field names clients already use.
//! Contribution reports use camelCase.

use chrono::{DateTime, Utc};
use refill_core::{Id, OfferedWaterTypes, ProblemStatus, StationType, WaterType};
use serde::Serialize;

// ============================================================================
// User Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: Id,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
}

// ============================================================================
// Bottle Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct BottleResponse {
    pub id: Id,
    pub user_id: Id,
    pub nfc_id: String,
    pub fill_volume: i32,
    pub water_type: WaterType,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottle_image: Option<String>,
    pub active: bool,
}

// ============================================================================
// Station Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct StationResponse {
    pub id: Id,
    pub name: String,
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
    pub water_source: String,
    pub opening_times: String,
    pub active: bool,
    #[serde(rename = "type")]
    pub station_type: StationType,
    pub offered_water_types: OfferedWaterTypes,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refill_station_image: Option<String>,
}

/// Map marker: position and active status of a station
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MarkerResponse {
    pub id: Id,
    pub latitude: f64,
    pub longitude: f64,
    pub status: bool,
}

/// Review statistics of one station
///
/// A station without reviews reports `"status": "no_data"` instead of zeros.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StationRatingResponse {
    NoData {
        station_id: Id,
    },
    Rated {
        station_id: Id,
        review_count: usize,
        cleanness: f64,
        accessibility: f64,
        water_quality: f64,
        average: f64,
    },
}

// ============================================================================
// Review / Problem Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct ReviewResponse {
    pub id: Id,
    pub station_id: Id,
    pub user_id: Id,
    pub cleanness: i32,
    pub accessibility: i32,
    pub water_quality: i32,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProblemResponse {
    pub id: Id,
    pub station_id: Id,
    pub title: String,
    pub description: String,
    pub status: ProblemStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refill_station_problem_image: Option<String>,
    pub timestamp: DateTime<Utc>,
}

// ============================================================================
// Consumer Test Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct ConsumerTestResponse {
    pub id: Id,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConsumerTestQuestionResponse {
    pub id: Id,
    pub test_id: Id,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_value: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConsumerTestAnswerResponse {
    pub id: Id,
    pub user_id: Id,
    pub question_id: Id,
    pub answer: f64,
    pub timestamp: DateTime<Utc>,
}

// ============================================================================
// Transaction Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct TransactionResponse {
    pub id: Id,
    pub station_id: Id,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottle_id: Option<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Id>,
    pub volume: i32,
    pub water_type: WaterType,
    pub timestamp: DateTime<Utc>,
    pub guest: bool,
}

// ============================================================================
// Like Responses
// ============================================================================

#[derive(Debug, Clone, Copy, Serialize)]
pub struct LikeResponse {
    pub id: Id,
    pub station_id: Id,
    pub user_id: Id,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct LikeCountResponse {
    pub station_id: Id,
    pub count: i64,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IsLikedResponse {
    pub is_liked: bool,
}

// ============================================================================
// Contribution Responses
// ============================================================================

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserContributionResponse {
    pub amount_fillings: i64,
    pub amount_water: i64,
    pub saved_money: f64,
    pub saved_trash: f64,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityContributionResponse {
    pub amount_fillings: i64,
    pub amount_water: i64,
    pub saved_money: f64,
    pub saved_trash: f64,
    pub amount_user: i64,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StationTypeCountsResponse {
    pub amount_refill_station_smart: i64,
    pub amount_refill_station_manual: i64,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each backing service
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
