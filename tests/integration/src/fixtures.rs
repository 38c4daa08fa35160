//! Test fixtures and data generators
//!
//! Request builders produce values that are unique per test run, so the
//! suite can run repeatedly against the same database.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> String {
    let run = chrono::Utc::now().timestamp_micros();
    format!("{run}-{}", COUNTER.fetch_add(1, Ordering::SeqCst))
}

// ============================================================================
// Requests
// ============================================================================

#[derive(Debug, Serialize)]
pub struct CreateUserRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
}

impl CreateUserRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            first_name: "Test".to_string(),
            last_name: format!("User {suffix}"),
            email: Some(format!("test{suffix}@example.com")),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateBottleRequest {
    pub user_id: i64,
    pub nfc_id: String,
    pub fill_volume: i32,
    pub water_type: String,
    pub title: String,
}

impl CreateBottleRequest {
    /// Bottle with a fresh NFC tag
    pub fn tagged(user_id: i64) -> Self {
        Self {
            user_id,
            nfc_id: format!("NFC-{}", unique_suffix()),
            fill_volume: 750,
            water_type: "tap".to_string(),
            title: "Test bottle".to_string(),
        }
    }

    /// Bottle without an NFC tag
    pub fn untagged(user_id: i64) -> Self {
        Self {
            nfc_id: String::new(),
            ..Self::tagged(user_id)
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreateStationRequest {
    pub name: String,
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
    pub water_source: String,
    pub opening_times: String,
    pub active: bool,
    #[serde(rename = "type")]
    pub station_type: String,
    pub offered_water_types: String,
}

impl CreateStationRequest {
    pub fn of_type(station_type: &str) -> Self {
        Self {
            name: format!("Station {}", unique_suffix()),
            description: "Test station".to_string(),
            latitude: 48.137,
            longitude: 11.575,
            address: "Marienplatz 1".to_string(),
            water_source: "municipal".to_string(),
            opening_times: "24/7".to_string(),
            active: true,
            station_type: station_type.to_string(),
            offered_water_types: "tap".to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreateReviewRequest {
    pub station_id: i64,
    pub user_id: i64,
    pub cleanness: i32,
    pub accessibility: i32,
    pub water_quality: i32,
}

impl CreateReviewRequest {
    pub fn new(station_id: i64, user_id: i64, ratings: (i32, i32, i32)) -> Self {
        Self {
            station_id,
            user_id,
            cleanness: ratings.0,
            accessibility: ratings.1,
            water_quality: ratings.2,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreateTransactionRequest {
    pub station_id: i64,
    pub user_id: Option<i64>,
    pub volume: i32,
    pub water_type: String,
    pub guest: bool,
}

impl CreateTransactionRequest {
    pub fn new(station_id: i64, user_id: Option<i64>, volume: i32) -> Self {
        Self {
            station_id,
            user_id,
            volume,
            water_type: "tap".to_string(),
            guest: user_id.is_none(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreateLikeRequest {
    pub station_id: i64,
    pub user_id: i64,
}

// ============================================================================
// Responses
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct BottleResponse {
    pub id: i64,
    pub user_id: i64,
    pub nfc_id: String,
    pub fill_volume: i32,
    pub water_type: String,
    pub title: String,
    pub active: bool,
}

#[derive(Debug, Deserialize)]
pub struct StationResponse {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub station_type: String,
    pub offered_water_types: String,
    pub active: bool,
}

#[derive(Debug, Deserialize)]
pub struct ReviewResponse {
    pub id: i64,
    pub station_id: i64,
    pub user_id: i64,
    pub cleanness: i32,
    pub accessibility: i32,
    pub water_quality: i32,
}

#[derive(Debug, Deserialize)]
pub struct LikeResponse {
    pub id: i64,
    pub station_id: i64,
    pub user_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct LikeCountResponse {
    pub station_id: i64,
    pub count: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IsLikedResponse {
    pub is_liked: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserContributionResponse {
    pub amount_fillings: i64,
    pub amount_water: i64,
    pub saved_money: f64,
    pub saved_trash: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationTypeCountsResponse {
    pub amount_refill_station_smart: i64,
    pub amount_refill_station_manual: i64,
}

#[derive(Debug, Deserialize)]
pub struct ConsumerTestResponse {
    pub id: i64,
    pub title: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ConsumerTestQuestionResponse {
    pub id: i64,
    pub test_id: i64,
    pub text: String,
    pub min_value: Option<f64>,
    pub max_value: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct ConsumerTestAnswerResponse {
    pub id: i64,
    pub user_id: i64,
    pub question_id: i64,
    pub answer: f64,
    pub timestamp: String,
}

/// Error body returned for every failed request
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}
