//! Review database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for refill_station_reviews table
#[derive(Debug, Clone, FromRow)]
pub struct ReviewModel {
    pub id: i64,
    pub station_id: i64,
    pub user_id: i64,
    pub cleanness: i32,
    pub accessibility: i32,
    pub water_quality: i32,
    pub recorded_at: DateTime<Utc>,
}
