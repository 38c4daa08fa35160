//! Problem database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for refill_station_problems table
#[derive(Debug, Clone, FromRow)]
pub struct ProblemModel {
    pub id: i64,
    pub station_id: i64,
    pub title: String,
    pub description: String,
    pub status: String,
    pub image: Option<String>,
    pub recorded_at: DateTime<Utc>,
}
