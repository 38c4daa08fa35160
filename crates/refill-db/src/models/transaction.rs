//! Water transaction database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for water_transactions table
#[derive(Debug, Clone, FromRow)]
pub struct TransactionModel {
    pub id: i64,
    pub station_id: i64,
    pub bottle_id: Option<i64>,
    pub user_id: Option<i64>,
    pub volume: i32,
    pub water_type: String,
    pub guest: bool,
    pub recorded_at: DateTime<Utc>,
}

/// Aggregate row: transaction count and summed volume
#[derive(Debug, Clone, Copy, FromRow)]
pub struct TransactionTotalsModel {
    pub count: i64,
    pub volume_ml: i64,
}
