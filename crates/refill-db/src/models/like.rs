//! Like database model

use sqlx::FromRow;

/// Database model for likes table
#[derive(Debug, Clone, Copy, FromRow)]
pub struct LikeModel {
    pub id: i64,
    pub station_id: i64,
    pub user_id: i64,
}
