//! Bottle database model

use sqlx::FromRow;

/// Database model for bottles table
#[derive(Debug, Clone, FromRow)]
pub struct BottleModel {
    pub id: i64,
    pub user_id: i64,
    pub nfc_id: String,
    pub fill_volume: i32,
    pub water_type: String,
    pub title: String,
    pub bottle_image: Option<String>,
    pub active: bool,
}
