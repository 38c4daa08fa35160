//! Refill station database models

use sqlx::FromRow;

/// Database model for refill_stations table
#[derive(Debug, Clone, FromRow)]
pub struct StationModel {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
    pub water_source: String,
    pub opening_times: String,
    pub active: bool,
    #[sqlx(rename = "type")]
    pub station_type: String,
    pub offered_water_types: String,
    pub image: Option<String>,
}

/// Marker projection of a station row
#[derive(Debug, Clone, Copy, FromRow)]
pub struct StationMarkerModel {
    pub id: i64,
    pub latitude: f64,
    pub longitude: f64,
    pub active: bool,
}
