//! Refill station entity - a public water dispensing point

use serde::Deserialize;
use validator::Validate;

use crate::validation::{default_true, non_blank, Candidate, ValidationResult};
use crate::value_objects::{Id, OfferedWaterTypes, StationType};

/// Public refill station
#[derive(Debug, Clone, PartialEq)]
pub struct RefillStation {
    pub id: Id,
    pub name: String,
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
    pub water_source: String,
    pub opening_times: String,
    pub active: bool,
    pub station_type: StationType,
    pub offered_water_types: OfferedWaterTypes,
    pub image: Option<String>,
}

/// Map marker for a station: just enough to draw a pin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StationMarker {
    pub id: Id,
    pub latitude: f64,
    pub longitude: f64,
    pub active: bool,
}

impl RefillStation {
    /// Marker view of this station
    pub fn marker(&self) -> StationMarker {
        StationMarker {
            id: self.id,
            latitude: self.latitude,
            longitude: self.longitude,
            active: self.active,
        }
    }
}

/// Validated station, ready to be inserted
#[derive(Debug, Clone, PartialEq)]
pub struct NewRefillStation {
    pub name: String,
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
    pub water_source: String,
    pub opening_times: String,
    pub active: bool,
    pub station_type: StationType,
    pub offered_water_types: OfferedWaterTypes,
    pub image: Option<String>,
}

impl NewRefillStation {
    /// Attach a database id
    pub fn with_id(self, id: Id) -> RefillStation {
        RefillStation {
            id,
            name: self.name,
            description: self.description,
            latitude: self.latitude,
            longitude: self.longitude,
            address: self.address,
            water_source: self.water_source,
            opening_times: self.opening_times,
            active: self.active,
            station_type: self.station_type,
            offered_water_types: self.offered_water_types,
            image: self.image,
        }
    }
}

/// Station as submitted by a client
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RefillStationDraft {
    #[validate(length(min = 1, max = 100, message = "must be 1-100 characters"))]
    pub name: String,

    #[serde(default)]
    #[validate(length(max = 255, message = "must be at most 255 characters"))]
    pub description: String,

    #[validate(range(min = -90.0, max = 90.0, message = "must be between -90 and 90"))]
    pub latitude: f64,

    #[validate(range(min = -180.0, max = 180.0, message = "must be between -180 and 180"))]
    pub longitude: f64,

    #[serde(default)]
    #[validate(length(max = 255, message = "must be at most 255 characters"))]
    pub address: String,

    #[serde(default)]
    #[validate(length(max = 50, message = "must be at most 50 characters"))]
    pub water_source: String,

    #[serde(default)]
    #[validate(length(max = 100, message = "must be at most 100 characters"))]
    pub opening_times: String,

    #[serde(default = "default_true")]
    pub active: bool,

    #[serde(rename = "type")]
    pub station_type: String,

    pub offered_water_types: String,

    #[serde(default, alias = "image_path")]
    pub refill_station_image: Option<String>,
}

impl Candidate for RefillStationDraft {
    type Valid = NewRefillStation;

    fn check(self) -> ValidationResult<NewRefillStation> {
        let station_type = StationType::parse("type", &self.station_type)?;
        let offered_water_types =
            OfferedWaterTypes::parse("offered_water_types", &self.offered_water_types)?;

        Ok(NewRefillStation {
            name: self.name.trim().to_string(),
            description: self.description,
            latitude: self.latitude,
            longitude: self.longitude,
            address: self.address,
            water_source: self.water_source,
            opening_times: self.opening_times,
            active: self.active,
            station_type,
            offered_water_types,
            image: non_blank(self.refill_station_image),
        })
    }
}
