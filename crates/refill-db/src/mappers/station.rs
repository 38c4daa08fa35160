//! Refill station entity <-> model mapper

use refill_core::entities::{NewRefillStation, RefillStation, StationMarker};
use refill_core::value_objects::{Id, OfferedWaterTypes, StationType};
use refill_core::DomainError;

use crate::models::{StationMarkerModel, StationModel};

use super::corrupt_row;

/// Convert StationModel to RefillStation entity
impl TryFrom<StationModel> for RefillStation {
    type Error = DomainError;

    fn try_from(model: StationModel) -> Result<Self, Self::Error> {
        let station_type = StationType::parse("type", &model.station_type)
            .map_err(|e| corrupt_row("refill_stations", model.id, e))?;
        let offered_water_types =
            OfferedWaterTypes::parse("offered_water_types", &model.offered_water_types)
                .map_err(|e| corrupt_row("refill_stations", model.id, e))?;

        Ok(RefillStation {
            id: Id::new(model.id),
            name: model.name,
            description: model.description,
            latitude: model.latitude,
            longitude: model.longitude,
            address: model.address,
            water_source: model.water_source,
            opening_times: model.opening_times,
            active: model.active,
            station_type,
            offered_water_types,
            image: model.image,
        })
    }
}

impl From<StationMarkerModel> for StationMarker {
    fn from(model: StationMarkerModel) -> Self {
        StationMarker {
            id: Id::new(model.id),
            latitude: model.latitude,
            longitude: model.longitude,
            active: model.active,
        }
    }
}

/// Station column values for insert and update
pub struct StationInsert<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub latitude: f64,
    pub longitude: f64,
    pub address: &'a str,
    pub water_source: &'a str,
    pub opening_times: &'a str,
    pub active: bool,
    pub station_type: &'static str,
    pub offered_water_types: &'static str,
    pub image: Option<&'a str>,
}

impl<'a> From<&'a NewRefillStation> for StationInsert<'a> {
    fn from(station: &'a NewRefillStation) -> Self {
        Self {
            name: &station.name,
            description: &station.description,
            latitude: station.latitude,
            longitude: station.longitude,
            address: &station.address,
            water_source: &station.water_source,
            opening_times: &station.opening_times,
            active: station.active,
            station_type: station.station_type.as_str(),
            offered_water_types: station.offered_water_types.as_str(),
            image: station.image.as_deref(),
        }
    }
}

impl<'a> From<&'a RefillStation> for StationInsert<'a> {
    fn from(station: &'a RefillStation) -> Self {
        Self {
            name: &station.name,
            description: &station.description,
            latitude: station.latitude,
            longitude: station.longitude,
            address: &station.address,
            water_source: &station.water_source,
            opening_times: &station.opening_times,
            active: station.active,
            station_type: station.station_type.as_str(),
            offered_water_types: station.offered_water_types.as_str(),
            image: station.image.as_deref(),
        }
    }
}
