//! Refill station service

use refill_core::{EntityValidator, Id, RefillStation, RefillStationDraft};
use tracing::{info, instrument};

use crate::dto::{MarkerResponse, StationResponse, UpdateStationRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Refill station service
pub struct StationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> StationService<'a> {
    /// Create a new StationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List all stations
    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<StationResponse>> {
        let stations = self.ctx.station_repo().find_all().await?;
        Ok(stations.into_iter().map(StationResponse::from).collect())
    }

    /// Get station by ID
    #[instrument(skip(self))]
    pub async fn get(&self, station_id: Id) -> ServiceResult<StationResponse> {
        self.get_entity(station_id).await.map(StationResponse::from)
    }

    /// Get station entity by ID
    #[instrument(skip(self))]
    pub async fn get_entity(&self, station_id: Id) -> ServiceResult<RefillStation> {
        self.ctx
            .station_repo()
            .find_by_id(station_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("RefillStation", station_id.to_string()))
    }

    /// Map markers for every station
    #[instrument(skip(self))]
    pub async fn markers(&self) -> ServiceResult<Vec<MarkerResponse>> {
        let markers = self.ctx.station_repo().find_markers().await?;
        Ok(markers.into_iter().map(MarkerResponse::from).collect())
    }

    /// Register a new station
    #[instrument(skip(self, draft))]
    pub async fn create(&self, draft: RefillStationDraft) -> ServiceResult<StationResponse> {
        let new_station = EntityValidator::validate(draft)?;
        let station_id = self.ctx.station_repo().create(&new_station).await?;

        info!(
            station_id = %station_id,
            station_type = %new_station.station_type,
            "Refill station created"
        );

        Ok(StationResponse::from(new_station.with_id(station_id)))
    }

    /// Replace a station
    #[instrument(skip(self, request), fields(station_id = %request.id))]
    pub async fn update(&self, request: UpdateStationRequest) -> ServiceResult<StationResponse> {
        self.get_entity(request.id).await?;

        let station = EntityValidator::validate(request.draft)?.with_id(request.id);
        self.ctx.station_repo().update(&station).await?;

        info!(station_id = %station.id, "Refill station updated");

        Ok(StationResponse::from(station))
    }

    /// Delete a station and everything recorded against it
    #[instrument(skip(self))]
    pub async fn delete(&self, station_id: Id) -> ServiceResult<()> {
        self.ctx.station_repo().delete(station_id).await?;

        info!(station_id = %station_id, "Refill station deleted");

        Ok(())
    }
}
