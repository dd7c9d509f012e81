//! Native client implementation - wraps domain service for in-process calls

use crate::contract::{Building, FacilitiesApi, FacilitiesError, FacilityCounts, Floor, Space};
use crate::domain::Service;
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

/// Native client that directly calls the domain service
///
/// Used by other modules for in-process reference checks without HTTP overhead.
#[derive(Clone)]
pub struct NativeClient {
    service: Arc<Service>,
}

impl NativeClient {
    /// Create a new native client
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl FacilitiesApi for NativeClient {
    async fn get_building(&self, id: Uuid) -> Result<Building, FacilitiesError> {
        self.service.get_building(id).await
    }

    async fn list_buildings(
        &self,
        limit: u64,
        offset: u64,
    ) -> Result<(Vec<Building>, u64), FacilitiesError> {
        self.service.list_buildings(limit, offset).await
    }

    async fn building_floors(&self, building_id: Uuid) -> Result<Vec<Floor>, FacilitiesError> {
        self.service.list_floors(building_id).await
    }

    async fn building_spaces(&self, building_id: Uuid) -> Result<Vec<Space>, FacilitiesError> {
        self.service.list_building_spaces(building_id).await
    }

    async fn get_space(&self, id: Uuid) -> Result<Space, FacilitiesError> {
        self.service.get_space(id).await
    }

    async fn space_exists(&self, id: Uuid) -> Result<bool, FacilitiesError> {
        self.service.space_exists(id).await
    }

    async fn counts(&self) -> Result<FacilityCounts, FacilitiesError> {
        self.service.counts().await
    }
}
