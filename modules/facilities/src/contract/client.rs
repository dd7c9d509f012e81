//! Native client trait for consuming the facilities module in-process

use async_trait::async_trait;
use uuid::Uuid;

use super::error::FacilitiesError;
use super::model::{Building, FacilityCounts, Floor, Space};

/// Read-side API other modules use to resolve facility references.
///
/// All lookups ignore soft-deleted rows.
#[async_trait]
pub trait FacilitiesApi: Send + Sync {
    async fn get_building(&self, id: Uuid) -> Result<Building, FacilitiesError>;

    async fn list_buildings(
        &self,
        limit: u64,
        offset: u64,
    ) -> Result<(Vec<Building>, u64), FacilitiesError>;

    async fn building_floors(&self, building_id: Uuid) -> Result<Vec<Floor>, FacilitiesError>;

    async fn building_spaces(&self, building_id: Uuid) -> Result<Vec<Space>, FacilitiesError>;

    async fn get_space(&self, id: Uuid) -> Result<Space, FacilitiesError>;

    /// Cheap existence probe for cross-module reference checks.
    async fn space_exists(&self, id: Uuid) -> Result<bool, FacilitiesError>;

    async fn counts(&self) -> Result<FacilityCounts, FacilitiesError>;
}
