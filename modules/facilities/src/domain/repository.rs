//! Repository traits for data access
//!
//! These traits define the interface for data access operations.
//! Implementations are in infra/storage/repositories.rs

use crate::contract::{Building, Floor, Space};
use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

/// Repository for buildings
#[async_trait]
pub trait BuildingRepository: Send + Sync {
    /// Insert a new building
    async fn insert(&self, building: &Building) -> Result<Building>;

    /// Find an active building by id
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Building>>;

    /// Find an active building by code
    async fn find_by_code(&self, code: &str) -> Result<Option<Building>>;

    /// List active buildings, newest first, with total count
    async fn list(&self, limit: u64, offset: u64) -> Result<(Vec<Building>, u64)>;

    /// Update an existing building
    async fn update(&self, building: &Building) -> Result<Building>;

    /// Soft delete a building
    async fn soft_delete(&self, id: Uuid) -> Result<()>;

    /// Count active buildings
    async fn count_active(&self) -> Result<u64>;
}

/// Repository for floors
#[async_trait]
pub trait FloorRepository: Send + Sync {
    async fn insert(&self, floor: &Floor) -> Result<Floor>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Floor>>;

    /// Find an active floor in a building at the given level
    async fn find_by_level(&self, building_id: Uuid, level: i32) -> Result<Option<Floor>>;

    /// Active floors of a building ordered by level
    async fn list_by_building(&self, building_id: Uuid) -> Result<Vec<Floor>>;

    /// Count active floors of a building
    async fn count_by_building(&self, building_id: Uuid) -> Result<u64>;

    async fn update(&self, floor: &Floor) -> Result<Floor>;

    async fn soft_delete(&self, id: Uuid) -> Result<()>;

    async fn count_active(&self) -> Result<u64>;
}

/// Repository for spaces
#[async_trait]
pub trait SpaceRepository: Send + Sync {
    async fn insert(&self, space: &Space) -> Result<Space>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Space>>;

    /// Find an active space on a floor by code
    async fn find_by_code(&self, floor_id: Uuid, code: &str) -> Result<Option<Space>>;

    /// Active spaces of a floor ordered by code
    async fn list_by_floor(&self, floor_id: Uuid) -> Result<Vec<Space>>;

    /// Active spaces across all floors of a building, ordered by floor level then code
    async fn list_by_building(&self, building_id: Uuid) -> Result<Vec<Space>>;

    /// Count active spaces of a floor
    async fn count_by_floor(&self, floor_id: Uuid) -> Result<u64>;

    async fn update(&self, space: &Space) -> Result<Space>;

    async fn soft_delete(&self, id: Uuid) -> Result<()>;

    async fn count_active(&self) -> Result<u64>;
}
