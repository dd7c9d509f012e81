//! Domain service - business logic orchestration

use super::events::{EventPublisher, FacilityEvent};
use super::repository::{BuildingRepository, FloorRepository, SpaceRepository};
use super::validation;
use crate::contract::{
    Building, FacilitiesError, FacilityCounts, Floor, NewBuilding, NewFloor, NewSpace, Space,
    UpdateBuilding, UpdateFloor, UpdateSpace,
};
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

/// Domain service for buildings, floors and spaces
pub struct Service {
    buildings: Arc<dyn BuildingRepository>,
    floors: Arc<dyn FloorRepository>,
    spaces: Arc<dyn SpaceRepository>,
    events: Arc<dyn EventPublisher>,
}

impl Service {
    /// Create a new service instance
    pub fn new(
        buildings: Arc<dyn BuildingRepository>,
        floors: Arc<dyn FloorRepository>,
        spaces: Arc<dyn SpaceRepository>,
        events: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            buildings,
            floors,
            spaces,
            events,
        }
    }

    // ===== Building operations =====

    pub async fn create_building(&self, input: NewBuilding) -> Result<Building, FacilitiesError> {
        validation::validate_code("code", &input.code)?;
        validation::validate_name("name", &input.name)?;
        self.ensure_building_code_free(&input.code, None).await?;

        let now = Utc::now();
        let building = Building {
            id: Uuid::new_v4(),
            code: input.code,
            name: input.name,
            address: input.address,
            city: input.city,
            notes: input.notes,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };

        let created = self
            .buildings
            .insert(&building)
            .await
            .map_err(|e| self.internal("insert building", e))?;

        self.publish(FacilityEvent::BuildingCreated {
            id: created.id,
            code: created.code.clone(),
            timestamp: Utc::now(),
        })
        .await;

        Ok(created)
    }

    pub async fn get_building(&self, id: Uuid) -> Result<Building, FacilitiesError> {
        self.buildings
            .find_by_id(id)
            .await
            .map_err(|e| self.internal("find building", e))?
            .ok_or_else(|| FacilitiesError::not_found("building", id))
    }

    pub async fn list_buildings(
        &self,
        limit: u64,
        offset: u64,
    ) -> Result<(Vec<Building>, u64), FacilitiesError> {
        self.buildings
            .list(limit, offset)
            .await
            .map_err(|e| self.internal("list buildings", e))
    }

    pub async fn update_building(
        &self,
        id: Uuid,
        input: UpdateBuilding,
    ) -> Result<Building, FacilitiesError> {
        let mut building = self.get_building(id).await?;

        validation::validate_code("code", &input.code)?;
        validation::validate_name("name", &input.name)?;
        self.ensure_building_code_free(&input.code, Some(id)).await?;

        building.code = input.code;
        building.name = input.name;
        building.address = input.address;
        building.city = input.city;
        building.notes = input.notes;
        building.updated_at = Utc::now();

        let updated = self
            .buildings
            .update(&building)
            .await
            .map_err(|e| self.internal("update building", e))?;

        self.publish(FacilityEvent::BuildingUpdated {
            id: updated.id,
            code: updated.code.clone(),
            timestamp: Utc::now(),
        })
        .await;

        Ok(updated)
    }

    pub async fn delete_building(&self, id: Uuid) -> Result<(), FacilitiesError> {
        let building = self.get_building(id).await?;

        let floor_count = self
            .floors
            .count_by_building(id)
            .await
            .map_err(|e| self.internal("count floors", e))?;
        if floor_count > 0 {
            return Err(FacilitiesError::conflict(format!(
                "building '{}' still has {} active floor(s)",
                building.code, floor_count
            )));
        }

        self.buildings
            .soft_delete(id)
            .await
            .map_err(|e| self.internal("delete building", e))?;

        self.publish(FacilityEvent::BuildingDeleted {
            id,
            timestamp: Utc::now(),
        })
        .await;

        Ok(())
    }

    // ===== Floor operations =====

    pub async fn create_floor(&self, input: NewFloor) -> Result<Floor, FacilitiesError> {
        // Unknown parent is a validation failure, not a 404
        if self
            .buildings
            .find_by_id(input.building_id)
            .await
            .map_err(|e| self.internal("find building", e))?
            .is_none()
        {
            return Err(FacilitiesError::validation(
                "building_id",
                "references an unknown building",
            ));
        }
        validation::validate_name("name", &input.name)?;
        self.ensure_floor_level_free(input.building_id, input.level, None)
            .await?;

        let now = Utc::now();
        let floor = Floor {
            id: Uuid::new_v4(),
            building_id: input.building_id,
            level: input.level,
            name: input.name,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };

        let created = self
            .floors
            .insert(&floor)
            .await
            .map_err(|e| self.internal("insert floor", e))?;

        self.publish(FacilityEvent::FloorCreated {
            id: created.id,
            building_id: created.building_id,
            level: created.level,
            timestamp: Utc::now(),
        })
        .await;

        Ok(created)
    }

    pub async fn get_floor(&self, id: Uuid) -> Result<Floor, FacilitiesError> {
        self.floors
            .find_by_id(id)
            .await
            .map_err(|e| self.internal("find floor", e))?
            .ok_or_else(|| FacilitiesError::not_found("floor", id))
    }

    pub async fn list_floors(&self, building_id: Uuid) -> Result<Vec<Floor>, FacilitiesError> {
        // 404 on the owning building, not an empty list
        self.get_building(building_id).await?;
        self.floors
            .list_by_building(building_id)
            .await
            .map_err(|e| self.internal("list floors", e))
    }

    pub async fn update_floor(
        &self,
        id: Uuid,
        input: UpdateFloor,
    ) -> Result<Floor, FacilitiesError> {
        let mut floor = self.get_floor(id).await?;

        validation::validate_name("name", &input.name)?;
        self.ensure_floor_level_free(floor.building_id, input.level, Some(id))
            .await?;

        floor.level = input.level;
        floor.name = input.name;
        floor.updated_at = Utc::now();

        let updated = self
            .floors
            .update(&floor)
            .await
            .map_err(|e| self.internal("update floor", e))?;

        self.publish(FacilityEvent::FloorUpdated {
            id: updated.id,
            building_id: updated.building_id,
            level: updated.level,
            timestamp: Utc::now(),
        })
        .await;

        Ok(updated)
    }

    pub async fn delete_floor(&self, id: Uuid) -> Result<(), FacilitiesError> {
        let floor = self.get_floor(id).await?;

        let space_count = self
            .spaces
            .count_by_floor(id)
            .await
            .map_err(|e| self.internal("count spaces", e))?;
        if space_count > 0 {
            return Err(FacilitiesError::conflict(format!(
                "floor '{}' still has {} active space(s)",
                floor.name, space_count
            )));
        }

        self.floors
            .soft_delete(id)
            .await
            .map_err(|e| self.internal("delete floor", e))?;

        self.publish(FacilityEvent::FloorDeleted {
            id,
            building_id: floor.building_id,
            timestamp: Utc::now(),
        })
        .await;

        Ok(())
    }

    // ===== Space operations =====

    pub async fn create_space(&self, input: NewSpace) -> Result<Space, FacilitiesError> {
        if self
            .floors
            .find_by_id(input.floor_id)
            .await
            .map_err(|e| self.internal("find floor", e))?
            .is_none()
        {
            return Err(FacilitiesError::validation(
                "floor_id",
                "references an unknown floor",
            ));
        }
        validation::validate_code("code", &input.code)?;
        validation::validate_name("name", &input.name)?;
        validation::validate_capacity(input.capacity)?;
        validation::validate_area(input.area_sqm)?;
        self.ensure_space_code_free(input.floor_id, &input.code, None)
            .await?;

        let now = Utc::now();
        let space = Space {
            id: Uuid::new_v4(),
            floor_id: input.floor_id,
            code: input.code,
            name: input.name,
            kind: input.kind,
            capacity: input.capacity,
            area_sqm: input.area_sqm,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };

        let created = self
            .spaces
            .insert(&space)
            .await
            .map_err(|e| self.internal("insert space", e))?;

        self.publish(FacilityEvent::SpaceCreated {
            id: created.id,
            floor_id: created.floor_id,
            code: created.code.clone(),
            timestamp: Utc::now(),
        })
        .await;

        Ok(created)
    }

    pub async fn get_space(&self, id: Uuid) -> Result<Space, FacilitiesError> {
        self.spaces
            .find_by_id(id)
            .await
            .map_err(|e| self.internal("find space", e))?
            .ok_or_else(|| FacilitiesError::not_found("space", id))
    }

    pub async fn list_spaces(&self, floor_id: Uuid) -> Result<Vec<Space>, FacilitiesError> {
        self.get_floor(floor_id).await?;
        self.spaces
            .list_by_floor(floor_id)
            .await
            .map_err(|e| self.internal("list spaces", e))
    }

    /// Spaces of every active floor of a building, via the floor join.
    pub async fn list_building_spaces(
        &self,
        building_id: Uuid,
    ) -> Result<Vec<Space>, FacilitiesError> {
        self.get_building(building_id).await?;
        self.spaces
            .list_by_building(building_id)
            .await
            .map_err(|e| self.internal("list building spaces", e))
    }

    pub async fn update_space(
        &self,
        id: Uuid,
        input: UpdateSpace,
    ) -> Result<Space, FacilitiesError> {
        let mut space = self.get_space(id).await?;

        validation::validate_code("code", &input.code)?;
        validation::validate_name("name", &input.name)?;
        validation::validate_capacity(input.capacity)?;
        validation::validate_area(input.area_sqm)?;
        self.ensure_space_code_free(space.floor_id, &input.code, Some(id))
            .await?;

        space.code = input.code;
        space.name = input.name;
        space.kind = input.kind;
        space.capacity = input.capacity;
        space.area_sqm = input.area_sqm;
        space.updated_at = Utc::now();

        let updated = self
            .spaces
            .update(&space)
            .await
            .map_err(|e| self.internal("update space", e))?;

        self.publish(FacilityEvent::SpaceUpdated {
            id: updated.id,
            floor_id: updated.floor_id,
            code: updated.code.clone(),
            timestamp: Utc::now(),
        })
        .await;

        Ok(updated)
    }

    pub async fn delete_space(&self, id: Uuid) -> Result<(), FacilitiesError> {
        let space = self.get_space(id).await?;

        self.spaces
            .soft_delete(id)
            .await
            .map_err(|e| self.internal("delete space", e))?;

        self.publish(FacilityEvent::SpaceDeleted {
            id,
            floor_id: space.floor_id,
            timestamp: Utc::now(),
        })
        .await;

        Ok(())
    }

    pub async fn space_exists(&self, id: Uuid) -> Result<bool, FacilitiesError> {
        Ok(self
            .spaces
            .find_by_id(id)
            .await
            .map_err(|e| self.internal("find space", e))?
            .is_some())
    }

    pub async fn counts(&self) -> Result<FacilityCounts, FacilitiesError> {
        let buildings = self
            .buildings
            .count_active()
            .await
            .map_err(|e| self.internal("count buildings", e))?;
        let floors = self
            .floors
            .count_active()
            .await
            .map_err(|e| self.internal("count floors", e))?;
        let spaces = self
            .spaces
            .count_active()
            .await
            .map_err(|e| self.internal("count spaces", e))?;
        Ok(FacilityCounts {
            buildings,
            floors,
            spaces,
        })
    }

    // ===== Helpers =====

    async fn ensure_building_code_free(
        &self,
        code: &str,
        exclude: Option<Uuid>,
    ) -> Result<(), FacilitiesError> {
        if let Some(existing) = self
            .buildings
            .find_by_code(code)
            .await
            .map_err(|e| self.internal("find building by code", e))?
        {
            if Some(existing.id) != exclude {
                return Err(FacilitiesError::validation(
                    "code",
                    "has already been taken",
                ));
            }
        }
        Ok(())
    }

    async fn ensure_floor_level_free(
        &self,
        building_id: Uuid,
        level: i32,
        exclude: Option<Uuid>,
    ) -> Result<(), FacilitiesError> {
        if let Some(existing) = self
            .floors
            .find_by_level(building_id, level)
            .await
            .map_err(|e| self.internal("find floor by level", e))?
        {
            if Some(existing.id) != exclude {
                return Err(FacilitiesError::validation(
                    "level",
                    "has already been taken for this building",
                ));
            }
        }
        Ok(())
    }

    async fn ensure_space_code_free(
        &self,
        floor_id: Uuid,
        code: &str,
        exclude: Option<Uuid>,
    ) -> Result<(), FacilitiesError> {
        if let Some(existing) = self
            .spaces
            .find_by_code(floor_id, code)
            .await
            .map_err(|e| self.internal("find space by code", e))?
        {
            if Some(existing.id) != exclude {
                return Err(FacilitiesError::validation(
                    "code",
                    "has already been taken on this floor",
                ));
            }
        }
        Ok(())
    }

    fn internal(&self, context: &'static str, error: anyhow::Error) -> FacilitiesError {
        tracing::error!(context, error = %error, "facilities storage failure");
        FacilitiesError::internal(format!("{context} failed"))
    }

    async fn publish(&self, event: FacilityEvent) {
        // Event failures must not fail the write that produced them
        if let Err(error) = self.events.publish(event).await {
            tracing::warn!(error = %error, "failed to publish facility event");
        }
    }
}
