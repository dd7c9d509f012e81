//! SeaORM repository implementations

use crate::contract::{Building, Floor, Space};
use crate::domain::repository::{BuildingRepository, FloorRepository, SpaceRepository};
use anyhow::Result;
use async_trait::async_trait;
use sea_orm::{
    prelude::Expr, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
};
use std::sync::Arc;
use uuid::Uuid;

use super::entity;

// ===== Building repository =====

pub struct SeaOrmBuildingRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmBuildingRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BuildingRepository for SeaOrmBuildingRepository {
    async fn insert(&self, building: &Building) -> Result<Building> {
        let active: entity::ActiveModel = building.into();
        let result = entity::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await?;
        Ok(result.into())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Building>> {
        let result = entity::Entity::find_by_id(id)
            .filter(entity::Column::DeletedAt.is_null())
            .one(&*self.db)
            .await?;
        Ok(result.map(|e| e.into()))
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Building>> {
        let result = entity::Entity::find()
            .filter(entity::Column::Code.eq(code))
            .filter(entity::Column::DeletedAt.is_null())
            .one(&*self.db)
            .await?;
        Ok(result.map(|e| e.into()))
    }

    async fn list(&self, limit: u64, offset: u64) -> Result<(Vec<Building>, u64)> {
        let query = entity::Entity::find().filter(entity::Column::DeletedAt.is_null());

        let total = query.clone().count(&*self.db).await?;
        let results = query
            .order_by_desc(entity::Column::CreatedAt)
            .limit(limit)
            .offset(offset)
            .all(&*self.db)
            .await?;

        Ok((results.into_iter().map(|e| e.into()).collect(), total))
    }

    async fn update(&self, building: &Building) -> Result<Building> {
        let active: entity::ActiveModel = building.into();
        let result = entity::Entity::update(active).exec(&*self.db).await?;
        Ok(result.into())
    }

    async fn soft_delete(&self, id: Uuid) -> Result<()> {
        entity::Entity::update_many()
            .col_expr(entity::Column::DeletedAt, Expr::value(chrono::Utc::now()))
            .filter(entity::Column::Id.eq(id))
            .exec(&*self.db)
            .await?;
        Ok(())
    }

    async fn count_active(&self) -> Result<u64> {
        let count = entity::Entity::find()
            .filter(entity::Column::DeletedAt.is_null())
            .count(&*self.db)
            .await?;
        Ok(count)
    }
}

// ===== Floor repository =====

pub struct SeaOrmFloorRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmFloorRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl FloorRepository for SeaOrmFloorRepository {
    async fn insert(&self, floor: &Floor) -> Result<Floor> {
        let active: entity::floor::ActiveModel = floor.into();
        let result = entity::floor::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await?;
        Ok(result.into())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Floor>> {
        let result = entity::floor::Entity::find_by_id(id)
            .filter(entity::floor::Column::DeletedAt.is_null())
            .one(&*self.db)
            .await?;
        Ok(result.map(|e| e.into()))
    }

    async fn find_by_level(&self, building_id: Uuid, level: i32) -> Result<Option<Floor>> {
        let result = entity::floor::Entity::find()
            .filter(entity::floor::Column::BuildingId.eq(building_id))
            .filter(entity::floor::Column::Level.eq(level))
            .filter(entity::floor::Column::DeletedAt.is_null())
            .one(&*self.db)
            .await?;
        Ok(result.map(|e| e.into()))
    }

    async fn list_by_building(&self, building_id: Uuid) -> Result<Vec<Floor>> {
        let results = entity::floor::Entity::find()
            .filter(entity::floor::Column::BuildingId.eq(building_id))
            .filter(entity::floor::Column::DeletedAt.is_null())
            .order_by_asc(entity::floor::Column::Level)
            .all(&*self.db)
            .await?;
        Ok(results.into_iter().map(|e| e.into()).collect())
    }

    async fn count_by_building(&self, building_id: Uuid) -> Result<u64> {
        let count = entity::floor::Entity::find()
            .filter(entity::floor::Column::BuildingId.eq(building_id))
            .filter(entity::floor::Column::DeletedAt.is_null())
            .count(&*self.db)
            .await?;
        Ok(count)
    }

    async fn update(&self, floor: &Floor) -> Result<Floor> {
        let active: entity::floor::ActiveModel = floor.into();
        let result = entity::floor::Entity::update(active).exec(&*self.db).await?;
        Ok(result.into())
    }

    async fn soft_delete(&self, id: Uuid) -> Result<()> {
        entity::floor::Entity::update_many()
            .col_expr(
                entity::floor::Column::DeletedAt,
                Expr::value(chrono::Utc::now()),
            )
            .filter(entity::floor::Column::Id.eq(id))
            .exec(&*self.db)
            .await?;
        Ok(())
    }

    async fn count_active(&self) -> Result<u64> {
        let count = entity::floor::Entity::find()
            .filter(entity::floor::Column::DeletedAt.is_null())
            .count(&*self.db)
            .await?;
        Ok(count)
    }
}

// ===== Space repository =====

pub struct SeaOrmSpaceRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmSpaceRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SpaceRepository for SeaOrmSpaceRepository {
    async fn insert(&self, space: &Space) -> Result<Space> {
        let active: entity::space::ActiveModel = space.into();
        let result = entity::space::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await?;
        result.try_into()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Space>> {
        let result = entity::space::Entity::find_by_id(id)
            .filter(entity::space::Column::DeletedAt.is_null())
            .one(&*self.db)
            .await?;
        match result {
            Some(entity) => Ok(Some(entity.try_into()?)),
            None => Ok(None),
        }
    }

    async fn find_by_code(&self, floor_id: Uuid, code: &str) -> Result<Option<Space>> {
        let result = entity::space::Entity::find()
            .filter(entity::space::Column::FloorId.eq(floor_id))
            .filter(entity::space::Column::Code.eq(code))
            .filter(entity::space::Column::DeletedAt.is_null())
            .one(&*self.db)
            .await?;
        match result {
            Some(entity) => Ok(Some(entity.try_into()?)),
            None => Ok(None),
        }
    }

    async fn list_by_floor(&self, floor_id: Uuid) -> Result<Vec<Space>> {
        let results = entity::space::Entity::find()
            .filter(entity::space::Column::FloorId.eq(floor_id))
            .filter(entity::space::Column::DeletedAt.is_null())
            .order_by_asc(entity::space::Column::Code)
            .all(&*self.db)
            .await?;
        results
            .into_iter()
            .map(|e| e.try_into())
            .collect::<Result<Vec<_>>>()
    }

    async fn list_by_building(&self, building_id: Uuid) -> Result<Vec<Space>> {
        // Through-chain: spaces resolve via the floors join
        let results = entity::space::Entity::find()
            .inner_join(entity::floor::Entity)
            .filter(entity::floor::Column::BuildingId.eq(building_id))
            .filter(entity::floor::Column::DeletedAt.is_null())
            .filter(entity::space::Column::DeletedAt.is_null())
            .order_by_asc(entity::floor::Column::Level)
            .order_by_asc(entity::space::Column::Code)
            .all(&*self.db)
            .await?;
        results
            .into_iter()
            .map(|e| e.try_into())
            .collect::<Result<Vec<_>>>()
    }

    async fn count_by_floor(&self, floor_id: Uuid) -> Result<u64> {
        let count = entity::space::Entity::find()
            .filter(entity::space::Column::FloorId.eq(floor_id))
            .filter(entity::space::Column::DeletedAt.is_null())
            .count(&*self.db)
            .await?;
        Ok(count)
    }

    async fn update(&self, space: &Space) -> Result<Space> {
        let active: entity::space::ActiveModel = space.into();
        let result = entity::space::Entity::update(active).exec(&*self.db).await?;
        result.try_into()
    }

    async fn soft_delete(&self, id: Uuid) -> Result<()> {
        entity::space::Entity::update_many()
            .col_expr(
                entity::space::Column::DeletedAt,
                Expr::value(chrono::Utc::now()),
            )
            .filter(entity::space::Column::Id.eq(id))
            .exec(&*self.db)
            .await?;
        Ok(())
    }

    async fn count_active(&self) -> Result<u64> {
        let count = entity::space::Entity::find()
            .filter(entity::space::Column::DeletedAt.is_null())
            .count(&*self.db)
            .await?;
        Ok(count)
    }
}
