//! SeaORM repository implementations

use crate::contract::{LogListFilter, MaintenanceLog, MaintenanceSchedule, ScheduleListFilter};
use crate::domain::repository::{LogRepository, ScheduleRepository};
use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    prelude::Expr, ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect,
};
use std::sync::Arc;
use uuid::Uuid;

use super::entity;

// ===== Schedule repository =====

pub struct SeaOrmScheduleRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmScheduleRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ScheduleRepository for SeaOrmScheduleRepository {
    async fn insert(&self, schedule: &MaintenanceSchedule) -> Result<MaintenanceSchedule> {
        let active: entity::ActiveModel = schedule.into();
        let result = entity::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await?;
        result.try_into()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<MaintenanceSchedule>> {
        let result = entity::Entity::find_by_id(id)
            .filter(entity::Column::DeletedAt.is_null())
            .one(&*self.db)
            .await?;
        match result {
            Some(entity) => Ok(Some(entity.try_into()?)),
            None => Ok(None),
        }
    }

    async fn list(
        &self,
        filter: &ScheduleListFilter,
        limit: u64,
        offset: u64,
    ) -> Result<(Vec<MaintenanceSchedule>, u64)> {
        let mut query = entity::Entity::find().filter(entity::Column::DeletedAt.is_null());

        if let Some(asset_id) = filter.asset_id {
            query = query.filter(entity::Column::AssetId.eq(asset_id));
        }
        if let Some(active) = filter.active {
            query = query.filter(entity::Column::Active.eq(active));
        }
        if let Some(due_before) = filter.due_before {
            query = query.filter(entity::Column::NextDueAt.lt(due_before));
        }

        let total = query.clone().count(&*self.db).await?;
        let results = query
            .order_by_asc(entity::Column::NextDueAt)
            .limit(limit)
            .offset(offset)
            .all(&*self.db)
            .await?;

        results
            .into_iter()
            .map(|e| e.try_into())
            .collect::<Result<Vec<_>>>()
            .map(|schedules| (schedules, total))
    }

    async fn update(&self, schedule: &MaintenanceSchedule) -> Result<MaintenanceSchedule> {
        let active: entity::ActiveModel = schedule.into();
        let result = entity::Entity::update(active).exec(&*self.db).await?;
        result.try_into()
    }

    async fn advance_bookkeeping(
        &self,
        id: Uuid,
        performed_at: DateTime<Utc>,
        next_due_at: DateTime<Utc>,
    ) -> Result<()> {
        // Forward-only: an older timestamp leaves the row untouched
        entity::Entity::update_many()
            .col_expr(entity::Column::LastPerformedAt, Expr::value(performed_at))
            .col_expr(entity::Column::NextDueAt, Expr::value(next_due_at))
            .col_expr(entity::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::Column::Id.eq(id))
            .filter(entity::Column::DeletedAt.is_null())
            .filter(
                Condition::any()
                    .add(entity::Column::LastPerformedAt.is_null())
                    .add(entity::Column::LastPerformedAt.lt(performed_at)),
            )
            .exec(&*self.db)
            .await?;
        Ok(())
    }

    async fn soft_delete(&self, id: Uuid) -> Result<()> {
        entity::Entity::update_many()
            .col_expr(entity::Column::DeletedAt, Expr::value(Utc::now()))
            .filter(entity::Column::Id.eq(id))
            .exec(&*self.db)
            .await?;
        Ok(())
    }
}

// ===== Log repository =====

pub struct SeaOrmLogRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmLogRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl LogRepository for SeaOrmLogRepository {
    async fn insert(&self, log: &MaintenanceLog) -> Result<MaintenanceLog> {
        let active: entity::log::ActiveModel = log.into();
        let result = entity::log::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await?;
        Ok(result.into())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<MaintenanceLog>> {
        let result = entity::log::Entity::find_by_id(id)
            .filter(entity::log::Column::DeletedAt.is_null())
            .one(&*self.db)
            .await?;
        Ok(result.map(Into::into))
    }

    async fn list(
        &self,
        filter: &LogListFilter,
        limit: u64,
        offset: u64,
    ) -> Result<(Vec<MaintenanceLog>, u64)> {
        let mut query = entity::log::Entity::find().filter(entity::log::Column::DeletedAt.is_null());

        if let Some(asset_id) = filter.asset_id {
            query = query.filter(entity::log::Column::AssetId.eq(asset_id));
        }
        if let Some(schedule_id) = filter.schedule_id {
            query = query.filter(entity::log::Column::ScheduleId.eq(schedule_id));
        }

        let total = query.clone().count(&*self.db).await?;
        let results = query
            .order_by_desc(entity::log::Column::PerformedAt)
            .limit(limit)
            .offset(offset)
            .all(&*self.db)
            .await?;

        Ok((results.into_iter().map(Into::into).collect(), total))
    }

    async fn update(&self, log: &MaintenanceLog) -> Result<MaintenanceLog> {
        let active: entity::log::ActiveModel = log.into();
        let result = entity::log::Entity::update(active).exec(&*self.db).await?;
        Ok(result.into())
    }

    async fn soft_delete(&self, id: Uuid) -> Result<()> {
        entity::log::Entity::update_many()
            .col_expr(entity::log::Column::DeletedAt, Expr::value(Utc::now()))
            .filter(entity::log::Column::Id.eq(id))
            .exec(&*self.db)
            .await?;
        Ok(())
    }
}
