//! SeaORM repository implementations
//!
//! The category repository executes tree plans as short sequences of bulk
//! updates inside a transaction; the index arithmetic itself lives in
//! `domain::tree`.

use crate::contract::{Asset, AssetCategory};
use crate::domain::repository::{AssetRepository, AssetSearch, CategoryRepository};
use crate::domain::tree::{DeletePlan, GapShift, InsertPlan, MovePlan};
use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::sea_query::Func;
use sea_orm::{
    prelude::Expr, ColumnTrait, Condition, DatabaseConnection, DatabaseTransaction, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use super::entity;

// ===== Category repository =====

pub struct SeaOrmCategoryRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmCategoryRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Shift every index at or beyond `shift.at` by `shift.width`.
    /// Two statements: the lft and rgt conditions differ per row.
    async fn open_gap(txn: &DatabaseTransaction, shift: GapShift) -> Result<()> {
        entity::Entity::update_many()
            .col_expr(
                entity::Column::Lft,
                Expr::col(entity::Column::Lft).add(shift.width),
            )
            .filter(entity::Column::Lft.gte(shift.at))
            .exec(txn)
            .await?;
        entity::Entity::update_many()
            .col_expr(
                entity::Column::Rgt,
                Expr::col(entity::Column::Rgt).add(shift.width),
            )
            .filter(entity::Column::Rgt.gte(shift.at))
            .exec(txn)
            .await?;
        Ok(())
    }

    /// Close the hole a removed interval left behind: indexes strictly
    /// beyond `after` move left by `width`.
    async fn close_gap(txn: &DatabaseTransaction, after: i64, width: i64) -> Result<()> {
        entity::Entity::update_many()
            .col_expr(
                entity::Column::Lft,
                Expr::col(entity::Column::Lft).sub(width),
            )
            .filter(entity::Column::Lft.gt(after))
            .exec(txn)
            .await?;
        entity::Entity::update_many()
            .col_expr(
                entity::Column::Rgt,
                Expr::col(entity::Column::Rgt).sub(width),
            )
            .filter(entity::Column::Rgt.gt(after))
            .exec(txn)
            .await?;
        Ok(())
    }
}

#[async_trait]
impl CategoryRepository for SeaOrmCategoryRepository {
    async fn insert(&self, category: &AssetCategory, plan: InsertPlan) -> Result<AssetCategory> {
        let txn = self.db.begin().await?;

        if let Some(shift) = plan.shift {
            Self::open_gap(&txn, shift).await?;
        }

        let active: entity::ActiveModel = category.into();
        let result = entity::Entity::insert(active)
            .exec_with_returning(&txn)
            .await?;

        txn.commit().await?;
        Ok(result.into())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<AssetCategory>> {
        let result = entity::Entity::find_by_id(id).one(&*self.db).await?;
        Ok(result.map(|e| e.into()))
    }

    async fn list_all(&self) -> Result<Vec<AssetCategory>> {
        let results = entity::Entity::find()
            .order_by_asc(entity::Column::Lft)
            .all(&*self.db)
            .await?;
        Ok(results.into_iter().map(|e| e.into()).collect())
    }

    async fn list(&self, limit: u64, offset: u64) -> Result<(Vec<AssetCategory>, u64)> {
        let query = entity::Entity::find();

        let total = query.clone().count(&*self.db).await?;
        let results = query
            .order_by_asc(entity::Column::Lft)
            .limit(limit)
            .offset(offset)
            .all(&*self.db)
            .await?;

        Ok((results.into_iter().map(|e| e.into()).collect(), total))
    }

    async fn children_of(&self, parent_id: Uuid) -> Result<Vec<AssetCategory>> {
        let results = entity::Entity::find()
            .filter(entity::Column::ParentId.eq(parent_id))
            .order_by_asc(entity::Column::Lft)
            .all(&*self.db)
            .await?;
        Ok(results.into_iter().map(|e| e.into()).collect())
    }

    async fn find_by_name(
        &self,
        parent_id: Option<Uuid>,
        name: &str,
    ) -> Result<Option<AssetCategory>> {
        let mut query = entity::Entity::find().filter(entity::Column::Name.eq(name));
        query = match parent_id {
            Some(parent_id) => query.filter(entity::Column::ParentId.eq(parent_id)),
            None => query.filter(entity::Column::ParentId.is_null()),
        };
        let result = query.one(&*self.db).await?;
        Ok(result.map(|e| e.into()))
    }

    async fn update(&self, category: &AssetCategory) -> Result<AssetCategory> {
        let active: entity::ActiveModel = category.into();
        let result = entity::Entity::update(active).exec(&*self.db).await?;
        Ok(result.into())
    }

    async fn subtree_ids(&self, lft: i64, rgt: i64) -> Result<Vec<Uuid>> {
        let results = entity::Entity::find()
            .filter(entity::Column::Lft.between(lft, rgt))
            .all(&*self.db)
            .await?;
        Ok(results.into_iter().map(|e| e.id).collect())
    }

    async fn max_rgt(&self) -> Result<i64> {
        let result = entity::Entity::find()
            .order_by_desc(entity::Column::Rgt)
            .one(&*self.db)
            .await?;
        Ok(result.map(|e| e.rgt).unwrap_or(0))
    }

    async fn delete_subtree(&self, plan: DeletePlan) -> Result<u64> {
        let txn = self.db.begin().await?;

        let deleted = entity::Entity::delete_many()
            .filter(entity::Column::Lft.between(plan.lft, plan.rgt))
            .exec(&txn)
            .await?;
        Self::close_gap(&txn, plan.rgt, plan.width).await?;

        txn.commit().await?;
        Ok(deleted.rows_affected)
    }

    async fn move_subtree(&self, id: Uuid, plan: MovePlan) -> Result<()> {
        let txn = self.db.begin().await?;

        // 1: park the subtree at negated indexes
        entity::Entity::update_many()
            .col_expr(entity::Column::Lft, Expr::col(entity::Column::Lft).mul(-1))
            .col_expr(entity::Column::Rgt, Expr::col(entity::Column::Rgt).mul(-1))
            .filter(entity::Column::Lft.between(plan.lft, plan.rgt))
            .exec(&txn)
            .await?;

        // 2: close the vacated gap (parked rows are negative and unaffected)
        Self::close_gap(&txn, plan.rgt, plan.width).await?;

        // 3: open the destination gap
        Self::open_gap(
            &txn,
            GapShift {
                at: plan.gap_open_at,
                width: plan.width,
            },
        )
        .await?;

        // 4: re-home the parked rows
        entity::Entity::update_many()
            .col_expr(
                entity::Column::Lft,
                Expr::val(plan.index_offset).sub(Expr::col(entity::Column::Lft)),
            )
            .col_expr(
                entity::Column::Rgt,
                Expr::val(plan.index_offset).sub(Expr::col(entity::Column::Rgt)),
            )
            .col_expr(
                entity::Column::Depth,
                Expr::col(entity::Column::Depth).add(plan.depth_delta),
            )
            .filter(entity::Column::Lft.lt(0))
            .exec(&txn)
            .await?;

        // 5: re-point the subtree root
        entity::Entity::update_many()
            .col_expr(entity::Column::ParentId, Expr::value(plan.new_parent_id))
            .col_expr(entity::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::Column::Id.eq(id))
            .exec(&txn)
            .await?;

        txn.commit().await?;
        Ok(())
    }
}

// ===== Asset repository =====

pub struct SeaOrmAssetRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmAssetRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AssetRepository for SeaOrmAssetRepository {
    async fn insert(&self, asset: &Asset) -> Result<Asset> {
        let active: entity::asset::ActiveModel = asset.into();
        let result = entity::asset::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await?;
        result.try_into()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Asset>> {
        let result = entity::asset::Entity::find_by_id(id)
            .filter(entity::asset::Column::DeletedAt.is_null())
            .one(&*self.db)
            .await?;
        match result {
            Some(entity) => Ok(Some(entity.try_into()?)),
            None => Ok(None),
        }
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Asset>> {
        let result = entity::asset::Entity::find()
            .filter(entity::asset::Column::Code.eq(code))
            .filter(entity::asset::Column::DeletedAt.is_null())
            .one(&*self.db)
            .await?;
        match result {
            Some(entity) => Ok(Some(entity.try_into()?)),
            None => Ok(None),
        }
    }

    async fn list(
        &self,
        search: &AssetSearch,
        limit: u64,
        offset: u64,
    ) -> Result<(Vec<Asset>, u64)> {
        let mut query =
            entity::asset::Entity::find().filter(entity::asset::Column::DeletedAt.is_null());

        if let Some(category_ids) = &search.category_ids {
            query = query
                .filter(entity::asset::Column::CategoryId.is_in(category_ids.iter().copied()));
        }
        if let Some(space_id) = search.space_id {
            query = query.filter(entity::asset::Column::SpaceId.eq(space_id));
        }
        if let Some(status) = search.status {
            query = query.filter(entity::asset::Column::Status.eq(status.as_str()));
        }
        if let Some(term) = &search.search {
            let pattern = format!("%{}%", term.to_lowercase());
            query = query.filter(
                Condition::any()
                    .add(
                        Expr::expr(Func::lower(Expr::col(entity::asset::Column::Code)))
                            .like(&pattern),
                    )
                    .add(
                        Expr::expr(Func::lower(Expr::col(entity::asset::Column::Name)))
                            .like(&pattern),
                    ),
            );
        }

        let total = query.clone().count(&*self.db).await?;
        let results = query
            .order_by_desc(entity::asset::Column::CreatedAt)
            .limit(limit)
            .offset(offset)
            .all(&*self.db)
            .await?;

        results
            .into_iter()
            .map(|e| e.try_into())
            .collect::<Result<Vec<_>>>()
            .map(|assets| (assets, total))
    }

    async fn update(&self, asset: &Asset) -> Result<Asset> {
        let active: entity::asset::ActiveModel = asset.into();
        let result = entity::asset::Entity::update(active).exec(&*self.db).await?;
        result.try_into()
    }

    async fn advance_last_maintained(&self, id: Uuid, performed_at: DateTime<Utc>) -> Result<()> {
        // Forward-only: an older timestamp leaves the row untouched
        entity::asset::Entity::update_many()
            .col_expr(
                entity::asset::Column::LastMaintainedAt,
                Expr::value(performed_at),
            )
            .col_expr(entity::asset::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::asset::Column::Id.eq(id))
            .filter(entity::asset::Column::DeletedAt.is_null())
            .filter(
                Condition::any()
                    .add(entity::asset::Column::LastMaintainedAt.is_null())
                    .add(entity::asset::Column::LastMaintainedAt.lt(performed_at)),
            )
            .exec(&*self.db)
            .await?;
        Ok(())
    }

    async fn soft_delete(&self, id: Uuid) -> Result<()> {
        entity::asset::Entity::update_many()
            .col_expr(entity::asset::Column::DeletedAt, Expr::value(Utc::now()))
            .filter(entity::asset::Column::Id.eq(id))
            .exec(&*self.db)
            .await?;
        Ok(())
    }

    async fn count_by_categories(&self, category_ids: &[Uuid]) -> Result<u64> {
        if category_ids.is_empty() {
            return Ok(0);
        }
        // Soft-deleted rows included: they still reference the category
        let count = entity::asset::Entity::find()
            .filter(entity::asset::Column::CategoryId.is_in(category_ids.iter().copied()))
            .count(&*self.db)
            .await?;
        Ok(count)
    }

    async fn count_active(&self) -> Result<u64> {
        let count = entity::asset::Entity::find()
            .filter(entity::asset::Column::DeletedAt.is_null())
            .count(&*self.db)
            .await?;
        Ok(count)
    }
}
