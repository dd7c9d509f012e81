//! SeaORM repository implementations

use crate::contract::{WorkOrder, WorkOrderAttachment, WorkOrderComment, WorkOrderStatus};
use crate::domain::repository::{
    AttachmentRepository, CommentRepository, WorkOrderRepository, WorkOrderSearch,
};
use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    prelude::Expr, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use super::entity;

const ACTIVE_STATUSES: [WorkOrderStatus; 4] = [
    WorkOrderStatus::Open,
    WorkOrderStatus::Assigned,
    WorkOrderStatus::InProgress,
    WorkOrderStatus::OnHold,
];

// ===== Work order repository =====

pub struct SeaOrmWorkOrderRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmWorkOrderRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl WorkOrderRepository for SeaOrmWorkOrderRepository {
    async fn insert(&self, order: &WorkOrder) -> Result<WorkOrder> {
        let txn = self.db.begin().await?;

        // Codes never repeat: the scan includes soft-deleted rows. The
        // zero-padded width keeps lexicographic and numeric order aligned.
        let last = entity::Entity::find()
            .order_by_desc(entity::Column::Code)
            .one(&txn)
            .await?;
        let next = last
            .and_then(|row| {
                row.code
                    .strip_prefix("WO-")
                    .and_then(|digits| digits.parse::<u64>().ok())
            })
            .unwrap_or(0)
            + 1;

        let mut active: entity::ActiveModel = order.into();
        active.code = ActiveValue::Set(format!("WO-{next:06}"));
        let result = entity::Entity::insert(active)
            .exec_with_returning(&txn)
            .await?;

        txn.commit().await?;
        result.try_into()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<WorkOrder>> {
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
        search: &WorkOrderSearch,
        limit: u64,
        offset: u64,
    ) -> Result<(Vec<WorkOrder>, u64)> {
        let mut query = entity::Entity::find().filter(entity::Column::DeletedAt.is_null());

        if let Some(statuses) = &search.statuses {
            query = query
                .filter(entity::Column::Status.is_in(statuses.iter().map(|status| status.as_str())));
        }
        if let Some(priority) = search.priority {
            query = query.filter(entity::Column::Priority.eq(priority.as_str()));
        }
        if let Some(assigned_to) = search.assigned_to {
            query = query.filter(entity::Column::AssignedTo.eq(assigned_to));
        }
        if let Some(asset_id) = search.asset_id {
            query = query.filter(entity::Column::AssetId.eq(asset_id));
        }
        if let Some(space_id) = search.space_id {
            query = query.filter(entity::Column::SpaceId.eq(space_id));
        }
        if let Some(as_of) = search.overdue_as_of {
            // Overdue implies still active
            query = query
                .filter(entity::Column::DueAt.lt(as_of))
                .filter(
                    entity::Column::Status
                        .is_in(ACTIVE_STATUSES.map(|status| status.as_str())),
                );
        }

        let total = query.clone().count(&*self.db).await?;
        let results = query
            .order_by_desc(entity::Column::CreatedAt)
            .limit(limit)
            .offset(offset)
            .all(&*self.db)
            .await?;

        results
            .into_iter()
            .map(|e| e.try_into())
            .collect::<Result<Vec<_>>>()
            .map(|orders| (orders, total))
    }

    async fn update(&self, order: &WorkOrder) -> Result<WorkOrder> {
        let active: entity::ActiveModel = order.into();
        let result = entity::Entity::update(active).exec(&*self.db).await?;
        result.try_into()
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

// ===== Comment repository =====

pub struct SeaOrmCommentRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmCommentRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CommentRepository for SeaOrmCommentRepository {
    async fn insert(&self, comment: &WorkOrderComment) -> Result<WorkOrderComment> {
        let active: entity::comment::ActiveModel = comment.into();
        let result = entity::comment::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await?;
        Ok(result.into())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<WorkOrderComment>> {
        let result = entity::comment::Entity::find_by_id(id).one(&*self.db).await?;
        Ok(result.map(|e| e.into()))
    }

    async fn list_for(&self, work_order_id: Uuid) -> Result<Vec<WorkOrderComment>> {
        let results = entity::comment::Entity::find()
            .filter(entity::comment::Column::WorkOrderId.eq(work_order_id))
            .order_by_asc(entity::comment::Column::CreatedAt)
            .all(&*self.db)
            .await?;
        Ok(results.into_iter().map(|e| e.into()).collect())
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        entity::comment::Entity::delete_by_id(id).exec(&*self.db).await?;
        Ok(())
    }
}

// ===== Attachment repository =====

pub struct SeaOrmAttachmentRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmAttachmentRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AttachmentRepository for SeaOrmAttachmentRepository {
    async fn insert(&self, attachment: &WorkOrderAttachment) -> Result<WorkOrderAttachment> {
        let active: entity::attachment::ActiveModel = attachment.into();
        let result = entity::attachment::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await?;
        Ok(result.into())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<WorkOrderAttachment>> {
        let result = entity::attachment::Entity::find_by_id(id)
            .one(&*self.db)
            .await?;
        Ok(result.map(|e| e.into()))
    }

    async fn list_for(&self, work_order_id: Uuid) -> Result<Vec<WorkOrderAttachment>> {
        let results = entity::attachment::Entity::find()
            .filter(entity::attachment::Column::WorkOrderId.eq(work_order_id))
            .order_by_asc(entity::attachment::Column::CreatedAt)
            .all(&*self.db)
            .await?;
        Ok(results.into_iter().map(|e| e.into()).collect())
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        entity::attachment::Entity::delete_by_id(id)
            .exec(&*self.db)
            .await?;
        Ok(())
    }
}
