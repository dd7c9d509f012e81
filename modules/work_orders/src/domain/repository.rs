//! Repository traits for data access
//!
//! These traits define the interface for data access operations.
//! Implementations are in infra/storage/repositories.rs

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::contract::{
    Priority, WorkOrder, WorkOrderAttachment, WorkOrderComment, WorkOrderStatus,
};

/// Work order listing criteria with the overdue cutoff already resolved
/// to a concrete timestamp
#[derive(Debug, Clone, Default)]
pub struct WorkOrderSearch {
    pub statuses: Option<Vec<WorkOrderStatus>>,
    pub priority: Option<Priority>,
    pub assigned_to: Option<Uuid>,
    pub asset_id: Option<Uuid>,
    pub space_id: Option<Uuid>,
    /// Orders with `due_at` before this instant and an active status
    pub overdue_as_of: Option<DateTime<Utc>>,
}

/// Repository for work orders
#[async_trait]
pub trait WorkOrderRepository: Send + Sync {
    /// Insert the order and assign it the next sequential code, both in
    /// one transaction so concurrent creates cannot share a code.
    async fn insert(&self, order: &WorkOrder) -> Result<WorkOrder>;

    /// Find an active work order by id
    async fn find_by_id(&self, id: Uuid) -> Result<Option<WorkOrder>>;

    /// List active orders matching the criteria, newest first, with total count
    async fn list(
        &self,
        search: &WorkOrderSearch,
        limit: u64,
        offset: u64,
    ) -> Result<(Vec<WorkOrder>, u64)>;

    async fn update(&self, order: &WorkOrder) -> Result<WorkOrder>;

    async fn soft_delete(&self, id: Uuid) -> Result<()>;
}

/// Repository for work order comments. Comments are hard-deleted.
#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn insert(&self, comment: &WorkOrderComment) -> Result<WorkOrderComment>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<WorkOrderComment>>;

    /// All comments on one order, oldest first
    async fn list_for(&self, work_order_id: Uuid) -> Result<Vec<WorkOrderComment>>;

    async fn delete(&self, id: Uuid) -> Result<()>;
}

/// Repository for attachment rows; the bytes live in the attachment store.
#[async_trait]
pub trait AttachmentRepository: Send + Sync {
    async fn insert(&self, attachment: &WorkOrderAttachment) -> Result<WorkOrderAttachment>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<WorkOrderAttachment>>;

    /// All attachments on one order, oldest first
    async fn list_for(&self, work_order_id: Uuid) -> Result<Vec<WorkOrderAttachment>>;

    async fn delete(&self, id: Uuid) -> Result<()>;
}
