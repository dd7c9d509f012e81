//! Native client trait for in-process module-to-module calls

use async_trait::async_trait;
use uuid::Uuid;

use super::error::WorkOrdersError;
use super::model::{WorkOrder, WorkOrderComment, WorkOrderListFilter};

/// Read-side surface other modules consume without going through REST.
#[async_trait]
pub trait WorkOrdersApi: Send + Sync {
    async fn get_work_order(&self, id: Uuid) -> Result<WorkOrder, WorkOrdersError>;

    /// List orders matching the filter, newest first, with total count
    async fn list_work_orders(
        &self,
        filter: WorkOrderListFilter,
        limit: u64,
        offset: u64,
    ) -> Result<(Vec<WorkOrder>, u64), WorkOrdersError>;

    /// Number of orders still pending or underway
    async fn open_count(&self) -> Result<u64, WorkOrdersError>;

    /// Active orders against one asset, newest first
    async fn open_for_asset(
        &self,
        asset_id: Uuid,
        limit: u64,
    ) -> Result<Vec<WorkOrder>, WorkOrdersError>;

    /// Most recently created orders regardless of status
    async fn recent(&self, limit: u64) -> Result<Vec<WorkOrder>, WorkOrdersError>;

    async fn comments(&self, work_order_id: Uuid)
        -> Result<Vec<WorkOrderComment>, WorkOrdersError>;
}
