//! Native client implementation - wraps domain service for in-process calls

use crate::contract::{
    WorkOrder, WorkOrderComment, WorkOrderListFilter, WorkOrdersApi, WorkOrdersError,
};
use crate::domain::Service;
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

/// Native client that directly calls the domain service
///
/// Used by the portal for dashboard counts and per-asset work order lists.
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
impl WorkOrdersApi for NativeClient {
    async fn get_work_order(&self, id: Uuid) -> Result<WorkOrder, WorkOrdersError> {
        self.service.get_work_order(id).await
    }

    async fn list_work_orders(
        &self,
        filter: WorkOrderListFilter,
        limit: u64,
        offset: u64,
    ) -> Result<(Vec<WorkOrder>, u64), WorkOrdersError> {
        self.service.list_work_orders(filter, limit, offset).await
    }

    async fn open_count(&self) -> Result<u64, WorkOrdersError> {
        self.service.open_count().await
    }

    async fn open_for_asset(
        &self,
        asset_id: Uuid,
        limit: u64,
    ) -> Result<Vec<WorkOrder>, WorkOrdersError> {
        self.service.open_for_asset(asset_id, limit).await
    }

    async fn recent(&self, limit: u64) -> Result<Vec<WorkOrder>, WorkOrdersError> {
        self.service.recent(limit).await
    }

    async fn comments(
        &self,
        work_order_id: Uuid,
    ) -> Result<Vec<WorkOrderComment>, WorkOrdersError> {
        self.service.comments_for(work_order_id).await
    }
}
