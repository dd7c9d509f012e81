//! Native client implementation - wraps domain service for in-process calls

use crate::contract::{MaintenanceApi, MaintenanceError, MaintenanceLog, MaintenanceSchedule};
use crate::domain::Service;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use uuid::Uuid;

/// Native client that directly calls the domain service
///
/// Used by the portal for maintenance history and overdue-work summaries.
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
impl MaintenanceApi for NativeClient {
    async fn asset_history(
        &self,
        asset_id: Uuid,
        limit: u64,
    ) -> Result<Vec<MaintenanceLog>, MaintenanceError> {
        self.service.asset_history(asset_id, limit).await
    }

    async fn overdue_schedules(
        &self,
        as_of: DateTime<Utc>,
        limit: u64,
    ) -> Result<Vec<MaintenanceSchedule>, MaintenanceError> {
        self.service.overdue_schedules(as_of, limit).await
    }

    async fn overdue_count(&self, as_of: DateTime<Utc>) -> Result<u64, MaintenanceError> {
        self.service.overdue_count(as_of).await
    }
}
