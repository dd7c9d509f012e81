//! Native client trait for consuming the maintenance module in-process

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::error::MaintenanceError;
use super::model::{MaintenanceLog, MaintenanceSchedule};

/// Read-side API other modules use for maintenance history and due-work
/// summaries.
#[async_trait]
pub trait MaintenanceApi: Send + Sync {
    /// Most recent performed work for an asset, newest first.
    async fn asset_history(
        &self,
        asset_id: Uuid,
        limit: u64,
    ) -> Result<Vec<MaintenanceLog>, MaintenanceError>;

    /// Active schedules whose due date has passed, soonest-due first.
    async fn overdue_schedules(
        &self,
        as_of: DateTime<Utc>,
        limit: u64,
    ) -> Result<Vec<MaintenanceSchedule>, MaintenanceError>;

    async fn overdue_count(&self, as_of: DateTime<Utc>) -> Result<u64, MaintenanceError>;
}
