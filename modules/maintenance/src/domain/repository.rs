//! Repository traits - interfaces the storage layer implements

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::contract::{LogListFilter, MaintenanceLog, MaintenanceSchedule, ScheduleListFilter};

/// Persistence for maintenance schedules
#[async_trait]
pub trait ScheduleRepository: Send + Sync {
    async fn insert(&self, schedule: &MaintenanceSchedule) -> anyhow::Result<MaintenanceSchedule>;

    /// Find an active (non-deleted) schedule by id
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<MaintenanceSchedule>>;

    /// List active schedules ordered by due date, with the unpaged total
    async fn list(
        &self,
        filter: &ScheduleListFilter,
        limit: u64,
        offset: u64,
    ) -> anyhow::Result<(Vec<MaintenanceSchedule>, u64)>;

    async fn update(&self, schedule: &MaintenanceSchedule) -> anyhow::Result<MaintenanceSchedule>;

    /// Record that planned work was performed.
    ///
    /// Only moves the bookkeeping forward: a backdated log must not regress
    /// `last_performed_at` or `next_due_at`.
    async fn advance_bookkeeping(
        &self,
        id: Uuid,
        performed_at: DateTime<Utc>,
        next_due_at: DateTime<Utc>,
    ) -> anyhow::Result<()>;

    async fn soft_delete(&self, id: Uuid) -> anyhow::Result<()>;
}

/// Persistence for maintenance logs
#[async_trait]
pub trait LogRepository: Send + Sync {
    async fn insert(&self, log: &MaintenanceLog) -> anyhow::Result<MaintenanceLog>;

    /// Find an active (non-deleted) log by id
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<MaintenanceLog>>;

    /// List active logs newest-performed first, with the unpaged total
    async fn list(
        &self,
        filter: &LogListFilter,
        limit: u64,
        offset: u64,
    ) -> anyhow::Result<(Vec<MaintenanceLog>, u64)>;

    async fn update(&self, log: &MaintenanceLog) -> anyhow::Result<MaintenanceLog>;

    async fn soft_delete(&self, id: Uuid) -> anyhow::Result<()>;
}
