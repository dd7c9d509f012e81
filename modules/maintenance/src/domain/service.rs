//! Domain service - business logic orchestration

use super::events::{EventPublisher, MaintenanceEvent};
use super::repository::{LogRepository, ScheduleRepository};
use super::validation;
use crate::contract::{
    LogListFilter, MaintenanceError, MaintenanceLog, MaintenanceSchedule, NewLog, NewSchedule,
    ScheduleListFilter, UpdateLog, UpdateSchedule,
};
use assets::{AssetsApi, AssetsError};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use uuid::Uuid;

/// Domain service for maintenance schedules and logs
pub struct Service {
    schedules: Arc<dyn ScheduleRepository>,
    logs: Arc<dyn LogRepository>,
    assets: Arc<dyn AssetsApi>,
    events: Arc<dyn EventPublisher>,
}

impl Service {
    /// Create a new service instance
    pub fn new(
        schedules: Arc<dyn ScheduleRepository>,
        logs: Arc<dyn LogRepository>,
        assets: Arc<dyn AssetsApi>,
        events: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            schedules,
            logs,
            assets,
            events,
        }
    }

    // ===== Schedule operations =====

    pub async fn create_schedule(
        &self,
        input: NewSchedule,
    ) -> Result<MaintenanceSchedule, MaintenanceError> {
        validation::validate_title(&input.title)?;
        self.ensure_asset_known(input.asset_id).await?;

        let now = Utc::now();
        let schedule = MaintenanceSchedule {
            id: Uuid::new_v4(),
            asset_id: input.asset_id,
            title: input.title,
            frequency: input.frequency,
            next_due_at: input.next_due_at,
            last_performed_at: None,
            active: input.active,
            notes: input.notes,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };

        let created = self
            .schedules
            .insert(&schedule)
            .await
            .map_err(|e| self.internal("insert schedule", e))?;

        self.publish(MaintenanceEvent::ScheduleCreated {
            id: created.id,
            asset_id: created.asset_id,
            timestamp: Utc::now(),
        })
        .await;

        Ok(created)
    }

    pub async fn get_schedule(&self, id: Uuid) -> Result<MaintenanceSchedule, MaintenanceError> {
        self.schedules
            .find_by_id(id)
            .await
            .map_err(|e| self.internal("find schedule", e))?
            .ok_or_else(|| MaintenanceError::not_found("maintenance schedule", id))
    }

    pub async fn list_schedules(
        &self,
        filter: ScheduleListFilter,
        limit: u64,
        offset: u64,
    ) -> Result<(Vec<MaintenanceSchedule>, u64), MaintenanceError> {
        self.schedules
            .list(&filter, limit, offset)
            .await
            .map_err(|e| self.internal("list schedules", e))
    }

    pub async fn update_schedule(
        &self,
        id: Uuid,
        input: UpdateSchedule,
    ) -> Result<MaintenanceSchedule, MaintenanceError> {
        validation::validate_title(&input.title)?;

        let mut schedule = self.get_schedule(id).await?;
        schedule.title = input.title;
        schedule.frequency = input.frequency;
        schedule.next_due_at = input.next_due_at;
        schedule.active = input.active;
        schedule.notes = input.notes;
        schedule.updated_at = Utc::now();

        let updated = self
            .schedules
            .update(&schedule)
            .await
            .map_err(|e| self.internal("update schedule", e))?;

        self.publish(MaintenanceEvent::ScheduleUpdated {
            id,
            timestamp: Utc::now(),
        })
        .await;

        Ok(updated)
    }

    pub async fn delete_schedule(&self, id: Uuid) -> Result<(), MaintenanceError> {
        self.get_schedule(id).await?;

        self.schedules
            .soft_delete(id)
            .await
            .map_err(|e| self.internal("delete schedule", e))?;

        self.publish(MaintenanceEvent::ScheduleDeleted {
            id,
            timestamp: Utc::now(),
        })
        .await;

        Ok(())
    }

    // ===== Log operations =====

    /// Record performed work.
    ///
    /// Two pieces of bookkeeping ride along with the insert: the owning
    /// asset's `last_maintained_at`, and, when the work was planned, the
    /// schedule's `last_performed_at`/`next_due_at`. The next due date
    /// trails the actual performance date, not the planned one.
    pub async fn record_log(&self, input: NewLog) -> Result<MaintenanceLog, MaintenanceError> {
        validation::validate_summary(&input.summary)?;
        validation::validate_cost(input.cost)?;
        self.ensure_asset_known(input.asset_id).await?;

        let schedule = match input.schedule_id {
            Some(schedule_id) => {
                let schedule = self
                    .schedules
                    .find_by_id(schedule_id)
                    .await
                    .map_err(|e| self.internal("find schedule", e))?
                    .ok_or_else(|| {
                        MaintenanceError::validation(
                            "schedule_id",
                            "references an unknown maintenance schedule",
                        )
                    })?;
                if schedule.asset_id != input.asset_id {
                    return Err(MaintenanceError::validation(
                        "schedule_id",
                        "references a schedule for a different asset",
                    ));
                }
                Some(schedule)
            }
            None => None,
        };

        let now = Utc::now();
        let log = MaintenanceLog {
            id: Uuid::new_v4(),
            asset_id: input.asset_id,
            schedule_id: input.schedule_id,
            performed_at: input.performed_at,
            performed_by: input.performed_by,
            summary: input.summary,
            notes: input.notes,
            cost: input.cost,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };

        let created = self
            .logs
            .insert(&log)
            .await
            .map_err(|e| self.internal("insert log", e))?;

        if let Some(schedule) = schedule {
            let next_due_at = schedule.frequency.advance(created.performed_at);
            self.schedules
                .advance_bookkeeping(schedule.id, created.performed_at, next_due_at)
                .await
                .map_err(|e| self.internal("advance schedule", e))?;
        }

        self.assets
            .record_maintenance(created.asset_id, created.performed_at)
            .await
            .map_err(|e| self.upstream("record asset maintenance", e))?;

        self.publish(MaintenanceEvent::LogRecorded {
            id: created.id,
            asset_id: created.asset_id,
            schedule_id: created.schedule_id,
            performed_at: created.performed_at,
            timestamp: Utc::now(),
        })
        .await;

        Ok(created)
    }

    pub async fn get_log(&self, id: Uuid) -> Result<MaintenanceLog, MaintenanceError> {
        self.logs
            .find_by_id(id)
            .await
            .map_err(|e| self.internal("find log", e))?
            .ok_or_else(|| MaintenanceError::not_found("maintenance log", id))
    }

    pub async fn list_logs(
        &self,
        filter: LogListFilter,
        limit: u64,
        offset: u64,
    ) -> Result<(Vec<MaintenanceLog>, u64), MaintenanceError> {
        self.logs
            .list(&filter, limit, offset)
            .await
            .map_err(|e| self.internal("list logs", e))
    }

    /// Correct a recorded log. The create-time cascades are not replayed;
    /// the asset and schedule bookkeeping only ever move forward.
    pub async fn update_log(
        &self,
        id: Uuid,
        input: UpdateLog,
    ) -> Result<MaintenanceLog, MaintenanceError> {
        validation::validate_summary(&input.summary)?;
        validation::validate_cost(input.cost)?;

        let mut log = self.get_log(id).await?;
        log.performed_at = input.performed_at;
        log.performed_by = input.performed_by;
        log.summary = input.summary;
        log.notes = input.notes;
        log.cost = input.cost;
        log.updated_at = Utc::now();

        let updated = self
            .logs
            .update(&log)
            .await
            .map_err(|e| self.internal("update log", e))?;

        self.publish(MaintenanceEvent::LogUpdated {
            id,
            timestamp: Utc::now(),
        })
        .await;

        Ok(updated)
    }

    pub async fn delete_log(&self, id: Uuid) -> Result<(), MaintenanceError> {
        self.get_log(id).await?;

        self.logs
            .soft_delete(id)
            .await
            .map_err(|e| self.internal("delete log", e))?;

        self.publish(MaintenanceEvent::LogDeleted {
            id,
            timestamp: Utc::now(),
        })
        .await;

        Ok(())
    }

    // ===== Summary reads for other modules =====

    pub async fn asset_history(
        &self,
        asset_id: Uuid,
        limit: u64,
    ) -> Result<Vec<MaintenanceLog>, MaintenanceError> {
        let filter = LogListFilter {
            asset_id: Some(asset_id),
            ..Default::default()
        };
        let (items, _) = self.list_logs(filter, limit, 0).await?;
        Ok(items)
    }

    pub async fn overdue_schedules(
        &self,
        as_of: DateTime<Utc>,
        limit: u64,
    ) -> Result<Vec<MaintenanceSchedule>, MaintenanceError> {
        let (items, _) = self.list_schedules(overdue_filter(as_of), limit, 0).await?;
        Ok(items)
    }

    pub async fn overdue_count(&self, as_of: DateTime<Utc>) -> Result<u64, MaintenanceError> {
        let (_, total) = self.list_schedules(overdue_filter(as_of), 1, 0).await?;
        Ok(total)
    }

    // ===== Helpers =====

    async fn ensure_asset_known(&self, asset_id: Uuid) -> Result<(), MaintenanceError> {
        let exists = self
            .assets
            .asset_exists(asset_id)
            .await
            .map_err(|e| self.upstream("asset lookup", e))?;
        if !exists {
            return Err(MaintenanceError::validation(
                "asset_id",
                "references an unknown asset",
            ));
        }
        Ok(())
    }

    fn internal(&self, context: &'static str, error: anyhow::Error) -> MaintenanceError {
        tracing::error!(context, error = %error, "maintenance storage failure");
        MaintenanceError::internal(format!("{context} failed"))
    }

    fn upstream(&self, context: &'static str, error: AssetsError) -> MaintenanceError {
        tracing::error!(context, error = %error, "assets lookup failure");
        MaintenanceError::internal(format!("{context} failed"))
    }

    async fn publish(&self, event: MaintenanceEvent) {
        // Event failures must not fail the write that produced them
        if let Err(error) = self.events.publish(event).await {
            tracing::warn!(error = %error, "failed to publish maintenance event");
        }
    }
}

fn overdue_filter(as_of: DateTime<Utc>) -> ScheduleListFilter {
    ScheduleListFilter {
        active: Some(true),
        due_before: Some(as_of),
        ..Default::default()
    }
}
