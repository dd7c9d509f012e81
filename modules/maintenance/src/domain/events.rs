//! Domain events for the maintenance module

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Domain event types for maintenance
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum MaintenanceEvent {
    ScheduleCreated { id: Uuid, asset_id: Uuid, timestamp: DateTime<Utc> },
    ScheduleUpdated { id: Uuid, timestamp: DateTime<Utc> },
    ScheduleDeleted { id: Uuid, timestamp: DateTime<Utc> },
    LogRecorded {
        id: Uuid,
        asset_id: Uuid,
        schedule_id: Option<Uuid>,
        performed_at: DateTime<Utc>,
        timestamp: DateTime<Utc>,
    },
    LogUpdated { id: Uuid, timestamp: DateTime<Utc> },
    LogDeleted { id: Uuid, timestamp: DateTime<Utc> },
}

impl MaintenanceEvent {
    pub fn name(&self) -> &'static str {
        match self {
            MaintenanceEvent::ScheduleCreated { .. } => "schedule_created",
            MaintenanceEvent::ScheduleUpdated { .. } => "schedule_updated",
            MaintenanceEvent::ScheduleDeleted { .. } => "schedule_deleted",
            MaintenanceEvent::LogRecorded { .. } => "log_recorded",
            MaintenanceEvent::LogUpdated { .. } => "log_updated",
            MaintenanceEvent::LogDeleted { .. } => "log_deleted",
        }
    }
}

/// Event publisher trait for publishing domain events
#[async_trait::async_trait]
pub trait EventPublisher: Send + Sync {
    async fn publish(&self, event: MaintenanceEvent) -> anyhow::Result<()>;
}

/// Publisher that records events in the structured log
pub struct TracingEventPublisher;

#[async_trait::async_trait]
impl EventPublisher for TracingEventPublisher {
    async fn publish(&self, event: MaintenanceEvent) -> anyhow::Result<()> {
        tracing::info!(event = event.name(), payload = ?event, "maintenance event");
        Ok(())
    }
}

/// No-op event publisher for testing or when events are disabled
pub struct NoOpEventPublisher;

#[async_trait::async_trait]
impl EventPublisher for NoOpEventPublisher {
    async fn publish(&self, _event: MaintenanceEvent) -> anyhow::Result<()> {
        // No-op: events are not published
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names() {
        let event = MaintenanceEvent::LogRecorded {
            id: Uuid::new_v4(),
            asset_id: Uuid::new_v4(),
            schedule_id: None,
            performed_at: Utc::now(),
            timestamp: Utc::now(),
        };
        assert_eq!(event.name(), "log_recorded");
    }

    #[test]
    fn test_event_payload_shape() {
        let event = MaintenanceEvent::ScheduleCreated {
            id: Uuid::new_v4(),
            asset_id: Uuid::new_v4(),
            timestamp: Utc::now(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event_type"], "schedule_created");
        assert!(json["asset_id"].is_string());
    }
}
