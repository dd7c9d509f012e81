//! Domain events for the work orders module

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::contract::WorkOrderStatus;

/// Domain event types for work orders
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum WorkOrderEvent {
    Created {
        id: Uuid,
        code: String,
        timestamp: DateTime<Utc>,
    },
    Updated {
        id: Uuid,
        timestamp: DateTime<Utc>,
    },
    StatusChanged {
        id: Uuid,
        #[serde(serialize_with = "serialize_status")]
        from: WorkOrderStatus,
        #[serde(serialize_with = "serialize_status")]
        to: WorkOrderStatus,
        timestamp: DateTime<Utc>,
    },
    AssignmentChanged {
        id: Uuid,
        assigned_to: Option<Uuid>,
        timestamp: DateTime<Utc>,
    },
    Deleted {
        id: Uuid,
        timestamp: DateTime<Utc>,
    },
    CommentAdded {
        id: Uuid,
        work_order_id: Uuid,
        timestamp: DateTime<Utc>,
    },
    CommentDeleted {
        id: Uuid,
        work_order_id: Uuid,
        timestamp: DateTime<Utc>,
    },
    AttachmentAdded {
        id: Uuid,
        work_order_id: Uuid,
        timestamp: DateTime<Utc>,
    },
    AttachmentDeleted {
        id: Uuid,
        work_order_id: Uuid,
        timestamp: DateTime<Utc>,
    },
}

fn serialize_status<S>(status: &WorkOrderStatus, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(status.as_str())
}

impl WorkOrderEvent {
    pub fn name(&self) -> &'static str {
        match self {
            WorkOrderEvent::Created { .. } => "work_order_created",
            WorkOrderEvent::Updated { .. } => "work_order_updated",
            WorkOrderEvent::StatusChanged { .. } => "work_order_status_changed",
            WorkOrderEvent::AssignmentChanged { .. } => "work_order_assignment_changed",
            WorkOrderEvent::Deleted { .. } => "work_order_deleted",
            WorkOrderEvent::CommentAdded { .. } => "work_order_comment_added",
            WorkOrderEvent::CommentDeleted { .. } => "work_order_comment_deleted",
            WorkOrderEvent::AttachmentAdded { .. } => "work_order_attachment_added",
            WorkOrderEvent::AttachmentDeleted { .. } => "work_order_attachment_deleted",
        }
    }
}

/// Event publisher trait for publishing domain events
#[async_trait::async_trait]
pub trait EventPublisher: Send + Sync {
    async fn publish(&self, event: WorkOrderEvent) -> anyhow::Result<()>;
}

/// Publisher that records events in the structured log
pub struct TracingEventPublisher;

#[async_trait::async_trait]
impl EventPublisher for TracingEventPublisher {
    async fn publish(&self, event: WorkOrderEvent) -> anyhow::Result<()> {
        tracing::info!(event = event.name(), payload = ?event, "work order event");
        Ok(())
    }
}

/// No-op event publisher for testing or when events are disabled
pub struct NoOpEventPublisher;

#[async_trait::async_trait]
impl EventPublisher for NoOpEventPublisher {
    async fn publish(&self, _event: WorkOrderEvent) -> anyhow::Result<()> {
        // No-op: events are not published
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names() {
        let event = WorkOrderEvent::StatusChanged {
            id: Uuid::new_v4(),
            from: WorkOrderStatus::Open,
            to: WorkOrderStatus::InProgress,
            timestamp: Utc::now(),
        };
        assert_eq!(event.name(), "work_order_status_changed");
    }

    #[test]
    fn test_event_payload_shape() {
        let event = WorkOrderEvent::StatusChanged {
            id: Uuid::new_v4(),
            from: WorkOrderStatus::Open,
            to: WorkOrderStatus::InProgress,
            timestamp: Utc::now(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event_type"], "work_order_status_changed");
        assert_eq!(json["from"], "open");
        assert_eq!(json["to"], "in_progress");
    }
}
