//! Domain events for the assets module
//!
//! Every successful write emits one event. The default publisher writes
//! events to the structured log; consumers that need more can supply
//! their own [`EventPublisher`].

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::contract::AssetStatus;

/// Domain event types for assets
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum AssetEvent {
    CategoryCreated { id: Uuid, name: String, timestamp: DateTime<Utc> },
    CategoryUpdated { id: Uuid, name: String, timestamp: DateTime<Utc> },
    CategoryMoved { id: Uuid, new_parent_id: Option<Uuid>, timestamp: DateTime<Utc> },
    CategoryDeleted { id: Uuid, removed_nodes: u64, timestamp: DateTime<Utc> },
    AssetCreated { id: Uuid, code: String, timestamp: DateTime<Utc> },
    AssetUpdated { id: Uuid, code: String, timestamp: DateTime<Utc> },
    AssetStatusChanged {
        id: Uuid,
        #[serde(serialize_with = "serialize_status")]
        from: AssetStatus,
        #[serde(serialize_with = "serialize_status")]
        to: AssetStatus,
        timestamp: DateTime<Utc>,
    },
    AssetMaintained { id: Uuid, performed_at: DateTime<Utc>, timestamp: DateTime<Utc> },
    AssetDeleted { id: Uuid, timestamp: DateTime<Utc> },
}

fn serialize_status<S: serde::Serializer>(
    status: &AssetStatus,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(status.as_str())
}

impl AssetEvent {
    pub fn name(&self) -> &'static str {
        match self {
            AssetEvent::CategoryCreated { .. } => "category_created",
            AssetEvent::CategoryUpdated { .. } => "category_updated",
            AssetEvent::CategoryMoved { .. } => "category_moved",
            AssetEvent::CategoryDeleted { .. } => "category_deleted",
            AssetEvent::AssetCreated { .. } => "asset_created",
            AssetEvent::AssetUpdated { .. } => "asset_updated",
            AssetEvent::AssetStatusChanged { .. } => "asset_status_changed",
            AssetEvent::AssetMaintained { .. } => "asset_maintained",
            AssetEvent::AssetDeleted { .. } => "asset_deleted",
        }
    }
}

/// Event publisher trait for publishing domain events
#[async_trait::async_trait]
pub trait EventPublisher: Send + Sync {
    async fn publish(&self, event: AssetEvent) -> anyhow::Result<()>;
}

/// Publisher that records events in the structured log
pub struct TracingEventPublisher;

#[async_trait::async_trait]
impl EventPublisher for TracingEventPublisher {
    async fn publish(&self, event: AssetEvent) -> anyhow::Result<()> {
        tracing::info!(event = event.name(), payload = ?event, "asset event");
        Ok(())
    }
}

/// No-op event publisher for testing or when events are disabled
pub struct NoOpEventPublisher;

#[async_trait::async_trait]
impl EventPublisher for NoOpEventPublisher {
    async fn publish(&self, _event: AssetEvent) -> anyhow::Result<()> {
        // No-op: events are not published
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names() {
        let id = Uuid::new_v4();
        let event = AssetEvent::AssetCreated {
            id,
            code: "PUMP-001".to_string(),
            timestamp: Utc::now(),
        };
        assert_eq!(event.name(), "asset_created");

        let event = AssetEvent::CategoryMoved {
            id,
            new_parent_id: None,
            timestamp: Utc::now(),
        };
        assert_eq!(event.name(), "category_moved");
    }

    #[test]
    fn test_status_change_event_serializes_wire_names() {
        let event = AssetEvent::AssetStatusChanged {
            id: Uuid::new_v4(),
            from: AssetStatus::Operational,
            to: AssetStatus::InMaintenance,
            timestamp: Utc::now(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event_type"], "asset_status_changed");
        assert_eq!(json["from"], "operational");
        assert_eq!(json["to"], "in_maintenance");
    }

    #[tokio::test]
    async fn test_noop_event_publisher() {
        let publisher = NoOpEventPublisher;
        let result = publisher
            .publish(AssetEvent::AssetDeleted {
                id: Uuid::new_v4(),
                timestamp: Utc::now(),
            })
            .await;
        assert!(result.is_ok());
    }
}
