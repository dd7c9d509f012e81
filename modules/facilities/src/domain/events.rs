//! Domain events for the facilities module
//!
//! Every successful write emits one event. The default publisher writes
//! events to the structured log; consumers that need more can supply
//! their own [`EventPublisher`].

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Domain event types for facilities
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum FacilityEvent {
    BuildingCreated { id: Uuid, code: String, timestamp: DateTime<Utc> },
    BuildingUpdated { id: Uuid, code: String, timestamp: DateTime<Utc> },
    BuildingDeleted { id: Uuid, timestamp: DateTime<Utc> },
    FloorCreated { id: Uuid, building_id: Uuid, level: i32, timestamp: DateTime<Utc> },
    FloorUpdated { id: Uuid, building_id: Uuid, level: i32, timestamp: DateTime<Utc> },
    FloorDeleted { id: Uuid, building_id: Uuid, timestamp: DateTime<Utc> },
    SpaceCreated { id: Uuid, floor_id: Uuid, code: String, timestamp: DateTime<Utc> },
    SpaceUpdated { id: Uuid, floor_id: Uuid, code: String, timestamp: DateTime<Utc> },
    SpaceDeleted { id: Uuid, floor_id: Uuid, timestamp: DateTime<Utc> },
}

impl FacilityEvent {
    pub fn name(&self) -> &'static str {
        match self {
            FacilityEvent::BuildingCreated { .. } => "building_created",
            FacilityEvent::BuildingUpdated { .. } => "building_updated",
            FacilityEvent::BuildingDeleted { .. } => "building_deleted",
            FacilityEvent::FloorCreated { .. } => "floor_created",
            FacilityEvent::FloorUpdated { .. } => "floor_updated",
            FacilityEvent::FloorDeleted { .. } => "floor_deleted",
            FacilityEvent::SpaceCreated { .. } => "space_created",
            FacilityEvent::SpaceUpdated { .. } => "space_updated",
            FacilityEvent::SpaceDeleted { .. } => "space_deleted",
        }
    }
}

/// Event publisher trait for publishing domain events
#[async_trait::async_trait]
pub trait EventPublisher: Send + Sync {
    async fn publish(&self, event: FacilityEvent) -> anyhow::Result<()>;
}

/// Publisher that records events in the structured log
pub struct TracingEventPublisher;

#[async_trait::async_trait]
impl EventPublisher for TracingEventPublisher {
    async fn publish(&self, event: FacilityEvent) -> anyhow::Result<()> {
        tracing::info!(event = event.name(), payload = ?event, "facility event");
        Ok(())
    }
}

/// No-op event publisher for testing or when events are disabled
pub struct NoOpEventPublisher;

#[async_trait::async_trait]
impl EventPublisher for NoOpEventPublisher {
    async fn publish(&self, _event: FacilityEvent) -> anyhow::Result<()> {
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
        let event = FacilityEvent::BuildingCreated {
            id,
            code: "HQ".to_string(),
            timestamp: Utc::now(),
        };
        assert_eq!(event.name(), "building_created");

        let event = FacilityEvent::SpaceDeleted {
            id,
            floor_id: Uuid::new_v4(),
            timestamp: Utc::now(),
        };
        assert_eq!(event.name(), "space_deleted");
    }

    #[tokio::test]
    async fn test_noop_event_publisher() {
        let publisher = NoOpEventPublisher;
        let result = publisher
            .publish(FacilityEvent::BuildingDeleted {
                id: Uuid::new_v4(),
                timestamp: Utc::now(),
            })
            .await;
        assert!(result.is_ok());
    }
}
