//! Domain events for the accounts module
//!
//! Every successful write emits one event; a successful login does too, so
//! sign-in activity shows up in the structured log next to everything else.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Domain event types for accounts
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum AccountEvent {
    UserCreated { id: Uuid, email: String, timestamp: DateTime<Utc> },
    UserUpdated { id: Uuid, email: String, timestamp: DateTime<Utc> },
    UserDeleted { id: Uuid, timestamp: DateTime<Utc> },
    PasswordChanged { id: Uuid, timestamp: DateTime<Utc> },
    SignedIn { id: Uuid, timestamp: DateTime<Utc> },
}

impl AccountEvent {
    pub fn name(&self) -> &'static str {
        match self {
            AccountEvent::UserCreated { .. } => "user_created",
            AccountEvent::UserUpdated { .. } => "user_updated",
            AccountEvent::UserDeleted { .. } => "user_deleted",
            AccountEvent::PasswordChanged { .. } => "user_password_changed",
            AccountEvent::SignedIn { .. } => "user_signed_in",
        }
    }
}

/// Event publisher trait for publishing domain events
#[async_trait::async_trait]
pub trait EventPublisher: Send + Sync {
    async fn publish(&self, event: AccountEvent) -> anyhow::Result<()>;
}

/// Publisher that records events in the structured log
pub struct TracingEventPublisher;

#[async_trait::async_trait]
impl EventPublisher for TracingEventPublisher {
    async fn publish(&self, event: AccountEvent) -> anyhow::Result<()> {
        tracing::info!(event = event.name(), payload = ?event, "account event");
        Ok(())
    }
}

/// No-op event publisher for testing or when events are disabled
pub struct NoOpEventPublisher;

#[async_trait::async_trait]
impl EventPublisher for NoOpEventPublisher {
    async fn publish(&self, _event: AccountEvent) -> anyhow::Result<()> {
        // No-op: events are not published
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names() {
        let event = AccountEvent::UserCreated {
            id: Uuid::new_v4(),
            email: "dana@example.com".to_string(),
            timestamp: Utc::now(),
        };
        assert_eq!(event.name(), "user_created");

        let event = AccountEvent::PasswordChanged {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
        };
        assert_eq!(event.name(), "user_password_changed");
    }

    #[test]
    fn test_events_never_carry_password_material() {
        let event = AccountEvent::SignedIn {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert!(json.get("password").is_none());
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["event_type"], "signed_in");
    }
}
