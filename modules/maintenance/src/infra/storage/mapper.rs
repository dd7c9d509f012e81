//! Entity to model mappers
//!
//! Conversions between SeaORM entities and contract models

use super::entity;
use crate::contract::{Frequency, MaintenanceLog, MaintenanceSchedule};
use std::str::FromStr;

// ===== Schedule conversions =====

impl TryFrom<entity::Model> for MaintenanceSchedule {
    type Error = anyhow::Error;

    fn try_from(entity: entity::Model) -> Result<Self, Self::Error> {
        let frequency = Frequency::from_str(&entity.frequency)
            .map_err(|e| anyhow::anyhow!("schedule {}: {e}", entity.id))?;

        Ok(Self {
            id: entity.id,
            asset_id: entity.asset_id,
            title: entity.title,
            frequency,
            next_due_at: entity.next_due_at,
            last_performed_at: entity.last_performed_at,
            active: entity.active,
            notes: entity.notes,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            deleted_at: entity.deleted_at,
        })
    }
}

impl From<&MaintenanceSchedule> for entity::ActiveModel {
    fn from(model: &MaintenanceSchedule) -> Self {
        use sea_orm::ActiveValue::*;

        Self {
            id: Set(model.id),
            asset_id: Set(model.asset_id),
            title: Set(model.title.clone()),
            frequency: Set(model.frequency.as_str().to_string()),
            next_due_at: Set(model.next_due_at),
            last_performed_at: Set(model.last_performed_at),
            active: Set(model.active),
            notes: Set(model.notes.clone()),
            created_at: Set(model.created_at),
            updated_at: Set(model.updated_at),
            deleted_at: Set(model.deleted_at),
        }
    }
}

// ===== Log conversions =====

impl From<entity::log::Model> for MaintenanceLog {
    fn from(entity: entity::log::Model) -> Self {
        Self {
            id: entity.id,
            asset_id: entity.asset_id,
            schedule_id: entity.schedule_id,
            performed_at: entity.performed_at,
            performed_by: entity.performed_by,
            summary: entity.summary,
            notes: entity.notes,
            cost: entity.cost,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            deleted_at: entity.deleted_at,
        }
    }
}

impl From<&MaintenanceLog> for entity::log::ActiveModel {
    fn from(model: &MaintenanceLog) -> Self {
        use sea_orm::ActiveValue::*;

        Self {
            id: Set(model.id),
            asset_id: Set(model.asset_id),
            schedule_id: Set(model.schedule_id),
            performed_at: Set(model.performed_at),
            performed_by: Set(model.performed_by),
            summary: Set(model.summary.clone()),
            notes: Set(model.notes.clone()),
            cost: Set(model.cost),
            created_at: Set(model.created_at),
            updated_at: Set(model.updated_at),
            deleted_at: Set(model.deleted_at),
        }
    }
}
