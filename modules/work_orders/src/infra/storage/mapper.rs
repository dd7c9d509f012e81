//! Entity to model mappers
//!
//! Conversions between SeaORM entities and contract models

use super::entity;
use crate::contract::{
    Priority, WorkOrder, WorkOrderAttachment, WorkOrderComment, WorkOrderStatus,
};
use std::str::FromStr;

// ===== Work order conversions =====

impl TryFrom<entity::Model> for WorkOrder {
    type Error = anyhow::Error;

    fn try_from(entity: entity::Model) -> Result<Self, Self::Error> {
        let status = WorkOrderStatus::from_str(&entity.status)
            .map_err(|e| anyhow::anyhow!("work order {}: {e}", entity.id))?;
        let priority = Priority::from_str(&entity.priority)
            .map_err(|e| anyhow::anyhow!("work order {}: {e}", entity.id))?;

        Ok(Self {
            id: entity.id,
            code: entity.code,
            title: entity.title,
            description: entity.description,
            asset_id: entity.asset_id,
            space_id: entity.space_id,
            status,
            priority,
            requested_by: entity.requested_by,
            assigned_to: entity.assigned_to,
            due_at: entity.due_at,
            started_at: entity.started_at,
            completed_at: entity.completed_at,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            deleted_at: entity.deleted_at,
        })
    }
}

impl From<&WorkOrder> for entity::ActiveModel {
    fn from(model: &WorkOrder) -> Self {
        use sea_orm::ActiveValue::*;

        Self {
            id: Set(model.id),
            code: Set(model.code.clone()),
            title: Set(model.title.clone()),
            description: Set(model.description.clone()),
            asset_id: Set(model.asset_id),
            space_id: Set(model.space_id),
            status: Set(model.status.as_str().to_string()),
            priority: Set(model.priority.as_str().to_string()),
            requested_by: Set(model.requested_by),
            assigned_to: Set(model.assigned_to),
            due_at: Set(model.due_at),
            started_at: Set(model.started_at),
            completed_at: Set(model.completed_at),
            created_at: Set(model.created_at),
            updated_at: Set(model.updated_at),
            deleted_at: Set(model.deleted_at),
        }
    }
}

// ===== Comment conversions =====

impl From<entity::comment::Model> for WorkOrderComment {
    fn from(entity: entity::comment::Model) -> Self {
        Self {
            id: entity.id,
            work_order_id: entity.work_order_id,
            author_id: entity.author_id,
            body: entity.body,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

impl From<&WorkOrderComment> for entity::comment::ActiveModel {
    fn from(model: &WorkOrderComment) -> Self {
        use sea_orm::ActiveValue::*;

        Self {
            id: Set(model.id),
            work_order_id: Set(model.work_order_id),
            author_id: Set(model.author_id),
            body: Set(model.body.clone()),
            created_at: Set(model.created_at),
            updated_at: Set(model.updated_at),
        }
    }
}

// ===== Attachment conversions =====

impl From<entity::attachment::Model> for WorkOrderAttachment {
    fn from(entity: entity::attachment::Model) -> Self {
        Self {
            id: entity.id,
            work_order_id: entity.work_order_id,
            file_name: entity.file_name,
            content_type: entity.content_type,
            size_bytes: entity.size_bytes,
            checksum_sha256: entity.checksum_sha256,
            stored_path: entity.stored_path,
            uploaded_by: entity.uploaded_by,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

impl From<&WorkOrderAttachment> for entity::attachment::ActiveModel {
    fn from(model: &WorkOrderAttachment) -> Self {
        use sea_orm::ActiveValue::*;

        Self {
            id: Set(model.id),
            work_order_id: Set(model.work_order_id),
            file_name: Set(model.file_name.clone()),
            content_type: Set(model.content_type.clone()),
            size_bytes: Set(model.size_bytes),
            checksum_sha256: Set(model.checksum_sha256.clone()),
            stored_path: Set(model.stored_path.clone()),
            uploaded_by: Set(model.uploaded_by),
            created_at: Set(model.created_at),
            updated_at: Set(model.updated_at),
        }
    }
}
