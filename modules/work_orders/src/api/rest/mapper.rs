//! Mapper implementations for converting between DTOs and contract models

use super::dto::*;
use crate::contract::{self, Priority, WorkOrderStatus};
use sitekit::Problem;
use std::str::FromStr;

// ===== Work order conversions =====

impl From<contract::WorkOrder> for WorkOrderDto {
    fn from(order: contract::WorkOrder) -> Self {
        Self {
            id: order.id,
            code: order.code,
            title: order.title,
            description: order.description,
            asset_id: order.asset_id,
            space_id: order.space_id,
            status: order.status.as_str().to_string(),
            priority: order.priority.as_str().to_string(),
            requested_by: order.requested_by,
            assigned_to: order.assigned_to,
            due_at: order.due_at,
            started_at: order.started_at,
            completed_at: order.completed_at,
            created_at: order.created_at,
            updated_at: order.updated_at,
        }
    }
}

impl TryFrom<CreateWorkOrderRequest> for contract::NewWorkOrder {
    type Error = Problem;

    fn try_from(req: CreateWorkOrderRequest) -> Result<Self, Self::Error> {
        let priority = parse_priority(&req.priority)?;
        Ok(Self {
            title: req.title,
            description: req.description,
            asset_id: req.asset_id,
            space_id: req.space_id,
            priority,
            requested_by: req.requested_by,
            assigned_to: req.assigned_to,
            due_at: req.due_at,
        })
    }
}

impl TryFrom<UpdateWorkOrderRequest> for contract::UpdateWorkOrder {
    type Error = Problem;

    fn try_from(req: UpdateWorkOrderRequest) -> Result<Self, Self::Error> {
        let priority = parse_priority(&req.priority)?;
        Ok(Self {
            title: req.title,
            description: req.description,
            asset_id: req.asset_id,
            space_id: req.space_id,
            priority,
            due_at: req.due_at,
        })
    }
}

impl TryFrom<WorkOrderFilterQuery> for contract::WorkOrderListFilter {
    type Error = Problem;

    fn try_from(query: WorkOrderFilterQuery) -> Result<Self, Self::Error> {
        let status = query.status.as_deref().map(parse_status).transpose()?;
        let priority = query.priority.as_deref().map(parse_priority).transpose()?;
        Ok(Self {
            status,
            priority,
            assigned_to: query.assigned_to,
            asset_id: query.asset_id,
            space_id: query.space_id,
            overdue: query.overdue,
        })
    }
}

// ===== Comment conversions =====

impl From<contract::WorkOrderComment> for CommentDto {
    fn from(comment: contract::WorkOrderComment) -> Self {
        Self {
            id: comment.id,
            work_order_id: comment.work_order_id,
            author_id: comment.author_id,
            body: comment.body,
            created_at: comment.created_at,
            updated_at: comment.updated_at,
        }
    }
}

// ===== Attachment conversions =====

impl From<contract::WorkOrderAttachment> for AttachmentDto {
    fn from(attachment: contract::WorkOrderAttachment) -> Self {
        Self {
            id: attachment.id,
            work_order_id: attachment.work_order_id,
            file_name: attachment.file_name,
            content_type: attachment.content_type,
            size_bytes: attachment.size_bytes,
            checksum_sha256: attachment.checksum_sha256,
            uploaded_by: attachment.uploaded_by,
            created_at: attachment.created_at,
        }
    }
}

// Unknown enum strings are a validation problem, not a parse panic

pub fn parse_status(raw: &str) -> Result<WorkOrderStatus, Problem> {
    WorkOrderStatus::from_str(raw).map_err(|message| Problem::invalid_field("status", message))
}

pub fn parse_priority(raw: &str) -> Result<Priority, Problem> {
    Priority::from_str(raw).map_err(|message| Problem::invalid_field("priority", message))
}
