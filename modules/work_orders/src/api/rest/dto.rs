//! REST DTOs with serde derives for HTTP API

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

// ===== Work order DTOs =====

/// Work order response DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WorkOrderDto {
    pub id: Uuid,

    #[schema(example = "WO-000042")]
    pub code: String,

    #[schema(example = "Replace hallway light ballast")]
    pub title: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_id: Option<Uuid>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub space_id: Option<Uuid>,

    #[schema(example = "in_progress")]
    pub status: String,

    #[schema(example = "high")]
    pub priority: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested_by: Option<Uuid>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<Uuid>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

/// Create work order request
#[derive(Debug, Clone, Deserialize, ToSchema, Validate)]
pub struct CreateWorkOrderRequest {
    #[schema(example = "Replace hallway light ballast")]
    #[validate(length(min = 1, max = 160, message = "must be between 1 and 160 characters"))]
    pub title: String,

    #[validate(length(max = 4000, message = "must be at most 4000 characters"))]
    pub description: Option<String>,

    pub asset_id: Option<Uuid>,

    pub space_id: Option<Uuid>,

    /// One of: low, medium, high, urgent
    #[schema(example = "medium")]
    #[serde(default = "default_priority")]
    pub priority: String,

    /// Defaults to the authenticated caller
    pub requested_by: Option<Uuid>,

    /// Creating with an assignee starts the order as `assigned`
    pub assigned_to: Option<Uuid>,

    pub due_at: Option<DateTime<Utc>>,
}

fn default_priority() -> String {
    "medium".to_string()
}

/// Update work order request; status and assignment have their own endpoints
#[derive(Debug, Clone, Deserialize, ToSchema, Validate)]
pub struct UpdateWorkOrderRequest {
    #[validate(length(min = 1, max = 160, message = "must be between 1 and 160 characters"))]
    pub title: String,

    #[validate(length(max = 4000, message = "must be at most 4000 characters"))]
    pub description: Option<String>,

    pub asset_id: Option<Uuid>,

    pub space_id: Option<Uuid>,

    #[schema(example = "high")]
    pub priority: String,

    pub due_at: Option<DateTime<Utc>>,
}

/// Status change request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ChangeStatusRequest {
    /// One of: open, assigned, in_progress, on_hold, completed, cancelled, closed
    #[schema(example = "in_progress")]
    pub status: String,
}

/// Assignment request; `null` clears the assignment
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct AssignRequest {
    pub assigned_to: Option<Uuid>,
}

/// Query filters for listing work orders
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkOrderFilterQuery {
    pub status: Option<String>,
    pub priority: Option<String>,
    pub assigned_to: Option<Uuid>,
    pub asset_id: Option<Uuid>,
    pub space_id: Option<Uuid>,
    /// Only orders past their due date and still active
    #[serde(default)]
    pub overdue: bool,
}

// ===== Comment DTOs =====

/// Work order comment response DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommentDto {
    pub id: Uuid,

    pub work_order_id: Uuid,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_id: Option<Uuid>,

    #[schema(example = "Parts ordered, ETA Friday")]
    pub body: String,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

/// Create comment request
#[derive(Debug, Clone, Deserialize, ToSchema, Validate)]
pub struct CreateCommentRequest {
    #[schema(example = "Parts ordered, ETA Friday")]
    #[validate(length(min = 1, max = 4000, message = "must be between 1 and 4000 characters"))]
    pub body: String,
}

// ===== Attachment DTOs =====

/// Work order attachment response DTO. Bytes are fetched through the
/// download endpoint; this carries the descriptive row only.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AttachmentDto {
    pub id: Uuid,

    pub work_order_id: Uuid,

    #[schema(example = "invoice-4471.pdf")]
    pub file_name: String,

    #[schema(example = "application/pdf")]
    pub content_type: String,

    pub size_bytes: i64,

    pub checksum_sha256: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub uploaded_by: Option<Uuid>,

    pub created_at: DateTime<Utc>,
}

// ===== List envelopes =====

/// Paginated work orders response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct WorkOrdersListResponse {
    pub items: Vec<WorkOrderDto>,
    pub total: u64,
    pub limit: u64,
    pub offset: u64,
}

/// Comments of a work order
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CommentsListResponse {
    pub items: Vec<CommentDto>,
    pub total: u64,
}

/// Attachments of a work order
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AttachmentsListResponse {
    pub items: Vec<AttachmentDto>,
    pub total: u64,
}
