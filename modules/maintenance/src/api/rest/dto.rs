//! REST DTOs with serde derives for HTTP API

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

// ===== Schedule DTOs =====

/// Maintenance schedule response DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ScheduleDto {
    pub id: Uuid,

    pub asset_id: Uuid,

    #[schema(example = "Quarterly filter swap")]
    pub title: String,

    #[schema(example = "quarterly")]
    pub frequency: String,

    pub next_due_at: DateTime<Utc>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_performed_at: Option<DateTime<Utc>>,

    pub active: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

/// Create schedule request
#[derive(Debug, Clone, Deserialize, ToSchema, Validate)]
pub struct CreateScheduleRequest {
    pub asset_id: Uuid,

    #[schema(example = "Quarterly filter swap")]
    #[validate(length(min = 1, max = 120, message = "must be between 1 and 120 characters"))]
    pub title: String,

    /// One of: daily, weekly, monthly, quarterly, semiannually, annually
    #[schema(example = "quarterly")]
    pub frequency: String,

    pub next_due_at: DateTime<Utc>,

    #[serde(default = "default_active")]
    pub active: bool,

    #[validate(length(max = 2000, message = "must be at most 2000 characters"))]
    pub notes: Option<String>,
}

fn default_active() -> bool {
    true
}

/// Update schedule request; the owning asset never changes
#[derive(Debug, Clone, Deserialize, ToSchema, Validate)]
pub struct UpdateScheduleRequest {
    #[validate(length(min = 1, max = 120, message = "must be between 1 and 120 characters"))]
    pub title: String,

    #[schema(example = "monthly")]
    pub frequency: String,

    pub next_due_at: DateTime<Utc>,

    pub active: bool,

    #[validate(length(max = 2000, message = "must be at most 2000 characters"))]
    pub notes: Option<String>,
}

/// Query filters for listing schedules
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScheduleFilterQuery {
    pub asset_id: Option<Uuid>,
    pub active: Option<bool>,
    /// RFC 3339 timestamp; schedules due strictly before it
    pub due_before: Option<DateTime<Utc>>,
}

// ===== Log DTOs =====

/// Maintenance log response DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LogDto {
    pub id: Uuid,

    pub asset_id: Uuid,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_id: Option<Uuid>,

    pub performed_at: DateTime<Utc>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub performed_by: Option<Uuid>,

    #[schema(example = "Replaced both filters")]
    pub summary: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Decimal serialized as a string, e.g. "125.50"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<Decimal>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

/// Create log request
#[derive(Debug, Clone, Deserialize, ToSchema, Validate)]
pub struct CreateLogRequest {
    pub asset_id: Uuid,

    /// Schedule that planned this work, if any
    pub schedule_id: Option<Uuid>,

    pub performed_at: DateTime<Utc>,

    pub performed_by: Option<Uuid>,

    #[schema(example = "Replaced both filters")]
    #[validate(length(min = 1, max = 240, message = "must be between 1 and 240 characters"))]
    pub summary: String,

    #[validate(length(max = 2000, message = "must be at most 2000 characters"))]
    pub notes: Option<String>,

    pub cost: Option<Decimal>,
}

/// Update log request; asset and schedule stay fixed
#[derive(Debug, Clone, Deserialize, ToSchema, Validate)]
pub struct UpdateLogRequest {
    pub performed_at: DateTime<Utc>,

    pub performed_by: Option<Uuid>,

    #[validate(length(min = 1, max = 240, message = "must be between 1 and 240 characters"))]
    pub summary: String,

    #[validate(length(max = 2000, message = "must be at most 2000 characters"))]
    pub notes: Option<String>,

    pub cost: Option<Decimal>,
}

/// Query filters for listing logs
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LogFilterQuery {
    pub asset_id: Option<Uuid>,
    pub schedule_id: Option<Uuid>,
}

// ===== List envelopes =====

/// Paginated schedules response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SchedulesListResponse {
    pub items: Vec<ScheduleDto>,
    pub total: u64,
    pub limit: u64,
    pub offset: u64,
}

/// Paginated logs response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LogsListResponse {
    pub items: Vec<LogDto>,
    pub total: u64,
    pub limit: u64,
    pub offset: u64,
}
