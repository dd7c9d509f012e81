//! REST DTOs with serde derives for HTTP API

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

// ===== Building DTOs =====

/// Building response DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BuildingDto {
    pub id: Uuid,

    /// Unique short building code
    #[schema(example = "HQ")]
    pub code: String,

    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    pub created_at: chrono::DateTime<chrono::Utc>,

    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Create building request
#[derive(Debug, Clone, Deserialize, ToSchema, Validate)]
pub struct CreateBuildingRequest {
    /// Unique short building code
    #[schema(example = "HQ")]
    #[validate(length(min = 1, max = 32, message = "must be between 1 and 32 characters"))]
    pub code: String,

    #[validate(length(min = 1, max = 120, message = "must be between 1 and 120 characters"))]
    pub name: String,

    #[validate(length(max = 255, message = "must be at most 255 characters"))]
    pub address: Option<String>,

    #[validate(length(max = 120, message = "must be at most 120 characters"))]
    pub city: Option<String>,

    pub notes: Option<String>,
}

/// Update building request (full replace)
#[derive(Debug, Clone, Deserialize, ToSchema, Validate)]
pub struct UpdateBuildingRequest {
    #[validate(length(min = 1, max = 32, message = "must be between 1 and 32 characters"))]
    pub code: String,

    #[validate(length(min = 1, max = 120, message = "must be between 1 and 120 characters"))]
    pub name: String,

    #[validate(length(max = 255, message = "must be at most 255 characters"))]
    pub address: Option<String>,

    #[validate(length(max = 120, message = "must be at most 120 characters"))]
    pub city: Option<String>,

    pub notes: Option<String>,
}

// ===== Floor DTOs =====

/// Floor response DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FloorDto {
    pub id: Uuid,

    pub building_id: Uuid,

    /// Floor level; 0 is ground, negatives are basements
    #[schema(example = 2)]
    pub level: i32,

    pub name: String,

    pub created_at: chrono::DateTime<chrono::Utc>,

    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Create floor request
#[derive(Debug, Clone, Deserialize, ToSchema, Validate)]
pub struct CreateFloorRequest {
    pub building_id: Uuid,

    #[validate(range(min = -10, max = 200, message = "must be between -10 and 200"))]
    pub level: i32,

    #[validate(length(min = 1, max = 120, message = "must be between 1 and 120 characters"))]
    pub name: String,
}

/// Update floor request (full replace; the owning building is immutable)
#[derive(Debug, Clone, Deserialize, ToSchema, Validate)]
pub struct UpdateFloorRequest {
    #[validate(range(min = -10, max = 200, message = "must be between -10 and 200"))]
    pub level: i32,

    #[validate(length(min = 1, max = 120, message = "must be between 1 and 120 characters"))]
    pub name: String,
}

// ===== Space DTOs =====

/// Space response DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SpaceDto {
    pub id: Uuid,

    pub floor_id: Uuid,

    /// Space code, unique within its floor
    #[schema(example = "2.14")]
    pub code: String,

    pub name: String,

    /// office | meeting_room | storage | lab | common_area | technical | other
    #[schema(example = "meeting_room")]
    pub kind: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_sqm: Option<f64>,

    pub created_at: chrono::DateTime<chrono::Utc>,

    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Create space request
#[derive(Debug, Clone, Deserialize, ToSchema, Validate)]
pub struct CreateSpaceRequest {
    pub floor_id: Uuid,

    #[validate(length(min = 1, max = 32, message = "must be between 1 and 32 characters"))]
    pub code: String,

    #[validate(length(min = 1, max = 120, message = "must be between 1 and 120 characters"))]
    pub name: String,

    /// office | meeting_room | storage | lab | common_area | technical | other
    #[schema(example = "office")]
    pub kind: String,

    #[validate(range(min = 0, message = "must be zero or greater"))]
    pub capacity: Option<i32>,

    #[validate(range(min = 0.1, message = "must be a positive number"))]
    pub area_sqm: Option<f64>,
}

/// Update space request (full replace; the owning floor is immutable)
#[derive(Debug, Clone, Deserialize, ToSchema, Validate)]
pub struct UpdateSpaceRequest {
    #[validate(length(min = 1, max = 32, message = "must be between 1 and 32 characters"))]
    pub code: String,

    #[validate(length(min = 1, max = 120, message = "must be between 1 and 120 characters"))]
    pub name: String,

    #[schema(example = "office")]
    pub kind: String,

    #[validate(range(min = 0, message = "must be zero or greater"))]
    pub capacity: Option<i32>,

    #[validate(range(min = 0.1, message = "must be a positive number"))]
    pub area_sqm: Option<f64>,
}

// ===== List Response DTOs =====

/// Paginated list of buildings
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BuildingsListResponse {
    pub items: Vec<BuildingDto>,
    pub total: u64,
    pub limit: u64,
    pub offset: u64,
}

/// Floors of a building
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FloorsListResponse {
    pub items: Vec<FloorDto>,
    pub total: u64,
}

/// Spaces of a floor or building
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SpacesListResponse {
    pub items: Vec<SpaceDto>,
    pub total: u64,
}
