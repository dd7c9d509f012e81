//! REST DTOs with serde derives for HTTP API

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

// ===== Category DTOs =====

/// Category response DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryDto {
    pub id: Uuid,

    /// Null for root categories
    pub parent_id: Option<Uuid>,

    #[schema(example = "HVAC")]
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// 0 for roots
    pub depth: i32,

    pub created_at: chrono::DateTime<chrono::Utc>,

    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// One node of the nested category tree
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CategoryTreeNodeDto {
    pub id: Uuid,

    pub parent_id: Option<Uuid>,

    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub depth: i32,

    #[schema(no_recursion)]
    pub children: Vec<CategoryTreeNodeDto>,
}

/// Create category request
#[derive(Debug, Clone, Deserialize, ToSchema, Validate)]
pub struct CreateCategoryRequest {
    /// Omit for a new root category
    pub parent_id: Option<Uuid>,

    #[schema(example = "HVAC")]
    #[validate(length(min = 1, max = 120, message = "must be between 1 and 120 characters"))]
    pub name: String,

    #[validate(length(max = 500, message = "must be at most 500 characters"))]
    pub description: Option<String>,
}

/// Update category request (rename/re-describe; position changes go
/// through the move endpoint)
#[derive(Debug, Clone, Deserialize, ToSchema, Validate)]
pub struct UpdateCategoryRequest {
    #[validate(length(min = 1, max = 120, message = "must be between 1 and 120 characters"))]
    pub name: String,

    #[validate(length(max = 500, message = "must be at most 500 characters"))]
    pub description: Option<String>,
}

/// Move category request; a null/omitted parent detaches to a new root
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct MoveCategoryRequest {
    pub parent_id: Option<Uuid>,
}

// ===== Asset DTOs =====

/// Asset response DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AssetDto {
    pub id: Uuid,

    /// Asset tag
    #[schema(example = "AHU-003")]
    pub code: String,

    pub name: String,

    pub category_id: Uuid,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub space_id: Option<Uuid>,

    /// operational | in_maintenance | out_of_service | retired
    #[schema(example = "operational")]
    pub status: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchased_at: Option<NaiveDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_cost: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub warranty_until: Option<NaiveDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_maintained_at: Option<chrono::DateTime<chrono::Utc>>,

    pub created_at: chrono::DateTime<chrono::Utc>,

    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Create asset request
#[derive(Debug, Clone, Deserialize, ToSchema, Validate)]
pub struct CreateAssetRequest {
    /// Asset tag, unique among active assets
    #[schema(example = "AHU-003")]
    #[validate(length(min = 1, max = 32, message = "must be between 1 and 32 characters"))]
    pub code: String,

    #[validate(length(min = 1, max = 120, message = "must be between 1 and 120 characters"))]
    pub name: String,

    pub category_id: Uuid,

    pub space_id: Option<Uuid>,

    /// operational | in_maintenance | out_of_service | retired
    #[serde(default = "default_status")]
    #[schema(example = "operational")]
    pub status: String,

    #[validate(length(max = 120, message = "must be at most 120 characters"))]
    pub serial_number: Option<String>,

    #[validate(length(max = 120, message = "must be at most 120 characters"))]
    pub manufacturer: Option<String>,

    #[validate(length(max = 120, message = "must be at most 120 characters"))]
    pub model: Option<String>,

    pub purchased_at: Option<NaiveDate>,

    pub purchase_cost: Option<Decimal>,

    pub warranty_until: Option<NaiveDate>,

    pub notes: Option<String>,
}

fn default_status() -> String {
    "operational".to_string()
}

/// Update asset request (full replace; status changes go through the
/// status endpoint)
#[derive(Debug, Clone, Deserialize, ToSchema, Validate)]
pub struct UpdateAssetRequest {
    #[validate(length(min = 1, max = 32, message = "must be between 1 and 32 characters"))]
    pub code: String,

    #[validate(length(min = 1, max = 120, message = "must be between 1 and 120 characters"))]
    pub name: String,

    pub category_id: Uuid,

    pub space_id: Option<Uuid>,

    #[validate(length(max = 120, message = "must be at most 120 characters"))]
    pub serial_number: Option<String>,

    #[validate(length(max = 120, message = "must be at most 120 characters"))]
    pub manufacturer: Option<String>,

    #[validate(length(max = 120, message = "must be at most 120 characters"))]
    pub model: Option<String>,

    pub purchased_at: Option<NaiveDate>,

    pub purchase_cost: Option<Decimal>,

    pub warranty_until: Option<NaiveDate>,

    pub notes: Option<String>,
}

/// Set an asset's lifecycle status
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ChangeAssetStatusRequest {
    /// operational | in_maintenance | out_of_service | retired
    #[schema(example = "in_maintenance")]
    pub status: String,
}

/// Query filters for the asset list
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssetFilterQuery {
    /// Matches the category and its whole subtree
    pub category_id: Option<Uuid>,
    pub space_id: Option<Uuid>,
    pub status: Option<String>,
    pub search: Option<String>,
}

// ===== List Response DTOs =====

/// Paginated flat list of categories in tree order
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CategoriesListResponse {
    pub items: Vec<CategoryDto>,
    pub total: u64,
    pub limit: u64,
    pub offset: u64,
}

/// The whole category forest, nested
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CategoryTreeResponse {
    pub items: Vec<CategoryTreeNodeDto>,
    /// Number of nodes in the forest
    pub total: u64,
}

/// Direct children of a category
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CategoryChildrenResponse {
    pub items: Vec<CategoryDto>,
    pub total: u64,
}

/// Paginated list of assets
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AssetsListResponse {
    pub items: Vec<AssetDto>,
    pub total: u64,
    pub limit: u64,
    pub offset: u64,
}
