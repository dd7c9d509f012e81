//! Contract models for the assets module
//!
//! Transport-agnostic domain types used across module boundaries.
//! NO serde derives - these are pure domain models.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use std::str::FromStr;
use uuid::Uuid;

/// A node in the nested-set category forest.
///
/// `lft`/`rgt` are the traversal indexes: a node's descendants are exactly
/// the rows whose `lft` falls inside its `(lft, rgt)` interval. `depth` is 0
/// for roots. Categories are hard-deleted as whole subtrees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetCategory {
    pub id: Uuid,
    pub parent_id: Option<Uuid>,
    pub name: String,
    pub description: Option<String>,
    pub lft: i64,
    pub rgt: i64,
    pub depth: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AssetCategory {
    /// Whether `other` lies inside this node's subtree (self included)
    pub fn contains(&self, other: &AssetCategory) -> bool {
        other.lft >= self.lft && other.rgt <= self.rgt
    }
}

/// A tracked asset
#[derive(Debug, Clone, PartialEq)]
pub struct Asset {
    pub id: Uuid,
    /// Asset tag, unique among active assets
    pub code: String,
    pub name: String,
    pub category_id: Uuid,
    /// Optional location; validated against the facilities module
    pub space_id: Option<Uuid>,
    pub status: AssetStatus,
    pub serial_number: Option<String>,
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    pub purchased_at: Option<NaiveDate>,
    pub purchase_cost: Option<Decimal>,
    pub warranty_until: Option<NaiveDate>,
    pub notes: Option<String>,
    /// Denormalized; only ever moves forward, via maintenance cascades
    pub last_maintained_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Asset lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetStatus {
    Operational,
    InMaintenance,
    OutOfService,
    Retired,
}

impl AssetStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetStatus::Operational => "operational",
            AssetStatus::InMaintenance => "in_maintenance",
            AssetStatus::OutOfService => "out_of_service",
            AssetStatus::Retired => "retired",
        }
    }
}

impl std::fmt::Display for AssetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "operational" => Ok(AssetStatus::Operational),
            "in_maintenance" => Ok(AssetStatus::InMaintenance),
            "out_of_service" => Ok(AssetStatus::OutOfService),
            "retired" => Ok(AssetStatus::Retired),
            other => Err(format!("unknown asset status '{other}'")),
        }
    }
}

/// Input for creating a category
#[derive(Debug, Clone)]
pub struct NewCategory {
    pub parent_id: Option<Uuid>,
    pub name: String,
    pub description: Option<String>,
}

/// Rename/re-describe a category; tree position changes go through move
#[derive(Debug, Clone)]
pub struct UpdateCategory {
    pub name: String,
    pub description: Option<String>,
}

/// Input for creating an asset
#[derive(Debug, Clone)]
pub struct NewAsset {
    pub code: String,
    pub name: String,
    pub category_id: Uuid,
    pub space_id: Option<Uuid>,
    pub status: AssetStatus,
    pub serial_number: Option<String>,
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    pub purchased_at: Option<NaiveDate>,
    pub purchase_cost: Option<Decimal>,
    pub warranty_until: Option<NaiveDate>,
    pub notes: Option<String>,
}

/// Full-replace update for an asset; status changes go through the
/// dedicated status operation
#[derive(Debug, Clone)]
pub struct UpdateAsset {
    pub code: String,
    pub name: String,
    pub category_id: Uuid,
    pub space_id: Option<Uuid>,
    pub serial_number: Option<String>,
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    pub purchased_at: Option<NaiveDate>,
    pub purchase_cost: Option<Decimal>,
    pub warranty_until: Option<NaiveDate>,
    pub notes: Option<String>,
}

/// Filters for listing assets
#[derive(Debug, Clone, Default)]
pub struct AssetListFilter {
    /// Restrict to this category's whole subtree
    pub category_id: Option<Uuid>,
    pub space_id: Option<Uuid>,
    pub status: Option<AssetStatus>,
    /// Case-insensitive substring match on code or name
    pub search: Option<String>,
}
