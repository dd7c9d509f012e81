//! Repository traits for data access
//!
//! These traits define the interface for data access operations.
//! Implementations are in infra/storage/repositories.rs

use crate::contract::{Asset, AssetCategory, AssetStatus};
use crate::domain::tree::{DeletePlan, InsertPlan, MovePlan};
use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Asset listing criteria with the category filter already resolved to
/// the concrete subtree ids
#[derive(Debug, Clone, Default)]
pub struct AssetSearch {
    pub category_ids: Option<Vec<Uuid>>,
    pub space_id: Option<Uuid>,
    pub status: Option<AssetStatus>,
    pub search: Option<String>,
}

/// Repository for the nested-set category forest
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Insert a node at the placement the plan describes, applying the
    /// plan's gap shift first. Both steps run in one transaction.
    async fn insert(&self, category: &AssetCategory, plan: InsertPlan) -> Result<AssetCategory>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<AssetCategory>>;

    /// Whole forest in depth-first order (ascending `lft`)
    async fn list_all(&self) -> Result<Vec<AssetCategory>>;

    /// Page of the forest in depth-first order, with total count
    async fn list(&self, limit: u64, offset: u64) -> Result<(Vec<AssetCategory>, u64)>;

    /// Direct children of a node, in tree order
    async fn children_of(&self, parent_id: Uuid) -> Result<Vec<AssetCategory>>;

    /// Find an active sibling by name: same parent (or both roots)
    async fn find_by_name(&self, parent_id: Option<Uuid>, name: &str)
        -> Result<Option<AssetCategory>>;

    /// Rename / re-describe a node; tree indexes are untouched
    async fn update(&self, category: &AssetCategory) -> Result<AssetCategory>;

    /// Ids of every node inside the interval, subtree root included
    async fn subtree_ids(&self, lft: i64, rgt: i64) -> Result<Vec<Uuid>>;

    /// Highest `rgt` in the forest, 0 when empty
    async fn max_rgt(&self) -> Result<i64>;

    /// Hard-delete the plan's subtree and close the gap, in one transaction.
    /// Returns the number of deleted nodes.
    async fn delete_subtree(&self, plan: DeletePlan) -> Result<u64>;

    /// Execute a relocation plan in one transaction; `id` is the subtree
    /// root, whose `parent_id` and `updated_at` are refreshed as part of it
    async fn move_subtree(&self, id: Uuid, plan: MovePlan) -> Result<()>;
}

/// Repository for assets
#[async_trait]
pub trait AssetRepository: Send + Sync {
    async fn insert(&self, asset: &Asset) -> Result<Asset>;

    /// Find an active asset by id
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Asset>>;

    /// Find an active asset by code
    async fn find_by_code(&self, code: &str) -> Result<Option<Asset>>;

    /// List active assets matching the criteria, newest first, with total count
    async fn list(&self, search: &AssetSearch, limit: u64, offset: u64)
        -> Result<(Vec<Asset>, u64)>;

    async fn update(&self, asset: &Asset) -> Result<Asset>;

    /// Advance `last_maintained_at`, only if later than the stored value
    async fn advance_last_maintained(&self, id: Uuid, performed_at: DateTime<Utc>) -> Result<()>;

    async fn soft_delete(&self, id: Uuid) -> Result<()>;

    /// Count assets referencing any of the given categories. Soft-deleted
    /// rows count too: they still hold the foreign key.
    async fn count_by_categories(&self, category_ids: &[Uuid]) -> Result<u64>;

    async fn count_active(&self) -> Result<u64>;
}
