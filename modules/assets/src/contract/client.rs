//! Native API trait for in-process consumers of the assets module

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::error::AssetsError;
use super::model::{Asset, AssetCategory, AssetListFilter};

/// Read and cascade surface other modules depend on.
///
/// Maintenance and work-order modules validate asset references and push
/// maintenance completions through this trait; the portal reads through it.
#[async_trait]
pub trait AssetsApi: Send + Sync {
    /// Fetch an active asset by id
    async fn get_asset(&self, id: Uuid) -> Result<Asset, AssetsError>;

    /// Fetch a category by id
    async fn get_category(&self, id: Uuid) -> Result<AssetCategory, AssetsError>;

    /// List active assets matching the filter, newest first, with total count
    async fn list_assets(
        &self,
        filter: AssetListFilter,
        limit: u64,
        offset: u64,
    ) -> Result<(Vec<Asset>, u64), AssetsError>;

    /// Whether an active asset with this id exists
    async fn asset_exists(&self, id: Uuid) -> Result<bool, AssetsError>;

    /// Advance the asset's last-maintenance timestamp.
    ///
    /// Forward-only: an earlier timestamp than the stored one is a no-op.
    async fn record_maintenance(
        &self,
        asset_id: Uuid,
        performed_at: DateTime<Utc>,
    ) -> Result<(), AssetsError>;

    /// Number of active (non-deleted) assets
    async fn count_active(&self) -> Result<u64, AssetsError>;
}
