//! Native client implementation - wraps domain service for in-process calls

use crate::contract::{Asset, AssetCategory, AssetListFilter, AssetsApi, AssetsError};
use crate::domain::Service;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use uuid::Uuid;

/// Native client that directly calls the domain service
///
/// Used by the maintenance and work-order modules for reference checks and
/// last-maintenance cascades without HTTP overhead.
#[derive(Clone)]
pub struct NativeClient {
    service: Arc<Service>,
}

impl NativeClient {
    /// Create a new native client
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl AssetsApi for NativeClient {
    async fn get_asset(&self, id: Uuid) -> Result<Asset, AssetsError> {
        self.service.get_asset(id).await
    }

    async fn get_category(&self, id: Uuid) -> Result<AssetCategory, AssetsError> {
        self.service.get_category(id).await
    }

    async fn list_assets(
        &self,
        filter: AssetListFilter,
        limit: u64,
        offset: u64,
    ) -> Result<(Vec<Asset>, u64), AssetsError> {
        self.service.list_assets(filter, limit, offset).await
    }

    async fn asset_exists(&self, id: Uuid) -> Result<bool, AssetsError> {
        self.service.asset_exists(id).await
    }

    async fn record_maintenance(
        &self,
        asset_id: Uuid,
        performed_at: DateTime<Utc>,
    ) -> Result<(), AssetsError> {
        self.service.record_maintenance(asset_id, performed_at).await
    }

    async fn count_active(&self) -> Result<u64, AssetsError> {
        self.service.count_active().await
    }
}
