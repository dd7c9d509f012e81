//! Domain service - business logic orchestration

use super::events::{AssetEvent, EventPublisher};
use super::repository::{AssetRepository, AssetSearch, CategoryRepository};
use super::tree::{DeletePlan, InsertPlan, MovePlan};
use super::validation;
use crate::contract::{
    Asset, AssetCategory, AssetListFilter, AssetStatus, AssetsError, NewAsset, NewCategory,
    UpdateAsset, UpdateCategory,
};
use chrono::{DateTime, Utc};
use facilities::{FacilitiesApi, FacilitiesError};
use std::sync::Arc;
use uuid::Uuid;

/// Domain service for asset categories and assets
pub struct Service {
    categories: Arc<dyn CategoryRepository>,
    assets: Arc<dyn AssetRepository>,
    facilities: Arc<dyn FacilitiesApi>,
    events: Arc<dyn EventPublisher>,
}

impl Service {
    /// Create a new service instance
    pub fn new(
        categories: Arc<dyn CategoryRepository>,
        assets: Arc<dyn AssetRepository>,
        facilities: Arc<dyn FacilitiesApi>,
        events: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            categories,
            assets,
            facilities,
            events,
        }
    }

    // ===== Category operations =====

    pub async fn create_category(
        &self,
        input: NewCategory,
    ) -> Result<AssetCategory, AssetsError> {
        validation::validate_name("name", &input.name)?;

        let plan = match input.parent_id {
            Some(parent_id) => {
                let parent = self
                    .categories
                    .find_by_id(parent_id)
                    .await
                    .map_err(|e| self.internal("find category", e))?
                    .ok_or_else(|| {
                        AssetsError::validation("parent_id", "references an unknown category")
                    })?;
                InsertPlan::as_child_of(&parent)
            }
            None => {
                let max_rgt = self
                    .categories
                    .max_rgt()
                    .await
                    .map_err(|e| self.internal("read forest bounds", e))?;
                InsertPlan::as_root(max_rgt)
            }
        };
        self.ensure_sibling_name_free(input.parent_id, &input.name, None)
            .await?;

        let now = Utc::now();
        let category = AssetCategory {
            id: Uuid::new_v4(),
            parent_id: input.parent_id,
            name: input.name,
            description: input.description,
            lft: plan.lft,
            rgt: plan.rgt,
            depth: plan.depth,
            created_at: now,
            updated_at: now,
        };

        let created = self
            .categories
            .insert(&category, plan)
            .await
            .map_err(|e| self.internal("insert category", e))?;

        self.publish(AssetEvent::CategoryCreated {
            id: created.id,
            name: created.name.clone(),
            timestamp: Utc::now(),
        })
        .await;

        Ok(created)
    }

    pub async fn get_category(&self, id: Uuid) -> Result<AssetCategory, AssetsError> {
        self.categories
            .find_by_id(id)
            .await
            .map_err(|e| self.internal("find category", e))?
            .ok_or_else(|| AssetsError::not_found("category", id))
    }

    pub async fn list_categories(
        &self,
        limit: u64,
        offset: u64,
    ) -> Result<(Vec<AssetCategory>, u64), AssetsError> {
        self.categories
            .list(limit, offset)
            .await
            .map_err(|e| self.internal("list categories", e))
    }

    /// Whole forest in depth-first order; callers nest it for display.
    pub async fn category_tree(&self) -> Result<Vec<AssetCategory>, AssetsError> {
        self.categories
            .list_all()
            .await
            .map_err(|e| self.internal("load category tree", e))
    }

    pub async fn category_children(
        &self,
        id: Uuid,
    ) -> Result<Vec<AssetCategory>, AssetsError> {
        // 404 on the parent, not an empty list
        self.get_category(id).await?;
        self.categories
            .children_of(id)
            .await
            .map_err(|e| self.internal("list category children", e))
    }

    pub async fn update_category(
        &self,
        id: Uuid,
        input: UpdateCategory,
    ) -> Result<AssetCategory, AssetsError> {
        let mut category = self.get_category(id).await?;

        validation::validate_name("name", &input.name)?;
        self.ensure_sibling_name_free(category.parent_id, &input.name, Some(id))
            .await?;

        category.name = input.name;
        category.description = input.description;
        category.updated_at = Utc::now();

        let updated = self
            .categories
            .update(&category)
            .await
            .map_err(|e| self.internal("update category", e))?;

        self.publish(AssetEvent::CategoryUpdated {
            id: updated.id,
            name: updated.name.clone(),
            timestamp: Utc::now(),
        })
        .await;

        Ok(updated)
    }

    /// Re-parent a category subtree, or detach it to a new root when
    /// `new_parent_id` is `None`.
    pub async fn move_category(
        &self,
        id: Uuid,
        new_parent_id: Option<Uuid>,
    ) -> Result<AssetCategory, AssetsError> {
        let category = self.get_category(id).await?;

        let plan = match new_parent_id {
            Some(parent_id) => {
                let parent = self
                    .categories
                    .find_by_id(parent_id)
                    .await
                    .map_err(|e| self.internal("find category", e))?
                    .ok_or_else(|| {
                        AssetsError::validation("parent_id", "references an unknown category")
                    })?;
                // A node may not become its own descendant
                if category.contains(&parent) {
                    return Err(AssetsError::conflict(format!(
                        "cannot move category '{}' under its own subtree",
                        category.name
                    )));
                }
                MovePlan::under_parent(&category, &parent)
            }
            None => {
                let max_rgt = self
                    .categories
                    .max_rgt()
                    .await
                    .map_err(|e| self.internal("read forest bounds", e))?;
                MovePlan::to_root(&category, max_rgt)
            }
        };

        self.categories
            .move_subtree(id, plan)
            .await
            .map_err(|e| self.internal("move category", e))?;

        self.publish(AssetEvent::CategoryMoved {
            id,
            new_parent_id,
            timestamp: Utc::now(),
        })
        .await;

        self.get_category(id).await
    }

    /// Hard-delete a category and its whole subtree.
    pub async fn delete_category(&self, id: Uuid) -> Result<(), AssetsError> {
        let category = self.get_category(id).await?;

        let subtree = self
            .categories
            .subtree_ids(category.lft, category.rgt)
            .await
            .map_err(|e| self.internal("resolve subtree", e))?;
        let referencing = self
            .assets
            .count_by_categories(&subtree)
            .await
            .map_err(|e| self.internal("count category assets", e))?;
        if referencing > 0 {
            return Err(AssetsError::conflict(format!(
                "category '{}' is still referenced by {} asset(s)",
                category.name, referencing
            )));
        }

        let removed = self
            .categories
            .delete_subtree(DeletePlan::for_subtree(&category))
            .await
            .map_err(|e| self.internal("delete category", e))?;

        self.publish(AssetEvent::CategoryDeleted {
            id,
            removed_nodes: removed,
            timestamp: Utc::now(),
        })
        .await;

        Ok(())
    }

    // ===== Asset operations =====

    pub async fn create_asset(&self, input: NewAsset) -> Result<Asset, AssetsError> {
        validation::validate_code("code", &input.code)?;
        validation::validate_name("name", &input.name)?;
        validation::validate_purchase_cost(input.purchase_cost)?;
        validation::validate_warranty_window(input.purchased_at, input.warranty_until)?;
        self.ensure_category_known(input.category_id).await?;
        self.ensure_space_known(input.space_id).await?;
        self.ensure_asset_code_free(&input.code, None).await?;

        let now = Utc::now();
        let asset = Asset {
            id: Uuid::new_v4(),
            code: input.code,
            name: input.name,
            category_id: input.category_id,
            space_id: input.space_id,
            status: input.status,
            serial_number: input.serial_number,
            manufacturer: input.manufacturer,
            model: input.model,
            purchased_at: input.purchased_at,
            purchase_cost: input.purchase_cost,
            warranty_until: input.warranty_until,
            notes: input.notes,
            last_maintained_at: None,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };

        let created = self
            .assets
            .insert(&asset)
            .await
            .map_err(|e| self.internal("insert asset", e))?;

        self.publish(AssetEvent::AssetCreated {
            id: created.id,
            code: created.code.clone(),
            timestamp: Utc::now(),
        })
        .await;

        Ok(created)
    }

    pub async fn get_asset(&self, id: Uuid) -> Result<Asset, AssetsError> {
        self.assets
            .find_by_id(id)
            .await
            .map_err(|e| self.internal("find asset", e))?
            .ok_or_else(|| AssetsError::not_found("asset", id))
    }

    pub async fn list_assets(
        &self,
        filter: AssetListFilter,
        limit: u64,
        offset: u64,
    ) -> Result<(Vec<Asset>, u64), AssetsError> {
        let category_ids = match filter.category_id {
            Some(category_id) => {
                let category = self
                    .categories
                    .find_by_id(category_id)
                    .await
                    .map_err(|e| self.internal("find category", e))?
                    .ok_or_else(|| {
                        AssetsError::validation("category_id", "references an unknown category")
                    })?;
                let ids = self
                    .categories
                    .subtree_ids(category.lft, category.rgt)
                    .await
                    .map_err(|e| self.internal("resolve subtree", e))?;
                Some(ids)
            }
            None => None,
        };

        let search = AssetSearch {
            category_ids,
            space_id: filter.space_id,
            status: filter.status,
            search: filter.search,
        };
        self.assets
            .list(&search, limit, offset)
            .await
            .map_err(|e| self.internal("list assets", e))
    }

    pub async fn update_asset(
        &self,
        id: Uuid,
        input: UpdateAsset,
    ) -> Result<Asset, AssetsError> {
        let mut asset = self.get_asset(id).await?;

        validation::validate_code("code", &input.code)?;
        validation::validate_name("name", &input.name)?;
        validation::validate_purchase_cost(input.purchase_cost)?;
        validation::validate_warranty_window(input.purchased_at, input.warranty_until)?;
        self.ensure_category_known(input.category_id).await?;
        self.ensure_space_known(input.space_id).await?;
        self.ensure_asset_code_free(&input.code, Some(id)).await?;

        asset.code = input.code;
        asset.name = input.name;
        asset.category_id = input.category_id;
        asset.space_id = input.space_id;
        asset.serial_number = input.serial_number;
        asset.manufacturer = input.manufacturer;
        asset.model = input.model;
        asset.purchased_at = input.purchased_at;
        asset.purchase_cost = input.purchase_cost;
        asset.warranty_until = input.warranty_until;
        asset.notes = input.notes;
        asset.updated_at = Utc::now();

        let updated = self
            .assets
            .update(&asset)
            .await
            .map_err(|e| self.internal("update asset", e))?;

        self.publish(AssetEvent::AssetUpdated {
            id: updated.id,
            code: updated.code.clone(),
            timestamp: Utc::now(),
        })
        .await;

        Ok(updated)
    }

    /// Set the lifecycle status. A repeat of the current status is a no-op.
    pub async fn change_status(
        &self,
        id: Uuid,
        status: AssetStatus,
    ) -> Result<Asset, AssetsError> {
        let mut asset = self.get_asset(id).await?;
        if asset.status == status {
            return Ok(asset);
        }

        let from = asset.status;
        asset.status = status;
        asset.updated_at = Utc::now();

        let updated = self
            .assets
            .update(&asset)
            .await
            .map_err(|e| self.internal("update asset status", e))?;

        self.publish(AssetEvent::AssetStatusChanged {
            id,
            from,
            to: status,
            timestamp: Utc::now(),
        })
        .await;

        Ok(updated)
    }

    pub async fn delete_asset(&self, id: Uuid) -> Result<(), AssetsError> {
        self.get_asset(id).await?;

        self.assets
            .soft_delete(id)
            .await
            .map_err(|e| self.internal("delete asset", e))?;

        self.publish(AssetEvent::AssetDeleted {
            id,
            timestamp: Utc::now(),
        })
        .await;

        Ok(())
    }

    /// Advance the denormalized last-maintenance timestamp; earlier
    /// timestamps than the stored one leave it untouched.
    pub async fn record_maintenance(
        &self,
        asset_id: Uuid,
        performed_at: DateTime<Utc>,
    ) -> Result<(), AssetsError> {
        self.get_asset(asset_id).await?;

        self.assets
            .advance_last_maintained(asset_id, performed_at)
            .await
            .map_err(|e| self.internal("record maintenance", e))?;

        self.publish(AssetEvent::AssetMaintained {
            id: asset_id,
            performed_at,
            timestamp: Utc::now(),
        })
        .await;

        Ok(())
    }

    pub async fn asset_exists(&self, id: Uuid) -> Result<bool, AssetsError> {
        Ok(self
            .assets
            .find_by_id(id)
            .await
            .map_err(|e| self.internal("find asset", e))?
            .is_some())
    }

    pub async fn count_active(&self) -> Result<u64, AssetsError> {
        self.assets
            .count_active()
            .await
            .map_err(|e| self.internal("count assets", e))
    }

    // ===== Helpers =====

    async fn ensure_category_known(&self, category_id: Uuid) -> Result<(), AssetsError> {
        if self
            .categories
            .find_by_id(category_id)
            .await
            .map_err(|e| self.internal("find category", e))?
            .is_none()
        {
            return Err(AssetsError::validation(
                "category_id",
                "references an unknown category",
            ));
        }
        Ok(())
    }

    async fn ensure_space_known(&self, space_id: Option<Uuid>) -> Result<(), AssetsError> {
        if let Some(space_id) = space_id {
            let exists = self
                .facilities
                .space_exists(space_id)
                .await
                .map_err(|e| self.upstream("space lookup", e))?;
            if !exists {
                return Err(AssetsError::validation(
                    "space_id",
                    "references an unknown space",
                ));
            }
        }
        Ok(())
    }

    async fn ensure_asset_code_free(
        &self,
        code: &str,
        exclude: Option<Uuid>,
    ) -> Result<(), AssetsError> {
        if let Some(existing) = self
            .assets
            .find_by_code(code)
            .await
            .map_err(|e| self.internal("find asset by code", e))?
        {
            if Some(existing.id) != exclude {
                return Err(AssetsError::validation("code", "has already been taken"));
            }
        }
        Ok(())
    }

    async fn ensure_sibling_name_free(
        &self,
        parent_id: Option<Uuid>,
        name: &str,
        exclude: Option<Uuid>,
    ) -> Result<(), AssetsError> {
        if let Some(existing) = self
            .categories
            .find_by_name(parent_id, name)
            .await
            .map_err(|e| self.internal("find category by name", e))?
        {
            if Some(existing.id) != exclude {
                return Err(AssetsError::validation(
                    "name",
                    "has already been taken among its siblings",
                ));
            }
        }
        Ok(())
    }

    fn internal(&self, context: &'static str, error: anyhow::Error) -> AssetsError {
        tracing::error!(context, error = %error, "assets storage failure");
        AssetsError::internal(format!("{context} failed"))
    }

    fn upstream(&self, context: &'static str, error: FacilitiesError) -> AssetsError {
        tracing::error!(context, error = %error, "facilities lookup failure");
        AssetsError::internal(format!("{context} failed"))
    }

    async fn publish(&self, event: AssetEvent) {
        // Event failures must not fail the write that produced them
        if let Err(error) = self.events.publish(event).await {
            tracing::warn!(error = %error, "failed to publish asset event");
        }
    }
}
