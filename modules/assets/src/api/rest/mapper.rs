//! Mapper implementations for converting between DTOs and contract models
//!
//! This module contains all From/TryFrom implementations for bidirectional
//! conversion between REST DTOs and transport-agnostic contract models,
//! plus the flat-to-nested reshaping of the category forest.

use super::dto::*;
use crate::contract::{self, AssetStatus};
use sitekit::Problem;
use std::collections::HashMap;
use std::str::FromStr;
use uuid::Uuid;

// ===== Category conversions =====

impl From<contract::AssetCategory> for CategoryDto {
    fn from(category: contract::AssetCategory) -> Self {
        Self {
            id: category.id,
            parent_id: category.parent_id,
            name: category.name,
            description: category.description,
            depth: category.depth,
            created_at: category.created_at,
            updated_at: category.updated_at,
        }
    }
}

impl From<CreateCategoryRequest> for contract::NewCategory {
    fn from(req: CreateCategoryRequest) -> Self {
        Self {
            parent_id: req.parent_id,
            name: req.name,
            description: req.description,
        }
    }
}

impl From<UpdateCategoryRequest> for contract::UpdateCategory {
    fn from(req: UpdateCategoryRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
        }
    }
}

/// Reshape the depth-first flat forest into nested tree nodes.
///
/// The input must be in ascending `lft` order; children then come out in
/// tree order as well.
pub fn build_tree(nodes: Vec<contract::AssetCategory>) -> Vec<CategoryTreeNodeDto> {
    let mut by_parent: HashMap<Option<Uuid>, Vec<contract::AssetCategory>> = HashMap::new();
    for node in nodes {
        by_parent.entry(node.parent_id).or_default().push(node);
    }
    build_level(None, &mut by_parent)
}

fn build_level(
    parent: Option<Uuid>,
    by_parent: &mut HashMap<Option<Uuid>, Vec<contract::AssetCategory>>,
) -> Vec<CategoryTreeNodeDto> {
    by_parent
        .remove(&parent)
        .unwrap_or_default()
        .into_iter()
        .map(|node| {
            let children = build_level(Some(node.id), by_parent);
            CategoryTreeNodeDto {
                id: node.id,
                parent_id: node.parent_id,
                name: node.name,
                description: node.description,
                depth: node.depth,
                children,
            }
        })
        .collect()
}

// ===== Asset conversions =====

impl From<contract::Asset> for AssetDto {
    fn from(asset: contract::Asset) -> Self {
        Self {
            id: asset.id,
            code: asset.code,
            name: asset.name,
            category_id: asset.category_id,
            space_id: asset.space_id,
            status: asset.status.as_str().to_string(),
            serial_number: asset.serial_number,
            manufacturer: asset.manufacturer,
            model: asset.model,
            purchased_at: asset.purchased_at,
            purchase_cost: asset.purchase_cost,
            warranty_until: asset.warranty_until,
            notes: asset.notes,
            last_maintained_at: asset.last_maintained_at,
            created_at: asset.created_at,
            updated_at: asset.updated_at,
        }
    }
}

impl TryFrom<CreateAssetRequest> for contract::NewAsset {
    type Error = Problem;

    fn try_from(req: CreateAssetRequest) -> Result<Self, Self::Error> {
        let status = parse_status(&req.status)?;
        Ok(Self {
            code: req.code,
            name: req.name,
            category_id: req.category_id,
            space_id: req.space_id,
            status,
            serial_number: req.serial_number,
            manufacturer: req.manufacturer,
            model: req.model,
            purchased_at: req.purchased_at,
            purchase_cost: req.purchase_cost,
            warranty_until: req.warranty_until,
            notes: req.notes,
        })
    }
}

impl From<UpdateAssetRequest> for contract::UpdateAsset {
    fn from(req: UpdateAssetRequest) -> Self {
        Self {
            code: req.code,
            name: req.name,
            category_id: req.category_id,
            space_id: req.space_id,
            serial_number: req.serial_number,
            manufacturer: req.manufacturer,
            model: req.model,
            purchased_at: req.purchased_at,
            purchase_cost: req.purchase_cost,
            warranty_until: req.warranty_until,
            notes: req.notes,
        }
    }
}

// Unknown enum strings are a validation problem, not a parse panic
pub fn parse_status(raw: &str) -> Result<AssetStatus, Problem> {
    AssetStatus::from_str(raw).map_err(|message| Problem::invalid_field("status", message))
}
