//! Entity to model mappers
//!
//! Conversions between SeaORM entities and contract models

use super::entity;
use crate::contract::{Asset, AssetCategory, AssetStatus};
use std::str::FromStr;

// ===== Category conversions =====

impl From<entity::Model> for AssetCategory {
    fn from(entity: entity::Model) -> Self {
        Self {
            id: entity.id,
            parent_id: entity.parent_id,
            name: entity.name,
            description: entity.description,
            lft: entity.lft,
            rgt: entity.rgt,
            depth: entity.depth,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

impl From<&AssetCategory> for entity::ActiveModel {
    fn from(model: &AssetCategory) -> Self {
        use sea_orm::ActiveValue::*;

        Self {
            id: Set(model.id),
            parent_id: Set(model.parent_id),
            name: Set(model.name.clone()),
            description: Set(model.description.clone()),
            lft: Set(model.lft),
            rgt: Set(model.rgt),
            depth: Set(model.depth),
            created_at: Set(model.created_at),
            updated_at: Set(model.updated_at),
        }
    }
}

// ===== Asset conversions =====

impl TryFrom<entity::asset::Model> for Asset {
    type Error = anyhow::Error;

    fn try_from(entity: entity::asset::Model) -> Result<Self, Self::Error> {
        let status = AssetStatus::from_str(&entity.status)
            .map_err(|e| anyhow::anyhow!("asset {}: {e}", entity.id))?;

        Ok(Self {
            id: entity.id,
            code: entity.code,
            name: entity.name,
            category_id: entity.category_id,
            space_id: entity.space_id,
            status,
            serial_number: entity.serial_number,
            manufacturer: entity.manufacturer,
            model: entity.model,
            purchased_at: entity.purchased_at,
            purchase_cost: entity.purchase_cost,
            warranty_until: entity.warranty_until,
            notes: entity.notes,
            last_maintained_at: entity.last_maintained_at,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            deleted_at: entity.deleted_at,
        })
    }
}

impl From<&Asset> for entity::asset::ActiveModel {
    fn from(model: &Asset) -> Self {
        use sea_orm::ActiveValue::*;

        Self {
            id: Set(model.id),
            code: Set(model.code.clone()),
            name: Set(model.name.clone()),
            category_id: Set(model.category_id),
            space_id: Set(model.space_id),
            status: Set(model.status.as_str().to_string()),
            serial_number: Set(model.serial_number.clone()),
            manufacturer: Set(model.manufacturer.clone()),
            model: Set(model.model.clone()),
            purchased_at: Set(model.purchased_at),
            purchase_cost: Set(model.purchase_cost),
            warranty_until: Set(model.warranty_until),
            notes: Set(model.notes.clone()),
            last_maintained_at: Set(model.last_maintained_at),
            created_at: Set(model.created_at),
            updated_at: Set(model.updated_at),
            deleted_at: Set(model.deleted_at),
        }
    }
}
