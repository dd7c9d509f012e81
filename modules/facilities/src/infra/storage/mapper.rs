//! Entity to model mappers
//!
//! Conversions between SeaORM entities and contract models

use super::entity;
use crate::contract::{Building, Floor, Space, SpaceKind};
use std::str::FromStr;

// ===== Building conversions =====

impl From<entity::Model> for Building {
    fn from(entity: entity::Model) -> Self {
        Self {
            id: entity.id,
            code: entity.code,
            name: entity.name,
            address: entity.address,
            city: entity.city,
            notes: entity.notes,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            deleted_at: entity.deleted_at,
        }
    }
}

impl From<&Building> for entity::ActiveModel {
    fn from(model: &Building) -> Self {
        use sea_orm::ActiveValue::*;

        Self {
            id: Set(model.id),
            code: Set(model.code.clone()),
            name: Set(model.name.clone()),
            address: Set(model.address.clone()),
            city: Set(model.city.clone()),
            notes: Set(model.notes.clone()),
            created_at: Set(model.created_at),
            updated_at: Set(model.updated_at),
            deleted_at: Set(model.deleted_at),
        }
    }
}

// ===== Floor conversions =====

impl From<entity::floor::Model> for Floor {
    fn from(entity: entity::floor::Model) -> Self {
        Self {
            id: entity.id,
            building_id: entity.building_id,
            level: entity.level,
            name: entity.name,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            deleted_at: entity.deleted_at,
        }
    }
}

impl From<&Floor> for entity::floor::ActiveModel {
    fn from(model: &Floor) -> Self {
        use sea_orm::ActiveValue::*;

        Self {
            id: Set(model.id),
            building_id: Set(model.building_id),
            level: Set(model.level),
            name: Set(model.name.clone()),
            created_at: Set(model.created_at),
            updated_at: Set(model.updated_at),
            deleted_at: Set(model.deleted_at),
        }
    }
}

// ===== Space conversions =====

impl TryFrom<entity::space::Model> for Space {
    type Error = anyhow::Error;

    fn try_from(entity: entity::space::Model) -> Result<Self, Self::Error> {
        let kind = SpaceKind::from_str(&entity.kind)
            .map_err(|e| anyhow::anyhow!("space {}: {e}", entity.id))?;

        Ok(Self {
            id: entity.id,
            floor_id: entity.floor_id,
            code: entity.code,
            name: entity.name,
            kind,
            capacity: entity.capacity,
            area_sqm: entity.area_sqm,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            deleted_at: entity.deleted_at,
        })
    }
}

impl From<&Space> for entity::space::ActiveModel {
    fn from(model: &Space) -> Self {
        use sea_orm::ActiveValue::*;

        Self {
            id: Set(model.id),
            floor_id: Set(model.floor_id),
            code: Set(model.code.clone()),
            name: Set(model.name.clone()),
            kind: Set(model.kind.as_str().to_string()),
            capacity: Set(model.capacity),
            area_sqm: Set(model.area_sqm),
            created_at: Set(model.created_at),
            updated_at: Set(model.updated_at),
            deleted_at: Set(model.deleted_at),
        }
    }
}
