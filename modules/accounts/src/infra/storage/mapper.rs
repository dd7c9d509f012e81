//! Entity to model mappers
//!
//! Conversions between SeaORM entities and contract models. The password
//! hash stays behind in the entity; [`User`] never carries it.

use super::entity;
use crate::contract::User;
use sitekit::Role;
use std::str::FromStr;

impl TryFrom<entity::Model> for User {
    type Error = anyhow::Error;

    fn try_from(entity: entity::Model) -> Result<Self, Self::Error> {
        let role =
            Role::from_str(&entity.role).map_err(|e| anyhow::anyhow!("user {}: {e}", entity.id))?;

        Ok(Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            role,
            active: entity.active,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            deleted_at: entity.deleted_at,
        })
    }
}

impl From<&User> for entity::ActiveModel {
    fn from(model: &User) -> Self {
        use sea_orm::ActiveValue::*;

        Self {
            id: Set(model.id),
            name: Set(model.name.clone()),
            email: Set(model.email.clone()),
            // Written by the repository on insert and set_password only
            password_hash: NotSet,
            role: Set(model.role.as_str().to_string()),
            active: Set(model.active),
            created_at: Set(model.created_at),
            updated_at: Set(model.updated_at),
            deleted_at: Set(model.deleted_at),
        }
    }
}
