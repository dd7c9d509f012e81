//! SeaORM repository implementation

use crate::contract::{User, UserListFilter};
use crate::domain::repository::{Credential, UserRepository};
use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Func;
use sea_orm::{
    prelude::Expr, ActiveValue, ColumnTrait, Condition, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::sync::Arc;
use uuid::Uuid;

use super::entity;

pub struct SeaOrmUserRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmUserRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn insert(&self, user: &User, password_hash: &str) -> Result<User> {
        let mut active: entity::ActiveModel = user.into();
        active.password_hash = ActiveValue::Set(password_hash.to_string());
        let result = entity::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await?;
        result.try_into()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>> {
        let result = entity::Entity::find_by_id(id)
            .filter(entity::Column::DeletedAt.is_null())
            .one(&*self.db)
            .await?;
        match result {
            Some(model) => Ok(Some(model.try_into()?)),
            None => Ok(None),
        }
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Credential>> {
        let result = entity::Entity::find()
            .filter(entity::Column::DeletedAt.is_null())
            .filter(
                Expr::expr(Func::lower(Expr::col(entity::Column::Email)))
                    .eq(email.to_lowercase()),
            )
            .one(&*self.db)
            .await?;
        match result {
            Some(model) => {
                let password_hash = model.password_hash.clone();
                Ok(Some(Credential {
                    user: model.try_into()?,
                    password_hash,
                }))
            }
            None => Ok(None),
        }
    }

    async fn list(
        &self,
        filter: &UserListFilter,
        limit: u64,
        offset: u64,
    ) -> Result<(Vec<User>, u64)> {
        let mut query = entity::Entity::find().filter(entity::Column::DeletedAt.is_null());

        if let Some(role) = filter.role {
            query = query.filter(entity::Column::Role.eq(role.as_str()));
        }
        if let Some(active) = filter.active {
            query = query.filter(entity::Column::Active.eq(active));
        }
        if let Some(term) = &filter.search {
            let pattern = format!("%{}%", term.to_lowercase());
            query = query.filter(
                Condition::any()
                    .add(Expr::expr(Func::lower(Expr::col(entity::Column::Name))).like(&pattern))
                    .add(Expr::expr(Func::lower(Expr::col(entity::Column::Email))).like(&pattern)),
            );
        }

        let total = query.clone().count(&*self.db).await?;
        let results = query
            .order_by_desc(entity::Column::CreatedAt)
            .limit(limit)
            .offset(offset)
            .all(&*self.db)
            .await?;

        results
            .into_iter()
            .map(|e| e.try_into())
            .collect::<Result<Vec<_>>>()
            .map(|users| (users, total))
    }

    async fn update(&self, user: &User) -> Result<User> {
        // The mapper leaves password_hash NotSet, so the stored hash survives
        let active: entity::ActiveModel = user.into();
        let result = entity::Entity::update(active).exec(&*self.db).await?;
        result.try_into()
    }

    async fn set_password(&self, id: Uuid, password_hash: &str) -> Result<()> {
        entity::Entity::update_many()
            .col_expr(entity::Column::PasswordHash, Expr::value(password_hash))
            .col_expr(entity::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::Column::Id.eq(id))
            .exec(&*self.db)
            .await?;
        Ok(())
    }

    async fn soft_delete(&self, id: Uuid) -> Result<()> {
        entity::Entity::update_many()
            .col_expr(entity::Column::DeletedAt, Expr::value(Utc::now()))
            .filter(entity::Column::Id.eq(id))
            .exec(&*self.db)
            .await?;
        Ok(())
    }
}
