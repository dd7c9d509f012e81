//! Domain service - business logic orchestration

use super::events::{AccountEvent, EventPublisher};
use super::password;
use super::repository::UserRepository;
use super::validation;
use crate::contract::{AccountsError, NewUser, UpdateUser, User, UserListFilter};
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

/// Domain service for users and login
pub struct Service {
    users: Arc<dyn UserRepository>,
    events: Arc<dyn EventPublisher>,
}

impl Service {
    /// Create a new service instance
    pub fn new(users: Arc<dyn UserRepository>, events: Arc<dyn EventPublisher>) -> Self {
        Self { users, events }
    }

    // ===== User management =====

    pub async fn create_user(&self, input: NewUser) -> Result<User, AccountsError> {
        validation::validate_name(&input.name)?;
        validation::validate_email(&input.email)?;
        validation::validate_password(&input.password)?;
        let email = input.email.trim().to_string();
        self.ensure_email_free(&email, None).await?;

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            name: input.name,
            email,
            role: input.role,
            active: input.active,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };

        let created = self
            .users
            .insert(&user, &password::hash_password(&input.password))
            .await
            .map_err(|e| self.internal("insert user", e))?;

        self.publish(AccountEvent::UserCreated {
            id: created.id,
            email: created.email.clone(),
            timestamp: Utc::now(),
        })
        .await;

        Ok(created)
    }

    pub async fn get_user(&self, id: Uuid) -> Result<User, AccountsError> {
        self.users
            .find_by_id(id)
            .await
            .map_err(|e| self.internal("find user", e))?
            .ok_or_else(|| AccountsError::not_found("user", id))
    }

    pub async fn list_users(
        &self,
        filter: UserListFilter,
        limit: u64,
        offset: u64,
    ) -> Result<(Vec<User>, u64), AccountsError> {
        self.users
            .list(&filter, limit, offset)
            .await
            .map_err(|e| self.internal("list users", e))
    }

    pub async fn update_user(&self, id: Uuid, input: UpdateUser) -> Result<User, AccountsError> {
        let mut user = self.get_user(id).await?;

        validation::validate_name(&input.name)?;
        validation::validate_email(&input.email)?;
        let email = input.email.trim().to_string();
        self.ensure_email_free(&email, Some(id)).await?;

        user.name = input.name;
        user.email = email;
        user.role = input.role;
        user.active = input.active;
        user.updated_at = Utc::now();

        let updated = self
            .users
            .update(&user)
            .await
            .map_err(|e| self.internal("update user", e))?;

        self.publish(AccountEvent::UserUpdated {
            id: updated.id,
            email: updated.email.clone(),
            timestamp: Utc::now(),
        })
        .await;

        Ok(updated)
    }

    pub async fn set_password(&self, id: Uuid, new_password: &str) -> Result<(), AccountsError> {
        validation::validate_password(new_password)?;
        self.get_user(id).await?;

        self.users
            .set_password(id, &password::hash_password(new_password))
            .await
            .map_err(|e| self.internal("set password", e))?;

        self.publish(AccountEvent::PasswordChanged {
            id,
            timestamp: Utc::now(),
        })
        .await;

        Ok(())
    }

    pub async fn delete_user(&self, id: Uuid) -> Result<(), AccountsError> {
        self.get_user(id).await?;

        self.users
            .soft_delete(id)
            .await
            .map_err(|e| self.internal("delete user", e))?;

        self.publish(AccountEvent::UserDeleted {
            id,
            timestamp: Utc::now(),
        })
        .await;

        Ok(())
    }

    // ===== Login =====

    /// Check a credential pair and return the signed-in user.
    ///
    /// Every refusal is the same [`AccountsError::InvalidCredentials`]:
    /// unknown email, wrong password and deactivated account are deliberately
    /// indistinguishable to the caller.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<User, AccountsError> {
        let Some(credential) = self
            .users
            .find_by_email(email.trim())
            .await
            .map_err(|e| self.internal("find user by email", e))?
        else {
            return Err(AccountsError::InvalidCredentials);
        };

        if !password::verify_password(password, &credential.password_hash) {
            return Err(AccountsError::InvalidCredentials);
        }
        if !credential.user.active {
            return Err(AccountsError::InvalidCredentials);
        }

        self.publish(AccountEvent::SignedIn {
            id: credential.user.id,
            timestamp: Utc::now(),
        })
        .await;

        Ok(credential.user)
    }

    pub async fn user_exists(&self, id: Uuid) -> Result<bool, AccountsError> {
        Ok(self
            .users
            .find_by_id(id)
            .await
            .map_err(|e| self.internal("find user", e))?
            .is_some())
    }

    // ===== Helpers =====

    async fn ensure_email_free(
        &self,
        email: &str,
        exclude: Option<Uuid>,
    ) -> Result<(), AccountsError> {
        if let Some(existing) = self
            .users
            .find_by_email(email)
            .await
            .map_err(|e| self.internal("find user by email", e))?
        {
            if Some(existing.user.id) != exclude {
                return Err(AccountsError::validation("email", "has already been taken"));
            }
        }
        Ok(())
    }

    fn internal(&self, context: &'static str, error: anyhow::Error) -> AccountsError {
        tracing::error!(context, error = %error, "accounts storage failure");
        AccountsError::internal(format!("{context} failed"))
    }

    async fn publish(&self, event: AccountEvent) {
        // Event failures must not fail the write that produced them
        if let Err(error) = self.events.publish(event).await {
            tracing::warn!(error = %error, "failed to publish account event");
        }
    }
}
