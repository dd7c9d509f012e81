//! Native client implementation - wraps domain service for in-process calls

use crate::contract::{AccountsApi, AccountsError, User};
use crate::domain::Service;
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

/// Native client that directly calls the domain service
///
/// Used by other modules to resolve user references without HTTP overhead.
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
impl AccountsApi for NativeClient {
    async fn get_user(&self, id: Uuid) -> Result<User, AccountsError> {
        self.service.get_user(id).await
    }

    async fn user_exists(&self, id: Uuid) -> Result<bool, AccountsError> {
        self.service.user_exists(id).await
    }
}
