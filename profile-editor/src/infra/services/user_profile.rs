use std::sync::Arc;

use async_trait::async_trait;
use profile_model::{
    MessageResponse, UpdateUserRequest, UserEnvelope, UserRecord,
    routes::{api, utils},
};

use crate::infra::{api_client::ApiClient, errors::ApiError};

/// The two calls the profile screen makes against the user API.
#[async_trait]
pub trait UserProfileService: Send + Sync + std::fmt::Debug {
    /// Fetch a user record by username
    async fn fetch_user(&self, username: &str) -> Result<UserRecord, ApiError>;

    /// Push profile changes for a username
    async fn update_user(
        &self,
        username: &str,
        request: &UpdateUserRequest,
    ) -> Result<MessageResponse, ApiError>;
}

#[derive(Clone, Debug)]
pub struct UserProfileApiAdapter {
    client: Arc<ApiClient>,
}

impl UserProfileApiAdapter {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl UserProfileService for UserProfileApiAdapter {
    async fn fetch_user(&self, username: &str) -> Result<UserRecord, ApiError> {
        let path = utils::user_path(api::user::ITEM, username);
        let envelope: UserEnvelope = self.client.get(&path).await?;
        Ok(envelope.user)
    }

    async fn update_user(
        &self,
        username: &str,
        request: &UpdateUserRequest,
    ) -> Result<MessageResponse, ApiError> {
        let path = utils::user_path(api::user::UPDATE, username);
        self.client.put(&path, request).await
    }
}
