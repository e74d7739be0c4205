use std::sync::Arc;

use crate::error::ApiError;
use crate::model::{ListQuery, Page, RegisterRequest, User};
use crate::transport::ApiClient;

/// `/user` resource, plus account registration.
pub struct UserApi {
    client: Arc<ApiClient>,
}

impl UserApi {
    const BASE: &'static str = "/user";

    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self, query: &ListQuery) -> Result<Page<User>, ApiError> {
        self.client.get(Self::BASE, &query.to_pairs()).await
    }

    pub async fn get(&self, id: i64) -> Result<User, ApiError> {
        self.client.get(&format!("{}/{id}", Self::BASE), &[]).await
    }

    pub async fn create(&self, user: &User) -> Result<User, ApiError> {
        self.client.post(Self::BASE, user).await
    }

    pub async fn update(&self, user: &User) -> Result<User, ApiError> {
        self.client
            .put(&format!("{}/{}", Self::BASE, user.id), user)
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<bool, ApiError> {
        self.client.delete(&format!("{}/{id}", Self::BASE)).await
    }

    /// Register a new account. The backend returns no meaningful body.
    pub async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        self.client.post_no_content("/auth/register", request).await
    }
}
