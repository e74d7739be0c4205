use std::sync::Arc;

use crate::error::ApiError;
use crate::model::{Account, ListQuery, Page};
use crate::transport::ApiClient;

/// `/account` resource.
pub struct AccountApi {
    client: Arc<ApiClient>,
}

impl AccountApi {
    const BASE: &'static str = "/account";

    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self, query: &ListQuery) -> Result<Page<Account>, ApiError> {
        self.client.get(Self::BASE, &query.to_pairs()).await
    }

    pub async fn get(&self, id: i64) -> Result<Account, ApiError> {
        self.client.get(&format!("{}/{id}", Self::BASE), &[]).await
    }

    pub async fn create(&self, account: &Account) -> Result<Account, ApiError> {
        self.client.post(Self::BASE, account).await
    }

    pub async fn update(&self, account: &Account) -> Result<Account, ApiError> {
        self.client
            .put(&format!("{}/{}", Self::BASE, account.id), account)
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<bool, ApiError> {
        self.client.delete(&format!("{}/{id}", Self::BASE)).await
    }
}
