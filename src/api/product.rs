use std::sync::Arc;

use crate::error::ApiError;
use crate::model::{ListQuery, Page, Product};
use crate::transport::ApiClient;

/// `/product` resource.
pub struct ProductApi {
    client: Arc<ApiClient>,
}

impl ProductApi {
    const BASE: &'static str = "/product";

    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self, query: &ListQuery) -> Result<Page<Product>, ApiError> {
        self.client.get(Self::BASE, &query.to_pairs()).await
    }

    pub async fn get(&self, id: i64) -> Result<Product, ApiError> {
        self.client.get(&format!("{}/{id}", Self::BASE), &[]).await
    }

    pub async fn create(&self, product: &Product) -> Result<Product, ApiError> {
        self.client.post(Self::BASE, product).await
    }

    pub async fn update(&self, product: &Product) -> Result<Product, ApiError> {
        self.client
            .put(&format!("{}/{}", Self::BASE, product.id), product)
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<bool, ApiError> {
        self.client.delete(&format!("{}/{id}", Self::BASE)).await
    }
}
