use std::sync::Arc;

use crate::error::ApiError;
use crate::model::{ListQuery, Page, ServiceOrder};
use crate::transport::ApiClient;

/// `/OrderService` resource (production tickets). The capitalized path
/// segment is the backend's, kept as-is.
pub struct ServiceOrderApi {
    client: Arc<ApiClient>,
}

impl ServiceOrderApi {
    const BASE: &'static str = "/OrderService";

    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self, query: &ListQuery) -> Result<Page<ServiceOrder>, ApiError> {
        self.client.get(Self::BASE, &query.to_pairs()).await
    }

    pub async fn get(&self, id: i64) -> Result<ServiceOrder, ApiError> {
        self.client.get(&format!("{}/{id}", Self::BASE), &[]).await
    }

    pub async fn create(&self, ticket: &ServiceOrder) -> Result<ServiceOrder, ApiError> {
        self.client.post(Self::BASE, ticket).await
    }

    pub async fn update(&self, ticket: &ServiceOrder) -> Result<ServiceOrder, ApiError> {
        self.client
            .put(&format!("{}/{}", Self::BASE, ticket.id), ticket)
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<bool, ApiError> {
        self.client.delete(&format!("{}/{id}", Self::BASE)).await
    }

    /// Printed ticket report, raw PDF bytes.
    pub async fn report_pdf(&self, id: i64) -> Result<Vec<u8>, ApiError> {
        self.client
            .get_binary(
                &format!("{}/download", Self::BASE),
                &[("Id", id.to_string())],
            )
            .await
    }
}
