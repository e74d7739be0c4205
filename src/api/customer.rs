use std::sync::Arc;

use crate::error::ApiError;
use crate::model::{Customer, ListQuery, Page};
use crate::transport::ApiClient;

/// `/customer` resource.
pub struct CustomerApi {
    client: Arc<ApiClient>,
}

impl CustomerApi {
    const BASE: &'static str = "/customer";

    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self, query: &ListQuery) -> Result<Page<Customer>, ApiError> {
        self.client.get(Self::BASE, &query.to_pairs()).await
    }

    /// Follow the cursor chain to exhaustion. Every navigation re-fetches;
    /// nothing is cached between calls.
    pub async fn list_all(&self, query: &ListQuery) -> Result<Vec<Customer>, ApiError> {
        let mut all = Vec::new();
        let mut query = query.clone();
        loop {
            let page = self.list(&query).await?;
            let next = page.next_cursor().map(str::to_string);
            all.extend(page.data);
            match next {
                // a server echoing the same cursor back would loop forever
                Some(next) if query.cursor.as_deref() != Some(next.as_str()) => {
                    query.cursor = Some(next);
                }
                _ => break,
            }
        }
        Ok(all)
    }

    pub async fn get(&self, id: i64) -> Result<Customer, ApiError> {
        self.client.get(&format!("{}/{id}", Self::BASE), &[]).await
    }

    pub async fn create(&self, customer: &Customer) -> Result<Customer, ApiError> {
        self.client.post(Self::BASE, customer).await
    }

    pub async fn update(&self, customer: &Customer) -> Result<Customer, ApiError> {
        self.client
            .put(&format!("{}/{}", Self::BASE, customer.id), customer)
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<bool, ApiError> {
        self.client.delete(&format!("{}/{id}", Self::BASE)).await
    }
}
