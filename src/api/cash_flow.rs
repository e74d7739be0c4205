use std::sync::Arc;

use crate::error::ApiError;
use crate::model::{CashFlow, ListQuery, Page};
use crate::transport::ApiClient;

/// `/cashFlow` resource. Mutations on this endpoint acknowledge with a
/// bare boolean rather than echoing the entity.
pub struct CashFlowApi {
    client: Arc<ApiClient>,
}

impl CashFlowApi {
    const BASE: &'static str = "/cashFlow";

    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self, query: &ListQuery) -> Result<Page<CashFlow>, ApiError> {
        self.client.get(Self::BASE, &query.to_pairs()).await
    }

    pub async fn list_all(&self, query: &ListQuery) -> Result<Vec<CashFlow>, ApiError> {
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

    pub async fn get(&self, id: i64) -> Result<CashFlow, ApiError> {
        self.client.get(&format!("{}/{id}", Self::BASE), &[]).await
    }

    pub async fn create(&self, entry: &CashFlow) -> Result<bool, ApiError> {
        self.client.post(Self::BASE, entry).await
    }

    pub async fn update(&self, entry: &CashFlow) -> Result<bool, ApiError> {
        self.client
            .put(&format!("{}/{}", Self::BASE, entry.id), entry)
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<bool, ApiError> {
        self.client.delete(&format!("{}/{id}", Self::BASE)).await
    }
}
