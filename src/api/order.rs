use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;

use crate::error::ApiError;
use crate::model::{ListQuery, Order, OrderStatus, Page};
use crate::time_util;
use crate::transport::ApiClient;

/// `/order` resource: CRUD plus the document endpoints and the status
/// convenience built on top of `update`.
pub struct OrderApi {
    client: Arc<ApiClient>,
}

impl OrderApi {
    const BASE: &'static str = "/order";

    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self, query: &ListQuery) -> Result<Page<Order>, ApiError> {
        self.client.get(Self::BASE, &query.to_pairs()).await
    }

    pub async fn list_all(&self, query: &ListQuery) -> Result<Vec<Order>, ApiError> {
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

    pub async fn get(&self, id: i64) -> Result<Order, ApiError> {
        self.client.get(&format!("{}/{id}", Self::BASE), &[]).await
    }

    pub async fn create(&self, order: &Order) -> Result<Order, ApiError> {
        self.client.post(Self::BASE, order).await
    }

    pub async fn update(&self, order: &Order) -> Result<Order, ApiError> {
        self.client
            .put(&format!("{}/{}", Self::BASE, order.id), order)
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<bool, ApiError> {
        self.client.delete(&format!("{}/{id}", Self::BASE)).await
    }

    /// Move an order through the workflow. The gate runs before anything
    /// touches the network: an illegal transition costs zero requests.
    pub async fn set_status(
        &self,
        order: &Order,
        new_status: OrderStatus,
    ) -> Result<Order, ApiError> {
        if !order.status.can_transition_to(new_status) {
            return Err(ApiError::IllegalTransition {
                from: order.status,
                to: new_status,
            });
        }
        info!(
            "order {} status {} -> {}",
            order.id,
            order.status.as_str(),
            new_status.as_str()
        );
        let mut updated = order.clone();
        updated.status = new_status;
        self.update(&updated).await
    }

    /// Quote document, raw PDF bytes.
    pub async fn quote_pdf(&self, id: i64) -> Result<Vec<u8>, ApiError> {
        self.client
            .get_binary(&format!("{}/{id}/download", Self::BASE), &[])
            .await
    }

    /// Production order document, raw PDF bytes.
    pub async fn production_order_pdf(&self, id: i64) -> Result<Vec<u8>, ApiError> {
        self.client
            .get_binary(&format!("{}/{id}/ordem-servico", Self::BASE), &[])
            .await
    }

    /// Spreadsheet export of orders in a date range, raw bytes.
    pub async fn export(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<u8>, ApiError> {
        self.client
            .get_binary(
                &format!("{}/export", Self::BASE),
                &[
                    ("StartDate", time_util::format_query_date(start)),
                    ("EndDate", time_util::format_query_date(end)),
                ],
            )
            .await
    }
}
