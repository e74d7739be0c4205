use chrono::NaiveDate;
use serde::Deserialize;

use crate::time_util;

/// One page of a cursor-paginated listing. `cursor` is an opaque server
/// token echoed back verbatim to fetch the next page; there is no random
/// access by page number.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    #[serde(default)]
    pub cursor: Option<String>,
    #[serde(default)]
    pub page_size: Option<i32>,
    #[serde(default)]
    pub data: Vec<T>,
}

impl<T> Page<T> {
    /// The cursor to feed into the next call, if the server issued one.
    pub fn next_cursor(&self) -> Option<&str> {
        match self.cursor.as_deref() {
            Some("") | None => None,
            Some(c) => Some(c),
        }
    }
}

/// Filter for list endpoints. Field names on the wire follow the backend's
/// capitalized query-parameter convention.
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    pub page_size: Option<i32>,
    pub cursor: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: Option<i32>,
    pub customer_id: Option<i64>,
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page_size(mut self, size: i32) -> Self {
        self.page_size = Some(size);
        self
    }

    pub fn cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }

    pub fn between(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    pub fn status_code(mut self, status: i32) -> Self {
        self.status = Some(status);
        self
    }

    pub fn customer(mut self, customer_id: i64) -> Self {
        self.customer_id = Some(customer_id);
        self
    }

    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(size) = self.page_size {
            pairs.push(("PageSize", size.to_string()));
        }
        if let Some(cursor) = &self.cursor {
            pairs.push(("Cursor", cursor.clone()));
        }
        if let Some(start) = self.start_date {
            pairs.push(("StartDate", time_util::format_query_date(start)));
        }
        if let Some(end) = self.end_date {
            pairs.push(("EndDate", time_util::format_query_date(end)));
        }
        if let Some(status) = self.status {
            pairs.push(("Status", status.to_string()));
        }
        if let Some(customer_id) = self.customer_id {
            pairs.push(("CustomerId", customer_id.to_string()));
        }
        pairs
    }
}
