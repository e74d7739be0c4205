use std::sync::Arc;

use dashmap::DashMap;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, error};
use uuid::Uuid;

use crate::app_config::ApiConfig;
use crate::error::ApiError;
use crate::session::SessionManager;

/// Authenticated HTTP wrapper shared by every service facade.
///
/// One request, one dispatch: the only retry-shaped behavior is the
/// cooperative token refresh performed by the session before the request
/// is built. A 401 is terminal: the session is cleared and the caller
/// gets `Unauthorized`.
pub struct ApiClient {
    base_url: String,
    http: Client,
    session: Arc<SessionManager>,
    in_flight: DashMap<String, ()>,
}

/// Removes the in-flight marker when a mutation finishes, on every path.
struct InFlightGuard<'a> {
    map: &'a DashMap<String, ()>,
    key: String,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.map.remove(&self.key);
    }
}

impl ApiClient {
    pub fn new(config: &ApiConfig, session: Arc<SessionManager>) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(ApiError::transport)?;
        Ok(Self {
            base_url: config.base_url.clone(),
            http,
            session,
            in_flight: DashMap::new(),
        })
    }

    pub fn session(&self) -> &Arc<SessionManager> {
        &self.session
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let response = self.dispatch(Method::GET, path, query, None).await?;
        Self::decode_json(response).await
    }

    /// Binary endpoints (PDF, spreadsheet export): the payload is returned
    /// unchanged, no JSON decoding is attempted.
    pub async fn get_binary(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Vec<u8>, ApiError> {
        let response = self.dispatch(Method::GET, path, query, None).await?;
        let bytes = response.bytes().await.map_err(ApiError::transport)?;
        Ok(bytes.to_vec())
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let _guard = self.begin_mutation(&Method::POST, path)?;
        let body = serde_json::to_string(body).map_err(ApiError::decode)?;
        let response = self.dispatch(Method::POST, path, &[], Some(body)).await?;
        Self::decode_json(response).await
    }

    /// POST whose response body is irrelevant (may be empty).
    pub async fn post_no_content<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let _guard = self.begin_mutation(&Method::POST, path)?;
        let body = serde_json::to_string(body).map_err(ApiError::decode)?;
        self.dispatch(Method::POST, path, &[], Some(body)).await?;
        Ok(())
    }

    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let _guard = self.begin_mutation(&Method::PUT, path)?;
        let body = serde_json::to_string(body).map_err(ApiError::decode)?;
        let response = self.dispatch(Method::PUT, path, &[], Some(body)).await?;
        Self::decode_json(response).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let _guard = self.begin_mutation(&Method::DELETE, path)?;
        let response = self.dispatch(Method::DELETE, path, &[], None).await?;
        Self::decode_json(response).await
    }

    /// Reject a mutation while an identical one is still in flight, so a
    /// double-submitted action cannot create or update twice.
    fn begin_mutation(&self, method: &Method, path: &str) -> Result<InFlightGuard<'_>, ApiError> {
        let key = format!("{} {}", method, path);
        if self.in_flight.insert(key.clone(), ()).is_some() {
            error!("rejected duplicate in-flight mutation: {}", key);
            return Err(ApiError::DuplicateRequest(key));
        }
        Ok(InFlightGuard {
            map: &self.in_flight,
            key,
        })
    }

    async fn dispatch(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<String>,
    ) -> Result<reqwest::Response, ApiError> {
        // cooperative refresh: at most one refresh call, before dispatch
        self.session.ensure_fresh().await?;
        let token = self.session.access_token().await;

        let mut url = Url::parse(&format!("{}{}", self.base_url, path))
            .map_err(|e| ApiError::Transport(format!("invalid request url: {e}")))?;
        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())));
        }

        let request_id = Uuid::new_v4();
        debug!("[{}] {} {}", request_id, method, url);

        let mut builder = self.http.request(method, url);
        if let Some(token) = token {
            builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
        }
        if let Some(body) = body {
            builder = builder.header(CONTENT_TYPE, "application/json").body(body);
        }

        let response = builder.send().await.map_err(|e| {
            error!("[{}] request failed before a response arrived: {}", request_id, e);
            ApiError::transport(e)
        })?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            // terminal: clear the session, notify observers, do not retry
            self.session.expire_unauthorized().await;
            return Err(ApiError::Unauthorized);
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let err = ApiError::from_response(status.as_u16(), &text);
            error!("[{}] backend error: {}", request_id, err);
            return Err(err);
        }
        Ok(response)
    }

    async fn decode_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let text = response.text().await.map_err(ApiError::transport)?;
        serde_json::from_str(&text)
            .map_err(|e| ApiError::Decode(format!("{e}; body: {text}")))
    }
}
