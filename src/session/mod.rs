pub mod claims;

use std::sync::Arc;

use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use tokio::sync::{broadcast, Mutex, RwLock};
use tracing::{debug, info, warn};

use crate::app_config::ApiConfig;
use crate::error::ApiError;
use crate::model::auth::{AuthResponse, LoginRequest, RefreshRequest, UserInfo};
use crate::store::{keys, TokenStore};
use crate::time_util;

/// Where the UI sends the user after a hard logout.
pub const LOGIN_ROUTE: &str = "/login";

/// Proactive-refresh TTL. A fixed client-side constant, deliberately
/// independent of the token's own exp claim; verify against the live
/// backend before changing.
pub const SESSION_TTL_MINUTES: i64 = 15;

const EVENT_CHANNEL_CAPACITY: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Anonymous,
    Authenticated,
    Refreshing,
}

/// Fan-out notification fired on every state transition. Late subscribers
/// do not see past transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    LoggedIn,
    TokenRefreshed,
    LoggedOut { redirect: &'static str },
}

/// Owns the session lifecycle: `Anonymous -> Authenticated <-> Refreshing`.
/// The token store is its persistence delegate; auth endpoints are called
/// with a bare HTTP client, never through the authenticated wrapper.
pub struct SessionManager {
    base_url: String,
    http: Client,
    store: Arc<dyn TokenStore>,
    state: RwLock<SessionState>,
    refresh_gate: Mutex<()>,
    events: broadcast::Sender<SessionEvent>,
}

impl SessionManager {
    pub fn new(config: &ApiConfig, store: Arc<dyn TokenStore>) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(ApiError::transport)?;
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Ok(Self {
            base_url: config.base_url.clone(),
            http,
            store,
            state: RwLock::new(SessionState::Anonymous),
            refresh_gate: Mutex::new(()),
            events,
        })
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    pub async fn state(&self) -> SessionState {
        *self.state.read().await
    }

    /// Re-adopt a persisted session, if one is present. Called once at
    /// application start.
    pub async fn restore(&self) -> bool {
        if self.store.get(keys::AUTH_TOKEN).await.is_some() {
            *self.state.write().await = SessionState::Authenticated;
            debug!("restored persisted session");
            true
        } else {
            false
        }
    }

    /// Exchange credentials for a session. Broadcasts exactly one
    /// session-changed event on success.
    pub async fn login(&self, user_name: &str, password: &str) -> Result<AuthResponse, ApiError> {
        let request = LoginRequest {
            user_name: user_name.to_string(),
            password: password.to_string(),
        };
        let auth = self.post_auth("/auth/login", &serde_json::to_string(&request).map_err(ApiError::decode)?).await?;
        if auth.jwt_token.is_empty() || auth.refresh_token.is_empty() {
            return Err(ApiError::Remote {
                status: 200,
                error: "login response is missing credentials".to_string(),
                detail: String::new(),
            });
        }
        self.adopt(&auth).await;
        *self.state.write().await = SessionState::Authenticated;
        info!("session established for {}", user_name);
        let _ = self.events.send(SessionEvent::LoggedIn);
        Ok(auth)
    }

    /// Refresh the session iff the stored expiry stamp has passed. Called
    /// by the transport before every request; cheap when nothing to do.
    pub async fn ensure_fresh(&self) -> Result<(), ApiError> {
        if self.access_token().await.is_none() {
            return Ok(());
        }
        if !self.expiry_passed().await {
            return Ok(());
        }
        self.refresh().await
    }

    /// Exchange the current token pair for a fresh one. Single-flight:
    /// concurrent callers near expiry collapse into one backend call.
    /// Any failure is a hard logout; callers must not retry.
    pub async fn refresh(&self) -> Result<(), ApiError> {
        let _flight = self.refresh_gate.lock().await;
        if !self.expiry_passed().await {
            // someone else refreshed while we waited for the gate
            return Ok(());
        }

        let jwt = self.store.get(keys::AUTH_TOKEN).await.unwrap_or_default();
        let refresh = self.store.get(keys::REFRESH_TOKEN).await.unwrap_or_default();
        if refresh.is_empty() {
            self.expire("no refresh token available").await;
            return Err(ApiError::Unauthorized);
        }

        *self.state.write().await = SessionState::Refreshing;
        let request = RefreshRequest {
            jwt_token: jwt,
            refresh_token: refresh,
        };
        let body = match serde_json::to_string(&request) {
            Ok(body) => body,
            Err(e) => {
                self.expire("refresh request could not be encoded").await;
                return Err(ApiError::decode(e));
            }
        };
        match self.post_auth("/auth/refresh-token", &body).await {
            Ok(auth) if !auth.jwt_token.is_empty() && !auth.refresh_token.is_empty() => {
                self.adopt(&auth).await;
                *self.state.write().await = SessionState::Authenticated;
                debug!("session tokens refreshed");
                let _ = self.events.send(SessionEvent::TokenRefreshed);
                Ok(())
            }
            Ok(_) => {
                self.expire("refresh response is missing credentials").await;
                Err(ApiError::Unauthorized)
            }
            Err(e) => {
                self.expire(&format!("token refresh failed: {e}")).await;
                Err(ApiError::Unauthorized)
            }
        }
    }

    /// Explicit user logout.
    pub async fn logout(&self) {
        info!("logout requested");
        self.clear().await;
    }

    /// Hard logout after the backend rejected the session (401).
    pub async fn expire_unauthorized(&self) {
        self.expire("backend rejected the session").await;
    }

    async fn expire(&self, reason: &str) {
        warn!("session expired: {}", reason);
        self.clear().await;
    }

    async fn clear(&self) {
        for key in keys::ALL {
            self.store.remove(key).await;
        }
        *self.state.write().await = SessionState::Anonymous;
        let _ = self.events.send(SessionEvent::LoggedOut {
            redirect: LOGIN_ROUTE,
        });
    }

    pub async fn access_token(&self) -> Option<String> {
        self.store
            .get(keys::AUTH_TOKEN)
            .await
            .filter(|t| !t.is_empty())
    }

    /// True when an access token is present. The token is treated as
    /// opaque here; decoded claims are display-only (`claims_for_display`)
    /// and never gate this check.
    pub async fn is_authenticated(&self) -> bool {
        self.access_token().await.is_some()
    }

    /// Display-only claims from the current access token, when it happens
    /// to be a decodable JWT.
    pub async fn claims_for_display(&self) -> Option<serde_json::Value> {
        let token = self.access_token().await?;
        claims::claims_for_display(&token).ok()
    }

    /// Roles persisted at login, for UI display only.
    pub async fn roles(&self) -> Vec<String> {
        match self.store.get(keys::ROLES).await {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_default(),
            None => Vec::new(),
        }
    }

    /// Identity snapshot persisted at login.
    pub async fn current_user(&self) -> Option<UserInfo> {
        let raw = self.store.get(keys::USER).await?;
        serde_json::from_str(&raw).ok()
    }

    async fn expiry_passed(&self) -> bool {
        match self.store.get(keys::EXPIRY_STAMP).await {
            Some(stamp) => time_util::is_past(&stamp),
            None => false,
        }
    }

    async fn adopt(&self, auth: &AuthResponse) {
        self.store.set(keys::AUTH_TOKEN, &auth.jwt_token).await;
        self.store.set(keys::REFRESH_TOKEN, &auth.refresh_token).await;
        let roles = serde_json::to_string(&auth.roles).unwrap_or_else(|_| "[]".to_string());
        self.store.set(keys::ROLES, &roles).await;
        self.store
            .set(keys::EXPIRY_STAMP, &time_util::session_expiry(SESSION_TTL_MINUTES))
            .await;
        match &auth.user {
            Some(user) => {
                if let Ok(raw) = serde_json::to_string(user) {
                    self.store.set(keys::USER, &raw).await;
                }
            }
            None => self.store.remove(keys::USER).await,
        }
    }

    async fn post_auth(&self, path: &str, body: &str) -> Result<AuthResponse, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(body.to_string())
            .send()
            .await
            .map_err(ApiError::transport)?;
        let status = response.status();
        let text = response.text().await.map_err(ApiError::transport)?;
        if !status.is_success() {
            return Err(ApiError::from_response(status.as_u16(), &text));
        }
        serde_json::from_str(&text).map_err(ApiError::decode)
    }
}
