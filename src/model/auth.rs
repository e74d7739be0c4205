use serde::{Deserialize, Serialize};

/// Credentials posted to `/auth/login`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub user_name: String,
    pub password: String,
}

/// Current token pair posted to `/auth/refresh-token`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    pub jwt_token: String,
    pub refresh_token: String,
}

/// Payload for `/auth/register`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub user_name: String,
    pub login: String,
    pub password: String,
    pub role: String,
}

/// Shape shared by the login and refresh responses.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub jwt_token: String,
    pub refresh_token: String,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub user: Option<UserInfo>,
}

/// Identity snapshot persisted with the session, for display only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: i64,
    pub name: String,
    pub login: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<i32>,
}
