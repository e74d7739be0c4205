use std::collections::HashMap;
use std::path::PathBuf;

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::{debug, error};

/// Session storage key names. These are a de facto persisted-state
/// contract shared with the existing clients, so they are preserved
/// verbatim, including the historical `timestemp` misspelling.
pub mod keys {
    pub const AUTH_TOKEN: &str = "authToken";
    pub const REFRESH_TOKEN: &str = "refreshToken";
    pub const ROLES: &str = "roles";
    pub const EXPIRY_STAMP: &str = "timestemp";
    pub const USER: &str = "user";

    pub const ALL: [&str; 5] = [AUTH_TOKEN, REFRESH_TOKEN, ROLES, EXPIRY_STAMP, USER];
}

/// Durable key/value storage for session artifacts. Writes are
/// fire-and-forget, matching the profile-storage bridge this models:
/// implementations log failures instead of surfacing them.
#[async_trait]
pub trait TokenStore: Send + Sync {
    async fn get(&self, key: &str) -> Option<String>;
    async fn set(&self, key: &str, value: &str);
    async fn remove(&self, key: &str);
}

/// Process-local store, used by tests and short-lived tools.
#[derive(Default)]
pub struct MemoryTokenStore {
    map: DashMap<String, String>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TokenStore for MemoryTokenStore {
    async fn get(&self, key: &str) -> Option<String> {
        self.map.get(key).map(|v| v.clone())
    }

    async fn set(&self, key: &str, value: &str) {
        self.map.insert(key.to_string(), value.to_string());
    }

    async fn remove(&self, key: &str) {
        self.map.remove(key);
    }
}

/// JSON-file-backed store giving the CLI durable sessions across
/// invocations. The whole map is rewritten on every change; session
/// artifacts are a handful of small strings.
pub struct FileTokenStore {
    path: PathBuf,
    cache: DashMap<String, String>,
}

impl FileTokenStore {
    pub async fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let cache = DashMap::new();
        match tokio::fs::read_to_string(&path).await {
            Ok(raw) => match serde_json::from_str::<HashMap<String, String>>(&raw) {
                Ok(map) => {
                    for (k, v) in map {
                        cache.insert(k, v);
                    }
                }
                Err(e) => error!("session store {} is corrupt, starting empty: {}", path.display(), e),
            },
            Err(_) => debug!("no session store at {}, starting empty", path.display()),
        }
        Self { path, cache }
    }

    async fn persist(&self) {
        let map: HashMap<String, String> = self
            .cache
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect();
        match serde_json::to_string_pretty(&map) {
            Ok(raw) => {
                if let Err(e) = tokio::fs::write(&self.path, raw).await {
                    error!("failed to persist session store {}: {}", self.path.display(), e);
                }
            }
            Err(e) => error!("failed to encode session store: {}", e),
        }
    }
}

#[async_trait]
impl TokenStore for FileTokenStore {
    async fn get(&self, key: &str) -> Option<String> {
        self.cache.get(key).map(|v| v.clone())
    }

    async fn set(&self, key: &str, value: &str) {
        self.cache.insert(key.to_string(), value.to_string());
        self.persist().await;
    }

    async fn remove(&self, key: &str) {
        self.cache.remove(key);
        self.persist().await;
    }
}
