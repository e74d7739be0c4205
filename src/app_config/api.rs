use std::time::Duration;

use anyhow::Context;
use dotenv::dotenv;

use crate::app_config::env::env_or_default;

/// Per-request timeout. The stricter of the two values observed in
/// production clients; override with API_TIMEOUT_SECS.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Connection settings for the backend REST API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout = Duration::from_secs(secs);
        self
    }

    /// Load from the environment (`.env` honoured): API_BASE_URL is
    /// required, API_TIMEOUT_SECS optional.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv().ok();
        let base_url = std::env::var("API_BASE_URL")
            .context("API_BASE_URL is not configured")?;
        let timeout: u64 = env_or_default("API_TIMEOUT_SECS", &DEFAULT_TIMEOUT_SECS.to_string())
            .parse()
            .context("API_TIMEOUT_SECS must be an integer number of seconds")?;
        Ok(Self::new(base_url).with_timeout(timeout))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_normalized() {
        let cfg = ApiConfig::new("http://localhost:5000/api/v1/");
        assert_eq!(cfg.base_url, "http://localhost:5000/api/v1");
        assert_eq!(cfg.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }
}
