use anyhow::{Context, Result};

pub const ENV_API_URL: &str = "LISTINGS_API_URL";
pub const ENV_API_KEY: &str = "LISTINGS_API_KEY";
pub const ENV_TIMEOUT_SECS: &str = "LISTINGS_TIMEOUT_SECS";
pub const ENV_LIMIT: &str = "LISTINGS_LIMIT";

/// Settings for reaching the listing backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingsConfig {
    /// Base URL of the REST backend; `None` means use the sample catalogue
    pub base_url: Option<String>,
    /// Public API key sent as `apikey` and bearer token
    pub api_key: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Maximum number of listings per search
    pub limit: usize,
}

impl Default for ListingsConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            api_key: None,
            timeout_secs: 30,
            limit: 24,
        }
    }
}

impl ListingsConfig {
    /// Load configuration from environment variables
    pub fn load_from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from any key lookup, starting from the defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let non_empty = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        if let Some(url) = non_empty(ENV_API_URL) {
            config.base_url = Some(url.trim_end_matches('/').to_string());
        }

        config.api_key = non_empty(ENV_API_KEY);

        if let Some(timeout) = non_empty(ENV_TIMEOUT_SECS) {
            config.timeout_secs = timeout.parse().with_context(|| {
                format!("{ENV_TIMEOUT_SECS} must be a whole number of seconds, got {timeout:?}")
            })?;
        }

        if let Some(limit) = non_empty(ENV_LIMIT) {
            config.limit = limit
                .parse()
                .with_context(|| format!("{ENV_LIMIT} must be a positive integer, got {limit:?}"))?;
        }

        Ok(config)
    }

    /// Builder: override the result limit
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}
