//! Client configuration
//!
//! A `ClientConfig` is immutable once a client is built and is shared by
//! reference with every executor, paginator and stream task the client spawns.
//! It can be assembled with a builder, read from the environment, or loaded
//! from a YAML settings file.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::time::Duration;

/// Production API root
pub const DEFAULT_BASE_URL: &str = "https://api.covalenthq.com/v1";

/// Retry budget for rate-limited requests
pub const DEFAULT_MAX_RETRIES: u32 = 5;

/// Base delay of the exponential backoff
pub const DEFAULT_BASE_DELAY_MS: u64 = 1000;

/// Per-request timeout
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Environment variable holding the API key
pub const ENV_API_KEY: &str = "BLOCKDATA_API_KEY";
/// Environment variable overriding the API root
pub const ENV_BASE_URL: &str = "BLOCKDATA_BASE_URL";
/// Environment variable toggling per-request debug logs
pub const ENV_DEBUG: &str = "BLOCKDATA_DEBUG";
/// Environment variable overriding the retry budget
pub const ENV_MAX_RETRIES: &str = "BLOCKDATA_MAX_RETRIES";

/// Configuration owned by one client instance
#[derive(Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// API key sent as a bearer token; may be left out of a settings file
    /// and supplied separately
    #[serde(default)]
    pub api_key: String,

    /// Root URL that endpoint paths are appended to
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Emit one debug log line per HTTP attempt
    #[serde(default)]
    pub debug: bool,

    /// Maximum attempts made by the retry policy
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Base delay in milliseconds; attempt `n` waits `2^n * base_delay_ms`
    #[serde(default = "default_base_delay_ms")]
    pub base_delay_ms: u64,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Value of the client-identifying `X-Requested-With` header
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_max_retries() -> u32 {
    DEFAULT_MAX_RETRIES
}

fn default_base_delay_ms() -> u64 {
    DEFAULT_BASE_DELAY_MS
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_user_agent() -> String {
    format!("blockdata-sdk-rs/{}", env!("CARGO_PKG_VERSION"))
}

impl ClientConfig {
    /// Create a config with defaults for everything but the key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: default_base_url(),
            debug: false,
            max_retries: DEFAULT_MAX_RETRIES,
            base_delay_ms: DEFAULT_BASE_DELAY_MS,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: default_user_agent(),
        }
    }

    /// Create a new config builder
    pub fn builder(api_key: impl Into<String>) -> ClientConfigBuilder {
        ClientConfigBuilder {
            config: Self::new(api_key),
        }
    }

    /// Read configuration from `BLOCKDATA_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(ENV_API_KEY)
            .filter(|k| !k.is_empty())
            .ok_or_else(|| Error::config(format!("{ENV_API_KEY} is not set")))?;

        let mut config = Self::new(api_key);

        if let Some(base_url) = lookup(ENV_BASE_URL).filter(|v| !v.is_empty()) {
            config.base_url = base_url;
        }

        if let Some(debug) = lookup(ENV_DEBUG) {
            config.debug = matches!(debug.to_ascii_lowercase().as_str(), "1" | "true" | "yes");
        }

        if let Some(retries) = lookup(ENV_MAX_RETRIES) {
            config.max_retries = retries.parse().map_err(|_| {
                Error::config(format!("{ENV_MAX_RETRIES} must be an integer, got '{retries}'"))
            })?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a YAML document
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml_str(&content)
    }

    /// Check values that would make every request fail
    pub fn validate(&self) -> Result<()> {
        if self.max_retries == 0 {
            return Err(Error::config("max_retries must be at least 1"));
        }
        url::Url::parse(&self.base_url)
            .map_err(|e| Error::config(format!("invalid base_url '{}': {e}", self.base_url)))?;
        Ok(())
    }

    /// Base delay as a `Duration`
    pub fn base_delay(&self) -> Duration {
        Duration::from_millis(self.base_delay_ms)
    }

    /// Request timeout as a `Duration`
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Join an endpoint path onto the base URL
    pub fn endpoint(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("debug", &self.debug)
            .field("max_retries", &self.max_retries)
            .field("base_delay_ms", &self.base_delay_ms)
            .field("timeout_secs", &self.timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

/// Builder for client config
#[derive(Debug)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set the base URL
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Enable or disable per-request debug logs
    #[must_use]
    pub fn debug(mut self, debug: bool) -> Self {
        self.config.debug = debug;
        self
    }

    /// Set max retries
    #[must_use]
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.config.max_retries = retries;
        self
    }

    /// Set the backoff base delay
    #[must_use]
    pub fn base_delay(mut self, delay: Duration) -> Self {
        self.config.base_delay_ms = delay.as_millis() as u64;
        self
    }

    /// Set the request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout_secs = timeout.as_secs().max(1);
        self
    }

    /// Set user agent
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> ClientConfig {
        self.config
    }
}
