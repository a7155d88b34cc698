//! Configuration for the Workflow API client
//!
//! Timeout presets for common deployments plus an environment loader for
//! test hosts and CLIs.

use std::time::Duration;
use url::Url;

/// Environment variable holding the engine base URL
pub const ENV_URL: &str = "WORKFLOW_API_URL";
/// Environment variable holding the tenant id
pub const ENV_TENANT_ID: &str = "WORKFLOW_API_TENANT_ID";
/// Environment variable holding the request timeout in seconds
pub const ENV_TIMEOUT_SECS: &str = "WORKFLOW_API_TIMEOUT_SECS";

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Request and connect timeouts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeoutConfig {
    /// Upper bound for one request, including reading the body
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TimeoutConfig {
    /// Default timeouts suitable for most calls
    pub const DEFAULT: Self = Self {
        request_timeout: Duration::from_secs(30),
        connect_timeout: Duration::from_secs(10),
    };

    /// For bulk RPCs and scheme uploads that keep the engine busy
    pub const LONG_RUNNING: Self = Self {
        request_timeout: Duration::from_secs(300),
        connect_timeout: Duration::from_secs(10),
    };

    /// For an engine on the same host
    pub const LOCAL: Self = Self {
        request_timeout: Duration::from_secs(10),
        connect_timeout: Duration::from_secs(2),
    };
}

/// Complete configuration for WorkflowApiClient
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowApiConfig {
    pub base_url: Url,
    pub timeouts: TimeoutConfig,
    pub user_agent: String,
    /// Sent in the tenant header when set
    pub tenant_id: Option<String>,
}

impl Default for WorkflowApiConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            timeouts: TimeoutConfig::DEFAULT,
            user_agent: default_user_agent(),
            tenant_id: None,
        }
    }
}

fn default_user_agent() -> String {
    format!("workflow-api-sdk-rust/{}", env!("CARGO_PKG_VERSION"))
}

impl WorkflowApiConfig {
    /// Create a configuration with validation
    pub fn new(base_url: &str, timeouts: TimeoutConfig) -> Result<Self, ConfigError> {
        let base_url = parse_base_url(base_url)?;
        if timeouts.request_timeout.is_zero() {
            return Err(ConfigError::InvalidValue(
                "request_timeout must be positive".to_string(),
            ));
        }
        if timeouts.connect_timeout.is_zero() {
            return Err(ConfigError::InvalidValue(
                "connect_timeout must be positive".to_string(),
            ));
        }

        Ok(Self {
            base_url,
            timeouts,
            ..Self::default()
        })
    }

    /// Engine on the same host at the default address
    pub fn local() -> Self {
        Self::default().with_timeouts(TimeoutConfig::LOCAL)
    }

    /// Default address with timeouts sized for bulk RPCs
    pub fn long_running() -> Self {
        Self::default().with_timeouts(TimeoutConfig::LONG_RUNNING)
    }

    /// Load from `WORKFLOW_API_URL`, `WORKFLOW_API_TENANT_ID` and
    /// `WORKFLOW_API_TIMEOUT_SECS`. Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_URL) {
            config.base_url = parse_base_url(&url)?;
        }
        if let Some(tenant) = lookup(ENV_TENANT_ID).filter(|t| !t.is_empty()) {
            config.tenant_id = Some(tenant);
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                ConfigError::InvalidValue(format!("{} must be a number, got '{}'", ENV_TIMEOUT_SECS, raw))
            })?;
            if secs == 0 {
                return Err(ConfigError::InvalidValue(format!(
                    "{} must be positive",
                    ENV_TIMEOUT_SECS
                )));
            }
            config.timeouts.request_timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    pub fn with_timeouts(mut self, timeouts: TimeoutConfig) -> Self {
        self.timeouts = timeouts;
        self
    }

    pub fn with_tenant_id(mut self, tenant_id: impl Into<String>) -> Self {
        self.tenant_id = Some(tenant_id.into());
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw.trim())
        .map_err(|e| ConfigError::InvalidValue(format!("invalid base URL '{}': {}", raw, e)))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::InvalidValue(format!(
            "base URL scheme must be http or https, got '{}'",
            other
        ))),
    }
}

/// Configuration error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}
