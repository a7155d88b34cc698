//! WorkflowApiClient builder for fluent configuration

use crate::client::hook::{CompositeRequestHook, RequestHook};
use crate::client::workflow_api_client::{ClientInner, Credentials, WorkflowApiClient};
use crate::config::{TimeoutConfig, WorkflowApiConfig};
use crate::error::{Result, WorkflowApiError};
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Duration;
use workflow_api_core::OAuth2Credentials;

/// Builder for creating WorkflowApiClient instances
///
/// Example:
/// ```ignore
/// let client = WorkflowApiClient::builder()
///     .base_url("https://engine.example.com")
///     .tenant_id("acme")
///     .bearer_token(jwt)
///     .register_hook(LoggingHook::debug())
///     .build()?;
/// ```
pub struct WorkflowApiClientBuilder {
    base_url: Option<String>,
    config: WorkflowApiConfig,
    bearer_token: Option<String>,
    oauth2: Option<OAuth2Credentials>,
    custom_http_client: Option<reqwest::Client>,
    hooks: Vec<Box<dyn RequestHook>>,
}

impl Default for WorkflowApiClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkflowApiClientBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            base_url: None,
            config: WorkflowApiConfig::default(),
            bearer_token: None,
            oauth2: None,
            custom_http_client: None,
            hooks: Vec::new(),
        }
    }

    /// Set the engine base URL
    ///
    /// Validated in `build()`. Default: `http://localhost:5000`
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the tenant sent in the tenant header
    pub fn tenant_id(mut self, tenant_id: impl Into<String>) -> Self {
        self.config.tenant_id = Some(tenant_id.into());
        self
    }

    /// Authenticate with a fixed bearer token (JWT)
    ///
    /// Replaces any OAuth2 credentials set earlier.
    pub fn bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self.oauth2 = None;
        self
    }

    /// Authenticate with tokens fetched through the client-credentials grant
    ///
    /// Tokens are cached and fetched again shortly before they expire.
    /// Replaces any bearer token set earlier.
    pub fn oauth2(mut self, credentials: OAuth2Credentials) -> Self {
        self.oauth2 = Some(credentials);
        self.bearer_token = None;
        self
    }

    /// Set the complete client configuration
    ///
    /// A base URL set with `base_url()` still takes precedence.
    pub fn config(mut self, config: WorkflowApiConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the per-request timeout
    ///
    /// Default: 30 seconds
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.config.timeouts.request_timeout = timeout;
        self
    }

    /// Set both timeouts from a preset
    pub fn timeouts(mut self, timeouts: TimeoutConfig) -> Self {
        self.config.timeouts = timeouts;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Use a preconfigured reqwest client
    ///
    /// When set, timeouts and user agent from the configuration are ignored.
    pub fn custom_http_client(mut self, client: reqwest::Client) -> Self {
        self.custom_http_client = Some(client);
        self
    }

    /// Register a request hook for observability
    pub fn register_hook(mut self, hook: impl RequestHook + 'static) -> Self {
        self.hooks.push(Box::new(hook));
        self
    }

    /// Build the WorkflowApiClient
    pub fn build(self) -> Result<WorkflowApiClient> {
        let mut config = self.config;
        if let Some(url) = self.base_url {
            config = WorkflowApiConfig {
                tenant_id: config.tenant_id.clone(),
                user_agent: config.user_agent.clone(),
                ..WorkflowApiConfig::new(&url, config.timeouts)?
            };
        }
        if config.timeouts.request_timeout.is_zero() {
            return Err(WorkflowApiError::InvalidConfiguration(
                "request_timeout must be positive".to_string(),
            ));
        }
        if config.timeouts.connect_timeout.is_zero() {
            return Err(WorkflowApiError::InvalidConfiguration(
                "connect_timeout must be positive".to_string(),
            ));
        }

        let http = match self.custom_http_client {
            Some(client) => client,
            None => reqwest::Client::builder()
                .timeout(config.timeouts.request_timeout)
                .connect_timeout(config.timeouts.connect_timeout)
                .user_agent(config.user_agent.clone())
                .build()?,
        };

        let credentials = match (self.bearer_token, self.oauth2) {
            (Some(token), _) => Credentials::Bearer(token),
            (None, Some(credentials)) => Credentials::OAuth2 {
                credentials,
                cached: RwLock::new(None),
                refresh: tokio::sync::Mutex::new(()),
            },
            (None, None) => Credentials::Anonymous,
        };

        let hook: Option<Arc<dyn RequestHook>> = if self.hooks.is_empty() {
            None
        } else if self.hooks.len() == 1 {
            let mut hooks = self.hooks;
            Some(Arc::from(hooks.remove(0)))
        } else {
            Some(Arc::new(CompositeRequestHook::new(self.hooks)))
        };

        Ok(WorkflowApiClient {
            inner: Arc::new(ClientInner {
                http,
                base_url: config.base_url,
                tenant_id: config.tenant_id,
                credentials,
                hook,
            }),
        })
    }
}
