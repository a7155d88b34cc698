//! OAuth2 client credentials flow for obtaining Workflow API bearer tokens.
//!
//! Deployments that front the engine with an identity provider hand out JWTs
//! through the client-credentials grant. The SDK fetches a token here, caches
//! it as a [`CachedToken`] and fetches again once it is about to expire.
//!
//! # Example
//!
//! ```ignore
//! use workflow_api_core::client::oauth2::{fetch_access_token, OAuth2Credentials};
//!
//! let credentials = OAuth2Credentials::new(
//!     "workflow-client",
//!     "client-secret",
//!     "https://idp.example.com/connect/token",
//! )
//! .with_scopes(vec!["workflow-api".to_string()]);
//!
//! let token = fetch_access_token(&reqwest::Client::new(), &credentials).await?;
//! ```

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Seconds before the reported expiry at which a token counts as expired.
const EXPIRY_BUFFER: Duration = Duration::from_secs(30);

/// OAuth2 client credentials configuration
#[derive(Clone, PartialEq, Eq)]
pub struct OAuth2Credentials {
    pub client_id: String,
    pub client_secret: String,
    /// Token endpoint URL
    pub token_endpoint: String,
    /// Space-joined into the `scope` form field when present
    pub scopes: Option<Vec<String>>,
}

impl OAuth2Credentials {
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        token_endpoint: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            token_endpoint: token_endpoint.into(),
            scopes: None,
        }
    }

    pub fn with_scopes(mut self, scopes: Vec<String>) -> Self {
        self.scopes = Some(scopes);
        self
    }
}

impl std::fmt::Debug for OAuth2Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OAuth2Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .field("token_endpoint", &self.token_endpoint)
            .field("scopes", &self.scopes)
            .finish()
    }
}

#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    /// The access token (JWT)
    pub access_token: String,
    pub token_type: String,
    /// Lifetime in seconds
    pub expires_in: Option<u64>,
    #[serde(default)]
    pub scope: Option<String>,
}

/// Error body of a refused token request (RFC 6749 section 5.2)
#[derive(Debug, Deserialize)]
pub struct TokenError {
    pub error: String,
    pub error_description: Option<String>,
}

impl std::fmt::Display for TokenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.error_description {
            Some(desc) => write!(f, "{}: {}", self.error, desc),
            None => write!(f, "{}", self.error),
        }
    }
}

impl std::error::Error for TokenError {}

#[derive(Serialize)]
struct TokenRequest<'a> {
    grant_type: &'static str,
    client_id: &'a str,
    client_secret: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    scope: Option<String>,
}

/// An access token together with the moment it was obtained.
#[derive(Debug, Clone)]
pub struct CachedToken {
    pub access_token: String,
    pub obtained_at: Instant,
    pub expires_in: Option<u64>,
}

impl CachedToken {
    pub fn from_response(response: TokenResponse) -> Self {
        Self {
            access_token: response.access_token,
            obtained_at: Instant::now(),
            expires_in: response.expires_in,
        }
    }

    /// Expired, or within 30 seconds of expiring. Tokens without expiry never expire.
    pub fn is_expired(&self) -> bool {
        match self.expires_in {
            Some(expires_in) => {
                self.obtained_at.elapsed() + EXPIRY_BUFFER > Duration::from_secs(expires_in)
            }
            None => false,
        }
    }
}

/// Fetch an access token with the client-credentials grant.
pub async fn fetch_access_token(
    http: &reqwest::Client,
    credentials: &OAuth2Credentials,
) -> CoreResult<TokenResponse> {
    let request_body = TokenRequest {
        grant_type: "client_credentials",
        client_id: &credentials.client_id,
        client_secret: &credentials.client_secret,
        scope: credentials.scopes.as_ref().map(|s| s.join(" ")),
    };

    debug!(
        token_endpoint = %credentials.token_endpoint,
        client_id = %credentials.client_id,
        "Fetching OAuth2 token"
    );

    let response = http
        .post(&credentials.token_endpoint)
        .form(&request_body)
        .send()
        .await?;

    let status = response.status();
    let body = response.text().await?;

    if status.is_success() {
        let token: TokenResponse = serde_json::from_str(&body)?;
        debug!(expires_in = ?token.expires_in, "Obtained OAuth2 token");
        return Ok(token);
    }

    match serde_json::from_str::<TokenError>(&body) {
        Ok(error) => {
            warn!("OAuth2 token request failed: {}", error);
            Err(CoreError::Auth(format!("token request failed: {}", error)))
        }
        Err(_) => {
            warn!("OAuth2 token request failed with status {}: {}", status, body);
            Err(CoreError::Auth(format!(
                "token request failed with status {}: {}",
                status, body
            )))
        }
    }
}
