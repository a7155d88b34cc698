//! Authentication headers for Workflow API requests
//!
//! Every call carries an `Authorization: Bearer <jwt>` header and, in
//! multi-tenant deployments, the tenant header naming the tenant to act on.

use reqwest::header::AUTHORIZATION;
use reqwest::RequestBuilder;
use tracing::trace;

/// Header carrying the tenant identifier.
pub const TENANT_ID_HEADER: &str = "Workflow-Api-Tenant-ID";

/// Header material attached to every outgoing request.
///
/// # Example
///
/// ```ignore
/// let auth = AuthHeaders::bearer("eyJhbGciOi...").with_tenant("acme");
/// let request = auth.apply(http.get(url));
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct AuthHeaders {
    token: Option<String>,
    tenant_id: Option<String>,
}

impl AuthHeaders {
    /// Headers without credentials (for engines running with auth disabled).
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn bearer(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            tenant_id: None,
        }
    }

    pub fn with_tenant(mut self, tenant_id: impl Into<String>) -> Self {
        self.tenant_id = Some(tenant_id.into());
        self
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn tenant_id(&self) -> Option<&str> {
        self.tenant_id.as_deref()
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// Value of the `Authorization` header, if a token is set.
    pub fn authorization_value(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    /// Attach the headers to a request.
    pub fn apply(&self, mut request: RequestBuilder) -> RequestBuilder {
        if let Some(value) = self.authorization_value() {
            request = request.header(AUTHORIZATION, value);
            trace!("Attached bearer token to request");
        }
        if let Some(tenant) = &self.tenant_id {
            request = request.header(TENANT_ID_HEADER, tenant);
        }
        request
    }
}

impl std::fmt::Debug for AuthHeaders {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthHeaders")
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("tenant_id", &self.tenant_id)
            .finish()
    }
}
