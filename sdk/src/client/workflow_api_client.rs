//! WorkflowApiClient - Main entry point for the Workflow API SDK
//!
//! The client owns the HTTP connection pool, the credentials and the hooks.
//! All endpoint groups ([`DataApi`], [`RpcApi`], [`DesignerApi`]) borrow it
//! and funnel their calls through one executor.

use crate::client::builder::WorkflowApiClientBuilder;
use crate::client::data::DataApi;
use crate::client::designer::DesignerApi;
use crate::client::hook::RequestHook;
use crate::client::rpc::RpcApi;
use crate::error::{Result, WorkflowApiError};
use parking_lot::RwLock;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;
use url::Url;
use workflow_api_core::client::{fetch_access_token, AuthHeaders, CachedToken, OAuth2Credentials};
use workflow_api_core::ApiError;

/// How the client authenticates.
pub(crate) enum Credentials {
    /// Engine runs with authentication disabled
    Anonymous,
    Bearer(String),
    /// Concurrent requests that find the token missing or expired queue on
    /// `refresh`, so only one of them asks the token endpoint.
    OAuth2 {
        credentials: OAuth2Credentials,
        cached: RwLock<Option<CachedToken>>,
        refresh: tokio::sync::Mutex<()>,
    },
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Credentials::Anonymous => f.write_str("Anonymous"),
            Credentials::Bearer(_) => f.write_str("Bearer([REDACTED])"),
            Credentials::OAuth2 { credentials, .. } => {
                f.debug_tuple("OAuth2").field(credentials).finish()
            }
        }
    }
}

/// Body of an outgoing request.
pub(crate) enum RequestBody {
    Empty,
    Json(Value),
    Form(Vec<(String, String)>),
    Multipart(reqwest::multipart::Form),
}

impl RequestBody {
    pub(crate) fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        Ok(RequestBody::Json(serde_json::to_value(value)?))
    }
}

pub(crate) struct ClientInner {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: Url,
    pub(crate) tenant_id: Option<String>,
    pub(crate) credentials: Credentials,
    pub(crate) hook: Option<Arc<dyn RequestHook>>,
}

/// Main client for the engine's `/workflow-api` endpoints
///
/// Cloning is cheap; clones share the connection pool and the token cache.
///
/// ```ignore
/// let client = WorkflowApiClient::builder()
///     .base_url("http://localhost:5000")
///     .bearer_token(jwt)
///     .tenant_id("acme")
///     .build()?;
///
/// let timers = client.data().timers().get_collection(&FieldQuery::new()).await?;
/// ```
#[derive(Clone)]
pub struct WorkflowApiClient {
    pub(crate) inner: Arc<ClientInner>,
}

impl std::fmt::Debug for WorkflowApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkflowApiClient")
            .field("base_url", &self.inner.base_url.as_str())
            .field("tenant_id", &self.inner.tenant_id)
            .field("credentials", &self.inner.credentials)
            .field("has_hook", &self.inner.hook.is_some())
            .finish()
    }
}

impl WorkflowApiClient {
    /// Create a new builder
    pub fn builder() -> WorkflowApiClientBuilder {
        WorkflowApiClientBuilder::new()
    }

    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    pub fn tenant_id(&self) -> Option<&str> {
        self.inner.tenant_id.as_deref()
    }

    /// REST endpoints under `/workflow-api/data`
    pub fn data(&self) -> DataApi<'_> {
        DataApi::new(self)
    }

    /// RPC endpoints under `/workflow-api/rpc`
    pub fn rpc(&self) -> RpcApi<'_> {
        RpcApi::new(self)
    }

    /// Scheme upload/download through `/workflow-api/designer`
    pub fn designer(&self) -> DesignerApi<'_> {
        DesignerApi::new(self)
    }

    /// Send a request and decode the JSON answer. An empty body decodes as `null`.
    ///
    /// A body that does not decode is reported to the hook like any other failure.
    pub(crate) async fn execute<R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        body: RequestBody,
    ) -> Result<R> {
        let text = self.execute_text(method.clone(), path, query, body).await?;
        let decoded = decode_body(&text);
        if let (Err(error), Some(hook)) = (&decoded, &self.inner.hook) {
            hook.on_error(&method, path, error).await;
        }
        decoded
    }

    /// Send a request and return the raw body of a successful answer.
    pub(crate) async fn execute_text(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        body: RequestBody,
    ) -> Result<String> {
        if let Some(hook) = &self.inner.hook {
            hook.on_request(&method, path).await;
        }

        let result = self.dispatch(&method, path, query, body).await;

        if let (Err(error), Some(hook)) = (&result, &self.inner.hook) {
            hook.on_error(&method, path, error).await;
        }
        result
    }

    async fn dispatch(
        &self,
        method: &Method,
        path: &str,
        query: &[(String, String)],
        body: RequestBody,
    ) -> Result<String> {
        let auth = self.auth_headers().await?;

        let mut request = self.inner.http.request(method.clone(), self.url_for(path));
        if !query.is_empty() {
            request = request.query(query);
        }
        request = auth.apply(request);
        request = match body {
            RequestBody::Empty => request,
            RequestBody::Json(value) => request.json(&value),
            RequestBody::Form(fields) => request.form(&fields),
            RequestBody::Multipart(form) => request.multipart(form),
        };

        debug!(method = %method, path = %path, "Sending request");
        let started = Instant::now();
        let response = request.send().await?;
        let status = response.status().as_u16();
        let text = response.text().await?;
        let elapsed = started.elapsed();

        debug!(
            method = %method,
            path = %path,
            status,
            elapsed_ms = elapsed.as_millis() as u64,
            "Received response"
        );
        if let Some(hook) = &self.inner.hook {
            hook.on_response(method, path, status, elapsed).await;
        }

        if (200..300).contains(&status) {
            Ok(text)
        } else {
            Err(ApiError::from_response_body(status, &text).into())
        }
    }

    /// Join an endpoint path onto the base URL, keeping any base path prefix.
    pub(crate) fn url_for(&self, path: &str) -> String {
        format!(
            "{}{}",
            self.inner.base_url.as_str().trim_end_matches('/'),
            path
        )
    }

    async fn auth_headers(&self) -> Result<AuthHeaders> {
        let mut auth = AuthHeaders::anonymous();
        if let Some(token) = self.bearer_token().await? {
            auth = auth.with_token(token);
        }
        if let Some(tenant) = &self.inner.tenant_id {
            auth = auth.with_tenant(tenant.clone());
        }
        Ok(auth)
    }

    async fn bearer_token(&self) -> Result<Option<String>> {
        match &self.inner.credentials {
            Credentials::Anonymous => Ok(None),
            Credentials::Bearer(token) => Ok(Some(token.clone())),
            Credentials::OAuth2 {
                credentials,
                cached,
                refresh,
            } => {
                if let Some(token) = fresh_token(cached) {
                    return Ok(Some(token));
                }
                let _refreshing = refresh.lock().await;
                // Another request may have refreshed while this one waited
                if let Some(token) = fresh_token(cached) {
                    return Ok(Some(token));
                }
                let response = fetch_access_token(&self.inner.http, credentials).await?;
                let token = CachedToken::from_response(response);
                let access_token = token.access_token.clone();
                *cached.write() = Some(token);
                Ok(Some(access_token))
            }
        }
    }
}

fn fresh_token(cached: &RwLock<Option<CachedToken>>) -> Option<String> {
    cached
        .read()
        .as_ref()
        .filter(|token| !token.is_expired())
        .map(|token| token.access_token.clone())
}

fn decode_body<R: DeserializeOwned>(text: &str) -> Result<R> {
    if text.trim().is_empty() {
        return serde_json::from_value(Value::Null).map_err(WorkflowApiError::from);
    }
    serde_json::from_str(text).map_err(WorkflowApiError::from)
}
