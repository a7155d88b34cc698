//! Request hooks for observability
//!
//! Hooks receive a notification before every request, after every answered
//! request and on every failure. Use them for logging, metrics or auditing.

use crate::error::WorkflowApiError;
use async_trait::async_trait;
use reqwest::Method;
use std::time::Duration;

/// Hook trait for observing requests sent to the engine
///
/// Implementations are registered with WorkflowApiClientBuilder. Hooks are
/// awaited inline, so a slow hook slows down every request.
#[async_trait]
pub trait RequestHook: Send + Sync {
    /// Called right before a request is sent
    async fn on_request(&self, _method: &Method, _path: &str) {}

    /// Called when the engine answered, whatever the status
    async fn on_response(&self, _method: &Method, _path: &str, _status: u16, _elapsed: Duration) {
    }

    /// Called when the request failed, including non-2xx answers and
    /// success bodies that do not decode
    async fn on_error(&self, _method: &Method, _path: &str, _error: &WorkflowApiError) {}
}

/// Composite hook that delegates to multiple hooks in registration order
pub struct CompositeRequestHook {
    hooks: Vec<Box<dyn RequestHook>>,
}

impl CompositeRequestHook {
    pub fn new(hooks: Vec<Box<dyn RequestHook>>) -> Self {
        Self { hooks }
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }
}

#[async_trait]
impl RequestHook for CompositeRequestHook {
    async fn on_request(&self, method: &Method, path: &str) {
        for hook in &self.hooks {
            hook.on_request(method, path).await;
        }
    }

    async fn on_response(&self, method: &Method, path: &str, status: u16, elapsed: Duration) {
        for hook in &self.hooks {
            hook.on_response(method, path, status, elapsed).await;
        }
    }

    async fn on_error(&self, method: &Method, path: &str, error: &WorkflowApiError) {
        for hook in &self.hooks {
            hook.on_error(method, path, error).await;
        }
    }
}

/// A no-op hook that does nothing (useful as a default)
pub struct NoOpHook;

#[async_trait]
impl RequestHook for NoOpHook {}

/// A logging hook that logs requests using tracing
pub struct LoggingHook {
    level: tracing::Level,
}

impl LoggingHook {
    /// Create a new logging hook with the specified log level
    pub fn new(level: tracing::Level) -> Self {
        Self { level }
    }

    /// Create a logging hook that logs at INFO level
    pub fn info() -> Self {
        Self::new(tracing::Level::INFO)
    }

    /// Create a logging hook that logs at DEBUG level
    pub fn debug() -> Self {
        Self::new(tracing::Level::DEBUG)
    }

    pub fn level(&self) -> tracing::Level {
        self.level
    }
}

impl Default for LoggingHook {
    fn default() -> Self {
        Self::info()
    }
}

#[async_trait]
impl RequestHook for LoggingHook {
    async fn on_request(&self, method: &Method, path: &str) {
        match self.level {
            tracing::Level::DEBUG | tracing::Level::TRACE => {
                tracing::debug!(method = %method, path = %path, "Sending request");
            }
            _ => {
                tracing::info!(method = %method, path = %path, "Sending request");
            }
        }
    }

    async fn on_response(&self, method: &Method, path: &str, status: u16, elapsed: Duration) {
        let elapsed_ms = elapsed.as_millis() as u64;
        match self.level {
            tracing::Level::DEBUG | tracing::Level::TRACE => {
                tracing::debug!(
                    method = %method,
                    path = %path,
                    status,
                    elapsed_ms,
                    "Received response"
                );
            }
            _ => {
                tracing::info!(
                    method = %method,
                    path = %path,
                    status,
                    elapsed_ms,
                    "Received response"
                );
            }
        }
    }

    async fn on_error(&self, method: &Method, path: &str, error: &WorkflowApiError) {
        tracing::warn!(
            method = %method,
            path = %path,
            status = ?error.status(),
            error = %error,
            "Request failed"
        );
    }
}
