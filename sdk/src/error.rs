//! Error types for the Workflow API SDK

pub use workflow_api_core::{ApiError, CoreError};

/// Main error type for the Workflow API SDK
#[derive(Debug, thiserror::Error)]
pub enum WorkflowApiError {
    /// The engine refused the request (non-2xx status)
    #[error("{0}")]
    Api(#[from] ApiError),

    /// Transport-level failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Invalid argument passed to a client method
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Token acquisition failed
    #[error("Authentication error: {0}")]
    Auth(String),
}

/// Result type alias for Workflow API SDK operations
pub type Result<T> = std::result::Result<T, WorkflowApiError>;

impl WorkflowApiError {
    /// The engine's error, if this is one.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            WorkflowApiError::Api(e) => Some(e),
            _ => None,
        }
    }

    /// HTTP status of an engine error.
    pub fn status(&self) -> Option<u16> {
        self.api_error().map(|e| e.status)
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    pub fn is_forbidden(&self) -> bool {
        self.status() == Some(403)
    }
}

impl From<CoreError> for WorkflowApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Api(e) => WorkflowApiError::Api(e),
            CoreError::Http(e) => WorkflowApiError::Http(e),
            CoreError::Serialization(e) => WorkflowApiError::Serialization(e),
            CoreError::Auth(msg) => WorkflowApiError::Auth(msg),
        }
    }
}

impl From<crate::config::ConfigError> for WorkflowApiError {
    fn from(err: crate::config::ConfigError) -> Self {
        WorkflowApiError::InvalidConfiguration(err.to_string())
    }
}
