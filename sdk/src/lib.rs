//! Workflow API SDK for Rust
//!
//! An async client for the workflow engine's `/workflow-api` endpoints: the
//! REST ("Data") endpoints for approvals, timers, parameters, global
//! parameters, process instances, transitions and schemes, the RPC endpoints
//! for instance lifecycle and command execution, and the designer endpoint for
//! scheme upload and download.
//!
//! ```ignore
//! use workflow_api_sdk::prelude::*;
//!
//! let client = WorkflowApiClient::builder()
//!     .base_url("http://localhost:5000")
//!     .bearer_token(jwt)
//!     .tenant_id("acme")
//!     .build()?;
//!
//! let overdue = client
//!     .data()
//!     .timers()
//!     .get_collection(
//!         &FieldQuery::new()
//!             .filter(FieldFilter::less("nextExecutionDateTime", "2030-01-01T00:00:00Z"))
//!             .sort(FieldSort::asc("nextExecutionDateTime")),
//!     )
//!     .await?;
//! ```

pub mod client;
pub mod config;
pub mod error;

/// Stub engine for tests.
/// Available only with the `testing` feature enabled.
#[cfg(feature = "testing")]
pub mod testing;

// Re-export the wire types from core
pub use workflow_api_core::models::rpc;
pub use workflow_api_core::{
    ApiError, ApprovalModel, BulkResponse, BulkTaskState, CollectionResponse, CommandDefinition,
    CommandParameter, DeleteCollectionResponse, FieldFilter, FieldQuery, FieldSort, FilterType,
    GlobalParameterModel, InboxItemModel, OAuth2Credentials, ParameterModel,
    ProcessInstanceModel, ProcessStatus, SchemeModel, SortDirection, StateModel, TimerModel,
    TransitionHistoryModel, TENANT_ID_HEADER,
};

pub use client::{
    CompositeRequestHook, DataApi, DataResource, DesignerApi, LoggingHook, NoOpHook, RequestHook,
    RpcApi, WorkflowApiClient, WorkflowApiClientBuilder,
};
pub use config::{ConfigError, TimeoutConfig, WorkflowApiConfig};
pub use error::{Result, WorkflowApiError};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::client::{
        LoggingHook, NoOpHook, RequestHook, WorkflowApiClient, WorkflowApiClientBuilder,
    };
    pub use crate::config::{TimeoutConfig, WorkflowApiConfig};
    pub use crate::error::{Result, WorkflowApiError};
    pub use workflow_api_core::models::rpc::{
        BulkCreateInstanceRequest, BulkExecuteCommandRequest, CreateInstanceRequest,
        ExecuteCommandRequest, GetAvailableCommandsRequest, InboxRequest, ProcessHistoryRequest,
        SetStateRequest,
    };
    pub use workflow_api_core::{
        ApiError, ApprovalModel, BulkResponse, BulkTaskState, CollectionResponse,
        CommandDefinition, FieldFilter, FieldQuery, FieldSort, GlobalParameterModel,
        OAuth2Credentials, ParameterModel, ProcessInstanceModel, ProcessStatus, SchemeModel,
        SortDirection, StateModel, TimerModel,
    };
    pub use async_trait::async_trait;
    pub use serde::{Deserialize, Serialize};
    pub use serde_json::{json, Value};
    pub use uuid::Uuid;
}
