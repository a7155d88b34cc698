//! # Workflow API Core
//!
//! Transport-level building blocks for talking to the workflow engine's
//! `/workflow-api` surface. The async client lives in `workflow-api-sdk`;
//! this crate holds what that client puts on and takes off the wire.
//!
//! ## Modules
//!
//! - [`models`] - Data/RPC wire models (approvals, timers, parameters, instances, ...)
//! - [`query`] - `FieldFilter` / `FieldSort` / `FieldQuery` query DSL
//! - [`client`] - Bearer/tenant headers and OAuth2 token fetching
//! - [`paths`] - Endpoint paths
//! - [`error`] - Core error types

pub mod client;
pub mod error;
pub mod models;
pub mod paths;
pub mod query;

pub use error::{ApiError, CoreError, CoreResult};

pub use client::{AuthHeaders, CachedToken, OAuth2Credentials, TENANT_ID_HEADER};

pub use query::{FieldFilter, FieldQuery, FieldSort, FilterType, SortDirection};

pub use models::{
    ApprovalModel, BulkResponse, BulkTaskState, CollectionResponse, CommandDefinition,
    CommandParameter, DeleteCollectionResponse, GlobalParameterModel, InboxItemModel,
    ParameterModel, ProcessInstanceModel, ProcessStatus, SchemeModel, StateModel, TimerModel,
    TransitionHistoryModel,
};
