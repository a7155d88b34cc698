//! Client for the engine's `/workflow-api` endpoints

pub mod builder;
pub mod data;
pub mod designer;
pub mod hook;
pub mod rpc;
pub mod workflow_api_client;

pub use builder::WorkflowApiClientBuilder;
pub use data::{DataApi, DataResource};
pub use designer::DesignerApi;
pub use hook::{CompositeRequestHook, LoggingHook, NoOpHook, RequestHook};
pub use rpc::RpcApi;
pub use workflow_api_client::WorkflowApiClient;
