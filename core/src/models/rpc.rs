//! Request and response bodies of the `/workflow-api/rpc/*` endpoints.

use super::process::ProcessStatus;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use uuid::Uuid;

/// Parameters passed along with an RPC call, keyed by parameter name.
pub type ParameterMap = HashMap<String, Value>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInstanceRequest {
    pub scheme_code: String,
    pub process_id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impersonated_identity_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calendar_name: Option<String>,
    /// Parameters used to pick the scheme version
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub process_parameters: ParameterMap,
    /// Parameters stored on the new instance
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub initial_process_parameters: ParameterMap,
}

impl CreateInstanceRequest {
    pub fn new(scheme_code: impl Into<String>, process_id: Uuid) -> Self {
        Self {
            scheme_code: scheme_code.into(),
            process_id,
            identity_id: None,
            impersonated_identity_id: None,
            tenant_id: None,
            calendar_name: None,
            process_parameters: HashMap::new(),
            initial_process_parameters: HashMap::new(),
        }
    }

    pub fn with_identity(mut self, identity_id: impl Into<String>) -> Self {
        self.identity_id = Some(identity_id.into());
        self
    }

    pub fn with_tenant(mut self, tenant_id: impl Into<String>) -> Self {
        self.tenant_id = Some(tenant_id.into());
        self
    }

    pub fn with_initial_parameter(mut self, name: impl Into<String>, value: Value) -> Self {
        self.initial_process_parameters.insert(name.into(), value);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkCreateInstanceRequest {
    pub scheme_code: String,
    pub process_ids: Vec<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub process_parameters: ParameterMap,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub initial_process_parameters: ParameterMap,
}

impl BulkCreateInstanceRequest {
    pub fn new(scheme_code: impl Into<String>, process_ids: Vec<Uuid>) -> Self {
        Self {
            scheme_code: scheme_code.into(),
            process_ids,
            identity_id: None,
            tenant_id: None,
            process_parameters: HashMap::new(),
            initial_process_parameters: HashMap::new(),
        }
    }
}

/// Body of every RPC that addresses a single instance and nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessIdRequest {
    pub process_id: Uuid,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessIdsRequest {
    pub process_ids: Vec<Uuid>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetAvailableCommandsRequest {
    pub process_id: Uuid,
    pub identity_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command_name_filter: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecuteCommandRequest {
    pub process_id: Uuid,
    pub command_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impersonated_identity_id: Option<String>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub parameters: ParameterMap,
}

impl ExecuteCommandRequest {
    pub fn new(process_id: Uuid, command_name: impl Into<String>) -> Self {
        Self {
            process_id,
            command_name: command_name.into(),
            identity_id: None,
            impersonated_identity_id: None,
            parameters: HashMap::new(),
        }
    }

    pub fn with_identity(mut self, identity_id: impl Into<String>) -> Self {
        self.identity_id = Some(identity_id.into());
        self
    }

    pub fn impersonating(mut self, identity_id: impl Into<String>) -> Self {
        self.impersonated_identity_id = Some(identity_id.into());
        self
    }

    pub fn with_parameter(mut self, name: impl Into<String>, value: Value) -> Self {
        self.parameters.insert(name.into(), value);
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecuteCommandResponse {
    pub was_executed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkExecuteCommandRequest {
    pub process_ids: Vec<Uuid>,
    pub command_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impersonated_identity_id: Option<String>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub parameters: ParameterMap,
}

impl BulkExecuteCommandRequest {
    pub fn new(process_ids: Vec<Uuid>, command_name: impl Into<String>) -> Self {
        Self {
            process_ids,
            command_name: command_name.into(),
            identity_id: None,
            impersonated_identity_id: None,
            parameters: HashMap::new(),
        }
    }

    pub fn with_identity(mut self, identity_id: impl Into<String>) -> Self {
        self.identity_id = Some(identity_id.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetStateRequest {
    pub process_id: Uuid,
    pub state_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impersonated_identity_id: Option<String>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub parameters: ParameterMap,
}

impl SetStateRequest {
    pub fn new(process_id: Uuid, state_name: impl Into<String>) -> Self {
        Self {
            process_id,
            state_name: state_name.into(),
            identity_id: None,
            impersonated_identity_id: None,
            parameters: HashMap::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessHistoryRequest {
    pub process_id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub take: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InboxRequest {
    pub identity_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub take: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetProcessParametersRequest {
    pub process_id: Uuid,
    pub parameters: ParameterMap,
    /// Store the values persistently rather than only for the current run
    #[serde(default)]
    pub persist: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExistsResponse {
    pub exists: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessStatusResponse {
    pub status: ProcessStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemeObsoleteResponse {
    pub is_obsolete: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemeUpdateResponse {
    pub updated: bool,
}
