//! RPC endpoints under `/workflow-api/rpc`
//!
//! Every call is a `POST` with a JSON body. Bulk calls answer with a
//! [`BulkResponse`] mapping each instance id to the state of its sub-task.

use crate::client::workflow_api_client::{RequestBody, WorkflowApiClient};
use crate::error::Result;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;
use workflow_api_core::models::rpc::{
    BulkCreateInstanceRequest, BulkExecuteCommandRequest, CreateInstanceRequest,
    ExecuteCommandRequest, ExecuteCommandResponse, ExistsResponse, GetAvailableCommandsRequest,
    InboxRequest, ParameterMap, ProcessHistoryRequest, ProcessIdRequest, ProcessIdsRequest,
    ProcessStatusResponse, SchemeObsoleteResponse, SchemeUpdateResponse, SetProcessParametersRequest,
    SetStateRequest,
};
use workflow_api_core::paths;
use workflow_api_core::{
    BulkResponse, CollectionResponse, CommandDefinition, InboxItemModel, ProcessInstanceModel,
    ProcessStatus, StateModel, TransitionHistoryModel,
};

/// Entry point to the RPC endpoints, obtained from [`WorkflowApiClient::rpc`].
#[derive(Debug, Clone, Copy)]
pub struct RpcApi<'a> {
    client: &'a WorkflowApiClient,
}

impl<'a> RpcApi<'a> {
    pub(crate) fn new(client: &'a WorkflowApiClient) -> Self {
        Self { client }
    }

    async fn call<B, R>(&self, name: &str, body: &B) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.client
            .execute(Method::POST, &paths::rpc(name), &[], RequestBody::json(body)?)
            .await
    }

    async fn call_unit<B>(&self, name: &str, body: &B) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        self.client
            .execute_text(Method::POST, &paths::rpc(name), &[], RequestBody::json(body)?)
            .await
            .map(|_| ())
    }

    // Instances

    pub async fn create_instance(&self, request: &CreateInstanceRequest) -> Result<()> {
        self.call_unit("create-instance", request).await
    }

    pub async fn bulk_create_instance(
        &self,
        request: &BulkCreateInstanceRequest,
    ) -> Result<BulkResponse> {
        self.call("bulk-create-instance", request).await
    }

    pub async fn delete_instance(&self, process_id: Uuid) -> Result<()> {
        self.call_unit("delete-instance", &ProcessIdRequest { process_id })
            .await
    }

    pub async fn bulk_delete_instance(&self, process_ids: Vec<Uuid>) -> Result<BulkResponse> {
        self.call("bulk-delete-instance", &ProcessIdsRequest { process_ids })
            .await
    }

    pub async fn get_instance_info(&self, process_id: Uuid) -> Result<ProcessInstanceModel> {
        self.call("get-instance-info", &ProcessIdRequest { process_id })
            .await
    }

    pub async fn is_process_exists(&self, process_id: Uuid) -> Result<bool> {
        let response: ExistsResponse = self
            .call("is-process-exists", &ProcessIdRequest { process_id })
            .await?;
        Ok(response.exists)
    }

    pub async fn get_process_status(&self, process_id: Uuid) -> Result<ProcessStatus> {
        let response: ProcessStatusResponse = self
            .call("get-process-status", &ProcessIdRequest { process_id })
            .await?;
        Ok(response.status)
    }

    // Commands

    /// Commands the given identities may execute on the instance right now.
    pub async fn get_available_commands(
        &self,
        request: &GetAvailableCommandsRequest,
    ) -> Result<Vec<CommandDefinition>> {
        self.call("get-available-commands", request).await
    }

    pub async fn execute_command(
        &self,
        request: &ExecuteCommandRequest,
    ) -> Result<ExecuteCommandResponse> {
        self.call("execute-command", request).await
    }

    pub async fn bulk_execute_command(
        &self,
        request: &BulkExecuteCommandRequest,
    ) -> Result<BulkResponse> {
        self.call("bulk-execute-command", request).await
    }

    // States

    pub async fn get_available_states_to_set(&self, process_id: Uuid) -> Result<Vec<StateModel>> {
        self.call("get-available-states-to-set", &ProcessIdRequest { process_id })
            .await
    }

    pub async fn set_state(&self, request: &SetStateRequest) -> Result<()> {
        self.call_unit("set-state", request).await
    }

    pub async fn get_current_state(&self, process_id: Uuid) -> Result<StateModel> {
        self.call("get-current-state", &ProcessIdRequest { process_id })
            .await
    }

    pub async fn get_initial_state(&self, process_id: Uuid) -> Result<StateModel> {
        self.call("get-initial-state", &ProcessIdRequest { process_id })
            .await
    }

    // History, inbox and outbox

    pub async fn get_process_history(
        &self,
        request: &ProcessHistoryRequest,
    ) -> Result<CollectionResponse<TransitionHistoryModel>> {
        self.call("get-process-history", request).await
    }

    /// Instances waiting for the identity to act
    pub async fn get_inbox(&self, request: &InboxRequest) -> Result<CollectionResponse<InboxItemModel>> {
        self.call("get-inbox", request).await
    }

    /// Instances the identity has already acted on
    pub async fn get_outbox(
        &self,
        request: &InboxRequest,
    ) -> Result<CollectionResponse<InboxItemModel>> {
        self.call("get-outbox", request).await
    }

    // Parameters and schemes

    pub async fn set_process_parameters(
        &self,
        process_id: Uuid,
        parameters: ParameterMap,
        persist: bool,
    ) -> Result<()> {
        let request = SetProcessParametersRequest {
            process_id,
            parameters,
            persist,
        };
        self.call_unit("set-process-parameters", &request).await
    }

    /// Whether the instance runs on an outdated version of its scheme.
    pub async fn is_scheme_obsolete(&self, process_id: Uuid) -> Result<bool> {
        let response: SchemeObsoleteResponse = self
            .call("is-scheme-obsolete", &ProcessIdRequest { process_id })
            .await?;
        Ok(response.is_obsolete)
    }

    /// Move the instance onto the current scheme version if it is outdated.
    /// Returns whether anything changed.
    pub async fn update_scheme_if_obsolete(&self, process_id: Uuid) -> Result<bool> {
        let response: Option<SchemeUpdateResponse> = self
            .call("update-scheme-if-obsolete", &ProcessIdRequest { process_id })
            .await?;
        Ok(response.map(|r| r.updated).unwrap_or(false))
    }
}
