//! Shared fixtures for E2E tests: the test scheme and instance helpers.

use uuid::Uuid;
use workflow_api_sdk::rpc::{CreateInstanceRequest, ExecuteCommandRequest};
use workflow_api_sdk::WorkflowApiClient;

/// Draft -> Review -> Approved/Rejected, with `submit` for the author and
/// `approve`/`reject` for the manager.
pub const SIMPLE_SCHEME_CODE: &str = "E2ESimpleApproval";
pub const SIMPLE_SCHEME_XML: &str = include_str!("schemes/simple_approval.xml");

pub const AUTHOR: &str = "author-1";
pub const MANAGER: &str = "manager-1";
pub const OUTSIDER: &str = "outsider-1";

/// Create an instance of the test scheme in its initial state.
pub async fn create_instance(client: &WorkflowApiClient) -> Uuid {
    let process_id = Uuid::new_v4();
    client
        .rpc()
        .create_instance(&CreateInstanceRequest::new(SIMPLE_SCHEME_CODE, process_id).with_identity(AUTHOR))
        .await
        .expect("Failed to create process instance");
    process_id
}

/// Create an instance and submit it, leaving it in `Review`.
pub async fn create_instance_in_review(client: &WorkflowApiClient) -> Uuid {
    let process_id = create_instance(client).await;
    let result = client
        .rpc()
        .execute_command(&ExecuteCommandRequest::new(process_id, "submit").with_identity(AUTHOR))
        .await
        .expect("Failed to submit process instance");
    assert!(result.was_executed, "submit was not executed");
    process_id
}

/// A name unique to this run, for records searched by name.
pub fn unique_name(prefix: &str) -> String {
    format!("{}-{}", prefix, &Uuid::new_v4().simple().to_string()[..12])
}
