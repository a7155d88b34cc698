//! Client tests against the in-process stub engine
//!
//! Every test starts its own [`StubEngine`] on a random local port, so the
//! suite runs in parallel and needs no Docker.
//!
//! ```bash
//! cargo test --test client -p workflow-api-sdk
//! ```

mod data_tests;
mod error_tests;
mod paging_tests;

use std::time::Duration;
use workflow_api_sdk::testing::StubEngine;
use workflow_api_sdk::{WorkflowApiClient, WorkflowApiClientBuilder};

/// Default timeout for client tests
pub const TEST_TIMEOUT: Duration = Duration::from_secs(10);

pub const TEST_TOKEN: &str = "test-jwt";
pub const TEST_TENANT: &str = "tenant-a";

static TRACING_INITIALIZED: std::sync::Once = std::sync::Once::new();

fn init_tracing() {
    TRACING_INITIALIZED.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .init();
    });
}

/// Start a stub engine and a builder pointed at it.
pub async fn stub_builder() -> (StubEngine, WorkflowApiClientBuilder) {
    init_tracing();
    let engine = StubEngine::start()
        .await
        .expect("Failed to start stub engine");
    let builder = WorkflowApiClient::builder()
        .base_url(engine.base_url())
        .request_timeout(Duration::from_secs(5));
    (engine, builder)
}

/// Start a stub engine and a client with the test token and tenant.
pub async fn stub_client() -> (StubEngine, WorkflowApiClient) {
    let (engine, builder) = stub_builder().await;
    let client = builder
        .bearer_token(TEST_TOKEN)
        .tenant_id(TEST_TENANT)
        .build()
        .expect("Failed to build client");
    (engine, client)
}

/// Run a test with a timeout. Panics if the test takes longer than the specified duration.
pub async fn with_timeout<F, T>(timeout: Duration, test_name: &str, f: F) -> T
where
    F: std::future::Future<Output = T>,
{
    match tokio::time::timeout(timeout, f).await {
        Ok(result) => result,
        Err(_) => panic!("Test '{}' timed out after {:?}", test_name, timeout),
    }
}
