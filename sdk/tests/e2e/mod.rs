//! End-to-end tests for workflow-api-sdk
//!
//! These tests run against a live workflow engine. The harness either uses
//! the engine at `WORKFLOW_API_E2E_URL` or starts the test-host image with
//! Testcontainers, uploads the fixture schemes and then hands out clients
//! scoped to a fresh tenant.
//!
//! # Running E2E tests
//!
//! ```bash
//! # Against a running test host
//! WORKFLOW_API_E2E_URL=http://localhost:5000 \
//!     cargo test --test e2e -p workflow-api-sdk -- --include-ignored --test-threads=1
//!
//! # Starting the test host image with Docker
//! cargo test --test e2e -p workflow-api-sdk -- --include-ignored --test-threads=1
//! ```
//!
//! # Environment
//!
//! - `WORKFLOW_API_E2E_URL` - engine base URL (skips starting a container)
//! - `WORKFLOW_API_E2E_IMAGE` - test host image (default `workflow-api-test-host`)
//! - `WORKFLOW_API_E2E_JWT_SECRET` - HS256 key the engine validates tokens with
//! - `WORKFLOW_API_E2E_TENANT` - tenant id (default: random per run)

mod fixtures;

pub use harness::TestHarness;

use std::time::Duration;
use tokio::sync::OnceCell;

/// Default timeout for E2E tests (60 seconds per test)
pub const TEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Global shared harness for all E2E tests.
/// This ensures all tests share the same engine and tenant.
static GLOBAL_HARNESS: OnceCell<TestHarness> = OnceCell::const_new();

/// Initialize tracing once for all tests
static TRACING_INITIALIZED: std::sync::Once = std::sync::Once::new();

fn init_tracing() {
    TRACING_INITIALIZED.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .init();
    });
}

/// Get or initialize the global test harness.
pub async fn get_harness() -> &'static TestHarness {
    init_tracing();

    GLOBAL_HARNESS
        .get_or_init(|| async { TestHarness::new().await })
        .await
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
