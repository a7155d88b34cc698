//! Error mapping tests: non-2xx answers surface as `ApiError`.

use crate::{stub_builder, stub_client, with_timeout, TEST_TIMEOUT};
use serde_json::json;
use uuid::Uuid;
use workflow_api_sdk::testing::StubResponse;
use workflow_api_sdk::{FieldQuery, TimerModel, WorkflowApiError};

#[tokio::test]
async fn test_not_found_carries_status_and_message() {
    with_timeout(TEST_TIMEOUT, "test_not_found_carries_status_and_message", async {
        let (engine, client) = stub_client().await;
        let id = Uuid::new_v4();
        engine.respond(
            "GET",
            &format!("/workflow-api/data/processes/timers/{}", id),
            StubResponse::error(404, "Timer not found"),
        );

        let err = client.data().timers().get(id).await.unwrap_err();

        assert!(err.is_not_found());
        let api = err.api_error().unwrap();
        assert_eq!(api.message, "Timer not found");
        assert_eq!(api.content, Some(json!({ "message": "Timer not found" })));
    })
    .await;
}

#[tokio::test]
async fn test_forbidden_and_bad_request() {
    with_timeout(TEST_TIMEOUT, "test_forbidden_and_bad_request", async {
        let (engine, client) = stub_client().await;
        engine.respond(
            "POST",
            "/workflow-api/data/processes/timers",
            StubResponse::error(403, "Permission denied"),
        );
        engine.respond(
            "POST",
            "/workflow-api/data/processes/timers",
            StubResponse::json_with_status(
                400,
                &json!({ "title": "Validation failed", "errors": { "name": ["required"] } }),
            ),
        );

        let timer = TimerModel::new(Uuid::new_v4(), "t", chrono::Utc::now());
        let err = client.data().timers().create(&timer).await.unwrap_err();
        assert!(err.is_forbidden());

        let err = client.data().timers().create(&timer).await.unwrap_err();
        let api = err.api_error().unwrap();
        assert!(api.is_bad_request());
        assert_eq!(api.message, "Validation failed");
    })
    .await;
}

#[tokio::test]
async fn test_server_error_with_plain_text_body() {
    with_timeout(TEST_TIMEOUT, "test_server_error_with_plain_text_body", async {
        let (engine, client) = stub_client().await;
        engine.respond(
            "POST",
            "/workflow-api/rpc/get-process-status",
            StubResponse::text(500, "Cannot convert value of parameter 'Amount'\n"),
        );

        let err = client
            .rpc()
            .get_process_status(Uuid::new_v4())
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(500));
        let api = err.api_error().unwrap();
        assert!(api.is_server_error());
        assert_eq!(api.message, "Cannot convert value of parameter 'Amount'");
        assert!(api.content.is_none());
    })
    .await;
}

#[tokio::test]
async fn test_unrouted_path_is_not_found() {
    with_timeout(TEST_TIMEOUT, "test_unrouted_path_is_not_found", async {
        let (_engine, client) = stub_client().await;

        let err = client
            .data()
            .approvals()
            .get_collection(&FieldQuery::new())
            .await
            .unwrap_err();

        assert!(err.is_not_found());
    })
    .await;
}

#[tokio::test]
async fn test_malformed_success_body_is_serialization_error() {
    with_timeout(TEST_TIMEOUT, "test_malformed_success_body_is_serialization_error", async {
        let (engine, client) = stub_client().await;
        engine.respond(
            "POST",
            "/workflow-api/rpc/is-process-exists",
            StubResponse::text(200, "<html>maintenance</html>"),
        );

        let err = client
            .rpc()
            .is_process_exists(Uuid::new_v4())
            .await
            .unwrap_err();

        assert!(matches!(err, WorkflowApiError::Serialization(_)));
        assert!(err.status().is_none());
    })
    .await;
}

#[tokio::test]
async fn test_unreachable_engine_is_http_error() {
    with_timeout(TEST_TIMEOUT, "test_unreachable_engine_is_http_error", async {
        let (engine, builder) = stub_builder().await;
        let base_url = engine.base_url();
        drop(engine);
        // The listener task is aborted with the engine; give it a moment to close.
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;

        let client = builder.base_url(base_url).build().unwrap();
        let err = client
            .data()
            .schemes()
            .get_collection(&FieldQuery::new())
            .await
            .unwrap_err();

        assert!(matches!(err, WorkflowApiError::Http(_)));
    })
    .await;
}
