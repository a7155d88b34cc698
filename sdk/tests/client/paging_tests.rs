//! `fetch_all` paging tests.

use crate::{stub_client, with_timeout, TEST_TIMEOUT};
use serde_json::{json, Value};
use uuid::Uuid;
use workflow_api_sdk::testing::{StubEngine, StubResponse};
use workflow_api_sdk::{FieldFilter, FieldQuery, SchemeModel, WorkflowApiError};

const SCHEMES: &str = "/workflow-api/data/schemes";

fn page(codes: &[&str], total: i64) -> StubResponse {
    let collection: Vec<SchemeModel> = codes
        .iter()
        .map(|code| SchemeModel::new(*code, "<Process />"))
        .collect();
    StubResponse::json(&json!({ "collection": collection, "total": total }))
}

fn sent_paging(engine: &StubEngine) -> Vec<(String, String)> {
    engine
        .requests_to(SCHEMES)
        .into_iter()
        .map(|r| {
            (
                r.query_param("skip").unwrap_or_default(),
                r.query_param("take").unwrap_or_default(),
            )
        })
        .collect()
}

fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
    raw.iter()
        .map(|(s, t)| (s.to_string(), t.to_string()))
        .collect()
}

#[tokio::test]
async fn test_fetch_all_stops_on_short_page() {
    with_timeout(TEST_TIMEOUT, "test_fetch_all_stops_on_short_page", async {
        let (engine, client) = stub_client().await;
        engine.respond("GET", SCHEMES, page(&["a", "b"], 0));
        engine.respond("GET", SCHEMES, page(&["c", "d"], 0));
        engine.respond("GET", SCHEMES, page(&["e"], 0));

        let query = FieldQuery::new().filter(FieldFilter::contains("code", "flow"));
        let all = client.data().schemes().fetch_all(&query, 2).await.unwrap();

        let codes: Vec<&str> = all.iter().map(|s| s.code.as_str()).collect();
        assert_eq!(codes, vec!["a", "b", "c", "d", "e"]);
        assert_eq!(
            sent_paging(&engine),
            pairs(&[("0", "2"), ("2", "2"), ("4", "2")])
        );
        for request in engine.requests_to(SCHEMES) {
            assert_eq!(
                request.query_json("filters"),
                Some(json!([{ "type": "Contains", "field": "code", "value": "flow" }]))
            );
        }
    })
    .await;
}

#[tokio::test]
async fn test_fetch_all_stops_when_total_reached() {
    with_timeout(TEST_TIMEOUT, "test_fetch_all_stops_when_total_reached", async {
        let (engine, client) = stub_client().await;
        engine.respond("GET", SCHEMES, page(&["a", "b"], 4));
        engine.respond("GET", SCHEMES, page(&["c", "d"], 4));
        // Would be served to a third request.
        engine.respond("GET", SCHEMES, page(&["x"], 4));

        let all = client
            .data()
            .schemes()
            .fetch_all(&FieldQuery::new(), 2)
            .await
            .unwrap();

        assert_eq!(all.len(), 4);
        assert_eq!(engine.requests_to(SCHEMES).len(), 2);
    })
    .await;
}

#[tokio::test]
async fn test_fetch_all_follows_total_when_engine_caps_page_size() {
    with_timeout(
        TEST_TIMEOUT,
        "test_fetch_all_follows_total_when_engine_caps_page_size",
        async {
            let (engine, client) = stub_client().await;
            // Engine serves at most two records per page
            engine.respond("GET", SCHEMES, page(&["a", "b"], 5));
            engine.respond("GET", SCHEMES, page(&["c", "d"], 5));
            engine.respond("GET", SCHEMES, page(&["e"], 5));

            let all = client
                .data()
                .schemes()
                .fetch_all(&FieldQuery::new(), 10)
                .await
                .unwrap();

            let codes: Vec<&str> = all.iter().map(|s| s.code.as_str()).collect();
            assert_eq!(codes, vec!["a", "b", "c", "d", "e"]);
            assert_eq!(
                sent_paging(&engine),
                pairs(&[("0", "10"), ("2", "10"), ("4", "10")])
            );
        },
    )
    .await;
}

#[tokio::test]
async fn test_fetch_all_stops_on_empty_page_below_total() {
    with_timeout(TEST_TIMEOUT, "test_fetch_all_stops_on_empty_page_below_total", async {
        let (engine, client) = stub_client().await;
        engine.respond("GET", SCHEMES, page(&["a"], 3));
        engine.respond("GET", SCHEMES, page(&[], 3));

        let all = client
            .data()
            .schemes()
            .fetch_all(&FieldQuery::new(), 2)
            .await
            .unwrap();

        assert_eq!(all.len(), 1);
        assert_eq!(engine.requests_to(SCHEMES).len(), 2);
    })
    .await;
}

#[tokio::test]
async fn test_fetch_all_honours_skip_and_take() {
    with_timeout(TEST_TIMEOUT, "test_fetch_all_honours_skip_and_take", async {
        let (engine, client) = stub_client().await;
        engine.respond("GET", SCHEMES, page(&["k", "l"], 0));
        engine.respond("GET", SCHEMES, page(&["m"], 0));

        let all = client
            .data()
            .schemes()
            .fetch_all(&FieldQuery::new().skip(10).take(3), 2)
            .await
            .unwrap();

        assert_eq!(all.len(), 3);
        assert_eq!(sent_paging(&engine), pairs(&[("10", "2"), ("12", "1")]));
    })
    .await;
}

#[tokio::test]
async fn test_fetch_all_empty_collection() {
    with_timeout(TEST_TIMEOUT, "test_fetch_all_empty_collection", async {
        let (engine, client) = stub_client().await;
        engine.respond(
            "GET",
            "/workflow-api/data/processes/timers",
            StubResponse::json(&json!({ "collection": Vec::<Value>::new(), "total": 0 })),
        );

        let all = client
            .data()
            .timers()
            .fetch_all(
                &FieldQuery::new().filter(FieldFilter::equal("processId", json!(Uuid::new_v4()))),
                50,
            )
            .await
            .unwrap();

        assert!(all.is_empty());
        assert_eq!(engine.request_count(), 1);
    })
    .await;
}

#[tokio::test]
async fn test_fetch_all_rejects_zero_page_size() {
    with_timeout(TEST_TIMEOUT, "test_fetch_all_rejects_zero_page_size", async {
        let (engine, client) = stub_client().await;

        let err = client
            .data()
            .schemes()
            .fetch_all(&FieldQuery::new(), 0)
            .await
            .unwrap_err();

        assert!(matches!(err, WorkflowApiError::InvalidInput(_)));
        assert_eq!(engine.request_count(), 0);
    })
    .await;
}
