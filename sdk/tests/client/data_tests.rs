//! REST endpoint tests: paths, verbs, query rendering and bodies.

use crate::{stub_client, with_timeout, TEST_TIMEOUT};
use chrono::{TimeZone, Utc};
use serde_json::json;
use uuid::Uuid;
use workflow_api_sdk::testing::StubResponse;
use workflow_api_sdk::{
    ApprovalModel, FieldFilter, FieldQuery, FieldSort, GlobalParameterModel, ParameterModel,
    SchemeModel, TimerModel,
};

const TIMERS: &str = "/workflow-api/data/processes/timers";
const APPROVALS: &str = "/workflow-api/data/processes/approvals";

#[tokio::test]
async fn test_get_collection_renders_query() {
    with_timeout(TEST_TIMEOUT, "test_get_collection_renders_query", async {
        let (engine, client) = stub_client().await;
        let process_id = Uuid::new_v4();
        let timer = TimerModel::new(
            process_id,
            "reminder",
            Utc.with_ymd_and_hms(2030, 5, 1, 9, 0, 0).unwrap(),
        );
        engine.respond(
            "GET",
            TIMERS,
            StubResponse::json(&json!({ "collection": [timer], "total": 1 })),
        );

        let query = FieldQuery::new()
            .filter(FieldFilter::equal("processId", json!(process_id)))
            .sort(FieldSort::desc("nextExecutionDateTime"))
            .skip(10)
            .take(5)
            .search("remind");
        let page = client.data().timers().get_collection(&query).await.unwrap();

        assert_eq!(page.total, 1);
        assert_eq!(page.collection, vec![timer]);

        let request = engine.last_request().unwrap();
        assert_eq!(request.method, "GET");
        assert_eq!(request.path, TIMERS);
        assert_eq!(
            request.query_json("filters"),
            Some(json!([{ "type": "Equal", "field": "processId", "value": process_id }]))
        );
        assert_eq!(
            request.query_json("sorts"),
            Some(json!([{ "field": "nextExecutionDateTime", "direction": "Desc" }]))
        );
        assert_eq!(request.query_param("skip").as_deref(), Some("10"));
        assert_eq!(request.query_param("take").as_deref(), Some("5"));
        assert_eq!(request.query_param("search").as_deref(), Some("remind"));
    })
    .await;
}

#[tokio::test]
async fn test_empty_query_sends_no_parameters() {
    with_timeout(TEST_TIMEOUT, "test_empty_query_sends_no_parameters", async {
        let (engine, client) = stub_client().await;
        engine.respond(
            "GET",
            APPROVALS,
            StubResponse::json(&json!({ "collection": [], "total": 0 })),
        );

        let page = client
            .data()
            .approvals()
            .get_collection(&FieldQuery::new())
            .await
            .unwrap();

        assert!(page.is_empty());
        assert!(engine.last_request().unwrap().query_pairs().is_empty());
    })
    .await;
}

#[tokio::test]
async fn test_composite_filters_are_nested() {
    with_timeout(TEST_TIMEOUT, "test_composite_filters_are_nested", async {
        let (engine, client) = stub_client().await;
        engine.respond(
            "GET",
            APPROVALS,
            StubResponse::json(&json!({ "collection": [], "total": 0 })),
        );

        let filter = FieldFilter::or(vec![
            FieldFilter::starts_with("initialState", "Draft"),
            FieldFilter::not(FieldFilter::is_in(
                "identityId",
                vec![json!("bob"), json!("eve")],
            )),
        ]);
        client
            .data()
            .approvals()
            .get_collection(&FieldQuery::new().filter(filter))
            .await
            .unwrap();

        let sent = engine.last_request().unwrap().query_json("filters").unwrap();
        assert_eq!(
            sent,
            json!([{
                "type": "Or",
                "filters": [
                    { "type": "StartsWith", "field": "initialState", "value": "Draft" },
                    { "type": "Not", "filters": [
                        { "type": "In", "field": "identityId", "value": ["bob", "eve"] }
                    ]}
                ]
            }])
        );
    })
    .await;
}

#[tokio::test]
async fn test_create_posts_record_and_returns_stored() {
    with_timeout(TEST_TIMEOUT, "test_create_posts_record_and_returns_stored", async {
        let (engine, client) = stub_client().await;
        let approval = ApprovalModel::new(Uuid::new_v4(), "Draft", "Review");
        let mut stored = approval.clone();
        stored.sort = Some(1);
        engine.respond("POST", APPROVALS, StubResponse::json(&stored));

        let created = client.data().approvals().create(&approval).await.unwrap();

        assert_eq!(created, stored);
        let request = engine.last_request().unwrap();
        assert_eq!(request.method, "POST");
        assert_eq!(request.json(), serde_json::to_value(&approval).unwrap());
        assert_eq!(
            request.header("content-type"),
            Some("application/json")
        );
    })
    .await;
}

#[tokio::test]
async fn test_get_update_delete_address_the_key() {
    with_timeout(TEST_TIMEOUT, "test_get_update_delete_address_the_key", async {
        let (engine, client) = stub_client().await;
        let parameter =
            ParameterModel::new(Uuid::new_v4(), "Amount", &json!({ "value": 100 })).unwrap();
        let item_path = format!("/workflow-api/data/processes/parameters/{}", parameter.id);

        engine.respond("GET", &item_path, StubResponse::json(&parameter));
        engine.respond("PUT", &item_path, StubResponse::json(&parameter));
        engine.respond("DELETE", &item_path, StubResponse::empty());

        let parameters = client.data().parameters();
        let fetched = parameters.get(parameter.id).await.unwrap();
        assert_eq!(fetched.value_as::<serde_json::Value>().unwrap()["value"], 100);

        parameters.update(parameter.id, &parameter).await.unwrap();
        parameters.delete(parameter.id).await.unwrap();

        let methods: Vec<String> = engine
            .requests_to(&item_path)
            .into_iter()
            .map(|r| r.method)
            .collect();
        assert_eq!(methods, vec!["GET", "PUT", "DELETE"]);
    })
    .await;
}

#[tokio::test]
async fn test_delete_collection_sends_filters() {
    with_timeout(TEST_TIMEOUT, "test_delete_collection_sends_filters", async {
        let (engine, client) = stub_client().await;
        engine.respond(
            "DELETE",
            "/workflow-api/data/global-parameters",
            StubResponse::json(&json!({ "deleted": 3 })),
        );

        let response = client
            .data()
            .global_parameters()
            .delete_collection(&[FieldFilter::equal("type", "Settings")])
            .await
            .unwrap();

        assert_eq!(response.deleted, 3);
        let request = engine.last_request().unwrap();
        assert_eq!(request.method, "DELETE");
        assert_eq!(
            request.query_json("filters"),
            Some(json!([{ "type": "Equal", "field": "type", "value": "Settings" }]))
        );
        assert!(request.query_param("take").is_none());
    })
    .await;
}

#[tokio::test]
async fn test_global_parameter_type_field() {
    with_timeout(TEST_TIMEOUT, "test_global_parameter_type_field", async {
        let (engine, client) = stub_client().await;
        let parameter = GlobalParameterModel::new("Settings", "Threshold", &42).unwrap();
        engine.respond(
            "POST",
            "/workflow-api/data/global-parameters",
            StubResponse::json(&parameter),
        );

        let stored = client
            .data()
            .global_parameters()
            .create(&parameter)
            .await
            .unwrap();

        assert_eq!(stored.value_as::<i32>().unwrap(), 42);
        let body = engine.last_request().unwrap().json();
        assert_eq!(body["type"], "Settings");
        assert_eq!(body["value"], "42");
    })
    .await;
}

#[tokio::test]
async fn test_scheme_code_is_path_encoded() {
    with_timeout(TEST_TIMEOUT, "test_scheme_code_is_path_encoded", async {
        let (engine, client) = stub_client().await;
        let scheme = SchemeModel::new("Order Flow", "<Process />");
        engine.respond(
            "GET",
            "/workflow-api/data/schemes/Order%20Flow",
            StubResponse::json(&scheme),
        );

        let fetched = client.data().schemes().get("Order Flow").await.unwrap();

        assert_eq!(fetched.code, "Order Flow");
        assert_eq!(
            engine.last_request().unwrap().path,
            "/workflow-api/data/schemes/Order%20Flow"
        );
    })
    .await;
}

#[tokio::test]
async fn test_entity_paths() {
    let (_engine, client) = stub_client().await;
    let data = client.data();
    assert_eq!(data.approvals().entity(), "processes/approvals");
    assert_eq!(data.timers().entity(), "processes/timers");
    assert_eq!(data.parameters().entity(), "processes/parameters");
    assert_eq!(data.global_parameters().entity(), "global-parameters");
    assert_eq!(data.processes().entity(), "processes");
    assert_eq!(data.transitions().entity(), "processes/transitions");
    assert_eq!(data.schemes().entity(), "schemes");
}
