//! End-to-end tests for whole-table record retrieval against a mock API server.

use mockito::{Matcher, Server};
use serde_json::json;

use airtable_client::api::models::SelectOptions;
use airtable_client::api::{records, ApiClient, ApiError};
use airtable_client::steps::{self, StepConfig, StepError};

const TEST_KEY: &str = "patTestKey123";

fn authed_client(server: &Server) -> ApiClient {
    ApiClient::authenticated(&server.url(), TEST_KEY).expect("client should build")
}

#[tokio::test]
async fn fetch_empty_table() {
    //* Given
    let mut server = Server::new_async().await;

    let list_mock = server
        .mock("GET", "/v0/appDemo123/tblEmpty")
        .match_header("authorization", format!("Bearer {TEST_KEY}").as_str())
        .match_query(Matcher::Regex("^$".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "records": [] }).to_string())
        .expect(1)
        .create_async()
        .await;

    //* When
    let client = authed_client(&server);
    let records = records::list_all(&client, "appDemo123", "tblEmpty")
        .await
        .expect("empty table should list cleanly");

    //* Then
    list_mock.assert_async().await;
    assert!(records.is_empty());
}

#[tokio::test]
async fn fetch_multiple_pages_in_service_order() {
    //* Given
    let mut server = Server::new_async().await;
    let cursor = "itrCursor01/recBbbbbbbbbbbbbb";

    let first_page = server
        .mock("GET", "/v0/appDemo123/tblOrders")
        .match_query(Matcher::Regex("^$".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "records": [
                    {
                        "id": "recAaaaaaaaaaaaaa",
                        "createdTime": "2023-01-01T00:00:00.000Z",
                        "fields": { "Name": "alpha" }
                    },
                    {
                        "id": "recBbbbbbbbbbbbbb",
                        "createdTime": "2023-01-02T00:00:00.000Z",
                        "fields": { "Name": "beta" }
                    }
                ],
                "offset": cursor
            })
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let second_page = server
        .mock("GET", "/v0/appDemo123/tblOrders")
        .match_query(Matcher::UrlEncoded("offset".to_string(), cursor.to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "records": [
                    {
                        "id": "recCccccccccccccc",
                        "createdTime": "2023-01-03T00:00:00.000Z",
                        "fields": { "Name": "gamma" }
                    }
                ]
            })
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    //* When
    let client = authed_client(&server);
    let records = records::list_all(&client, "appDemo123", "tblOrders")
        .await
        .expect("paged listing should succeed");

    //* Then
    first_page.assert_async().await;
    second_page.assert_async().await;

    let ids: Vec<String> = records.iter().map(|record| record.id()).collect();
    assert_eq!(
        ids,
        vec![
            "recAaaaaaaaaaaaaa",
            "recBbbbbbbbbbbbbb",
            "recCccccccccccccc"
        ]
    );
}

#[tokio::test]
async fn invalid_api_key_fails_without_partial_results() {
    //* Given
    let mut server = Server::new_async().await;

    let rejection_mock = server
        .mock("GET", "/v0/appDemo123/tblOrders")
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "error": {
                    "type": "AUTHENTICATION_REQUIRED",
                    "message": "Authentication required"
                }
            })
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    //* When
    let config = StepConfig::new("patExpiredKey", "appDemo123", "tblOrders");
    let result = steps::get_records_at(&server.url(), &config).await;

    //* Then
    rejection_mock.assert_async().await;
    match result {
        Err(StepError::Api(ApiError::Message {
            status_code,
            message,
        })) => {
            assert_eq!(status_code, 401);
            assert!(message.contains("AUTHENTICATION_REQUIRED"));
        }
        other => panic!("expected terminal auth failure, got {other:?}"),
    }
}

#[tokio::test]
async fn unknown_table_fails_without_partial_results() {
    //* Given
    let mut server = Server::new_async().await;

    let missing_mock = server
        .mock("GET", "/v0/appDemo123/tblMissing")
        .with_status(404)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "error": {
                    "type": "TABLE_NOT_FOUND",
                    "message": "Could not find table tblMissing in application appDemo123"
                }
            })
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    //* When
    let config = StepConfig::new(TEST_KEY, "appDemo123", "tblMissing");
    let result = steps::get_records_at(&server.url(), &config).await;

    //* Then
    missing_mock.assert_async().await;
    match result {
        Err(StepError::Api(ApiError::Message {
            status_code,
            message,
        })) => {
            assert_eq!(status_code, 404);
            assert!(message.contains("TABLE_NOT_FOUND"));
        }
        other => panic!("expected terminal not-found failure, got {other:?}"),
    }
}

#[tokio::test]
async fn repeat_invocations_return_equal_sequences() {
    //* Given
    let mut server = Server::new_async().await;

    let list_mock = server
        .mock("GET", "/v0/appDemo123/tblStable")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "records": [
                    {
                        "id": "recStable00000001",
                        "createdTime": "2023-06-01T12:00:00.000Z",
                        "fields": { "Name": "unchanged" }
                    }
                ]
            })
            .to_string(),
        )
        .expect(2)
        .create_async()
        .await;

    //* When
    let client = authed_client(&server);
    let first_pass = records::list_all(&client, "appDemo123", "tblStable")
        .await
        .expect("first pass should succeed");
    let second_pass = records::list_all(&client, "appDemo123", "tblStable")
        .await
        .expect("second pass should succeed");

    //* Then
    list_mock.assert_async().await;

    let first_raw: Vec<_> = first_pass.into_iter().map(|record| record.into_raw()).collect();
    let second_raw: Vec<_> = second_pass
        .into_iter()
        .map(|record| record.into_raw())
        .collect();
    assert_eq!(first_raw, second_raw);
}

#[tokio::test]
async fn step_returns_raw_record_objects() {
    //* Given
    let mut server = Server::new_async().await;

    let raw_records = json!([
        {
            "id": "recAaaaaaaaaaaaaa",
            "createdTime": "2023-01-01T00:00:00.000Z",
            "fields": { "Name": "alpha", "Quantity": 3 }
        },
        {
            "id": "recBbbbbbbbbbbbbb",
            "createdTime": "2023-01-02T00:00:00.000Z",
            "fields": {}
        }
    ]);

    let list_mock = server
        .mock("GET", "/v0/appDemo123/tblOrders")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "records": raw_records }).to_string())
        .expect(1)
        .create_async()
        .await;

    //* When
    let config = StepConfig::new(TEST_KEY, "appDemo123", "tblOrders");
    let returned = steps::get_records_at(&server.url(), &config)
        .await
        .expect("step should succeed");

    //* Then
    list_mock.assert_async().await;
    assert_eq!(serde_json::Value::Array(returned), raw_records);
}

#[tokio::test]
async fn select_forwards_query_options_and_stops_after_final_page() {
    //* Given
    let mut server = Server::new_async().await;

    let list_mock = server
        .mock("GET", "/v0/appDemo123/tblOrders")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("pageSize".to_string(), "2".to_string()),
            Matcher::UrlEncoded("view".to_string(), "Grid view".to_string()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "records": [
                    {
                        "id": "recAaaaaaaaaaaaaa",
                        "createdTime": "2023-01-01T00:00:00.000Z",
                        "fields": { "Name": "alpha" }
                    }
                ]
            })
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    //* When
    let client = authed_client(&server);
    let options = SelectOptions {
        page_size: Some(2),
        view: Some("Grid view".to_string()),
        ..SelectOptions::default()
    };
    let mut pages = records::select(&client, "appDemo123", "tblOrders", options);

    let first = pages.next_page().await.expect("page should come back");
    let after_exhaustion = pages.next_page().await.expect("exhausted cursor is not an error");

    //* Then
    list_mock.assert_async().await;
    assert_eq!(first.map(|records| records.len()), Some(1));
    assert!(after_exhaustion.is_none());
}

#[tokio::test]
async fn anonymous_client_cannot_list_records() {
    //* Given
    let server = Server::new_async().await;

    //* When
    let client = ApiClient::anonymous(&server.url()).expect("client should build");
    let result = records::list_all(&client, "appDemo123", "tblOrders").await;

    //* Then
    assert!(matches!(result, Err(ApiError::RequiresAuth)));
}
