//! Integration tests using mock HTTP server
//!
//! Exercises the public client surface end to end: builder → service →
//! transport → envelope decoding.

use async_trait::async_trait;
use budget_api::api::{Date, Filter, RateLimit, UNKNOWN_API_ERROR_NAME};
use budget_api::category::PayloadMonthCategory;
use budget_api::http::{HttpRequest, HttpResponse, HttpTransport, API_ENDPOINT};
use budget_api::{Client, Error};
use bytes::Bytes;
use parking_lot::Mutex;
use pretty_assertions::assert_eq;
use reqwest::header::HeaderMap;
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> Client {
    Client::builder("integration-token")
        .base_url(server.uri())
        .build()
        .unwrap()
}

fn account_json(id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": "Checking",
        "type": "checking",
        "on_budget": true,
        "closed": false,
        "note": null,
        "balance": 125_000,
        "cleared_balance": 100_000,
        "uncleared_balance": 25_000,
        "transfer_payee_id": "tp1",
        "deleted": false
    })
}

fn category_json(budgeted: i64) -> serde_json::Value {
    json!({
        "id": "c1",
        "category_group_id": "g1",
        "name": "Groceries",
        "hidden": false,
        "original_category_group_id": null,
        "note": null,
        "budgeted": budgeted,
        "activity": -20_000,
        "balance": budgeted - 20_000,
        "goal_type": null,
        "goal_creation_month": null,
        "goal_target": null,
        "goal_target_month": null,
        "goal_percentage_complete": null,
        "deleted": false
    })
}

// ============================================================================
// Builder Tests
// ============================================================================

#[test]
fn test_builder_rejects_empty_token() {
    let err = Client::new("   ").unwrap_err();
    assert!(matches!(err, Error::Config { .. }));
}

#[test]
fn test_builder_rejects_invalid_base_url() {
    let err = Client::builder("token")
        .base_url("not a url")
        .build()
        .unwrap_err();
    assert!(matches!(err, Error::InvalidUrl(_)));
}

#[test]
fn test_new_client_has_no_rate_limit() {
    let client = Client::new("token").unwrap();
    assert_eq!(client.rate_limit(), None);
    assert_eq!(client.http().config().base_url, API_ENDPOINT);
}

// ============================================================================
// End-to-end Tests
// ============================================================================

#[tokio::test]
async fn test_delta_request_and_rate_limit() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/budgets/b1/accounts"))
        .and(query_param("last_knowledge_of_server", "10"))
        .and(header("Authorization", "Bearer integration-token"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-Rate-Limit", "200/60")
                .set_body_json(json!({
                    "data": {"accounts": [account_json("a1")], "server_knowledge": 11}
                })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert_eq!(client.rate_limit(), None);

    let snapshot = client
        .account()
        .get_accounts("b1", Some(&Filter::since_knowledge(10)))
        .await
        .unwrap();

    assert_eq!(snapshot.server_knowledge, 11);
    assert_eq!(snapshot.accounts[0].id, "a1");
    assert_eq!(client.rate_limit(), Some(RateLimit::new(200, 60)));
}

#[tokio::test]
async fn test_missing_rate_limit_header_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not even json"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.user().get_user().await.unwrap_err();

    assert!(matches!(err, Error::RateLimitParse { .. }));
    assert_eq!(client.rate_limit(), None);
}

#[tokio::test]
async fn test_api_error_surfaces_server_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/budgets/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": {"id": "404.2", "name": "resource_not_found", "detail": "Resource not found"}
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/budgets/broken"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>bad gateway</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server);

    let err = client.budget().get_budget("missing", None).await.unwrap_err();
    let api = err.api_error().unwrap();
    assert_eq!(api.id, "404.2");
    assert_eq!(api.to_string(), "404.2 resource_not_found - Resource not found");

    let err = client.budget().get_budget("broken", None).await.unwrap_err();
    let api = err.api_error().unwrap();
    assert_eq!(api.id, "502");
    assert_eq!(api.name, UNKNOWN_API_ERROR_NAME);
}

#[tokio::test]
async fn test_update_category_for_current_month() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/budgets/b1/months/current/categories/c1"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({"month_category": {"budgeted": 150_000}})))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-Rate-Limit", "37/200")
                .set_body_json(json!({"data": {"category": category_json(150_000)}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let category = client
        .category()
        .update_category_for_current_month("b1", "c1", PayloadMonthCategory { budgeted: 150_000 })
        .await
        .unwrap();

    assert_eq!(category.budgeted, 150_000);
    assert_eq!(category.balance, 130_000);
}

#[tokio::test]
async fn test_get_category_for_month_uses_date_segment() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/budgets/b1/months/2018-03-01/categories/c1"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-Rate-Limit", "38/200")
                .set_body_json(json!({"data": {"category": category_json(1_000)}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let month = Date::from_ymd(2018, 3, 1).unwrap();
    let category = client
        .category()
        .get_category_for_month("b1", "c1", month)
        .await
        .unwrap();
    assert_eq!(category.name, "Groceries");
}

#[tokio::test]
async fn test_concurrent_requests_share_rate_limit() {
    let server = MockServer::start().await;

    for (id, used) in [("a1", 1), ("a2", 2), ("a3", 3)] {
        Mock::given(method("GET"))
            .and(path(format!("/budgets/b1/accounts/{id}")))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("X-Rate-Limit", format!("{used}/200").as_str())
                    .set_body_json(json!({"data": {"account": account_json(id)}})),
            )
            .mount(&server)
            .await;
    }

    let client = client_for(&server);
    let handles: Vec<_> = ["a1", "a2", "a3"]
        .into_iter()
        .map(|id| {
            let client = client.clone();
            tokio::spawn(async move { client.account().get_account("b1", id).await })
        })
        .collect();

    let results = futures::future::join_all(handles).await;
    for result in results {
        result.unwrap().unwrap();
    }

    let last = client.rate_limit().unwrap();
    assert_eq!(last.reset_seconds, 200);
    assert!((1..=3).contains(&last.limit));
}

// ============================================================================
// Custom Transport Tests
// ============================================================================

#[derive(Debug, Default)]
struct CannedTransport {
    seen: Mutex<Vec<HttpRequest>>,
}

#[async_trait]
impl HttpTransport for CannedTransport {
    async fn send(&self, request: HttpRequest) -> budget_api::Result<HttpResponse> {
        self.seen.lock().push(request);

        let mut headers = HeaderMap::new();
        headers.insert("X-Rate-Limit", "5/100".parse().unwrap());
        Ok(HttpResponse {
            status: 200,
            headers,
            body: Bytes::from_static(br#"{"data":{"user":{"id":"u1"}}}"#),
        })
    }
}

#[tokio::test]
async fn test_custom_transport() {
    let transport = Arc::new(CannedTransport::default());
    let client = Client::builder("token")
        .transport(transport.clone())
        .build()
        .unwrap();

    let user = client.user().get_user().await.unwrap();
    assert_eq!(user.id, "u1");
    assert_eq!(client.rate_limit(), Some(RateLimit::new(5, 100)));

    let seen = transport.seen.lock();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].url.as_str(), format!("{API_ENDPOINT}/user"));
    assert_eq!(
        seen[0].headers.get("Authorization").unwrap(),
        "Bearer token"
    );
    assert!(seen[0].body.is_none());
}
