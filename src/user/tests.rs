//! Tests for the user service

use super::*;
use crate::test_support::{mock_client, ok_json};
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_get_user() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user"))
        .and(header("Authorization", "Bearer test-token"))
        .respond_with(ok_json(json!({"data": {"user": {"id": "u-123"}}})))
        .expect(1)
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let user = client.user().get_user().await.unwrap();
    assert_eq!(user, User { id: "u-123".to_string() });
}

#[tokio::test]
async fn test_get_user_unauthorized() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": {"id": "401", "name": "unauthorized", "detail": "Unauthorized"}
        })))
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let err = client.user().get_user().await.unwrap_err();
    let api = err.api_error().unwrap();
    assert_eq!(api.id, "401");
    assert_eq!(api.name, "unauthorized");
    assert!(client.rate_limit().is_none());
}
