//! Tests for the account service

use super::*;
use crate::api::Filter;
use crate::test_support::{mock_client, ok_json};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer};

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
        "transfer_payee_id": "p-transfer",
        "deleted": false
    })
}

#[tokio::test]
async fn test_get_accounts() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/budgets/b1/accounts"))
        .respond_with(ok_json(json!({
            "data": {
                "accounts": [account_json("a1"), account_json("a2")],
                "server_knowledge": 42
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let snapshot = client.account().get_accounts("b1", None).await.unwrap();

    assert_eq!(snapshot.server_knowledge, 42);
    assert_eq!(snapshot.accounts.len(), 2);
    assert_eq!(snapshot.accounts[0].account_type, Type::Checking);
    assert_eq!(snapshot.accounts[0].balance, 125_000);

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), None);
}

#[tokio::test]
async fn test_get_accounts_with_knowledge() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/budgets/b1/accounts"))
        .and(query_param("last_knowledge_of_server", "10"))
        .respond_with(ok_json(json!({
            "data": {"accounts": [], "server_knowledge": 11}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let snapshot = client
        .account()
        .get_accounts("b1", Some(&Filter::since_knowledge(10)))
        .await
        .unwrap();

    assert!(snapshot.accounts.is_empty());
    assert_eq!(snapshot.server_knowledge, 11);
}

#[tokio::test]
async fn test_get_account() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/budgets/b1/accounts/a1"))
        .respond_with(ok_json(json!({"data": {"account": account_json("a1")}})))
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let account = client.account().get_account("b1", "a1").await.unwrap();

    assert_eq!(account.id, "a1");
    assert_eq!(account.transfer_payee_id.as_deref(), Some("p-transfer"));
    assert!(account.note.is_none());
}

#[test]
fn test_unknown_account_type() {
    let mut value = account_json("a1");
    value["type"] = json!("cryptoWallet");
    let account: Account = serde_json::from_value(value).unwrap();
    assert_eq!(account.account_type, Type::Other);

    let ty: Type = serde_json::from_str(r#""lineOfCredit""#).unwrap();
    assert_eq!(ty, Type::LineOfCredit);
}
