mod common;

use common::{create_test_app_state_with, create_test_server, test_config, transfer_on_payment_step};
use http::StatusCode;
use lakay_core::AppState;
use serde_json::{json, Value};
use std::sync::Arc;
use uuid::Uuid;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mock_moncash_checkout(mock_server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "MONCASH_TOKEN",
            "token_type": "bearer",
            "expires_in": 59,
            "scope": "read,write"
        })))
        .mount(mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/CreatePayment"))
        .and(body_partial_json(json!({ "amount": 1065.0 })))
        .respond_with(ResponseTemplate::new(202).set_body_json(json!({
            "mode": "sandbox",
            "path": "/Api/v1/CreatePayment",
            "payment_token": { "expired": "2026-10-16 10:00:00:000", "created": "2026-10-16 09:50:00:000", "token": "PAYMENT_TOKEN_1" },
            "timestamp": 1_760_608_200_000_u64,
            "status": 202
        })))
        .mount(mock_server)
        .await;
}

async fn mock_transaction(mock_server: &MockServer, reference: &str, cost: f64, message: &str) {
    Mock::given(method("POST"))
        .and(path("/v1/RetrieveTransactionPayment"))
        .and(body_partial_json(json!({ "transactionId": "2155032517" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "path": "/Api/v1/RetrieveTransactionPayment",
            "payment": {
                "reference": reference,
                "transaction_id": "2155032517",
                "cost": cost,
                "message": message,
                "payer": "50937000000"
            },
            "timestamp": 1_760_608_500_000_u64,
            "status": 200
        })))
        .mount(mock_server)
        .await;
}

async fn reference_of(state: &Arc<AppState>, id: Uuid) -> String {
    state
        .sessions
        .get(id)
        .await
        .expect("session exists")
        .wizard
        .reference()
        .to_string()
}

#[tokio::test]
async fn moncash_checkout_completes_transfer() {
    let mock_server = MockServer::start().await;
    mock_moncash_checkout(&mock_server).await;

    let state = create_test_app_state_with(test_config(&mock_server.uri()));
    let server = create_test_server(state.clone());
    let id = transfer_on_payment_step(&server, "national", "1000", "moncash").await;

    let response = server.post(&format!("/api/transfers/{id}/payments")).await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["provider"], "moncash");
    assert_eq!(body["provider_reference"], "PAYMENT_TOKEN_1");
    assert_eq!(body["amount"], "1065.00");
    assert_eq!(body["currency"], "HTG");
    assert_eq!(
        body["redirect_url"],
        format!("{}/Payment/Redirect?token=PAYMENT_TOKEN_1", mock_server.uri())
    );

    let reference = reference_of(&state, id).await;
    mock_transaction(&mock_server, &reference, 1065.0, "successful").await;

    let response = server
        .get(&format!("/api/transfers/{id}/moncash/return"))
        .add_query_param("transactionId", "2155032517")
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "completed");
    assert_eq!(body["provider_reference"], "2155032517");

    let session: Value = server.get(&format!("/api/transfers/{id}")).await.json();
    assert_eq!(session["step"], "receipt");
    assert_eq!(session["receipt"]["total"], "1065.00");
    assert_eq!(session["receipt"]["reference"], reference);
}

#[tokio::test]
async fn next_waits_for_moncash_redirect() {
    let mock_server = MockServer::start().await;
    mock_moncash_checkout(&mock_server).await;

    let state = create_test_app_state_with(test_config(&mock_server.uri()));
    let server = create_test_server(state.clone());
    let id = transfer_on_payment_step(&server, "national", "1000", "moncash").await;

    let session: Value = server.get(&format!("/api/transfers/{id}")).await.json();
    assert_eq!(session["can_advance"], false);

    server
        .post(&format!("/api/transfers/{id}/payments"))
        .await
        .assert_status_ok();

    let body: Value = server.post(&format!("/api/transfers/{id}/next")).await.json();
    assert_eq!(body["moved"], false);
    assert_eq!(body["session"]["step_number"], 3);
    assert_eq!(body["session"]["payment_state"], "requires_action");
    assert!(body["session"].get("receipt").map_or(true, Value::is_null));

    let reference = reference_of(&state, id).await;
    mock_transaction(&mock_server, &reference, 1065.0, "successful").await;

    server
        .get(&format!("/api/transfers/{id}/moncash/return"))
        .add_query_param("transactionId", "2155032517")
        .await
        .assert_status_ok();

    let session: Value = server.get(&format!("/api/transfers/{id}")).await.json();
    assert_eq!(session["step"], "receipt");
    assert_eq!(session["payment_state"], "completed");
}

#[tokio::test]
async fn transaction_for_another_order_is_rejected() {
    let mock_server = MockServer::start().await;
    mock_moncash_checkout(&mock_server).await;
    mock_transaction(&mock_server, &Uuid::new_v4().to_string(), 1065.0, "successful").await;

    let state = create_test_app_state_with(test_config(&mock_server.uri()));
    let server = create_test_server(state);
    let id = transfer_on_payment_step(&server, "national", "1000", "moncash").await;
    server
        .post(&format!("/api/transfers/{id}/payments"))
        .await
        .assert_status_ok();

    let response = server
        .get(&format!("/api/transfers/{id}/moncash/return"))
        .add_query_param("transactionId", "2155032517")
        .await;

    response.assert_status(StatusCode::BAD_GATEWAY);
    let session: Value = server.get(&format!("/api/transfers/{id}")).await.json();
    assert_eq!(session["payment_state"], "failed");
    assert_eq!(session["step_number"], 3);
}

#[tokio::test]
async fn underpaid_transaction_is_rejected() {
    let mock_server = MockServer::start().await;
    mock_moncash_checkout(&mock_server).await;

    let state = create_test_app_state_with(test_config(&mock_server.uri()));
    let server = create_test_server(state.clone());
    let id = transfer_on_payment_step(&server, "national", "1000", "moncash").await;
    server
        .post(&format!("/api/transfers/{id}/payments"))
        .await
        .assert_status_ok();

    let reference = reference_of(&state, id).await;
    mock_transaction(&mock_server, &reference, 1000.0, "successful").await;

    let response = server
        .get(&format!("/api/transfers/{id}/moncash/return"))
        .add_query_param("transactionId", "2155032517")
        .await;

    response.assert_status(StatusCode::BAD_GATEWAY);
    let session: Value = server.get(&format!("/api/transfers/{id}")).await.json();
    assert!(session["payment_error"]
        .as_str()
        .is_some_and(|msg| msg.contains("less than")));
}

#[tokio::test]
async fn blank_transaction_id_is_rejected() {
    let state = create_test_app_state_with(test_config(common::UNREACHABLE));
    let server = create_test_server(state);
    let id = transfer_on_payment_step(&server, "national", "1000", "moncash").await;

    server
        .get(&format!("/api/transfers/{id}/moncash/return"))
        .add_query_param("transactionId", "  ")
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn return_without_payment_in_progress_is_rejected() {
    let state = create_test_app_state_with(test_config(common::UNREACHABLE));
    let server = create_test_server(state);
    let id = transfer_on_payment_step(&server, "national", "1000", "moncash").await;

    server
        .get(&format!("/api/transfers/{id}/moncash/return"))
        .add_query_param("transactionId", "2155032517")
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}
