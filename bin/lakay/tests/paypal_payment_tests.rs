mod common;

use common::{create_test_app_state_with, create_test_server, test_config, transfer_on_payment_step};
use http::StatusCode;
use lakay_core::services::payment_service::PaymentService;
use lakay_core::PaymentEvent;
use lakay_primitives::error::ApiError;
use lakay_primitives::models::enum_types::PaymentProvider;
use serde_json::{json, Value};
use std::time::Duration;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ORDER_ID: &str = "5O190127TN364715T";

async fn mock_paypal_token(mock_server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/v1/oauth2/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "ACCESS_TOKEN_XYZ",
            "token_type": "Bearer",
            "expires_in": 3600
        })))
        .mount(mock_server)
        .await;
}

async fn mock_paypal_order(mock_server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/v2/checkout/orders"))
        .and(body_partial_json(json!({ "intent": "CAPTURE" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": ORDER_ID,
            "status": "CREATED",
            "links": [
                { "href": "https://www.sandbox.paypal.com/checkoutnow?token=5O190127TN364715T", "rel": "approve", "method": "GET" }
            ]
        })))
        .mount(mock_server)
        .await;
}

fn capture_body(currency: &str, value: &str) -> Value {
    json!({
        "id": ORDER_ID,
        "status": "COMPLETED",
        "purchase_units": [{
            "payments": {
                "captures": [{
                    "id": "3C679366HH908993F",
                    "status": "COMPLETED",
                    "amount": { "currency_code": currency, "value": value }
                }]
            }
        }]
    })
}

#[tokio::test]
async fn paypal_checkout_completes_transfer() {
    let mock_server = MockServer::start().await;
    mock_paypal_token(&mock_server).await;
    mock_paypal_order(&mock_server).await;
    Mock::given(method("POST"))
        .and(path(format!("/v2/checkout/orders/{ORDER_ID}/capture")))
        .respond_with(ResponseTemplate::new(201).set_body_json(capture_body("USD", "115.00")))
        .mount(&mock_server)
        .await;

    let state = create_test_app_state_with(test_config(&mock_server.uri()));
    let mut events = state.events.subscribe();
    let server = create_test_server(state.clone());
    let id = transfer_on_payment_step(&server, "international", "100", "paypal").await;

    let response = server.post(&format!("/api/transfers/{id}/payments")).await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["provider"], "paypal");
    assert_eq!(body["provider_reference"], ORDER_ID);
    assert_eq!(body["amount"], "115.00");
    assert_eq!(body["currency"], "USD");
    assert!(body["redirect_url"]
        .as_str()
        .is_some_and(|url| url.contains("checkoutnow")));

    let session: Value = server.get(&format!("/api/transfers/{id}")).await.json();
    assert_eq!(session["payment_state"], "requires_action");
    assert_eq!(session["step_number"], 3);

    let response = server
        .post(&format!("/api/transfers/{id}/paypal/capture"))
        .json(&json!({ "order_id": ORDER_ID }))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "completed");
    assert_eq!(body["provider_reference"], "3C679366HH908993F");

    let session: Value = server.get(&format!("/api/transfers/{id}")).await.json();
    assert_eq!(session["step"], "receipt");
    assert_eq!(session["payment_state"], "completed");
    assert_eq!(session["receipt"]["payment_state"], "completed");
    assert_eq!(session["receipt"]["provider_reference"], "3C679366HH908993F");

    assert!(matches!(
        events.try_recv(),
        Ok(PaymentEvent::Initiated { provider: PaymentProvider::Paypal, ref provider_reference, .. })
            if provider_reference == ORDER_ID
    ));
    match events.try_recv() {
        Ok(PaymentEvent::Succeeded { session_id, provider, .. }) => {
            assert_eq!(session_id, id);
            assert_eq!(provider, PaymentProvider::Paypal);
        }
        other => panic!("expected success event, got {other:?}"),
    }

    // a second capture call answers from the session without calling PayPal again
    let response = server
        .post(&format!("/api/transfers/{id}/paypal/capture"))
        .json(&json!({ "order_id": ORDER_ID }))
        .await;
    response.assert_status_ok();
}

#[tokio::test]
async fn capture_with_wrong_amount_is_recorded_as_failure() {
    let mock_server = MockServer::start().await;
    mock_paypal_token(&mock_server).await;
    mock_paypal_order(&mock_server).await;
    Mock::given(method("POST"))
        .and(path(format!("/v2/checkout/orders/{ORDER_ID}/capture")))
        .respond_with(ResponseTemplate::new(201).set_body_json(capture_body("USD", "100.00")))
        .mount(&mock_server)
        .await;

    let state = create_test_app_state_with(test_config(&mock_server.uri()));
    let server = create_test_server(state.clone());
    let id = transfer_on_payment_step(&server, "international", "100", "paypal").await;
    server
        .post(&format!("/api/transfers/{id}/payments"))
        .await
        .assert_status_ok();

    let mut events = state.events.subscribe();
    let response = server
        .post(&format!("/api/transfers/{id}/paypal/capture"))
        .json(&json!({ "order_id": ORDER_ID }))
        .await;

    response.assert_status(StatusCode::BAD_GATEWAY);
    let session: Value = server.get(&format!("/api/transfers/{id}")).await.json();
    assert_eq!(session["payment_state"], "failed");
    assert_eq!(session["step"], "payment_method");
    assert!(session["payment_error"]
        .as_str()
        .is_some_and(|msg| msg.contains("does not match")));
    assert!(matches!(
        events.try_recv(),
        Ok(PaymentEvent::Failed { provider: PaymentProvider::Paypal, .. })
    ));

    let session: Value = server
        .post(&format!("/api/transfers/{id}/dismiss-error"))
        .await
        .json();
    assert!(session.get("payment_error").is_none());
    assert_eq!(session["payment_state"], "failed");
}

#[tokio::test]
async fn order_creation_failure_keeps_sender_on_payment_step() {
    let mock_server = MockServer::start().await;
    mock_paypal_token(&mock_server).await;
    Mock::given(method("POST"))
        .and(path("/v2/checkout/orders"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    let state = create_test_app_state_with(test_config(&mock_server.uri()));
    let server = create_test_server(state);
    let id = transfer_on_payment_step(&server, "international", "100", "paypal").await;

    let response = server.post(&format!("/api/transfers/{id}/payments")).await;

    response.assert_status(StatusCode::BAD_GATEWAY);
    let body: Value = response.json();
    assert_eq!(body["code"], 502);

    let session: Value = server.get(&format!("/api/transfers/{id}")).await.json();
    assert_eq!(session["step_number"], 3);
    assert_eq!(session["payment_state"], "failed");
    assert!(session["payment_error"].is_string());
}

#[tokio::test]
async fn failure_after_reset_leaves_fresh_transfer_untouched() {
    let mock_server = MockServer::start().await;
    mock_paypal_token(&mock_server).await;
    mock_paypal_order(&mock_server).await;
    Mock::given(method("POST"))
        .and(path(format!("/v2/checkout/orders/{ORDER_ID}/capture")))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_string("boom")
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&mock_server)
        .await;

    let state = create_test_app_state_with(test_config(&mock_server.uri()));
    let server = create_test_server(state.clone());
    let id = transfer_on_payment_step(&server, "international", "100", "paypal").await;
    server
        .post(&format!("/api/transfers/{id}/payments"))
        .await
        .assert_status_ok();

    let capture = tokio::spawn({
        let state = state.clone();
        async move { PaymentService::capture_paypal(&state, id, ORDER_ID.to_string()).await }
    });
    tokio::time::sleep(Duration::from_millis(150)).await;
    server
        .post(&format!("/api/transfers/{id}/reset"))
        .await
        .assert_status_ok();

    let result = capture.await.expect("capture task");
    assert!(matches!(result, Err(ApiError::Payment(_))));

    let session: Value = server.get(&format!("/api/transfers/{id}")).await.json();
    assert_eq!(session["step_number"], 1);
    assert_eq!(session["payment_state"], "not_started");
    assert!(session.get("payment_error").map_or(true, Value::is_null));
}

#[tokio::test]
async fn capture_rejects_foreign_order() {
    let mock_server = MockServer::start().await;
    mock_paypal_token(&mock_server).await;
    mock_paypal_order(&mock_server).await;

    let state = create_test_app_state_with(test_config(&mock_server.uri()));
    let server = create_test_server(state);
    let id = transfer_on_payment_step(&server, "international", "100", "paypal").await;
    server
        .post(&format!("/api/transfers/{id}/payments"))
        .await
        .assert_status_ok();

    server
        .post(&format!("/api/transfers/{id}/paypal/capture"))
        .json(&json!({ "order_id": "SOMEONE-ELSES-ORDER" }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn offline_method_cannot_start_hosted_payment() {
    let state = create_test_app_state_with(test_config(common::UNREACHABLE));
    let server = create_test_server(state);
    let id = transfer_on_payment_step(&server, "international", "100", "zelle").await;

    server
        .post(&format!("/api/transfers/{id}/payments"))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn payment_outside_payment_step_is_rejected() {
    let state = create_test_app_state_with(test_config(common::UNREACHABLE));
    let server = create_test_server(state);
    let id = common::start_transfer(&server).await;

    server
        .post(&format!("/api/transfers/{id}/payments"))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn paypal_order_status_is_proxied() {
    let mock_server = MockServer::start().await;
    mock_paypal_token(&mock_server).await;
    Mock::given(method("GET"))
        .and(path(format!("/v2/checkout/orders/{ORDER_ID}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": ORDER_ID,
            "status": "APPROVED"
        })))
        .mount(&mock_server)
        .await;

    let state = create_test_app_state_with(test_config(&mock_server.uri()));
    let server = create_test_server(state);

    let response = server.get(&format!("/api/paypal/orders/{ORDER_ID}")).await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "APPROVED");

    server
        .get("/api/paypal/orders/short")
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}
