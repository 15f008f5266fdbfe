#![allow(dead_code)]

use axum::Router;
use axum_test::TestServer;
use lakay_core::AppState;
use lakay_primitives::models::app_config::AppConfig;
use lakay_primitives::models::app_state::catalog_details::CatalogInfo;
use lakay_primitives::models::app_state::fee_details::FeeInfo;
use lakay_primitives::models::app_state::moncash_details::MonCashInfo;
use lakay_primitives::models::app_state::paypal_details::PaypalInfo;
use lakay_primitives::models::app_state::session_details::SessionInfo;
use secrecy::SecretString;
use serde_json::{json, Value};
use std::sync::Arc;
use uuid::Uuid;

/// Nothing listens here; requests to it fail fast.
pub const UNREACHABLE: &str = "http://127.0.0.1:9";

/// Test configuration with every external service pointed at `base_url`.
pub fn test_config(base_url: &str) -> AppConfig {
    AppConfig {
        app_url: "http://localhost:5173".to_string(),
        app_env: "test".to_string(),
        fee_details: FeeInfo::default(),
        session_details: SessionInfo::default(),
        paypal_details: PaypalInfo {
            paypal_client_id: "test_paypal_client_id".to_string(),
            paypal_secret: SecretString::from("test_paypal_secret"),
            paypal_api_url: base_url.to_string(),
        },
        moncash_details: MonCashInfo {
            moncash_client_id: "test_moncash_client_id".to_string(),
            moncash_secret: SecretString::from("test_moncash_secret"),
            moncash_api_url: base_url.to_string(),
            moncash_gateway_url: base_url.to_string(),
        },
        catalog_details: CatalogInfo {
            catalog_api_url: base_url.to_string(),
            catalog_api_key: SecretString::from("test_catalog_key"),
        },
    }
}

pub fn create_test_app_state() -> Arc<AppState> {
    create_test_app_state_with(test_config(UNREACHABLE))
}

pub fn create_test_app_state_with(config: AppConfig) -> Arc<AppState> {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(lakay::utility::logging::setup_logging);

    AppState::new(config).expect("Failed to build test app state")
}

pub fn create_test_app(state: Arc<AppState>) -> Router {
    lakay_api::app::create_router(state)
}

pub fn create_test_server(state: Arc<AppState>) -> TestServer {
    TestServer::new(create_test_app(state)).expect("Failed to start test server")
}

pub fn valid_recipient() -> Value {
    json!({
        "first_name": "Marie",
        "last_name": "Joseph",
        "phone_number": "+509 3712 3456",
        "department": "Ouest",
        "commune": "Pétion-Ville",
        "email": "marie@example.com"
    })
}

pub async fn start_transfer(server: &TestServer) -> Uuid {
    let response = server.post("/api/transfers").await;
    response.assert_status(http::StatusCode::CREATED);

    let body: Value = response.json();
    body["id"]
        .as_str()
        .and_then(|id| Uuid::parse_str(id).ok())
        .expect("session id")
}

/// Creates a transfer and walks it to the payment step with `method` selected.
pub async fn transfer_on_payment_step(
    server: &TestServer,
    transfer_type: &str,
    amount: &str,
    method: &str,
) -> Uuid {
    let id = start_transfer(server).await;

    server
        .put(&format!("/api/transfers/{id}/amount"))
        .json(&json!({ "amount": amount, "transfer_type": transfer_type }))
        .await
        .assert_status_ok();
    advance(server, id).await;

    server
        .put(&format!("/api/transfers/{id}/recipient"))
        .json(&valid_recipient())
        .await
        .assert_status_ok();
    advance(server, id).await;

    server
        .put(&format!("/api/transfers/{id}/payment-method"))
        .json(&json!({ "payment_method": method }))
        .await
        .assert_status_ok();

    id
}

pub async fn advance(server: &TestServer, id: Uuid) -> Value {
    let response = server.post(&format!("/api/transfers/{id}/next")).await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["moved"], true, "expected wizard to advance: {body}");
    body["session"].clone()
}
