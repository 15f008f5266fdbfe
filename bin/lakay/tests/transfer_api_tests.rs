mod common;

use common::{
    advance, create_test_app_state, create_test_server, start_transfer, transfer_on_payment_step,
    valid_recipient,
};
use http::StatusCode;
use serde_json::{json, Value};
use uuid::Uuid;

#[tokio::test]
async fn health_reports_active_sessions() {
    let state = create_test_app_state();
    let server = create_test_server(state.clone());

    start_transfer(&server).await;
    start_transfer(&server).await;

    let response = server.get("/api/health").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "200 OK");
    assert_eq!(body["active_sessions"], 2);
}

#[tokio::test]
async fn new_transfer_starts_on_amount_step() {
    let server = create_test_server(create_test_app_state());

    let response = server.post("/api/transfers").await;

    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["step"], "amount_entry");
    assert_eq!(body["step_number"], 1);
    assert_eq!(body["can_advance"], false);
    assert_eq!(body["payment_state"], "not_started");
    assert_eq!(body["data"]["transfer_type"], "international");
    assert_eq!(body["data"]["amount"], "");
    assert!(body.get("quote").is_none());
}

#[tokio::test]
async fn amount_update_produces_live_quote() {
    let server = create_test_server(create_test_app_state());
    let id = start_transfer(&server).await;

    let response = server
        .put(&format!("/api/transfers/{id}/amount"))
        .json(&json!({ "amount": "100" }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["can_advance"], true);
    assert_eq!(body["quote"]["fee"], "15.00");
    assert_eq!(body["quote"]["total"], "115.00");
    assert_eq!(body["quote"]["receive_amount"], "12750.00");
}

#[tokio::test]
async fn next_is_refused_until_step_is_complete() {
    let server = create_test_server(create_test_app_state());
    let id = start_transfer(&server).await;

    let response = server.post(&format!("/api/transfers/{id}/next")).await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["moved"], false);
    assert_eq!(body["session"]["step_number"], 1);

    let response = server.post(&format!("/api/transfers/{id}/previous")).await;
    let body: Value = response.json();
    assert_eq!(body["moved"], false);
    assert_eq!(body["session"]["step_number"], 1);
}

#[tokio::test]
async fn full_offline_flow_ends_with_pending_receipt() {
    let server = create_test_server(create_test_app_state());
    let id = transfer_on_payment_step(&server, "national", "1000", "sogebank").await;

    let session = advance(&server, id).await;

    assert_eq!(session["step"], "receipt");
    assert_eq!(session["step_number"], 4);
    assert_eq!(session["can_advance"], false);
    assert_eq!(session["payment_state"], "pending");
    assert_eq!(session["receipt"]["total"], "1065.00");
    assert_eq!(session["receipt"]["send_currency"], "HTG");
    assert_eq!(session["receipt"]["recipient_name"], "Marie Joseph");
    assert_eq!(session["receipt"]["payment_method"], "sogebank");
}

#[tokio::test]
async fn invalid_recipient_is_rejected() {
    let server = create_test_server(create_test_app_state());
    let id = start_transfer(&server).await;
    server
        .put(&format!("/api/transfers/{id}/amount"))
        .json(&json!({ "amount": "50" }))
        .await
        .assert_status_ok();
    advance(&server, id).await;

    let mut bad_phone = valid_recipient();
    bad_phone["phone_number"] = json!("12345");
    server
        .put(&format!("/api/transfers/{id}/recipient"))
        .json(&bad_phone)
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    let mut bad_email = valid_recipient();
    bad_email["email"] = json!("not-an-email");
    server
        .put(&format!("/api/transfers/{id}/recipient"))
        .json(&bad_email)
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn incomplete_recipient_keeps_wizard_on_step_two() {
    let server = create_test_server(create_test_app_state());
    let id = start_transfer(&server).await;
    server
        .put(&format!("/api/transfers/{id}/amount"))
        .json(&json!({ "amount": "50" }))
        .await
        .assert_status_ok();
    advance(&server, id).await;

    let mut partial = valid_recipient();
    partial["department"] = json!("");
    let body: Value = server
        .put(&format!("/api/transfers/{id}/recipient"))
        .json(&partial)
        .await
        .json();
    assert_eq!(body["can_advance"], false);

    let body: Value = server.post(&format!("/api/transfers/{id}/next")).await.json();
    assert_eq!(body["moved"], false);
    assert_eq!(body["session"]["step"], "recipient_details");
}

#[tokio::test]
async fn editing_another_step_is_rejected() {
    let server = create_test_server(create_test_app_state());
    let id = start_transfer(&server).await;

    let response = server
        .put(&format!("/api/transfers/{id}/recipient"))
        .json(&valid_recipient())
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["code"], 400);
}

#[tokio::test]
async fn method_from_other_transfer_type_is_rejected() {
    let server = create_test_server(create_test_app_state());
    let id = transfer_on_payment_step(&server, "international", "100", "zelle").await;

    server
        .put(&format!("/api/transfers/{id}/payment-method"))
        .json(&json!({ "payment_method": "moncash" }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    let body: Value = server.get(&format!("/api/transfers/{id}")).await.json();
    assert_eq!(body["data"]["selected_payment_method"], "zelle");
}

#[tokio::test]
async fn reset_returns_to_defaults() {
    let server = create_test_server(create_test_app_state());
    let id = transfer_on_payment_step(&server, "international", "100", "zelle").await;
    advance(&server, id).await;

    let response = server.post(&format!("/api/transfers/{id}/reset")).await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["id"], id.to_string());
    assert_eq!(body["step_number"], 1);
    assert_eq!(body["data"]["amount"], "");
    assert_eq!(body["data"]["receiver_details"]["first_name"], "");
    assert_eq!(body["data"]["selected_payment_method"], Value::Null);
    assert_eq!(body["payment_state"], "not_started");
    assert!(body.get("receipt").is_none());
}

#[tokio::test]
async fn cancelled_transfer_is_gone() {
    let server = create_test_server(create_test_app_state());
    let id = start_transfer(&server).await;

    server
        .delete(&format!("/api/transfers/{id}"))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let response = server.get(&format!("/api/transfers/{id}")).await;
    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["code"], 404);
}

#[tokio::test]
async fn unknown_transfer_is_not_found() {
    let server = create_test_server(create_test_app_state());
    let id = Uuid::new_v4();

    server
        .post(&format!("/api/transfers/{id}/next"))
        .await
        .assert_status(StatusCode::NOT_FOUND);
    server
        .delete(&format!("/api/transfers/{id}"))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn payment_methods_filter_by_transfer_type() {
    let server = create_test_server(create_test_app_state());

    let all: Value = server.get("/api/payment-methods").await.json();
    assert_eq!(all["methods"].as_array().map(Vec::len), Some(12));

    let national: Value = server
        .get("/api/payment-methods")
        .add_query_param("transfer_type", "national")
        .await
        .json();
    let methods = national["methods"].as_array().cloned().unwrap_or_default();
    assert!(!methods.is_empty());
    assert!(methods.iter().all(|m| m["transfer_type"] == "national"));

    let moncash = methods
        .iter()
        .find(|m| m["id"] == "moncash")
        .expect("moncash offered");
    assert_eq!(moncash["checkout"]["kind"], "hosted");
    assert_eq!(moncash["checkout"]["provider"], "moncash");
}

#[tokio::test]
async fn departments_are_listed() {
    let server = create_test_server(create_test_app_state());

    let body: Value = server.get("/api/departments").await.json();
    let departments = body["departments"].as_array().cloned().unwrap_or_default();

    assert_eq!(departments.len(), 10);
    assert!(departments.contains(&json!("Ouest")));
}

#[tokio::test]
async fn openapi_document_is_served() {
    let server = create_test_server(create_test_app_state());

    let response = server.get("/api-docs/openapi.json").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert!(body["paths"]["/api/transfers/{id}/next"].is_object());
    assert!(body["paths"]["/api/catalog/products"].is_object());
}
