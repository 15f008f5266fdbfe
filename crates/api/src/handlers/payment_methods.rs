use axum::extract::{Json, Query};
use lakay_primitives::models::payment_dto::{
    DepartmentsResponse, PaymentMethodDto, PaymentMethodsQuery, PaymentMethodsResponse,
};
use lakay_primitives::models::payment_method::{payment_methods_for, PAYMENT_METHODS};
use lakay_primitives::models::transfer::DEPARTMENTS;

#[utoipa::path(
    get,
    path = "/api/payment-methods",
    tag = "Reference",
    summary = "List payment methods",
    description = "Static catalog of the ways a sender can pay. Filter by `transfer_type` to get only \
                   the methods offered for international (USD) or national (HTG) transfers.",
    params(PaymentMethodsQuery),
    responses(
        (status = 200, description = "Payment methods", body = PaymentMethodsResponse),
    ),
)]
pub async fn list_payment_methods(
    Query(query): Query<PaymentMethodsQuery>,
) -> Json<PaymentMethodsResponse> {
    let methods = match query.transfer_type {
        Some(transfer_type) => payment_methods_for(transfer_type)
            .map(PaymentMethodDto::from)
            .collect(),
        None => PAYMENT_METHODS.iter().map(PaymentMethodDto::from).collect(),
    };

    Json(PaymentMethodsResponse { methods })
}

#[utoipa::path(
    get,
    path = "/api/departments",
    tag = "Reference",
    summary = "List Haitian departments",
    responses(
        (status = 200, description = "Departments", body = DepartmentsResponse),
    ),
)]
pub async fn list_departments() -> Json<DepartmentsResponse> {
    Json(DepartmentsResponse {
        departments: DEPARTMENTS.iter().map(|d| d.to_string()).collect(),
    })
}
