use crate::config::swagger_config::ApiDoc;
use crate::handlers::{
    catalog::{flash_deals, get_product, hero_banners, list_products},
    health::health_check,
    payment_methods::{list_departments, list_payment_methods},
    payments::{initiate_payment, moncash_return, paypal_capture, paypal_order},
    quote::{exchange_rate, quote},
    transfer_session::{cancel_transfer, create_transfer, get_transfer},
    transfer_steps::{dismiss_error, next_step, previous_step, reset_transfer},
    update_transfer::{select_payment_method, update_amount, update_recipient},
};
use axum::{
    extract::State,
    middleware,
    response::IntoResponse,
    routing::{get, post, put},
    Router,
};
use lakay_core::AppState;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::{
    request_id::{MakeRequestUuid, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::warn;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub fn create_router(state: Arc<AppState>) -> Router {
    let mut router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(reference_routes())
        .merge(transfer_routes())
        .merge(payment_routes())
        .merge(catalog_routes())
        .layer(axum::extract::DefaultBodyLimit::max(64 * 1024))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            https_redirect_middleware,
        ))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http()),
        );

    // the governor keys on peer IP, which test servers do not provide
    if !state.config.is_test() {
        match GovernorConfigBuilder::default()
            .per_second(2)
            .burst_size(20)
            .finish()
        {
            Some(conf) => router = router.layer(GovernorLayer::new(Arc::new(conf))),
            None => warn!("Invalid rate limit configuration, rate limiting disabled"),
        }
    }

    router.with_state(state)
}

fn reference_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/payment-methods", get(list_payment_methods))
        .route("/api/departments", get(list_departments))
        .route("/api/quote", post(quote))
        .route("/api/exchange-rate", get(exchange_rate))
}

fn transfer_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/transfers", post(create_transfer))
        .route("/api/transfers/{id}", get(get_transfer).delete(cancel_transfer))
        .route("/api/transfers/{id}/amount", put(update_amount))
        .route("/api/transfers/{id}/recipient", put(update_recipient))
        .route("/api/transfers/{id}/payment-method", put(select_payment_method))
        .route("/api/transfers/{id}/next", post(next_step))
        .route("/api/transfers/{id}/previous", post(previous_step))
        .route("/api/transfers/{id}/reset", post(reset_transfer))
        .route("/api/transfers/{id}/dismiss-error", post(dismiss_error))
}

fn payment_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/transfers/{id}/payments", post(initiate_payment))
        .route("/api/transfers/{id}/paypal/capture", post(paypal_capture))
        .route("/api/transfers/{id}/moncash/return", get(moncash_return))
        .route("/api/paypal/orders/{order_id}", get(paypal_order))
}

fn catalog_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/catalog/products", get(list_products))
        .route("/api/catalog/products/{id}", get(get_product))
        .route("/api/catalog/flash-deals", get(flash_deals))
        .route("/api/catalog/banners", get(hero_banners))
}

async fn https_redirect_middleware(
    State(state): State<Arc<AppState>>,
    req: axum::extract::Request,
    next: middleware::Next,
) -> axum::response::Response {
    if state.config.is_production() {
        let headers = req.headers();
        let proto = headers
            .get("x-forwarded-proto")
            .and_then(|h| h.to_str().ok());

        if let Some("http") = proto {
            let host = headers
                .get("host")
                .and_then(|h| h.to_str().ok())
                .unwrap_or("localhost");

            let path_and_query = req
                .uri()
                .path_and_query()
                .map(|pq| pq.as_str())
                .unwrap_or("");
            let redirect_url = format!("https://{}{}", host, path_and_query);

            return axum::response::Redirect::permanent(&redirect_url).into_response();
        }
    }

    next.run(req).await
}
