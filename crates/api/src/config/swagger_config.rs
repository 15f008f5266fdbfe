use crate::handlers::{
    catalog::{__path_flash_deals, __path_get_product, __path_hero_banners, __path_list_products},
    health::__path_health_check,
    payment_methods::{__path_list_departments, __path_list_payment_methods},
    payments::{
        __path_initiate_payment, __path_moncash_return, __path_paypal_capture, __path_paypal_order,
    },
    quote::{__path_exchange_rate, __path_quote},
    transfer_session::{__path_cancel_transfer, __path_create_transfer, __path_get_transfer},
    transfer_steps::{__path_dismiss_error, __path_next_step, __path_previous_step, __path_reset_transfer},
    update_transfer::{__path_select_payment_method, __path_update_amount, __path_update_recipient},
};
use lakay_primitives::error::ApiErrorResponse;
use lakay_primitives::models::*;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Lakay API",
        description = "Money transfers to Haiti and the Lakay shop catalog"
    ),
    paths(
        health_check,
        list_payment_methods, list_departments,
        quote, exchange_rate,
        create_transfer, get_transfer, cancel_transfer,
        update_amount, update_recipient, select_payment_method,
        next_step, previous_step, reset_transfer, dismiss_error,
        initiate_payment, paypal_capture, moncash_return, paypal_order,
        list_products, get_product, flash_deals, hero_banners
    ),
    components(schemas(
        ApiErrorResponse, HealthStatus,
        CurrencyCode, TransferType, WizardStep, PaymentProvider, PaymentState,
        PaymentMethodId, Checkout, PaymentMethodDto, PaymentMethodsResponse, DepartmentsResponse,
        QuoteRequest, QuoteResponse, RateSource, ExchangeRateResponse,
        ReceiverDetails, TransferData, Receipt,
        UpdateAmountRequest, UpdateRecipientRequest, SelectPaymentMethodRequest,
        TransferSessionResponse, TransitionResponse,
        InitiatePaymentResponse, PayPalCaptureRequest, PaymentConfirmation, OrderResponse,
        Product, ProductImage, HeroBanner, ProductDetail, ProductsResponse, BannersResponse
    )),
    tags(
        (name = "Health", description = "Service liveness"),
        (name = "Reference", description = "Payment methods and Haitian departments"),
        (name = "Quote", description = "Fees and exchange rate"),
        (name = "Transfers", description = "Four-step transfer wizard"),
        (name = "Payments", description = "PayPal and MonCash hosted checkout"),
        (name = "Catalog", description = "Shop products, flash deals and banners")
    )
)]
pub struct ApiDoc;
