pub use crate::app_state::AppState;
use crate::events::PaymentEvent;
use crate::pricing::Pricing;
use crate::services::quote_service::QuoteService;
pub use lakay_primitives::{
    error::ApiError,
    models::{
        enum_types::{CurrencyCode, PaymentProvider, PaymentState, WizardStep},
        payment_dto::{InitiatePaymentResponse, OrderResponse, PaymentConfirmation},
    },
};
use lakay_primitives::money::{format_minor, parse_amount, MINOR_PER_MAJOR};
use tracing::{error, info, warn};
use uuid::Uuid;

/// What a hosted payment is about, captured before any network call so the
/// session lock is never held across one.
struct PaymentContext {
    reference: Uuid,
    provider: PaymentProvider,
    total: i64,
    currency: CurrencyCode,
}

pub struct PaymentService;

impl PaymentService {
    pub async fn initiate(state: &AppState, session_id: Uuid) -> Result<InitiatePaymentResponse, ApiError> {
        let pricing = QuoteService::pricing(state).await;
        let ctx = Self::context(state, session_id, &pricing).await?;

        let created = match ctx.provider {
            PaymentProvider::Paypal => {
                let return_url = format!(
                    "{}/transfer/{}/paypal/return",
                    state.config.app_url, session_id
                );
                let cancel_url = format!("{}/transfer/{}", state.config.app_url, session_id);

                state
                    .paypal
                    .create_order(ctx.reference, ctx.total, ctx.currency, &return_url, &cancel_url)
                    .await
                    .map(|order| (order.order_id, order.approval_url))
            }
            PaymentProvider::Moncash => state
                .moncash
                .create_payment(&ctx.reference.to_string(), ctx.total)
                .await
                .map(|checkout| (checkout.payment_token, checkout.redirect_url)),
        };

        let (provider_reference, redirect_url) = match created {
            Ok(created) => created,
            Err(e) => return Err(Self::fail(state, session_id, &ctx, e).await),
        };

        let (result, _) = state
            .sessions
            .update(session_id, |wizard| {
                if wizard.reference() != ctx.reference {
                    return Err(changed_during_payment());
                }
                wizard.begin_payment(provider_reference.clone())
            })
            .await?;
        result?;

        info!(
            session_id = %session_id,
            provider = %ctx.provider,
            provider_reference = %provider_reference,
            "Hosted payment initiated"
        );
        state.events.publish(PaymentEvent::Initiated {
            session_id,
            provider: ctx.provider,
            provider_reference: provider_reference.clone(),
        });

        Ok(InitiatePaymentResponse {
            provider: ctx.provider,
            redirect_url,
            provider_reference,
            amount: format_minor(ctx.total),
            currency: ctx.currency,
        })
    }

    pub async fn capture_paypal(
        state: &AppState,
        session_id: Uuid,
        order_id: String,
    ) -> Result<PaymentConfirmation, ApiError> {
        let pricing = QuoteService::pricing(state).await;
        let session = state.sessions.get(session_id).await?;
        let wizard = &session.wizard;

        if let Some(done) = Self::already_completed(session_id, wizard) {
            return Ok(done);
        }
        if wizard.hosted_provider() != Some(PaymentProvider::Paypal) {
            return Err(ApiError::BadRequest("Transfer is not paid with PayPal".into()));
        }
        if !awaiting_provider(wizard.payment_state())
            || wizard.provider_reference() != Some(order_id.as_str())
        {
            return Err(ApiError::BadRequest("Unknown PayPal order for this transfer".into()));
        }

        let ctx = Self::context(state, session_id, &pricing).await?;

        let capture = match state.paypal.capture_order(&order_id).await {
            Ok(capture) => capture,
            Err(e) => return Err(Self::fail(state, session_id, &ctx, e).await),
        };

        let captured = parse_amount(&capture.value).ok();
        if capture.currency != ctx.currency.to_string() || captured != Some(ctx.total) {
            warn!(
                session_id = %session_id,
                currency = %capture.currency,
                value = %capture.value,
                expected = %format_minor(ctx.total),
                "PayPal capture does not match transfer total"
            );
            let mismatch = ApiError::Payment("Captured amount does not match transfer total".into());
            return Err(Self::fail(state, session_id, &ctx, mismatch).await);
        }

        Self::complete(state, session_id, &ctx, capture.capture_id, &pricing).await
    }

    pub async fn confirm_moncash(
        state: &AppState,
        session_id: Uuid,
        transaction_id: String,
    ) -> Result<PaymentConfirmation, ApiError> {
        let pricing = QuoteService::pricing(state).await;
        let session = state.sessions.get(session_id).await?;
        let wizard = &session.wizard;

        if let Some(done) = Self::already_completed(session_id, wizard) {
            return Ok(done);
        }
        if wizard.hosted_provider() != Some(PaymentProvider::Moncash) {
            return Err(ApiError::BadRequest("Transfer is not paid with MonCash".into()));
        }
        if !awaiting_provider(wizard.payment_state()) || wizard.provider_reference().is_none() {
            return Err(ApiError::BadRequest("No MonCash payment in progress".into()));
        }

        let ctx = Self::context(state, session_id, &pricing).await?;

        let payment = match state.moncash.retrieve_transaction(&transaction_id).await {
            Ok(payment) => payment,
            Err(e) => return Err(Self::fail(state, session_id, &ctx, e).await),
        };

        let paid = (payment.cost * MINOR_PER_MAJOR as f64).round() as i64;
        let problem = if payment.reference != ctx.reference.to_string() {
            Some("MonCash payment belongs to another order".to_string())
        } else if !payment.message.eq_ignore_ascii_case("successful") {
            Some(format!("MonCash payment not successful: {}", payment.message))
        } else if paid < ctx.total {
            Some("MonCash payment is less than the transfer total".to_string())
        } else {
            None
        };

        if let Some(problem) = problem {
            warn!(
                session_id = %session_id,
                transaction_id = %payment.transaction_id,
                reason = %problem,
                "MonCash payment rejected"
            );
            return Err(Self::fail(state, session_id, &ctx, ApiError::Payment(problem)).await);
        }

        Self::complete(state, session_id, &ctx, payment.transaction_id, &pricing).await
    }

    pub async fn paypal_order_status(state: &AppState, order_id: &str) -> Result<OrderResponse, ApiError> {
        let status = state.paypal.order_status(order_id).await?;
        Ok(OrderResponse { status })
    }

    async fn context(state: &AppState, session_id: Uuid, pricing: &Pricing) -> Result<PaymentContext, ApiError> {
        let session = state.sessions.get(session_id).await?;
        let wizard = &session.wizard;

        if wizard.payment_state() == PaymentState::Completed {
            return Err(ApiError::BadRequest("Transfer is already paid".into()));
        }
        if wizard.step() != WizardStep::PaymentMethod {
            return Err(ApiError::BadRequest(
                "Payment can only start on the payment step".into(),
            ));
        }

        let method = wizard
            .selected_method()
            .ok_or_else(|| ApiError::BadRequest("Select a payment method first".into()))?;
        let provider = method.hosted_provider().ok_or_else(|| {
            ApiError::BadRequest(format!(
                "{} is settled offline; continue to the receipt",
                method.name
            ))
        })?;
        let quote = wizard
            .quote(pricing)
            .ok_or_else(|| ApiError::BadRequest("Transfer amount is not valid".into()))?;

        Ok(PaymentContext {
            reference: wizard.reference(),
            provider,
            total: quote.total,
            currency: quote.send_currency,
        })
    }

    async fn complete(
        state: &AppState,
        session_id: Uuid,
        ctx: &PaymentContext,
        provider_reference: String,
        pricing: &Pricing,
    ) -> Result<PaymentConfirmation, ApiError> {
        let (result, _) = state
            .sessions
            .update(session_id, |wizard| {
                if wizard.reference() != ctx.reference {
                    return Err(changed_during_payment());
                }
                wizard.complete_payment(provider_reference.clone(), pricing)
            })
            .await?;
        result?;

        info!(
            session_id = %session_id,
            provider = %ctx.provider,
            provider_reference = %provider_reference,
            "Hosted payment completed"
        );
        state.events.publish(PaymentEvent::Succeeded {
            session_id,
            provider: ctx.provider,
            provider_reference: provider_reference.clone(),
        });

        Ok(PaymentConfirmation {
            session_id,
            status: PaymentState::Completed,
            provider_reference,
        })
    }

    /// Records the failure on the session so the sender sees it on the payment
    /// step, then hands the original error back to the caller. A session that
    /// was reset meanwhile is left untouched.
    async fn fail(state: &AppState, session_id: Uuid, ctx: &PaymentContext, err: ApiError) -> ApiError {
        let provider = ctx.provider;
        let message = match &err {
            ApiError::Payment(msg) => msg.clone(),
            other => other.to_string(),
        };

        error!(
            session_id = %session_id,
            provider = %provider,
            error = %message,
            "Hosted payment failed"
        );

        let recorded = state
            .sessions
            .update(session_id, |wizard| {
                if wizard.reference() != ctx.reference {
                    return false;
                }
                wizard.record_payment_failure(message.clone());
                true
            })
            .await;

        match recorded {
            Ok((true, _)) => {}
            Ok((false, _)) => {
                warn!(session_id = %session_id, "Transfer was reset; payment failure not recorded")
            }
            Err(e) => warn!(session_id = %session_id, error = %e, "Could not record payment failure"),
        }

        state.events.publish(PaymentEvent::Failed {
            session_id,
            provider,
            message,
        });

        err
    }

    fn already_completed(
        session_id: Uuid,
        wizard: &crate::wizard::TransferWizard,
    ) -> Option<PaymentConfirmation> {
        (wizard.payment_state() == PaymentState::Completed).then(|| PaymentConfirmation {
            session_id,
            status: PaymentState::Completed,
            provider_reference: wizard.provider_reference().unwrap_or_default().to_string(),
        })
    }
}

/// A failed confirmation can be retried against the same provider reference.
fn awaiting_provider(payment_state: PaymentState) -> bool {
    matches!(
        payment_state,
        PaymentState::RequiresAction | PaymentState::Failed
    )
}

fn changed_during_payment() -> ApiError {
    ApiError::BadRequest("Transfer changed while contacting the payment provider".into())
}
