pub use crate::app_state::AppState;
use crate::pricing::Pricing;
use crate::services::quote_service::QuoteService;
use crate::sessions::WizardSession;
pub use lakay_primitives::{
    error::ApiError,
    models::{
        payment_method::PaymentMethodId,
        transfer::ReceiverDetails,
        transfer_dto::{
            SelectPaymentMethodRequest, TransferSessionResponse, TransitionResponse,
            UpdateAmountRequest, UpdateRecipientRequest,
        },
    },
};
use tracing::{debug, info};
use uuid::Uuid;

pub struct WizardService;

impl WizardService {
    pub async fn create(state: &AppState) -> TransferSessionResponse {
        let session = state.sessions.create().await;
        info!(session_id = %session.id, "Transfer session started");

        let pricing = QuoteService::pricing(state).await;
        Self::view(&session, &pricing)
    }

    pub async fn get(state: &AppState, id: Uuid) -> Result<TransferSessionResponse, ApiError> {
        let session = state.sessions.get(id).await?;
        let pricing = QuoteService::pricing(state).await;

        Ok(Self::view(&session, &pricing))
    }

    pub async fn update_amount(
        state: &AppState,
        id: Uuid,
        req: UpdateAmountRequest,
    ) -> Result<TransferSessionResponse, ApiError> {
        let (result, session) = state
            .sessions
            .update(id, |wizard| {
                if let Some(transfer_type) = req.transfer_type {
                    wizard.set_transfer_type(transfer_type)?;
                }
                wizard.set_amount(req.amount)
            })
            .await?;
        result?;

        let pricing = QuoteService::pricing(state).await;
        Ok(Self::view(&session, &pricing))
    }

    pub async fn update_recipient(
        state: &AppState,
        id: Uuid,
        req: UpdateRecipientRequest,
    ) -> Result<TransferSessionResponse, ApiError> {
        let receiver = ReceiverDetails::from(req);
        let (result, session) = state
            .sessions
            .update(id, |wizard| wizard.set_receiver(receiver))
            .await?;
        result?;

        let pricing = QuoteService::pricing(state).await;
        Ok(Self::view(&session, &pricing))
    }

    pub async fn select_payment_method(
        state: &AppState,
        id: Uuid,
        req: SelectPaymentMethodRequest,
    ) -> Result<TransferSessionResponse, ApiError> {
        let (result, session) = state
            .sessions
            .update(id, |wizard| wizard.select_payment_method(req.payment_method))
            .await?;
        result?;

        let pricing = QuoteService::pricing(state).await;
        Ok(Self::view(&session, &pricing))
    }

    pub async fn next(state: &AppState, id: Uuid) -> Result<TransitionResponse, ApiError> {
        let pricing = QuoteService::pricing(state).await;
        let (moved, session) = state
            .sessions
            .update(id, |wizard| wizard.next(&pricing))
            .await?;

        debug!(session_id = %id, moved, step = session.wizard.step().number(), "Wizard next");
        Ok(TransitionResponse {
            moved,
            session: Self::view(&session, &pricing),
        })
    }

    pub async fn previous(state: &AppState, id: Uuid) -> Result<TransitionResponse, ApiError> {
        let (moved, session) = state
            .sessions
            .update(id, |wizard| wizard.previous())
            .await?;

        debug!(session_id = %id, moved, step = session.wizard.step().number(), "Wizard previous");
        let pricing = QuoteService::pricing(state).await;
        Ok(TransitionResponse {
            moved,
            session: Self::view(&session, &pricing),
        })
    }

    pub async fn reset(state: &AppState, id: Uuid) -> Result<TransferSessionResponse, ApiError> {
        let (_, session) = state.sessions.update(id, |wizard| wizard.reset()).await?;
        info!(session_id = %id, "Transfer session reset");

        let pricing = QuoteService::pricing(state).await;
        Ok(Self::view(&session, &pricing))
    }

    pub async fn dismiss_error(state: &AppState, id: Uuid) -> Result<TransferSessionResponse, ApiError> {
        let (_, session) = state
            .sessions
            .update(id, |wizard| wizard.dismiss_error())
            .await?;

        let pricing = QuoteService::pricing(state).await;
        Ok(Self::view(&session, &pricing))
    }

    pub async fn cancel(state: &AppState, id: Uuid) -> Result<(), ApiError> {
        state.sessions.remove(id).await?;
        info!(session_id = %id, "Transfer session cancelled");
        Ok(())
    }

    pub fn view(session: &WizardSession, pricing: &Pricing) -> TransferSessionResponse {
        let wizard = &session.wizard;

        TransferSessionResponse {
            id: session.id,
            step: wizard.step(),
            step_number: wizard.step().number(),
            data: wizard.data().clone(),
            can_advance: wizard.can_advance(),
            quote: wizard.quote(pricing).map(Into::into),
            payment_state: wizard.payment_state(),
            payment_error: wizard.payment_error().map(str::to_string),
            receipt: wizard.receipt().cloned(),
            created_at: session.created_at,
            updated_at: session.updated_at,
        }
    }
}
