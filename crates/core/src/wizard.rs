//! The four-step transfer flow: amount, recipient, payment method, receipt.
//!
//! Steps only move one at a time. Moving forward requires the current step's
//! fields to be filled in; when they are not, `next` leaves everything as it
//! was and reports `false`. Fields can only be edited while their own step is
//! showing, so everything behind the current step stays valid. A hosted
//! method reaches the receipt only through `complete_payment`.

use crate::pricing::Pricing;
use chrono::Utc;
use lakay_primitives::error::ApiError;
use lakay_primitives::fees::Quote;
use lakay_primitives::models::enum_types::{PaymentProvider, PaymentState, TransferType, WizardStep};
use lakay_primitives::models::payment_method::{PaymentMethod, PaymentMethodId};
use lakay_primitives::models::receipt::Receipt;
use lakay_primitives::models::transfer::{ReceiverDetails, TransferData};
use lakay_primitives::money::{format_minor, parse_amount, unscale_rate};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct TransferWizard {
    step: WizardStep,
    data: TransferData,
    reference: Uuid,
    payment_state: PaymentState,
    provider_reference: Option<String>,
    payment_error: Option<String>,
    receipt: Option<Receipt>,
}

impl Default for TransferWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl TransferWizard {
    pub fn new() -> Self {
        Self {
            step: WizardStep::default(),
            data: TransferData::default(),
            reference: Uuid::new_v4(),
            payment_state: PaymentState::default(),
            provider_reference: None,
            payment_error: None,
            receipt: None,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn data(&self) -> &TransferData {
        &self.data
    }

    /// Order id handed to payment providers; regenerated on reset.
    pub fn reference(&self) -> Uuid {
        self.reference
    }

    pub fn payment_state(&self) -> PaymentState {
        self.payment_state
    }

    pub fn provider_reference(&self) -> Option<&str> {
        self.provider_reference.as_deref()
    }

    pub fn payment_error(&self) -> Option<&str> {
        self.payment_error.as_deref()
    }

    pub fn receipt(&self) -> Option<&Receipt> {
        self.receipt.as_ref()
    }

    pub fn amount_minor(&self) -> Option<i64> {
        parse_amount(&self.data.amount).ok().filter(|amount| *amount > 0)
    }

    pub fn selected_method(&self) -> Option<&'static PaymentMethod> {
        self.data
            .selected_payment_method
            .map(PaymentMethodId::descriptor)
            .filter(|method| method.supports(self.data.transfer_type))
    }

    pub fn quote(&self, pricing: &Pricing) -> Option<Quote> {
        let amount = self.amount_minor()?;
        pricing.quote_minor(self.data.transfer_type, amount).ok()
    }

    pub fn can_advance(&self) -> bool {
        match self.step {
            WizardStep::AmountEntry => self.amount_minor().is_some(),
            WizardStep::RecipientDetails => self.data.receiver_details.is_complete(),
            WizardStep::PaymentMethod => match self.selected_method() {
                Some(method) if method.hosted_provider().is_some() => {
                    self.payment_state == PaymentState::Completed
                }
                Some(_) => true,
                None => false,
            },
            WizardStep::Receipt => false,
        }
    }

    pub fn next(&mut self, pricing: &Pricing) -> bool {
        if !self.can_advance() {
            return false;
        }
        let Some(following) = self.step.following() else {
            return false;
        };

        if following == WizardStep::Receipt {
            if self.payment_state != PaymentState::Completed {
                self.payment_state = PaymentState::Pending;
            }
            match self.issue_receipt(pricing) {
                Some(receipt) => self.receipt = Some(receipt),
                None => return false,
            }
        }

        self.step = following;
        true
    }

    pub fn previous(&mut self) -> bool {
        let Some(preceding) = self.step.preceding() else {
            return false;
        };

        if self.step == WizardStep::Receipt {
            self.receipt = None;
            if self.payment_state == PaymentState::Pending {
                self.payment_state = PaymentState::NotStarted;
            }
        }

        self.step = preceding;
        true
    }

    /// Back to step one with every field at its default.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn set_transfer_type(&mut self, transfer_type: TransferType) -> Result<(), ApiError> {
        self.ensure_editable(WizardStep::AmountEntry, "Transfer type")?;

        if self.data.transfer_type != transfer_type {
            self.data.transfer_type = transfer_type;
            if self.selected_method().is_none() {
                self.data.selected_payment_method = None;
            }
            self.clear_payment_attempt();
        }
        Ok(())
    }

    pub fn set_amount(&mut self, amount: String) -> Result<(), ApiError> {
        self.ensure_editable(WizardStep::AmountEntry, "Amount")?;

        if self.data.amount != amount {
            self.data.amount = amount;
            self.clear_payment_attempt();
        }
        Ok(())
    }

    pub fn set_receiver(&mut self, receiver: ReceiverDetails) -> Result<(), ApiError> {
        self.ensure_editable(WizardStep::RecipientDetails, "Recipient")?;

        self.data.receiver_details = receiver;
        Ok(())
    }

    pub fn select_payment_method(&mut self, method: PaymentMethodId) -> Result<(), ApiError> {
        self.ensure_editable(WizardStep::PaymentMethod, "Payment method")?;

        if !method.descriptor().supports(self.data.transfer_type) {
            return Err(ApiError::BadRequest(format!(
                "{} is not available for {} transfers",
                method.descriptor().name,
                self.data.transfer_type
            )));
        }

        if self.data.selected_payment_method != Some(method) {
            self.data.selected_payment_method = Some(method);
            self.clear_payment_attempt();
        }
        Ok(())
    }

    /// Hosted provider that would settle the current selection, if any.
    pub fn hosted_provider(&self) -> Option<PaymentProvider> {
        self.selected_method().and_then(PaymentMethod::hosted_provider)
    }

    pub fn begin_payment(&mut self, provider_reference: String) -> Result<(), ApiError> {
        self.ensure_editable(WizardStep::PaymentMethod, "Payment")?;

        self.payment_state = PaymentState::RequiresAction;
        self.provider_reference = Some(provider_reference);
        self.payment_error = None;
        Ok(())
    }

    /// Keeps the flow on the payment step with a message the sender can dismiss.
    pub fn record_payment_failure(&mut self, message: impl Into<String>) {
        if self.payment_state == PaymentState::Completed {
            return;
        }
        self.payment_state = PaymentState::Failed;
        self.payment_error = Some(message.into());
    }

    pub fn dismiss_error(&mut self) {
        self.payment_error = None;
    }

    /// Marks the hosted payment captured and moves straight to the receipt.
    pub fn complete_payment(&mut self, provider_reference: String, pricing: &Pricing) -> Result<(), ApiError> {
        if self.payment_state == PaymentState::Completed {
            return Ok(());
        }
        if self.step != WizardStep::PaymentMethod {
            return Err(ApiError::BadRequest(
                "Payment can only be completed from the payment step".into(),
            ));
        }

        self.payment_state = PaymentState::Completed;
        self.provider_reference = Some(provider_reference);
        self.payment_error = None;

        let receipt = self
            .issue_receipt(pricing)
            .ok_or_else(|| ApiError::Internal("Unable to issue receipt for paid transfer".into()))?;
        self.receipt = Some(receipt);
        self.step = WizardStep::Receipt;
        Ok(())
    }

    fn issue_receipt(&self, pricing: &Pricing) -> Option<Receipt> {
        let quote = self.quote(pricing)?;
        let method = self.selected_method()?;

        Some(Receipt {
            reference: self.reference,
            transfer_type: quote.transfer_type,
            amount: format_minor(quote.amount),
            fee: format_minor(quote.fee),
            total: format_minor(quote.total),
            send_currency: quote.send_currency,
            receive_amount: format_minor(quote.receive_amount),
            receive_currency: quote.receive_currency,
            exchange_rate: unscale_rate(quote.exchange_rate_scaled),
            recipient_name: self.data.receiver_details.full_name(),
            recipient_phone: self.data.receiver_details.phone_number.trim().to_string(),
            payment_method: method.id,
            payment_state: self.payment_state,
            provider_reference: self.provider_reference.clone(),
            issued_at: Utc::now(),
        })
    }

    fn ensure_editable(&self, step: WizardStep, what: &str) -> Result<(), ApiError> {
        if self.payment_state == PaymentState::Completed {
            return Err(ApiError::BadRequest(
                "Transfer is already paid; reset to start a new one".into(),
            ));
        }
        if self.step != step {
            return Err(ApiError::BadRequest(format!(
                "{} can only be changed on step {}",
                what,
                step.number()
            )));
        }
        Ok(())
    }

    fn clear_payment_attempt(&mut self) {
        if matches!(
            self.payment_state,
            PaymentState::RequiresAction | PaymentState::Failed
        ) {
            self.payment_state = PaymentState::NotStarted;
            self.provider_reference = None;
        }
    }
}
