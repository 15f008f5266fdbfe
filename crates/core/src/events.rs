use lakay_primitives::models::enum_types::PaymentProvider;
use tokio::sync::broadcast;
use tracing::debug;
use uuid::Uuid;

const EVENT_CAPACITY: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentEvent {
    Initiated {
        session_id: Uuid,
        provider: PaymentProvider,
        provider_reference: String,
    },
    Succeeded {
        session_id: Uuid,
        provider: PaymentProvider,
        provider_reference: String,
    },
    Failed {
        session_id: Uuid,
        provider: PaymentProvider,
        message: String,
    },
}

/// Fan-out channel for payment outcomes. Producers hold the state and call
/// `publish`; listeners obtain their own receiver through `subscribe`.
#[derive(Clone)]
pub struct PaymentEvents {
    sender: broadcast::Sender<PaymentEvent>,
}

impl Default for PaymentEvents {
    fn default() -> Self {
        Self::new(EVENT_CAPACITY)
    }
}

impl PaymentEvents {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn publish(&self, event: PaymentEvent) {
        if self.sender.send(event).is_err() {
            debug!("Payment event dropped: no active listeners");
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<PaymentEvent> {
        self.sender.subscribe()
    }
}
