use lakay_core::{AppState, PaymentEvent};
use std::sync::Arc;
use tokio::sync::broadcast::error::RecvError;
use tokio::time::interval;
use tracing::{debug, error, info, warn};

pub fn spawn_background_tasks(state: Arc<AppState>) {
    let state_clone = state.clone();
    tokio::spawn(async move {
        info!("Starting idle transfer session sweeper");
        sweep_idle_sessions(state_clone).await;
    });

    let state_clone = state.clone();
    tokio::spawn(async move {
        info!("Starting payment event listener");
        log_payment_events(state_clone).await;
    });

    info!("Background maintenance tasks spawned");
}

async fn sweep_idle_sessions(state: Arc<AppState>) {
    let details = &state.config.session_details;
    let mut interval = interval(details.sweep_interval);
    interval.tick().await;

    loop {
        interval.tick().await;

        match state.sessions.purge_idle(details.session_ttl).await {
            0 => debug!("No idle transfer sessions"),
            n => info!("Removed {} idle transfer sessions", n),
        }
    }
}

async fn log_payment_events(state: Arc<AppState>) {
    let mut events = state.events.subscribe();

    loop {
        match events.recv().await {
            Ok(PaymentEvent::Initiated {
                session_id,
                provider,
                provider_reference,
            }) => info!(%session_id, %provider, %provider_reference, "payment.initiated"),
            Ok(PaymentEvent::Succeeded {
                session_id,
                provider,
                provider_reference,
            }) => info!(%session_id, %provider, %provider_reference, "payment.succeeded"),
            Ok(PaymentEvent::Failed {
                session_id,
                provider,
                message,
            }) => warn!(%session_id, %provider, %message, "payment.failed"),
            Err(RecvError::Lagged(skipped)) => {
                warn!("Payment event listener lagged, skipped {} events", skipped)
            }
            Err(RecvError::Closed) => {
                error!("Payment event channel closed");
                break;
            }
        }
    }
}
