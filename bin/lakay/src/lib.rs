mod observability;

pub mod utility;

pub use lakay_primitives::error::ApiError;

use crate::utility::clean_up_tasks::spawn_background_tasks;
use crate::utility::logging::setup_logging;
use crate::utility::server::serve;
use crate::utility::tasks::{build_router, load_env};
use eyre::Report;
use lakay_core::app_state::{AppConfig, AppState};
use tracing::info;

pub async fn run() -> Result<(), Report> {
    // 1. load environment variables
    load_env();

    // 2. initialize logging first (so we can log everything else)
    setup_logging();

    info!("Starting Lakay application...");

    // 3. load configuration
    let config = AppConfig::from_env()?;

    // 4. build application state
    let state = AppState::new(config)?;

    // 5. start background maintenance tasks
    spawn_background_tasks(state.clone());

    // 6. initialize metrics
    let (metric_layer, metric_handle) = observability::metrics::setup_metrics();

    // 7. build axum router
    let app = build_router(state, metric_layer, metric_handle)?;

    // 8. start HTTP server
    serve(app).await?;

    info!("Lakay application shut down gracefully");
    Ok(())
}
