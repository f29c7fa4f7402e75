//! # Tasksum Server
//!
//! Production binary for the task summarizer service. Wires configuration,
//! logging, the Postgres store, the HTTP summarization client, the lifecycle
//! engine, and the Axum request layer.
//!
//! ## Usage
//!
//! ```bash
//! DATABASE_URL=postgres://localhost/tasksum \
//! TASKSUM_SUMMARIZER__ENDPOINT=https://api.example.com/v1/summarize \
//! TASKSUM_SUMMARIZER__API_KEY=secret \
//! cargo run --bin tasksum-server
//! ```

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use tokio::signal;
use tracing::info;

use tasksum_core::lifecycle::TaskLifecycleEngine;
use tasksum_core::store::PgTaskStore;
use tasksum_core::summarizer::HttpSummaryClient;
use tasksum_core::web::{app_router, AppState};
use tasksum_core::{logging, TasksumConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_structured_logging();

    info!("Starting Tasksum Server...");
    info!("   Version: {}", env!("CARGO_PKG_VERSION"));

    let config = TasksumConfig::load().context("Failed to load configuration")?;

    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .acquire_timeout(Duration::from_millis(config.database.acquire_timeout_ms))
        .connect(&config.database.url)
        .await
        .context("Failed to connect to database")?;
    info!(
        max_connections = config.database.max_connections,
        "Connected to database"
    );

    let store = Arc::new(PgTaskStore::new(pool));
    let summarizer =
        Arc::new(HttpSummaryClient::new(&config.summarizer).context("Failed to build summarization client")?);
    let engine = Arc::new(TaskLifecycleEngine::new(store, summarizer));

    let app = app_router(AppState::new(engine));

    let listener = tokio::net::TcpListener::bind(&config.web.bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", config.web.bind_address))?;
    info!(bind_address = %config.web.bind_address, "Tasksum Server started");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Tasksum Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install shutdown signal handler");
        return;
    }
    info!("Shutdown signal received");
}
