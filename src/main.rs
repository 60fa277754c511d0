// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Bless uptime tracker service
//!
//! Runs one tracking cycle at startup and then one per configured interval
//! until interrupted.

use bless_uptime_tracker::{
    build_scheduler,
    config::Config,
    db::FirestoreDb,
    services::{load_accounts, BlessClient, TokioSleeper},
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(
        project = %config.gcp_project_id,
        interval_secs = config.cycle_interval.as_secs(),
        "Starting Bless uptime tracker"
    );

    // Initialize Firestore database
    let db = FirestoreDb::new(&config.gcp_project_id)
        .await
        .expect("Failed to connect to Firestore");

    let accounts = load_accounts(&config.accounts_file)?;

    let client = BlessClient::new(&config.api_base_url, config.request_timeout)?;
    tracing::info!(base_url = %config.api_base_url, "Bless API client initialized");

    let scheduler = build_scheduler(
        &config,
        Arc::new(client),
        Arc::new(db.clone()),
        Arc::new(TokioSleeper),
    );

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    };

    scheduler.run_until(&accounts, shutdown).await;

    drop(scheduler);
    db.close();
    tracing::info!("Shut down cleanly");
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("bless_uptime_tracker=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
