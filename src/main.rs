// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Liberty Parks API Server
//!
//! Serves park recommendations, community polls and issue reports for the
//! Liberty Township parks site.

use liberty_parks::{config::Config, db::BackendDb, services::ParkCatalog, AppState};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured JSON logging
    init_logging()?;

    let config = Config::from_env()?;
    tracing::info!(port = config.port, "Starting Liberty Parks API");

    let db = match &config.backend_url {
        Some(url) => BackendDb::new(url, &config.backend_api_key),
        None => {
            tracing::warn!("BACKEND_URL not set, using in-memory store");
            BackendDb::new_in_memory()
        }
    };

    let catalog = match &config.parks_data_path {
        Some(path) => {
            tracing::info!(path = %path, "Loading park catalog");
            ParkCatalog::load_from_file(path)?
        }
        None => ParkCatalog::builtin()?,
    };
    tracing::info!(count = catalog.parks().len(), "Park catalog loaded");

    let state = Arc::new(AppState::new(config.clone(), db, catalog));

    // Build router
    let app = liberty_parks::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() -> anyhow::Result<()> {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("liberty_parks=debug".parse()?)
                .add_directive("info".parse()?),
        )
        .with(format)
        .init();
    Ok(())
}
