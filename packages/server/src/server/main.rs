// Main entry point for the product Q&A API server

use std::sync::Arc;

use anyhow::{Context, Result};
use server_core::{kernel::build_engine, server::build_app, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,product_qa=debug,server_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Product Q&A API");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(mode = ?config.mode, "Configuration loaded");

    // Load catalog
    let engine = Arc::new(build_engine(&config).await?);
    tracing::info!(products = engine.snapshot().len(), "Catalog loaded");

    // Build application
    let app = build_app(engine);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
