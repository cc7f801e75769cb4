// Main entry point for the court-auction analysis API server

use std::sync::Arc;

use analysis::{AnalystConfig, RiskAnalyst};
use anyhow::{Context, Result};
use server_core::app::build_app;
use server_core::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,server_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting court-auction analysis API");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(
        model = %config.openai_model,
        scope = ?config.narrative_scope,
        "Configuration loaded"
    );

    // Build the analyst with its credential scoped to this instance
    let analyst = Arc::new(RiskAnalyst::new(
        AnalystConfig::new(config.openai_api_key.clone())
            .with_model(config.openai_model.clone())
            .with_scope(config.narrative_scope),
    ));

    // Build application
    let app = build_app(analyst);

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
