//! Topskyll API Server
//!
//! Main entry point for the Topskyll salary service.

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use topskyll_api::{AppState, JobCatalog, create_router};
use topskyll_core::currency::CurrencyTable;
use topskyll_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "topskyll=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;

    let currencies = CurrencyTable::standard();
    info!(
        base = %currencies.base(),
        count = currencies.len(),
        "Currency table ready"
    );

    // Seed the job catalog
    let catalog = match &config.catalog.seed_path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read job catalog {path}"))?;
            let catalog = JobCatalog::from_json(currencies, &json)?;
            info!(path = %path, jobs = catalog.len(), "Job catalog loaded");
            catalog
        }
        None => {
            warn!("No catalog.seed_path configured, serving an empty job catalog");
            JobCatalog::default()
        }
    };

    if config.currency.strict_codes {
        info!("Strict currency codes enabled");
    }

    // Create application state
    let state = AppState::new(
        Arc::new(currencies.clone()),
        Arc::new(catalog),
        config.currency.strict_codes,
    );

    // Create router
    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
