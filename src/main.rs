//! HTTP server for the care payments engine.
//!
//! Reads the commission configuration from `CARE_PAYMENTS_CONFIG` (default
//! `./config/payments.yaml`) and listens on `CARE_PAYMENTS_ADDR` (default
//! `0.0.0.0:3000`).

use care_payments::api::{AppState, create_router};
use care_payments::config::ConfigLoader;
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_PATH: &str = "./config/payments.yaml";
const DEFAULT_ADDR: &str = "0.0.0.0:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config_path =
        std::env::var("CARE_PAYMENTS_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let addr = std::env::var("CARE_PAYMENTS_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());

    let config = ConfigLoader::load(&config_path)?;
    let router = create_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "care-payments listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            tracing::info!("shutting down");
        })
        .await?;

    Ok(())
}
