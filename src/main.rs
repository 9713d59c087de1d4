//! HTTP server for the payroll engine.
//!
//! Environment:
//! - `PAYROLL_BIND_ADDR`: listen address, default `0.0.0.0:3000`
//! - `PAYROLL_RATES_PATH`: optional YAML rate table replacing the built-in one
//! - `RUST_LOG`: tracing filter, default `info`

use std::env;

use jamaica_payroll::api::{AppState, create_router};
use jamaica_payroll::config::ConfigLoader;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let loader = match env::var("PAYROLL_RATES_PATH") {
        Ok(path) => ConfigLoader::load(path)?,
        Err(_) => ConfigLoader::builtin(),
    };
    info!(tax_year = loader.config().tax_year, "Rate configuration ready");

    let bind_addr = env::var("PAYROLL_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!(address = %bind_addr, "Payroll API listening");

    axum::serve(listener, create_router(AppState::new(loader))).await?;
    Ok(())
}
