//! Process entry point for the users relay.
//!
//! Loads `.env`, initializes tracing, reads `PORT` once and starts the
//! Axum server.

use anyhow::Result;
use relay_config::RelayConfig;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .compact()
        .init();

    let config = RelayConfig::from_env()?;
    relay_server::serve(config).await
}
