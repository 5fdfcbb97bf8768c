//! Server binary: reads config from the environment (and `.env`), opens the
//! PostgreSQL pool, and serves the API.

use pastebin_api::{app, AppConfig, AppState, HttpLimits, PgStore};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("pastebin_api=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::from_env()?;
    tracing::debug!(?config, "configuration loaded");

    let store = PgStore::connect(&config).await?;
    let state = AppState::from_store(store);
    let router = app(state, HttpLimits::from(&config));

    let listener = TcpListener::bind(config.bind_addr()?).await?;
    tracing::info!("Server is up and running on {}", listener.local_addr()?);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
    tracing::info!("shutting down");
}
