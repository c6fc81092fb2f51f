// src/bin/stock_server.rs

use std::sync::Arc;

use stock_simulator::{AppState, ServerConfig, router};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = ServerConfig::from_env()?;
    if cfg.offline {
        tracing::warn!("offline mode: every history request is synthesized");
    }

    let state = Arc::new(AppState::from_config(&cfg)?);
    let app = router(state);

    let addr = cfg.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, upstream = %cfg.upstream_url, "server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
