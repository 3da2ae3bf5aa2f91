// src/main.rs
use std::net::{IpAddr, SocketAddr};

use anyhow::Context;
use dotenvy::dotenv;
use tokio::net::TcpListener;

use product_api::config::{AppConfig, StoreKind};
use product_api::{create_router, database, telemetry, AppState};

const PORT_ATTEMPTS: u16 = 20;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let config = AppConfig::from_env().context("failed to load configuration")?;

    // Initialize logging
    telemetry::init_tracing(config.log_format);

    let app_state = match (config.store, &config.database) {
        (StoreKind::Postgres, Some(db_config)) => {
            let db_pool = database::create_pool(db_config)
                .await
                .context("failed to create database pool")?;
            tracing::info!(max_connections = db_config.max_connections, "Connected to PostgreSQL");
            AppState::postgres(db_pool)
        }
        (StoreKind::Postgres, None) => anyhow::bail!("DATABASE_URL must be set"),
        (StoreKind::Memory, _) => {
            tracing::warn!("Using in-memory product store; data is lost on exit");
            AppState::in_memory()
        }
    };

    let app = create_router(app_state);
    let (listener, addr) = bind_with_fallback(config.host, config.port).await?;
    tracing::info!("Server running on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

// Try base_port..=base_port+PORT_ATTEMPTS to avoid crash when address is in use
async fn bind_with_fallback(host: IpAddr, base_port: u16) -> anyhow::Result<(TcpListener, SocketAddr)> {
    for offset in 0..=PORT_ATTEMPTS {
        let port = base_port.saturating_add(offset);
        let addr = SocketAddr::from((host, port));
        match TcpListener::bind(addr).await {
            Ok(listener) => return Ok((listener, addr)),
            Err(e) => {
                tracing::warn!(%addr, error = %e, "Port in use, trying next");
            }
        }
    }
    anyhow::bail!("failed to bind to any port starting at {base_port} on {host}")
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
