//! Wellbook Portal
//!
//! Booking and administration portal for a wellness practice, backed
//! by in-process stores or a hosted directory service.

use std::sync::Arc;

use anyhow::Result;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wellbook_portal::{
    routes, AppState, BackendKind, Config, MemoryAccounts, MemoryDirectory, RemoteBackend,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wellbook_portal=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env();
    tracing::info!(port = config.port, backend = ?config.backend, "Loaded configuration");

    let port = config.port;
    let static_dir = config.static_dir.clone();

    // Create app state and router for the selected backend
    let app = match config.backend {
        BackendKind::Memory => {
            let state = Arc::new(AppState::new(
                MemoryAccounts::new(),
                MemoryDirectory::new(),
                config,
            ));
            routes::create_router_with_static_path(state, &static_dir)
        }
        BackendKind::Remote => {
            let backend = RemoteBackend::new(&config.remote)?;
            let state = Arc::new(AppState::new(backend.clone(), backend, config));
            routes::create_router_with_static_path(state, &static_dir)
        }
    };

    // Start server
    let addr = format!("0.0.0.0:{}", port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Portal listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
