use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use netprobe_common::config::ProbeConfig;
use netprobe_core::prober::Prober;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::handlers;

pub const DEFAULT_ADDR: &str = "0.0.0.0:8000";

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listen address.
    pub addr: SocketAddr,
    pub probe: ProbeConfig,
}

/// Shared application state. Immutable once the server is up.
pub struct AppState {
    pub prober: Prober,
}

impl AppState {
    pub fn new(prober: Prober) -> Self {
        Self { prober }
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/ping/:ip", get(handlers::ping))
        .route("/tcp/:ip", get(handlers::tcp))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Binds `config.addr` and serves until Ctrl-C.
pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let state: Arc<AppState> = Arc::new(AppState::new(Prober::new(config.probe.clone())));
    let app: Router = router(state);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!(address = %listener.local_addr()?, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
