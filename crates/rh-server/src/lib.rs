//! rh-server: the HTTP API in front of the catalog aggregation layer.
//!
//! - Axum router with request ids, tracing, and permissive CORS
//! - [`AppContext`](context::AppContext) holding the shared catalog service
//! - Graceful shutdown via signal handling

pub mod context;
pub mod error;
pub mod middleware;
pub mod router;
pub mod routes;

use std::net::SocketAddr;

use rh_core::config::Config;

use crate::context::AppContext;

/// Start the reelhub server.
///
/// Builds the [`AppContext`], binds the configured address, and serves until
/// a shutdown signal is received. A missing catalog credential is not fatal:
/// catalog routes answer 500 until one is configured.
pub async fn start(config: Config) -> rh_core::Result<()> {
    for warning in config.validate() {
        tracing::warn!("Config warning: {warning}");
    }

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .map_err(|e| rh_core::Error::Internal(format!("Invalid server address: {e}")))?;

    let ctx = AppContext::new(&config)?;
    tracing::info!(
        catalog = ctx.catalog.name(),
        configured = ctx.catalog.is_configured(),
        "Catalog client ready"
    );

    let app = router::build_router(ctx);

    tracing::info!("Starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| rh_core::Error::Internal(format!("Failed to bind to {addr}: {e}")))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for a shutdown signal (SIGINT or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }

    tracing::info!("Shutdown signal received");
}
