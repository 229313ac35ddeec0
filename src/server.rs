//! HTTP server initialization and runtime setup.
//!
//! Builds the lookup client and redirect service, then drives the Axum
//! server until a shutdown signal arrives.

use crate::application::services::RedirectService;
use crate::config::Config;
use crate::infrastructure::lookup::HttpLookupService;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Lookup service HTTP client
/// - Redirect service with the configured policy
/// - Axum HTTP server with graceful shutdown on Ctrl+C / SIGTERM
///
/// # Errors
///
/// Returns an error if:
/// - The HTTP client cannot be built
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let endpoint = config.lookup_endpoint();

    let lookup = HttpLookupService::new(
        endpoint.clone(),
        config.lookup_timeout(),
        config.lookup_max_redirects,
    )
    .context("Failed to build lookup client")?;
    tracing::info!("Lookup client ready for {}", endpoint.base_url());

    let redirect_service = Arc::new(RedirectService::new(
        config.redirect_policy,
        endpoint,
        Arc::new(lookup),
    ));
    tracing::info!("Redirect policy: {}", config.redirect_policy);

    let state = AppState::new(redirect_service);

    let app = app_router(state, config.static_dir.as_deref());

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
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
                tracing::error!("Failed to listen for SIGTERM: {}", e);
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
