//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /r/{hash}`   - Short hash redirect
//! - `GET  /r`          - Redirect for the empty hash
//! - `GET  /health`     - Health check: lookup service reachability
//! - `/static/*`        - Front-end assets (only when a static directory is configured)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling, so `/r/` reaches the `/r` route

use std::path::Path;

use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the router with all routes and tracing, without path normalization.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `static_dir` - directory served under `/static`, if any
pub fn router(state: AppState, static_dir: Option<&Path>) -> Router {
    let mut router = Router::new()
        .route("/r", get(redirect_handler))
        .route("/r/{hash}", get(redirect_handler))
        .route("/health", get(health_handler))
        .with_state(state);

    if let Some(dir) = static_dir {
        router = router.nest_service("/static", ServeDir::new(dir));
    }

    router.layer(tracing::layer())
}

/// Constructs the application with trailing slashes trimmed before routing.
pub fn app_router(state: AppState, static_dir: Option<&Path>) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state, static_dir))
}
