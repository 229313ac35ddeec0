//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::domain::entities::RedirectPolicy;
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Lookup service reachable, or not contacted by this process
/// - **503 Service Unavailable**: Lookup service unreachable under the probe policy
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "policy": "probe",
///   "checks": {
///     "lookup_service": {
///       "status": "ok",
///       "message": "Reachable at http://161.97.83.44:5001"
///     }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let lookup_check = check_lookup_service(&state).await;

    let healthy = lookup_check.status != "error";

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        policy: state.redirect_service.policy().to_string(),
        checks: HealthChecks {
            lookup_service: lookup_check,
        },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Pings the lookup service when this process depends on it.
async fn check_lookup_service(state: &AppState) -> CheckStatus {
    let service = &state.redirect_service;
    let base_url = service.endpoint().base_url();

    if service.policy() == RedirectPolicy::Blind {
        return CheckStatus {
            status: "skipped".to_string(),
            message: Some(format!("Clients are sent to {} directly", base_url)),
        };
    }

    match service.check_lookup().await {
        Ok(()) => CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("Reachable at {}", base_url)),
        },
        Err(e) => CheckStatus {
            status: "error".to_string(),
            message: Some(format!("Lookup service error: {}", e)),
        },
    }
}
