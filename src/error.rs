//! HTTP-facing error type for the redirect path.
//!
//! Errors render as fixed plain-text bodies. Upstream details are logged by
//! the caller and never sent to the client.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::domain::LookupError;

/// Body sent when the lookup service did not redirect.
pub const NOT_FOUND_BODY: &str = "Link não encontrado";

/// Body sent when the lookup service could not be queried.
pub const REDIRECT_ERROR_BODY: &str = "Erro ao processar redirect";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The lookup service answered without redirecting.
    #[error("link not found")]
    NotFound,

    /// The outbound lookup failed or produced an unusable destination.
    #[error("lookup service unavailable: {0}")]
    UpstreamUnavailable(#[from] LookupError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::UpstreamUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = match self {
            AppError::NotFound => NOT_FOUND_BODY,
            AppError::UpstreamUnavailable(_) => REDIRECT_ERROR_BODY,
        };

        (self.status(), body).into_response()
    }
}
