//! Handler for short hash redirects.

use axum::{
    extract::State,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::domain::LookupError;
use crate::domain::entities::ShortHash;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short hash to its destination.
///
/// # Endpoint
///
/// `GET /r/{hash}` (and `GET /r` for the empty hash)
///
/// # Request Flow
///
/// 1. Take the raw hash from the path, percent-encoding intact
/// 2. Ask [`crate::application::services::RedirectService`] for the destination
/// 3. Return 302 Found with `Location` set to it
///
/// # Errors
///
/// Probe policy only:
/// - 404 `Link não encontrado` if the lookup service did not redirect
/// - 500 `Erro ao processar redirect` if the lookup request failed
pub async fn redirect_handler(
    State(state): State<AppState>,
    hash: ShortHash,
) -> Result<Response, AppError> {
    let destination = state.redirect_service.destination(&hash).await?;

    found(&destination)
}

/// Builds a bodiless `302 Found` pointing at `location`.
fn found(location: &str) -> Result<Response, AppError> {
    let location = HeaderValue::from_str(location)
        .map_err(|_| AppError::UpstreamUnavailable(LookupError::InvalidUrl(location.to_string())))?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_found_response() {
        let response = found("https://example.com/a?b=c#d").unwrap();

        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "https://example.com/a?b=c#d"
        );
    }

    #[test]
    fn test_found_rejects_control_characters() {
        let result = found("https://example.com/\n");

        assert!(matches!(
            result.unwrap_err(),
            AppError::UpstreamUnavailable(LookupError::InvalidUrl(_))
        ));
    }
}
