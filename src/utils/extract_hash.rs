//! Short hash extraction from the request path.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::AppError;
use crate::domain::entities::ShortHash;

/// Path prefix the redirect route is mounted under.
pub const REDIRECT_PREFIX: &str = "/r";

/// Returns the raw hash segment of a redirect path.
///
/// The segment is returned still percent-encoded so it can be forwarded
/// verbatim. Both `/r` and `/r/` yield the empty hash.
///
/// Returns `None` if `path` is not a redirect path.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(extract_hash_from_path("/r/abc%20d"), Some("abc%20d"));
/// assert_eq!(extract_hash_from_path("/r"), Some(""));
/// assert_eq!(extract_hash_from_path("/health"), None);
/// ```
pub fn extract_hash_from_path(path: &str) -> Option<&str> {
    let rest = path.strip_prefix(REDIRECT_PREFIX)?;

    if rest.is_empty() {
        return Some("");
    }

    rest.strip_prefix('/')
}

impl<S> FromRequestParts<S> for ShortHash
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        extract_hash_from_path(parts.uri.path())
            .map(ShortHash::from)
            .ok_or(AppError::NotFound)
    }
}
