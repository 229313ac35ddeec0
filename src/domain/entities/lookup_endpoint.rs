//! Address of the remote lookup service.

use super::ShortHash;

/// Base URL of the lookup service, e.g. `http://161.97.83.44:5001`.
///
/// Lookup URLs are built by plain concatenation so the hash reaches the
/// lookup service as the client sent it. Dot segments (`..`, `%2e%2e`) are
/// the exception: URL parsing in the HTTP client resolves them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupEndpoint {
    base_url: String,
}

impl LookupEndpoint {
    /// Creates an endpoint, dropping trailing slashes from `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns `<base>/r/<hash>`.
    pub fn url_for(&self, hash: &ShortHash) -> String {
        format!("{}/r/{}", self.base_url, hash.as_str())
    }
}
