//! Contract with the remote lookup service.

use crate::domain::entities::ShortHash;
use async_trait::async_trait;

/// Outcome of asking the lookup service about a hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The lookup service redirected; `final_url` is where the chain ended.
    Redirected { final_url: String },
    /// The request completed without any redirect.
    NotRedirected { status: u16 },
}

/// Failures talking to the lookup service.
#[derive(Debug, Clone, thiserror::Error)]
pub enum LookupError {
    #[error("lookup request timed out")]
    Timeout,

    #[error("lookup redirect chain exceeded the hop limit")]
    TooManyRedirects,

    #[error("invalid lookup URL '{0}'")]
    InvalidUrl(String),

    #[error("lookup transport error: {0}")]
    Transport(String),
}

/// Resolves short hashes against the lookup service.
///
/// One call to [`LookupService::resolve`] issues exactly one outbound request
/// (plus whatever redirect hops the lookup service answers with). Nothing
/// is cached between calls.
///
/// # Implementations
///
/// - [`crate::infrastructure::lookup::HttpLookupService`] - `reqwest` client
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LookupService: Send + Sync {
    /// Requests `<base>/r/<hash>` and follows the redirect chain.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError`] when the request cannot complete: network or
    /// DNS failure, timeout, or too many redirect hops.
    async fn resolve(&self, hash: &ShortHash) -> Result<Resolution, LookupError>;

    /// Checks that the lookup service answers at all.
    ///
    /// Any HTTP response counts as reachable.
    async fn ping(&self) -> Result<(), LookupError>;
}
