//! Short hash resolution service.

use std::sync::Arc;

use tracing::{debug, error};

use crate::domain::entities::{LookupEndpoint, RedirectPolicy, ShortHash};
use crate::domain::{LookupError, LookupService, Resolution};
use crate::error::AppError;

/// Turns a short hash into the URL the client should be redirected to.
///
/// Holds no per-request state; one instance is shared by all handlers.
pub struct RedirectService {
    policy: RedirectPolicy,
    endpoint: LookupEndpoint,
    lookup: Arc<dyn LookupService>,
}

impl RedirectService {
    /// Creates a new redirect service.
    pub fn new(
        policy: RedirectPolicy,
        endpoint: LookupEndpoint,
        lookup: Arc<dyn LookupService>,
    ) -> Self {
        Self {
            policy,
            endpoint,
            lookup,
        }
    }

    pub fn policy(&self) -> RedirectPolicy {
        self.policy
    }

    pub fn endpoint(&self) -> &LookupEndpoint {
        &self.endpoint
    }

    /// Returns the redirect destination for `hash` under the configured policy.
    ///
    /// # Policies
    ///
    /// - **Probe**: one lookup request; the final URL of its redirect chain
    /// - **Blind**: `<base>/r/<hash>`, no network call
    ///
    /// # Errors
    ///
    /// Probe only:
    /// - [`AppError::NotFound`] if the lookup service did not redirect
    /// - [`AppError::UpstreamUnavailable`] if the lookup request failed
    pub async fn destination(&self, hash: &ShortHash) -> Result<String, AppError> {
        match self.policy {
            RedirectPolicy::Blind => Ok(self.endpoint.url_for(hash)),
            RedirectPolicy::Probe => self.probe(hash).await,
        }
    }

    async fn probe(&self, hash: &ShortHash) -> Result<String, AppError> {
        match self.lookup.resolve(hash).await {
            Ok(Resolution::Redirected { final_url }) => {
                debug!("Resolved {} -> {}", hash, final_url);
                Ok(final_url)
            }
            Ok(Resolution::NotRedirected { status }) => {
                debug!("Lookup for {} answered {} without redirect", hash, status);
                Err(AppError::NotFound)
            }
            Err(e) => {
                error!("Lookup for {} failed: {}", hash, e);
                Err(AppError::UpstreamUnavailable(e))
            }
        }
    }

    /// Pings the lookup service.
    ///
    /// # Errors
    ///
    /// Returns the [`LookupError`] of the failed ping.
    pub async fn check_lookup(&self) -> Result<(), LookupError> {
        self.lookup.ping().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MockLookupService;

    const BASE: &str = "http://lookup.test:5001";

    fn service(policy: RedirectPolicy, lookup: MockLookupService) -> RedirectService {
        RedirectService::new(policy, LookupEndpoint::new(BASE), Arc::new(lookup))
    }

    #[tokio::test]
    async fn test_probe_redirected() {
        let mut mock_lookup = MockLookupService::new();
        mock_lookup
            .expect_resolve()
            .withf(|hash| hash.as_str() == "abc123")
            .times(1)
            .returning(|_| {
                Ok(Resolution::Redirected {
                    final_url: "https://example.com/page?q=1#top".to_string(),
                })
            });

        let service = service(RedirectPolicy::Probe, mock_lookup);
        let result = service.destination(&ShortHash::from("abc123")).await;

        assert_eq!(result.unwrap(), "https://example.com/page?q=1#top");
    }

    #[tokio::test]
    async fn test_probe_not_redirected() {
        let mut mock_lookup = MockLookupService::new();
        mock_lookup
            .expect_resolve()
            .times(1)
            .returning(|_| Ok(Resolution::NotRedirected { status: 200 }));

        let service = service(RedirectPolicy::Probe, mock_lookup);
        let result = service.destination(&ShortHash::from("missing")).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound));
    }

    #[tokio::test]
    async fn test_probe_lookup_error() {
        let mut mock_lookup = MockLookupService::new();
        mock_lookup
            .expect_resolve()
            .times(1)
            .returning(|_| Err(LookupError::Transport("connection refused".to_string())));

        let service = service(RedirectPolicy::Probe, mock_lookup);
        let result = service.destination(&ShortHash::from("abc")).await;

        assert!(matches!(
            result.unwrap_err(),
            AppError::UpstreamUnavailable(LookupError::Transport(_))
        ));
    }

    #[tokio::test]
    async fn test_probe_timeout() {
        let mut mock_lookup = MockLookupService::new();
        mock_lookup
            .expect_resolve()
            .times(1)
            .returning(|_| Err(LookupError::Timeout));

        let service = service(RedirectPolicy::Probe, mock_lookup);
        let result = service.destination(&ShortHash::from("slow")).await;

        assert!(matches!(
            result.unwrap_err(),
            AppError::UpstreamUnavailable(LookupError::Timeout)
        ));
    }

    #[tokio::test]
    async fn test_blind_never_calls_lookup() {
        let mut mock_lookup = MockLookupService::new();
        mock_lookup.expect_resolve().times(0);

        let service = service(RedirectPolicy::Blind, mock_lookup);

        for raw in ["abc123", "", "caf%C3%A9", "a%2Fb%3Fc"] {
            let result = service.destination(&ShortHash::from(raw)).await;
            assert_eq!(result.unwrap(), format!("{BASE}/r/{raw}"));
        }
    }

    #[tokio::test]
    async fn test_check_lookup_delegates_to_ping() {
        let mut mock_lookup = MockLookupService::new();
        mock_lookup
            .expect_ping()
            .times(1)
            .returning(|| Err(LookupError::Timeout));

        let service = service(RedirectPolicy::Probe, mock_lookup);

        assert!(service.check_lookup().await.is_err());
    }
}
