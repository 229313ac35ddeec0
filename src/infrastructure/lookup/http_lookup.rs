//! `reqwest` implementation of the lookup service contract.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url, header, redirect};
use tracing::debug;

use crate::domain::entities::{LookupEndpoint, ShortHash};
use crate::domain::{LookupError, LookupService, Resolution};

/// Lookup client talking HTTP to the lookup service.
///
/// The inner [`Client`] pools connections across requests; it carries no
/// per-request state. Redirects are followed here rather than by `reqwest`
/// so the destination keeps its fragment: up to `max_redirects` hops, the
/// whole chain bounded by `timeout`.
#[derive(Clone)]
pub struct HttpLookupService {
    client: Client,
    endpoint: LookupEndpoint,
    timeout: Duration,
    max_redirects: usize,
}

impl HttpLookupService {
    /// Builds the HTTP client.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::Transport`] if the TLS backend cannot be initialized.
    pub fn new(
        endpoint: LookupEndpoint,
        timeout: Duration,
        max_redirects: usize,
    ) -> Result<Self, LookupError> {
        let client = Client::builder()
            .redirect(redirect::Policy::none())
            .build()
            .map_err(|e| LookupError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            endpoint,
            timeout,
            max_redirects,
        })
    }

    async fn with_timeout<T>(
        &self,
        fut: impl Future<Output = Result<T, LookupError>>,
    ) -> Result<T, LookupError> {
        tokio::time::timeout(self.timeout, fut)
            .await
            .map_err(|_| LookupError::Timeout)?
    }

    /// Walks the redirect chain starting at `start`.
    async fn follow(&self, start: Url) -> Result<Resolution, LookupError> {
        let mut chain = vec![start];

        loop {
            let current = &chain[chain.len() - 1];

            let response = self
                .client
                .get(without_fragment(current))
                .send()
                .await
                .map_err(map_reqwest_error)?;

            let status = response.status();
            let location = if is_redirect(status) {
                response
                    .headers()
                    .get(header::LOCATION)
                    .map(|v| v.to_str().map(str::to_owned))
            } else {
                None
            };

            let Some(location) = location else {
                if chain.len() > 1 {
                    return Ok(Resolution::Redirected {
                        final_url: current.to_string(),
                    });
                }

                debug!("Lookup {} answered {}", current, status);
                return Ok(Resolution::NotRedirected {
                    status: status.as_u16(),
                });
            };

            if chain.len() > self.max_redirects {
                return Err(LookupError::TooManyRedirects);
            }

            let location = location.map_err(|_| LookupError::InvalidUrl(current.to_string()))?;
            let mut next = current
                .join(&location)
                .map_err(|_| LookupError::InvalidUrl(location.clone()))?;

            // A Location without a fragment inherits the one already carried.
            if next.fragment().is_none() {
                next.set_fragment(current.fragment());
            }

            if chain
                .iter()
                .any(|seen| without_fragment(seen) == without_fragment(&next))
            {
                return Err(LookupError::TooManyRedirects);
            }

            chain.push(next);
        }
    }
}

#[async_trait]
impl LookupService for HttpLookupService {
    async fn resolve(&self, hash: &ShortHash) -> Result<Resolution, LookupError> {
        let raw = self.endpoint.url_for(hash);
        // URL parsing resolves dot segments: a hash of `..` or `%2e%2e` reaches `<base>/`.
        let requested = Url::parse(&raw).map_err(|_| LookupError::InvalidUrl(raw.clone()))?;

        self.with_timeout(self.follow(requested)).await
    }

    async fn ping(&self) -> Result<(), LookupError> {
        let request = async {
            self.client
                .get(self.endpoint.base_url())
                .send()
                .await
                .map(|_| ())
                .map_err(map_reqwest_error)
        };

        self.with_timeout(request).await
    }
}

fn is_redirect(status: StatusCode) -> bool {
    matches!(
        status,
        StatusCode::MOVED_PERMANENTLY
            | StatusCode::FOUND
            | StatusCode::SEE_OTHER
            | StatusCode::TEMPORARY_REDIRECT
            | StatusCode::PERMANENT_REDIRECT
    )
}

fn without_fragment(url: &Url) -> Url {
    let mut url = url.clone();
    url.set_fragment(None);
    url
}

fn map_reqwest_error(e: reqwest::Error) -> LookupError {
    if e.is_timeout() {
        LookupError::Timeout
    } else if e.is_builder() {
        LookupError::InvalidUrl(
            e.url()
                .map(|u| u.to_string())
                .unwrap_or_else(|| e.to_string()),
        )
    } else {
        LookupError::Transport(e.to_string())
    }
}
