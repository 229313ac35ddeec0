//! HTTP request/response tracing middleware.

use axum::http::Request;
use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultOnResponse, MakeSpan, TraceLayer};
use tracing::{Level, Span, info_span};

use crate::utils::extract_hash::extract_hash_from_path;

/// Span factory that names redirect requests by their hash.
///
/// Query strings are left out of the span.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestSpan;

impl<B> MakeSpan<B> for RequestSpan {
    fn make_span(&mut self, request: &Request<B>) -> Span {
        let path = request.uri().path();

        match extract_hash_from_path(path) {
            Some(hash) => info_span!("redirect", method = %request.method(), hash = %hash),
            None => info_span!("request", method = %request.method(), path = %path),
        }
    }
}

/// Creates a tracing middleware for HTTP requests.
///
/// Responses are logged at `INFO` with status and latency in milliseconds;
/// 5xx responses are additionally reported as failures.
///
/// # Example Logs
///
/// ```text
/// INFO redirect{method=GET hash=abc123}: finished processing request latency=41 ms status=302
/// INFO request{method=GET path=/health}: finished processing request latency=3 ms status=200
/// ```
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>, RequestSpan> {
    TraceLayer::new_for_http().make_span_with(RequestSpan).on_response(
        DefaultOnResponse::new()
            .level(Level::INFO)
            .latency_unit(LatencyUnit::Millis),
    )
}
