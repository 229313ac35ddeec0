#![allow(dead_code)]

use axum_test::TestServer;
use edge_redirector::application::services::RedirectService;
use edge_redirector::domain::entities::{LookupEndpoint, RedirectPolicy};
use edge_redirector::infrastructure::lookup::HttpLookupService;
use edge_redirector::routes::router;
use edge_redirector::state::AppState;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const LOOKUP_TIMEOUT: Duration = Duration::from_millis(500);

pub fn create_test_state(policy: RedirectPolicy, base_url: &str) -> AppState {
    let endpoint = LookupEndpoint::new(base_url);
    let lookup = HttpLookupService::new(endpoint.clone(), LOOKUP_TIMEOUT, 10).unwrap();
    let service = RedirectService::new(policy, endpoint, Arc::new(lookup));

    AppState::new(Arc::new(service))
}

pub fn create_test_server(policy: RedirectPolicy, base_url: &str) -> TestServer {
    let state = create_test_state(policy, base_url);
    TestServer::new(router(state, None)).unwrap()
}

/// Makes the lookup service redirect `/r/{hash}` to `target` exactly once.
pub async fn mount_redirect(lookup: &MockServer, hash: &str, target: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/r/{hash}")))
        .respond_with(ResponseTemplate::new(302).insert_header("Location", target))
        .expect(1)
        .mount(lookup)
        .await;
}

/// Serves a plain 200 page at `page`, standing in for the final destination.
pub async fn mount_destination(lookup: &MockServer, page: &str) {
    Mock::given(method("GET"))
        .and(path(page))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
        .mount(lookup)
        .await;
}

/// Returns a base URL on which nothing is listening.
pub fn unused_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}
