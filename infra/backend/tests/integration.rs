//! Integration tests for the backend adapter.
//!
//! Uses wiremock to stand in for the managed backend project.

use maison_backend::{Backend, BackendError};
use maison_domain::constants::RESET_CONFIRMATION;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn healthy_project() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/v1/health"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    server
}

async fn connect(server: &MockServer) -> Backend {
    Backend::builder()
        .url(server.uri())
        .api_key("anon-test-key")
        .init()
        .await
        .expect("backend should initialize against a healthy project")
}

#[tokio::test]
async fn init_requires_url_and_api_key() {
    let err = Backend::builder().api_key("anon").init().await.expect_err("missing url");
    assert!(matches!(err, BackendError::Validation { .. }));

    let err = Backend::builder().url("http://localhost:1").init().await.expect_err("missing key");
    assert!(matches!(err, BackendError::Validation { .. }));
}

#[tokio::test]
async fn init_sends_the_public_api_key() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/v1/health"))
        .and(header("apikey", "anon-test-key"))
        .and(header("authorization", "Bearer anon-test-key"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    connect(&server).await;
}

#[tokio::test]
async fn init_fails_when_the_project_stays_unhealthy() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/v1/health"))
        .respond_with(ResponseTemplate::new(503))
        .expect(3)
        .mount(&server)
        .await;

    let err = Backend::builder()
        .url(server.uri())
        .api_key("anon-test-key")
        .init()
        .await
        .expect_err("unhealthy project must fail init");
    assert!(matches!(err, BackendError::Connection { .. }));
}

#[tokio::test]
async fn reset_invokes_the_remote_function_once() {
    let server = healthy_project().await;
    Mock::given(method("POST"))
        .and(path("/functions/v1/reset-project"))
        .and(body_json(serde_json::json!({ "confirm": RESET_CONFIRMATION })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let backend = connect(&server).await;
    backend.reset_all(RESET_CONFIRMATION).await.expect("reset should succeed");
}

#[tokio::test]
async fn reset_error_propagates_and_is_not_retried() {
    let server = healthy_project().await;
    Mock::given(method("POST"))
        .and(path("/functions/v1/reset-project"))
        .respond_with(ResponseTemplate::new(500).set_body_string("wipe failed halfway"))
        .expect(1)
        .mount(&server)
        .await;

    let backend = connect(&server).await;
    let err = backend
        .reset_all(RESET_CONFIRMATION)
        .await
        .expect_err("a failed wipe must be fatal");
    assert!(matches!(err, BackendError::Service { .. }));
    assert!(err.to_string().contains("wipe failed halfway"));
}

#[tokio::test]
async fn wrong_confirmation_never_reaches_the_network() {
    let server = healthy_project().await;
    Mock::given(method("POST"))
        .and(path("/functions/v1/reset-project"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let backend = connect(&server).await;
    let err = backend
        .reset_all("erase everything")
        .await
        .expect_err("case-sensitive token mismatch must be rejected");
    assert!(matches!(err, BackendError::Confirmation { .. }));
}
