//! End-to-end router tests across the launch phases.
//!
//! The managed backend and the mailing-list service are wiremock stand-ins;
//! requests are driven through the router in-process with `tower::oneshot`.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use maison::domain::config::ApiConfig;
use maison_server::Server;
use serde_json::{Value, json};
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn project_stub() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/v1/health"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/subscribe"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    server
}

async fn app_for(launch: Value, publishable_key: Option<&str>) -> (Router, MockServer) {
    let stub = project_stub().await;

    let cfg: ApiConfig = serde_json::from_value(json!({
        "launch": launch,
        "backend": { "url": stub.uri(), "api_key": "anon-test-key" },
        "payments": { "publishable_key": publishable_key },
        "mailing_list": { "url": format!("{}/subscribe", stub.uri()), "site_id": "launch-site" }
    }))
    .expect("test config should deserialize");

    let server = Server::builder().config(cfg).build().await.expect("server should build");
    (server.app(), stub)
}

async fn phased(phase: &str, publishable_key: Option<&str>) -> (Router, MockServer) {
    app_for(json!({ "profile": "phased", "phase": phase }), publishable_key).await
}

async fn get(app: &Router, uri: &str) -> axum::response::Response {
    app.clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).expect("request"))
        .await
        .expect("router should answer")
}

async fn post_json(app: &Router, uri: &str, body: Value) -> axum::response::Response {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request");
    app.clone().oneshot(request).await.expect("router should answer")
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    serde_json::from_slice(&bytes).expect("body should be JSON")
}

#[tokio::test]
async fn velvet_rope_redirects_side_doors_home() {
    let (app, _stub) = phased("velvet-rope", None).await;

    for side_door in ["/checkout", "/checkout/session", "/waitlist"] {
        let response = get(&app, side_door).await;
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT, "{side_door}");
        assert_eq!(
            response.headers().get(header::LOCATION).and_then(|v| v.to_str().ok()),
            Some("/"),
            "{side_door}"
        );
    }

    // The holding-page essentials stay reachable.
    assert_eq!(get(&app, "/health").await.status(), StatusCode::OK);
    assert_eq!(get(&app, "/launch").await.status(), StatusCode::OK);
}

#[tokio::test]
async fn launch_status_reflects_the_phase() {
    let (app, _stub) = phased("sanctuary", None).await;

    let status = body_json(get(&app, "/launch").await).await;
    assert_eq!(status["phase"], "sanctuary");
    assert_eq!(status["showNavigation"], true);
    assert_eq!(status["enablePayments"], false);
    assert_eq!(status["waitlistMode"], true);
    assert_eq!(status["publicAccess"], true);
}

#[tokio::test]
async fn sanctuary_swaps_purchase_for_the_waitlist() {
    let (app, _stub) = phased("sanctuary", Some("pk_test_abc")).await;

    let surface = body_json(get(&app, "/checkout").await).await;
    assert_eq!(surface["mode"], "waitlist");
    assert_eq!(surface["waitlistPath"], "/waitlist");

    let response = post_json(&app, "/checkout/session", json!({})).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn sanctuary_accepts_waitlist_joins() {
    let (app, _stub) = phased("sanctuary", None).await;

    let response =
        post_json(&app, "/waitlist", json!({ "email": "ada@example.com", "displayName": "Ada" }))
            .await;
    assert_eq!(response.status(), StatusCode::ACCEPTED);
    let receipt = body_json(response).await;
    assert_eq!(receipt["joined"], true);

    let invalid = post_json(&app, "/waitlist", json!({ "email": "not-an-address" })).await;
    assert_eq!(invalid.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn grand_opening_prepares_checkout_sessions() {
    let (app, _stub) = phased("grand-opening", Some("pk_live_xyz")).await;

    let surface = body_json(get(&app, "/checkout").await).await;
    assert_eq!(surface["mode"], "purchase");
    assert_eq!(surface["publishableKey"], "pk_live_xyz");

    let response = post_json(&app, "/checkout/session", json!({})).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let session = body_json(response).await;
    assert_eq!(session["publishableKey"], "pk_live_xyz");
    assert_eq!(session["sessionId"].as_str().map(str::len), Some(21));

    // The waitlist surface is gone once payments are live.
    let waitlist = post_json(&app, "/waitlist", json!({ "email": "ada@example.com" })).await;
    assert_eq!(waitlist.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unconfigured_payment_collaborator_is_a_checked_state() {
    let (app, _stub) = phased("grand-opening", None).await;

    let surface = body_json(get(&app, "/checkout").await).await;
    assert_eq!(surface["mode"], "unavailable");

    let response = post_json(&app, "/checkout/session", json!({})).await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn static_profile_store_without_payments_has_no_checkout_surface() {
    let (app, _stub) =
        app_for(json!({ "profile": "static", "enable_payments": false, "enable_store": true }), None)
            .await;

    let status = body_json(get(&app, "/launch").await).await;
    assert_eq!(status["phase"], Value::Null);
    assert_eq!(status["publicAccess"], true);

    // No waitlist concept and no payments: the surface does not exist.
    assert_eq!(get(&app, "/checkout").await.status(), StatusCode::NOT_FOUND);
    let session = post_json(&app, "/checkout/session", json!({})).await;
    assert_eq!(session.status(), StatusCode::NOT_FOUND);
}
