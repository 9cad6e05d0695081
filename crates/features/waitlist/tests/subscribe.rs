//! Integration tests for the subscription collaborator.
//!
//! Uses wiremock to stand in for the mailing-list service.

use maison_domain::config::ApiConfig;
use maison_waitlist::{Waitlist, init};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> ApiConfig {
    let mut config = ApiConfig::default();
    config.mailing_list.url = format!("{}/subscribe", server.uri());
    config.mailing_list.site_id = "launch-site".to_owned();
    config
}

fn waitlist_from(config: &ApiConfig) -> Waitlist {
    let slice = init(config).expect("waitlist init should succeed");
    slice
        .state
        .as_any()
        .downcast_ref::<Waitlist>()
        .expect("slice state should be Waitlist")
        .clone()
}

#[test]
fn init_rejects_blank_configuration() {
    let mut config = ApiConfig::default();
    config.mailing_list.site_id = String::new();
    assert!(init(&config).is_err());
}

#[tokio::test]
async fn join_reports_success_and_sends_the_site_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/subscribe"))
        .and(body_json(serde_json::json!({
            "site": "launch-site",
            "email": "ada@example.com",
            "name": "Ada"
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let waitlist = waitlist_from(&config_for(&server));
    let receipt = waitlist.join("ada@example.com", Some("Ada")).await;
    assert!(receipt.joined);
    assert_eq!(receipt.request_id.len(), 12);
}

#[tokio::test]
async fn join_omits_an_absent_display_name() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/subscribe"))
        .and(body_json(serde_json::json!({
            "site": "launch-site",
            "email": "ada@example.com"
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let waitlist = waitlist_from(&config_for(&server));
    let receipt = waitlist.join("ada@example.com", None).await;
    assert!(receipt.joined);
}

#[tokio::test]
async fn failed_subscription_is_swallowed_not_raised() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/subscribe"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let waitlist = waitlist_from(&config_for(&server));
    // The call returns a failure indicator; it must not panic or error out.
    let receipt = waitlist.join("ada@example.com", None).await;
    assert!(!receipt.joined);
}

#[tokio::test]
async fn unreachable_service_is_also_swallowed() {
    let server = MockServer::start().await;
    let config = config_for(&server);
    drop(server); // the port is now dead

    let waitlist = waitlist_from(&config);
    let receipt = waitlist.join("ada@example.com", None).await;
    assert!(!receipt.joined);
}
